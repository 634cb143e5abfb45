//! Path and URL translation against the container root.
//!
//! All three accepted path forms (bare relative with either separator,
//! absolute URL under the root, absolute URL with the other http(s) scheme)
//! normalize to one canonical container-relative key.

use crate::error::{FsError, Result};
use url::Url;

/// Convert backslash separators to forward slashes.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

pub fn is_absolute_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

/// Drop an http(s) scheme prefix, leaving host, port, and path segments.
/// Root matching is scheme-insensitive; this is the comparison form.
pub fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

/// The final segment of a slash-separated path, ignoring a trailing slash.
pub fn last_segment(path: &str) -> &str {
    path.trim_end_matches('/').rsplit('/').next().unwrap_or("")
}

/// The immutable (root URL, container name) pair all paths resolve against.
///
/// Invariant: the root URL always ends with exactly one `/`.
#[derive(Debug, Clone)]
pub struct ContainerRoot {
    root_url: String,
    container: String,
}

impl ContainerRoot {
    /// Build the root from the public base URL and the container name.
    ///
    /// The root URL becomes `base_url/container/` regardless of how many
    /// trailing slashes either part carried.
    pub fn new(base_url: &str, container: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| FsError::InvalidRootUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FsError::InvalidRootUrl(format!(
                "{base_url}: expected an http or https URL"
            )));
        }

        let container = container.trim_matches('/').to_string();
        let mut root_url = base_url.trim_end_matches('/').to_string();
        root_url.push('/');
        root_url.push_str(&container);
        root_url.push('/');

        Ok(Self {
            root_url,
            container,
        })
    }

    /// The root URL, always with a single trailing slash.
    pub fn url(&self) -> &str {
        &self.root_url
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    /// Prefix the root URL onto `path` unless it is already there.
    ///
    /// Idempotent: `full_path(full_path(p)) == full_path(p)`. A URL under
    /// the root with the other http(s) scheme is treated as already full.
    pub fn full_path(&self, path: &str) -> String {
        let p = normalize_separators(path);
        if is_absolute_url(&p) && strip_scheme(&p).starts_with(strip_scheme(&self.root_url)) {
            p
        } else {
            format!("{}{}", self.root_url, p.trim_start_matches('/'))
        }
    }

    /// Inverse of [`full_path`](Self::full_path): strip the root prefix,
    /// ignoring the URL scheme, and trim a trailing slash. Already-relative
    /// input comes back unchanged apart from the trailing slash.
    pub fn relative_path(&self, path_or_url: &str) -> String {
        let p = normalize_separators(path_or_url);
        if is_absolute_url(&p) {
            let root = strip_scheme(&self.root_url);
            if let Some(tail) = strip_scheme(&p).strip_prefix(root) {
                return tail.trim_end_matches('/').to_string();
            }
        }
        p.trim_end_matches('/').to_string()
    }

    /// The canonical blob key for any accepted path form.
    pub fn key(&self, path: &str) -> String {
        self.relative_path(path)
            .trim_start_matches('/')
            .to_string()
    }

    /// Absolute URL for `path`: root-joined with duplicate separators
    /// collapsed and no trailing slash. Absolute input is returned as-is.
    pub fn url_for(&self, path: &str) -> String {
        let p = normalize_separators(path);
        if is_absolute_url(&p) {
            return p;
        }
        let mut out = self.root_url.trim_end_matches('/').to_string();
        for segment in p.split('/').filter(|s| !s.is_empty()) {
            out.push('/');
            out.push_str(segment);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> ContainerRoot {
        ContainerRoot::new("http://127.0.0.1:10000/devstoreaccount1", "media").unwrap()
    }

    #[test]
    fn test_root_url_has_single_trailing_slash() {
        let root = root();
        assert_eq!(root.url(), "http://127.0.0.1:10000/devstoreaccount1/media/");

        let slashed =
            ContainerRoot::new("http://127.0.0.1:10000/devstoreaccount1///", "/media/").unwrap();
        assert_eq!(slashed.url(), root.url());
    }

    #[test]
    fn test_rejects_non_http_roots() {
        assert!(ContainerRoot::new("ftp://host/x", "media").is_err());
        assert!(ContainerRoot::new("not a url", "media").is_err());
    }

    #[test]
    fn test_full_path_is_idempotent() {
        let root = root();
        let once = root.full_path("1000/test.dat");
        assert_eq!(
            once,
            "http://127.0.0.1:10000/devstoreaccount1/media/1000/test.dat"
        );
        assert_eq!(root.full_path(&once), once);
    }

    #[test]
    fn test_relative_path_strips_root_for_either_scheme() {
        let root = root();
        assert_eq!(
            root.relative_path("http://127.0.0.1:10000/devstoreaccount1/media/1000/test.dat"),
            "1000/test.dat"
        );
        assert_eq!(
            root.relative_path("https://127.0.0.1:10000/devstoreaccount1/media/1000/test.dat"),
            "1000/test.dat"
        );
    }

    #[test]
    fn test_relative_path_passes_relative_through() {
        let root = root();
        assert_eq!(root.relative_path("1000/test.dat"), "1000/test.dat");
        assert_eq!(root.relative_path("1000/"), "1000");
        assert_eq!(root.relative_path(r"1000\dill\test.dat"), "1000/dill/test.dat");
    }

    #[test]
    fn test_url_collapses_separators_and_trims() {
        let root = root();
        assert_eq!(
            root.url_for("1000//dill/test.dat/"),
            "http://127.0.0.1:10000/devstoreaccount1/media/1000/dill/test.dat"
        );
        assert_eq!(
            root.url_for(r"\1000\test.dat"),
            "http://127.0.0.1:10000/devstoreaccount1/media/1000/test.dat"
        );
        assert_eq!(
            root.url_for("http://elsewhere/x.dat"),
            "http://elsewhere/x.dat"
        );
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("a/b/c"), "c");
        assert_eq!(last_segment("a/b/"), "b");
        assert_eq!(last_segment("solo"), "solo");
        assert_eq!(last_segment(""), "");
    }
}
