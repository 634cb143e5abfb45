//! Media folder numbering policy.
//!
//! The CMS stores each media item under a numbered root folder and picks the
//! next folder by scanning existing directory names.

/// Floor used when no numeric folder exists yet.
pub const DEFAULT_MEDIA_FOLDER: u64 = 1000;

/// The largest numeric directory name, or [`DEFAULT_MEDIA_FOLDER`] when no
/// name parses as a number. Non-numeric names are ignored.
pub fn largest_numeric_folder<I, S>(names: I) -> u64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter_map(|name| name.as_ref().parse::<u64>().ok())
        .max()
        .unwrap_or(DEFAULT_MEDIA_FOLDER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_biggest_number() {
        assert_eq!(largest_numeric_folder(["12345"]), 12345);
        assert_eq!(largest_numeric_folder(["1000", "1001"]), 1001);
    }

    #[test]
    fn test_starts_at_floor_without_numeric_names() {
        assert_eq!(largest_numeric_folder(["abc", "cdef"]), 1000);
        assert_eq!(largest_numeric_folder(Vec::<String>::new()), 1000);
    }

    #[test]
    fn test_ignores_non_numeric_names() {
        assert_eq!(
            largest_numeric_folder(["abc", "1234", "1235", "cdef"]),
            1235
        );
    }
}
