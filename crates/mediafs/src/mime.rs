//! Content-type resolution from file extensions.

use std::collections::HashMap;

/// Extension to MIME-type mapping: a small built-in table for the common
/// media types, then a configured mapping, else none (the store leaves the
/// content type unset).
#[derive(Debug, Clone, Default)]
pub struct MimeMap {
    configured: HashMap<String, String>,
}

fn builtin(ext: &str) -> Option<&'static str> {
    match ext {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "pdf" => Some("application/pdf"),
        "air" => Some("application/vnd.adobe.air-application-installer-package+zip"),
        _ => None,
    }
}

impl MimeMap {
    pub fn new(configured: HashMap<String, String>) -> Self {
        Self {
            configured: configured
                .into_iter()
                .map(|(ext, mime)| (ext.to_ascii_lowercase(), mime))
                .collect(),
        }
    }

    /// Resolve the content type for a blob name, by extension.
    pub fn for_name(&self, name: &str) -> Option<&str> {
        let ext = name.rsplit('.').next().unwrap_or("").to_ascii_lowercase();
        builtin(&ext).or_else(|| self.configured.get(&ext).map(String::as_str))
    }
}
