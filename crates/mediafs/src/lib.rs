//! A CMS media filesystem over cloud blob storage.
//!
//! Object stores have no directories; the consuming CMS assumes real
//! directories, relative paths, and stable path/URL round-tripping. This
//! crate maps the flat, prefix-based blob namespace onto that filesystem
//! abstraction: [`ContainerRoot`] owns the path and URL translation rules,
//! [`BlobFileSystem`] implements the [`FileSystem`] capability contract on
//! top of any [`blobstore::BlobStore`], and directory semantics are
//! simulated from prefix listings.
//!
//! The round-trip invariant: for any scheme-less relative path `p`,
//! `get_relative_path(get_full_path(p)) == p` (modulo a trailing slash),
//! whether the root was configured with `http` or `https`.

mod blobfs;
mod cache;
pub mod config;
mod error;
pub mod folders;
mod fs;
mod mime;
mod path;

pub use blobfs::BlobFileSystem;
pub use cache::HandleCache;
pub use config::{DirScope, MediaFsConfig};
pub use error::{FsError, Result};
pub use fs::{DeleteOutcome, FileSystem};
pub use mime::MimeMap;
pub use path::ContainerRoot;

#[cfg(test)]
mod tests;
