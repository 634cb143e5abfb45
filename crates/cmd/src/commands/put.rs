use anyhow::{Context, Result};
use mediafs::{BlobFileSystem, FileSystem};
use std::path::Path;

pub async fn run(fs: &BlobFileSystem, path: &str, file: &Path, overwrite: bool) -> Result<()> {
    let content = tokio::fs::read(file)
        .await
        .with_context(|| format!("reading {}", file.display()))?;
    fs.add_file(path, content.into(), overwrite).await?;
    Ok(())
}
