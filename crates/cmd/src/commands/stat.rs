use anyhow::{Result, bail};
use mediafs::{BlobFileSystem, FileSystem};

#[allow(clippy::print_stdout)]
pub async fn run(fs: &BlobFileSystem, path: &str) -> Result<()> {
    if !fs.file_exists(path).await {
        bail!("{path}: not found");
    }

    let modified = fs.get_last_modified(path).await?;
    println!("path:     {}", fs.get_relative_path(path));
    println!("url:      {}", fs.get_url(path));
    println!("modified: {modified}");
    Ok(())
}
