use anyhow::{Result, bail};
use mediafs::{BlobFileSystem, DeleteOutcome, FileSystem};

#[allow(clippy::print_stdout)]
pub async fn file(fs: &BlobFileSystem, path: &str) -> Result<()> {
    match fs.delete_file(path).await {
        DeleteOutcome::Deleted => println!("deleted {path}"),
        DeleteOutcome::Absent => println!("{path}: not found"),
        DeleteOutcome::Failed => bail!("failed to delete {path}"),
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn directory(fs: &BlobFileSystem, path: &str) -> Result<()> {
    match fs.delete_directory(path, true).await {
        DeleteOutcome::Deleted => println!("deleted {path}/"),
        DeleteOutcome::Absent => println!("{path}: not found"),
        DeleteOutcome::Failed => bail!("failed to delete {path}"),
    }
    Ok(())
}
