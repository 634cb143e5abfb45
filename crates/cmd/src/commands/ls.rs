use anyhow::Result;
use mediafs::{BlobFileSystem, FileSystem};

#[allow(clippy::print_stdout)]
pub async fn run(fs: &BlobFileSystem, path: &str) -> Result<()> {
    let mut dirs = fs.get_directories(path).await?;
    dirs.sort();
    for dir in dirs {
        println!("{dir}/");
    }

    let mut files = fs.get_files(path, None).await?;
    files.sort();
    for file in files {
        println!("{file}");
    }
    Ok(())
}
