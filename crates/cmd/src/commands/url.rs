use anyhow::Result;
use mediafs::{BlobFileSystem, FileSystem};

#[allow(clippy::print_stdout)]
pub fn run(fs: &BlobFileSystem, path: &str) -> Result<()> {
    println!("{}", fs.get_url(path));
    Ok(())
}
