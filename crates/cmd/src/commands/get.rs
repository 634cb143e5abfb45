use anyhow::{Context, Result};
use mediafs::{BlobFileSystem, FileSystem};
use std::path::Path;

pub async fn run(fs: &BlobFileSystem, path: &str, output: Option<&Path>) -> Result<()> {
    let mut stream = fs.open_file(path).await?;
    match output {
        Some(target) => {
            let mut file = tokio::fs::File::create(target)
                .await
                .with_context(|| format!("creating {}", target.display()))?;
            tokio::io::copy(&mut stream, &mut file).await?;
        }
        None => {
            let mut stdout = tokio::io::stdout();
            tokio::io::copy(&mut stream, &mut stdout).await?;
        }
    }
    Ok(())
}
