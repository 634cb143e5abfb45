//! Path/URL round-trip stability, including scheme changes.

use super::{content, test_fs, test_fs_with};
use crate::{FileSystem, MediaFsConfig};

#[tokio::test]
async fn test_relative_from_full_directory_path() {
    let (_store, fs) = test_fs().await;
    for relative in ["1000", "1000/dill"] {
        fs.add_file(&format!("{relative}/test.dat"), content("x"), true)
            .await
            .unwrap();

        let full = fs.get_full_path(relative);
        let actual = fs.get_relative_path(&full);
        assert_ne!(actual, full);
        assert_eq!(actual, relative);
    }
}

#[tokio::test]
async fn test_relative_from_full_file_path() {
    let (_store, fs) = test_fs().await;
    for relative in ["1000/test.dat", "1000/dill/test.dat"] {
        fs.add_file(relative, content("x"), true).await.unwrap();

        let full = fs.get_full_path(relative);
        assert_eq!(fs.get_relative_path(&full), relative);
    }
}

#[tokio::test]
async fn test_relative_path_of_relative_input_is_unchanged() {
    let (_store, fs) = test_fs().await;
    assert_eq!(fs.get_relative_path("1000/test.dat"), "1000/test.dat");
    assert_eq!(fs.get_relative_path("1000/dill/test.dat"), "1000/dill/test.dat");
}

#[tokio::test]
async fn test_relative_path_strips_trailing_slash() {
    let (_store, fs) = test_fs().await;
    assert_eq!(fs.get_relative_path("1000/"), "1000");

    let full = fs.get_full_path("1000");
    assert_eq!(fs.get_relative_path(&format!("{full}/")), "1000");
}

#[tokio::test]
async fn test_relative_path_ignores_url_scheme() {
    // Root configured with http; input arrives as https.
    let (_store, fs) = test_fs().await;
    let full = fs.get_full_path("1000/test.dat");
    assert!(full.starts_with("http://"));

    let https = format!("https{}", &full["http".len()..]);
    assert_eq!(fs.get_relative_path(&https), "1000/test.dat");
}

#[tokio::test]
async fn test_relative_path_ignores_root_scheme() {
    // Root configured with https; input arrives as http.
    let (_store, fs) = test_fs_with(MediaFsConfig::new(
        "media",
        "https://host/container-base",
    ))
    .await;

    assert_eq!(
        fs.get_relative_path("http://host/container-base/media/1000/test.dat"),
        "1000/test.dat"
    );
}

#[tokio::test]
async fn test_full_path_is_idempotent() {
    let (_store, fs) = test_fs().await;
    let once = fs.get_full_path("1000/test.dat");
    let twice = fs.get_full_path(&once);
    assert_eq!(once, twice);
}

#[tokio::test]
async fn test_url_joins_root_and_path() {
    let (_store, fs) = test_fs().await;
    assert_eq!(
        fs.get_url("1000/test.dat"),
        "http://127.0.0.1:10000/devstoreaccount1/media/1000/test.dat"
    );
    // Duplicate separators collapse; trailing separator is trimmed.
    assert_eq!(
        fs.get_url("/1000//test.dat/"),
        "http://127.0.0.1:10000/devstoreaccount1/media/1000/test.dat"
    );
    // Absolute input passes through.
    let url = fs.get_url("1000/test.dat");
    assert_eq!(fs.get_url(&url), url);
}

#[tokio::test]
async fn test_backslash_paths_normalize() {
    let (store, fs) = test_fs().await;
    fs.add_file(r"1000\test.dat", content("x"), true)
        .await
        .unwrap();

    assert_eq!(store.keys().await, vec!["1000/test.dat"]);
    assert!(fs.file_exists("1000/test.dat").await);
}
