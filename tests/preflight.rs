use std::fs;
use std::io;
use std::path::Path;

use async_trait::async_trait;
use node_preflight::storage_node::probe::directory_size;
use node_preflight::{
    validate, validate_allocation, validate_allocation_with, NodeConfig, StorageProbe,
    ValidationError,
};

const MAINNET: &str = "1ATyTAjFpeU2RrwVzk9YEa2vxQJos4xdqX";

/// Real existence and usage, fixed free space.
struct FixedFreeSpace(u64);

#[async_trait]
impl StorageProbe for FixedFreeSpace {
    fn exists(&self, path: &Path) -> bool {
        node_preflight::directory_exists(path)
    }

    async fn free_space(&self, _path: &Path) -> io::Result<u64> {
        Ok(self.0)
    }

    async fn directory_size(&self, path: &Path) -> io::Result<u64> {
        directory_size(path)
    }
}

fn storage_dir_with(bytes: usize) -> tempfile::TempDir {
    let dir = tempfile::Builder::new()
        .prefix("node-preflight-")
        .tempdir()
        .expect("Not able to create a temporary directory.");
    fs::create_dir(dir.path().join("shards")).unwrap();
    fs::write(dir.path().join("shards/0001"), vec![0u8; bytes]).unwrap();
    dir
}

#[tokio::test]
async fn test_existing_usage_counts_towards_allocation() {
    let dir = storage_dir_with(1024);
    let config = NodeConfig::new(MAINNET, dir.path(), "2KB");

    validate(&config).unwrap();
    // 1024 free + 1024 already used
    validate_allocation_with(&config, &FixedFreeSpace(1024))
        .await
        .unwrap();

    let err = validate_allocation_with(&config, &FixedFreeSpace(1023))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid storage size");
}

#[tokio::test]
async fn test_config_file_passes() {
    let dir = storage_dir_with(10);
    let file = dir.path().join("config.toml");
    fs::write(
        &file,
        format!(
            "payment_address = \"{}\"\nstorage_path = {:?}\nstorage_allocation = \"1MB\"\n",
            MAINNET,
            dir.path().display().to_string()
        ),
    )
    .unwrap();

    let config = NodeConfig::load(&file).unwrap();
    validate(&config).unwrap();
    validate_allocation_with(&config, &FixedFreeSpace(1 << 20))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_deleted_storage_dir() {
    let dir = storage_dir_with(10);
    let path = dir.path().to_path_buf();
    drop(dir);

    let config = NodeConfig::new(MAINNET, &path, "1KB");
    assert!(matches!(validate(&config), Err(ValidationError::InvalidPath)));

    let err = validate_allocation_with(&config, &FixedFreeSpace(1 << 20))
        .await
        .unwrap_err();
    assert!(matches!(err, ValidationError::Io(_)));
}

#[tokio::test]
async fn test_local_disk_small_allocation() {
    let dir = storage_dir_with(512);
    let config = NodeConfig::new(MAINNET, dir.path(), "1KB");

    validate(&config).unwrap();
    validate_allocation(&config).await.unwrap();
}

#[tokio::test]
async fn test_local_disk_allocation_beyond_volume() {
    let dir = storage_dir_with(512);
    let config = NodeConfig::new(MAINNET, dir.path(), "1000000PB");

    let err = validate_allocation(&config).await.unwrap_err();
    assert!(matches!(err, ValidationError::InsufficientCapacity));
}
