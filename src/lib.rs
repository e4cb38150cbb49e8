// ./src/lib.rs
//! Pre-flight checks for a storage node's configuration: payout address,
//! storage directory, and whether the requested allocation fits on disk.

pub mod address;
pub mod error;
pub mod logging;
pub mod size;
pub mod storage_node;

pub use address::{is_valid_payout_address, payout_network};
pub use error::{ConfigError, Error, Result, ValidationError};
pub use size::{is_valid_size, parse_size};
pub use storage_node::{
    directory_exists, measure_capacity, validate, validate_allocation, validate_allocation_with,
    validate_with, CapacityReport, LocalDisk, NodeConfig, StorageProbe,
};
