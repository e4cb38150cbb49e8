pub mod node;
pub mod probe;

pub use node::NodeConfig;
pub use probe::{directory_exists, LocalDisk, StorageProbe};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::address::is_valid_payout_address;
use crate::error::ValidationError;
use crate::size::{is_valid_size, parse_size};

/// Space figures gathered for an allocation check, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CapacityReport {
    /// Parsed allocation, 0 when the allocation string does not parse
    pub requested: i64,
    /// Free bytes on the volume holding the storage path
    pub free_space: u64,
    /// Bytes already used under the storage path
    pub used: u64,
    /// `free_space + used`, the most the node could grow to
    pub available: u64,
}

impl CapacityReport {
    pub fn fits(&self) -> bool {
        self.requested <= 0 || (self.requested as u64) <= self.available
    }
}

/// Checks the payout address, storage path and allocation format, stopping at
/// the first failure.
pub fn validate(config: &NodeConfig) -> Result<(), ValidationError> {
    validate_with(config, &LocalDisk)
}

/// Same as [`validate`] with the existence check answered by `probe`.
pub fn validate_with<P>(config: &NodeConfig, probe: &P) -> Result<(), ValidationError>
where
    P: StorageProbe + ?Sized,
{
    if !is_valid_payout_address(&config.payment_address) {
        warn!("Rejected payment address {:?}", config.payment_address);
        return Err(ValidationError::InvalidAddress);
    }

    if !probe.exists(&config.storage_path) {
        warn!("Storage path {} does not exist", config.storage_path.display());
        return Err(ValidationError::InvalidPath);
    }

    if !is_valid_size(parse_size(&config.storage_allocation)) {
        warn!("Rejected storage allocation {:?}", config.storage_allocation);
        return Err(ValidationError::InvalidSizeFormat);
    }

    debug!("Configuration for {} is well formed", config.storage_path.display());
    Ok(())
}

/// Measures free space and current usage of the storage path concurrently.
///
/// An unparsable allocation is reported as 0 bytes requested. The first
/// measurement to fail is returned as-is.
pub async fn measure_capacity<P>(
    config: &NodeConfig,
    probe: &P,
) -> Result<CapacityReport, ValidationError>
where
    P: StorageProbe + ?Sized,
{
    let requested = parse_size(&config.storage_allocation).unwrap_or(0);
    let path = config.storage_path.as_path();

    let (free_space, used) =
        tokio::try_join!(probe.free_space(path), probe.directory_size(path))?;

    let report = CapacityReport {
        requested,
        free_space,
        used,
        available: free_space.saturating_add(used),
    };
    debug!(?report, "Measured capacity of {}", path.display());
    Ok(report)
}

/// Confirms the allocation fits in the free space plus what the node already
/// occupies. Call only after [`validate`] succeeded.
pub async fn validate_allocation(config: &NodeConfig) -> Result<(), ValidationError> {
    validate_allocation_with(config, &LocalDisk).await
}

/// Same as [`validate_allocation`] with measurements taken by `probe`.
pub async fn validate_allocation_with<P>(
    config: &NodeConfig,
    probe: &P,
) -> Result<(), ValidationError>
where
    P: StorageProbe + ?Sized,
{
    let report = measure_capacity(config, probe).await?;
    if !report.fits() {
        warn!(
            "Allocation of {} bytes exceeds the {} bytes available",
            report.requested, report.available
        );
        return Err(ValidationError::InsufficientCapacity);
    }

    info!(
        "Allocation of {} bytes fits in {} bytes available",
        report.requested, report.available
    );
    Ok(())
}
