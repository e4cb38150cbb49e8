// ./src/address.rs
//! Payout address validation
//!
//! Payout addresses are legacy base58check addresses: one version byte,
//! a 20-byte hash and a 4-byte double-SHA256 checksum. Both pay-to-pubkey-hash
//! and pay-to-script-hash versions are accepted on mainnet and testnet.

use bitcoin::base58;
use bitcoin::Network;

/// Length of a decoded address payload (version byte + hash160), checksum stripped.
const PAYLOAD_LEN: usize = 21;

const PUBKEY_PREFIX_MAIN: u8 = 0x00;
const SCRIPT_PREFIX_MAIN: u8 = 0x05;
const PUBKEY_PREFIX_TEST: u8 = 0x6f;
const SCRIPT_PREFIX_TEST: u8 = 0xc4;

/// Returns the network a payout address belongs to, or `None` if the string
/// is not a checksum-valid base58 address for a supported network.
pub fn payout_network(address: &str) -> Option<Network> {
    let payload = base58::decode_check(address).ok()?;
    if payload.len() != PAYLOAD_LEN {
        return None;
    }

    match payload[0] {
        PUBKEY_PREFIX_MAIN | SCRIPT_PREFIX_MAIN => Some(Network::Bitcoin),
        PUBKEY_PREFIX_TEST | SCRIPT_PREFIX_TEST => Some(Network::Testnet),
        _ => None,
    }
}

/// Checks whether `address` can receive payouts.
pub fn is_valid_payout_address(address: &str) -> bool {
    payout_network(address).is_some()
}
