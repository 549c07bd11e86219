//! Felt encoding helpers
//!
//! Remote domains address everything with field elements. On this side they are
//! carried as `Uint256` words and this module owns the conversions:
//!
//! - domain identifiers are starknet selectors (`keccak256(name)` masked to 250 bits)
//! - configuration keys are Cairo short strings (big-endian ASCII, at most 31 bytes)
//! - 256-bit amounts travel as two 128-bit limbs `(low, high)`
//! - L1 addresses must fit in 160 bits

use cosmwasm_std::{StdError, StdResult, Uint256};
use tiny_keccak::{Hasher, Keccak};

/// Width of an Ethereum address in bits.
pub const L1_ADDRESS_BITS: usize = 160;

/// Width of a single payload limb in bits.
pub const LIMB_BITS: usize = 128;

/// Longest string that can be packed into one felt.
pub const MAX_SHORT_STRING_LEN: usize = 31;

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// `2^bits` for `bits < 256`.
pub fn two_pow(bits: usize) -> Uint256 {
    let mut bytes = [0u8; 32];
    bytes[31 - bits / 8] = 1 << (bits % 8);
    Uint256::from_be_bytes(bytes)
}

/// Returns true when `value` is representable as an L1 address.
pub fn is_valid_l1_address(value: Uint256) -> bool {
    value < two_pow(L1_ADDRESS_BITS)
}

/// Returns true when `value` fits a single 128-bit limb.
pub fn fits_single_limb(value: Uint256) -> bool {
    value.to_be_bytes()[..16].iter().all(|b| *b == 0)
}

/// Split a 256-bit value into `[low, high]` 128-bit limbs.
pub fn split_uint256(value: Uint256) -> [Uint256; 2] {
    let bytes = value.to_be_bytes();
    let mut low = [0u8; 32];
    let mut high = [0u8; 32];
    low[16..].copy_from_slice(&bytes[16..]);
    high[16..].copy_from_slice(&bytes[..16]);
    [Uint256::from_be_bytes(low), Uint256::from_be_bytes(high)]
}

/// Starknet selector of `name`: keccak256 truncated to its low 250 bits.
pub fn selector_from_name(name: &str) -> Uint256 {
    let mut hash = keccak256(name.as_bytes());
    hash[0] &= 0x03;
    Uint256::from_be_bytes(hash)
}

/// Encode an ASCII string of at most 31 bytes as a Cairo short string.
pub fn short_string(value: &str) -> StdResult<Uint256> {
    if !value.is_ascii() {
        return Err(StdError::generic_err("short string must be ASCII"));
    }
    if value.len() > MAX_SHORT_STRING_LEN {
        return Err(StdError::generic_err(format!(
            "short string longer than {} bytes",
            MAX_SHORT_STRING_LEN
        )));
    }
    let mut bytes = [0u8; 32];
    bytes[32 - value.len()..].copy_from_slice(value.as_bytes());
    Ok(Uint256::from_be_bytes(bytes))
}

/// Render a felt as minimal `0x`-prefixed lowercase hex.
pub fn felt_to_hex(value: Uint256) -> String {
    let encoded = hex::encode(value.to_be_bytes());
    let trimmed = encoded.trim_start_matches('0');
    if trimmed.is_empty() {
        "0x0".to_string()
    } else {
        format!("0x{}", trimmed)
    }
}
