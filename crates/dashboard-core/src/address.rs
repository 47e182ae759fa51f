//! Account addresses as typed into the dashboard.
//!
//! Two input forms are accepted: an SS58 string for the configured network prefix,
//! or a `0x`-prefixed hex encoding of the 32-byte public key. SS58 is
//! `base58(prefix ++ public_key ++ checksum)` where the checksum is the first two
//! bytes of `blake2b_512("SS58PRE" ++ prefix ++ public_key)`.

use std::fmt;

use blake2::{Blake2b512, Digest};
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

const SS58_CHECKSUM_PREIMAGE: &[u8] = b"SS58PRE";
const CHECKSUM_LEN: usize = 2;
const KEY_LEN: usize = 32;

/// Highest prefix that fits the two-byte SS58 identifier encoding.
pub const MAX_SS58_PREFIX: u16 = 16_383;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountAddress([u8; KEY_LEN]);

impl AccountAddress {
    pub const fn from_raw(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// The ledger's null account; transfers, mints and blacklisting reject it.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Parse user input, rejecting empty input, malformed encodings, checksum
    /// mismatches, foreign network prefixes and the zero account.
    pub fn parse(input: &str, ss58_prefix: u16) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(DashboardError::InvalidAddress("address is empty".into()));
        }

        let address = match input.strip_prefix("0x") {
            Some(hex_body) => Self::from_hex(hex_body)?,
            None => Self::from_ss58(input, ss58_prefix)?,
        };
        if address.is_zero() {
            return Err(DashboardError::InvalidAddress("zero address is not allowed".into()));
        }
        Ok(address)
    }

    fn from_hex(hex_body: &str) -> Result<Self> {
        let bytes = hex::decode(hex_body)
            .map_err(|e| DashboardError::InvalidAddress(format!("bad hex: {e}")))?;
        let raw: [u8; KEY_LEN] = bytes.try_into().map_err(|b: Vec<u8>| {
            DashboardError::InvalidAddress(format!("expected {KEY_LEN} bytes, got {}", b.len()))
        })?;
        Ok(Self(raw))
    }

    pub fn from_ss58(input: &str, expected_prefix: u16) -> Result<Self> {
        let data = bs58::decode(input)
            .into_vec()
            .map_err(|e| DashboardError::InvalidAddress(format!("bad base58: {e}")))?;

        let (prefix, prefix_len) = match data.first() {
            Some(&first) if first < 64 => (u16::from(first), 1),
            Some(&first) if first < 128 => {
                let second = *data
                    .get(1)
                    .ok_or_else(|| DashboardError::InvalidAddress("truncated prefix".into()))?;
                let lower = (first << 2) | (second >> 6);
                let upper = second & 0b0011_1111;
                (u16::from(lower) | (u16::from(upper) << 8), 2)
            }
            _ => return Err(DashboardError::InvalidAddress("unsupported SS58 prefix".into())),
        };

        if data.len() != prefix_len + KEY_LEN + CHECKSUM_LEN {
            return Err(DashboardError::InvalidAddress(format!(
                "unexpected SS58 length {}",
                data.len()
            )));
        }

        let (body, checksum) = data.split_at(prefix_len + KEY_LEN);
        if ss58_checksum(body)[..CHECKSUM_LEN] != *checksum {
            return Err(DashboardError::InvalidAddress("checksum mismatch".into()));
        }
        if prefix != expected_prefix {
            return Err(DashboardError::InvalidAddress(format!(
                "network prefix {prefix}, expected {expected_prefix}"
            )));
        }

        let mut raw = [0u8; KEY_LEN];
        raw.copy_from_slice(&body[prefix_len..]);
        Ok(Self(raw))
    }

    /// SS58 encoding for `prefix`. Prefixes above [`MAX_SS58_PREFIX`] are masked.
    pub fn to_ss58(&self, prefix: u16) -> String {
        let prefix = prefix & MAX_SS58_PREFIX;
        let mut data = match prefix {
            0..=63 => vec![prefix as u8],
            _ => {
                let first = ((prefix & 0b0000_0000_1111_1100) as u8 >> 2) | 0b0100_0000;
                let second = ((prefix >> 8) as u8) | (((prefix & 0b0000_0000_0000_0011) as u8) << 6);
                vec![first, second]
            }
        };
        data.extend_from_slice(&self.0);
        let checksum = ss58_checksum(&data);
        data.extend_from_slice(&checksum[..CHECKSUM_LEN]);
        bs58::encode(data).into_string()
    }

    /// Abbreviated SS58 form for headers and toasts, e.g. `5Grwva…utQY`.
    pub fn short(&self, prefix: u16) -> String {
        let full = self.to_ss58(prefix);
        let head: String = full.chars().take(6).collect();
        let tail: String = full.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
        format!("{head}…{tail}")
    }
}

impl fmt::Debug for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

fn ss58_checksum(body: &[u8]) -> Vec<u8> {
    let mut hasher = Blake2b512::new();
    hasher.update(SS58_CHECKSUM_PREIMAGE);
    hasher.update(body);
    hasher.finalize().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE_SS58: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";
    const ALICE_HEX: &str = "d43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d";

    fn alice() -> AccountAddress {
        AccountAddress::from_hex(ALICE_HEX).unwrap()
    }

    #[test]
    fn parses_well_known_ss58_address() {
        let parsed = AccountAddress::parse(ALICE_SS58, 42).unwrap();
        assert_eq!(parsed, alice());
        assert_eq!(parsed.to_ss58(42), ALICE_SS58);
    }

    #[test]
    fn parses_hex_address() {
        let parsed = AccountAddress::parse(&format!("0x{ALICE_HEX}"), 42).unwrap();
        assert_eq!(parsed, alice());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(AccountAddress::parse(&format!("  {ALICE_SS58}\n"), 42).unwrap(), alice());
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            AccountAddress::parse("   ", 42),
            Err(DashboardError::InvalidAddress(_))
        ));
    }

    #[test]
    fn rejects_corrupted_checksum() {
        let mut corrupted = ALICE_SS58.to_string();
        corrupted.pop();
        corrupted.push('Z');
        assert!(matches!(
            AccountAddress::parse(&corrupted, 42),
            Err(DashboardError::InvalidAddress(_))
        ));
    }

    #[test]
    fn rejects_other_network_prefix() {
        let polkadot = alice().to_ss58(0);
        assert_eq!(AccountAddress::parse(&polkadot, 0).unwrap(), alice());
        assert!(matches!(
            AccountAddress::parse(&polkadot, 42),
            Err(DashboardError::InvalidAddress(msg)) if msg.contains("prefix 0")
        ));
    }

    #[test]
    fn supports_two_byte_prefixes() {
        let encoded = alice().to_ss58(1_000);
        assert_eq!(AccountAddress::from_ss58(&encoded, 1_000).unwrap(), alice());
    }

    #[test]
    fn rejects_zero_address() {
        let zero = format!("0x{}", "00".repeat(32));
        assert!(AccountAddress::parse(&zero, 42).is_err());
        assert!(AccountAddress::from_raw([0; 32]).is_zero());
    }

    #[test]
    fn rejects_wrong_hex_length() {
        assert!(matches!(
            AccountAddress::parse("0xdeadbeef", 42),
            Err(DashboardError::InvalidAddress(msg)) if msg.contains("got 4")
        ));
    }

    #[test]
    fn short_form_keeps_head_and_tail() {
        assert_eq!(alice().short(42), "5Grwva…utQY");
    }
}
