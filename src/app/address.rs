// SPDX-License-Identifier: MPL-2.0
//! Wallet address input validation.
//!
//! The check is syntactic only: it decides whether the text looks like an
//! address worth sending to the summary backend.

use std::fmt;

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Address families the input field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    /// `0x` followed by 40 hex digits.
    Evm,
    /// Base58 string of 26 to 44 characters.
    Base58,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletAddress {
    value: String,
    kind: AddressKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressError {
    Empty,
    Malformed,
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::Empty => write!(f, "Enter a wallet address first"),
            AddressError::Malformed => write!(f, "That does not look like a wallet address"),
        }
    }
}

impl WalletAddress {
    /// Parses user input, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, AddressError> {
        let value = input.trim();
        if value.is_empty() {
            return Err(AddressError::Empty);
        }

        let kind = if is_evm(value) {
            AddressKind::Evm
        } else if is_base58(value) {
            AddressKind::Base58
        } else {
            return Err(AddressError::Malformed);
        };

        Ok(Self {
            value: value.to_string(),
            kind,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn kind(&self) -> AddressKind {
        self.kind
    }

    /// Shortened form for display, e.g. `0x1234…abcd`.
    #[must_use]
    pub fn short(&self) -> String {
        let chars: Vec<char> = self.value.chars().collect();
        if chars.len() <= 12 {
            return self.value.clone();
        }
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}…{tail}")
    }
}

fn is_evm(value: &str) -> bool {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .is_some_and(|hex| hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

fn is_base58(value: &str) -> bool {
    (26..=44).contains(&value.len()) && value.chars().all(|c| BASE58_ALPHABET.contains(c))
}
