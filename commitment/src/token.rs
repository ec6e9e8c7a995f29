use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha3::{Digest, Keccak256};

use crate::{
    address::Address,
    errors::DomainError,
    scalar::{scalar_from_be_bytes_reduced, word_from_hex},
    Scalar,
};

/// Token standard of a shielded asset. Discriminants match the on-chain enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Erc20 = 0,
    Erc721 = 1,
    Erc1155 = 2,
}

/// `uint256` item id of a non-fungible token, kept as a big-endian word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenSubId(pub [u8; 32]);

impl From<u128> for TokenSubId {
    fn from(value: u128) -> Self {
        let mut word = [0u8; 32];
        word[16..].copy_from_slice(&value.to_be_bytes());
        Self(word)
    }
}

impl FromStr for TokenSubId {
    type Err = DomainError;

    /// Accepts `0x`-prefixed hex (up to 256 bits) or a decimal `u128`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix("0x") {
            Some(_) => word_from_hex(s).map(Self),
            None => s
                .parse::<u128>()
                .map(Self::from)
                .map_err(|e| DomainError::MalformedHex(format!("{s}: {e}"))),
        }
    }
}

impl Display for TokenSubId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for TokenSubId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TokenSubId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Identifies the asset a note carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenData {
    pub token_type: TokenType,
    pub token_address: Address,
    #[serde(default)]
    pub token_sub_id: TokenSubId,
}

impl TokenData {
    pub fn erc20(token_address: Address) -> Self {
        Self {
            token_type: TokenType::Erc20,
            token_address,
            token_sub_id: TokenSubId::default(),
        }
    }

    pub fn erc721(token_address: Address, token_sub_id: TokenSubId) -> Self {
        Self {
            token_type: TokenType::Erc721,
            token_address,
            token_sub_id,
        }
    }

    pub fn erc1155(token_address: Address, token_sub_id: TokenSubId) -> Self {
        Self {
            token_type: TokenType::Erc1155,
            token_address,
            token_sub_id,
        }
    }

    /// `abi.encode(tokenType, tokenAddress, tokenSubID)`: three 32-byte big-endian words.
    pub fn abi_encode(&self) -> [u8; 96] {
        let mut encoded = [0u8; 96];
        encoded[31] = self.token_type as u8;
        encoded[32..64].copy_from_slice(&self.token_address.to_word());
        encoded[64..].copy_from_slice(&self.token_sub_id.0);
        encoded
    }
}

/// Field encoding of a token.
///
/// ERC20 tokens are identified by their address. Every other standard hashes the whole descriptor
/// with Keccak-256 and reduces the digest into the field, so that the item id takes part.
pub fn token_id(token: &TokenData) -> Scalar {
    match token.token_type {
        TokenType::Erc20 => scalar_from_be_bytes_reduced(token.token_address.to_word()),
        TokenType::Erc721 | TokenType::Erc1155 => {
            let digest: [u8; 32] = Keccak256::digest(token.abi_encode()).into();
            scalar_from_be_bytes_reduced(digest)
        }
    }
}
