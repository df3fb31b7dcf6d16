//! # Payload Entities
//!
//! The state vector a party submits when closing, and the signed tuple that
//! binds it to a channel and a submitter.

use crate::algorithms::abi::{
    decode_address, decode_int, decode_uint, encode_address, encode_int, encode_uint, split_words,
    PAYLOAD_LEN, WORD_SIZE,
};
use crate::algorithms::digest::{eth_signed_message_hash, keccak256};
use crate::domain::errors::EncodingError;
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use shared_types::{Address, ChannelId, Hash};
use std::fmt;
use std::str::FromStr;

/// One party's claimed telemetry state at a point in time.
///
/// `status` is kept as the raw byte that was signed; interpretation belongs to
/// the channel engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateVector {
    /// Status discriminant as submitted (uint8).
    pub status: u8,
    /// Monotonic off-ledger update counter (uint256).
    pub nonce: U256,
    /// Fixed-point decimal degrees (int32).
    pub latitude: i32,
    /// Fixed-point decimal degrees (int32).
    pub longitude: i32,
    /// Heading in degrees (uint16).
    pub direction: u16,
    /// Speed (uint16).
    pub speed: u16,
    /// Acceleration (int8).
    pub acceleration: i8,
}

/// The tuple a counterparty signs to approve a close.
///
/// `signer` is the address of the party that will *submit* the close, not the
/// party that signs it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosePayload {
    /// Channel being closed.
    pub channel_id: ChannelId,
    /// Submitting party.
    pub signer: Address,
    /// Submitter's closing state.
    pub state: StateVector,
}

impl ClosePayload {
    /// Create a payload.
    pub fn new(channel_id: ChannelId, signer: Address, state: StateVector) -> Self {
        Self {
            channel_id,
            signer,
            state,
        }
    }

    /// Canonical 288-byte encoding.
    pub fn encode(&self) -> [u8; PAYLOAD_LEN] {
        let words = [
            encode_uint(self.channel_id.to_u256()),
            encode_address(&self.signer),
            encode_uint(U256::from(self.state.status)),
            encode_uint(self.state.nonce),
            encode_int(i64::from(self.state.latitude)),
            encode_int(i64::from(self.state.longitude)),
            encode_uint(U256::from(self.state.direction)),
            encode_uint(U256::from(self.state.speed)),
            encode_int(i64::from(self.state.acceleration)),
        ];

        let mut out = [0u8; PAYLOAD_LEN];
        for (chunk, word) in out.chunks_exact_mut(WORD_SIZE).zip(words.iter()) {
            chunk.copy_from_slice(word);
        }
        out
    }

    /// Inverse of [`ClosePayload::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, EncodingError> {
        let words = split_words(bytes)?;

        let channel_id = decode_uint(&words[0], 256, "channel_id")?;
        if channel_id > U256::from(u64::MAX) {
            return Err(EncodingError::ValueOutOfRange {
                field: "channel_id",
            });
        }

        let signer = decode_address(&words[1], "signer")?;
        let status = decode_uint(&words[2], 8, "status")?;
        let nonce = decode_uint(&words[3], 256, "nonce")?;
        let latitude = decode_int(&words[4], 32, "latitude")?;
        let longitude = decode_int(&words[5], 32, "longitude")?;
        let direction = decode_uint(&words[6], 16, "direction")?;
        let speed = decode_uint(&words[7], 16, "speed")?;
        let acceleration = decode_int(&words[8], 8, "acceleration")?;

        Ok(Self {
            channel_id: ChannelId(channel_id.low_u64()),
            signer,
            state: StateVector {
                status: status.low_u32() as u8,
                nonce,
                latitude: latitude as i32,
                longitude: longitude as i32,
                direction: direction.low_u32() as u16,
                speed: speed.low_u32() as u16,
                acceleration: acceleration as i8,
            },
        })
    }

    /// `keccak256(encode())`.
    pub fn payload_hash(&self) -> Hash {
        keccak256(&self.encode())
    }

    /// The digest a counterparty signs under `scheme`.
    pub fn signing_digest(&self, scheme: SigningScheme) -> Hash {
        scheme.digest(&self.payload_hash())
    }
}

/// How the payload hash is turned into the digest that is actually signed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SigningScheme {
    /// Wallet message signing: `keccak256("\x19Ethereum Signed Message:\n32" ++ hash)`.
    #[default]
    PersonalSign,
    /// The payload hash is signed directly.
    RawDigest,
}

impl SigningScheme {
    /// Apply the scheme to a payload hash.
    pub fn digest(&self, payload_hash: &Hash) -> Hash {
        match self {
            Self::PersonalSign => eth_signed_message_hash(payload_hash),
            Self::RawDigest => *payload_hash,
        }
    }
}

impl fmt::Display for SigningScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PersonalSign => write!(f, "personal"),
            Self::RawDigest => write!(f, "raw"),
        }
    }
}

impl FromStr for SigningScheme {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "personal" | "personal_sign" | "eth_sign" => Ok(Self::PersonalSign),
            "raw" | "raw_digest" => Ok(Self::RawDigest),
            other => Err(EncodingError::UnknownScheme(other.to_string())),
        }
    }
}
