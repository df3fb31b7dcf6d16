//! # Domain Errors
//!
//! Error types for the channel lifecycle and close protocol.
//!
//! Every error aborts the operation before any state is touched.

use shared_types::{Address, ChannelId};
use thiserror::Error;

/// Channel operation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChannelError {
    /// The id has never been allocated.
    #[error("Channel {0} does not exist")]
    ChannelNotFound(ChannelId),

    /// The channel already has two parties, or the opener tried to join it.
    #[error("Channel {0} is full or not initialized correctly")]
    ChannelFull(ChannelId),

    /// The close attestation was not produced by the counterparty.
    #[error("The signer is incorrect: expected {expected}, {detail}")]
    IncorrectSigner {
        /// Counterparty whose signature was required
        expected: Address,
        /// What was recovered instead, or why recovery failed
        detail: String,
    },

    /// The caller is bound to neither side of the channel.
    #[error("{caller} is not a party of channel {channel_id}")]
    NotChannelParty {
        /// Channel addressed
        channel_id: ChannelId,
        /// Rejected caller
        caller: Address,
    },

    /// Close attempted before a counterparty joined.
    #[error("Channel {0} has no counterparty yet")]
    ChannelNotConnected(ChannelId),

    /// The caller has already submitted an accepted close.
    #[error("{caller} already released channel {channel_id}")]
    AlreadyApproved {
        /// Channel addressed
        channel_id: ChannelId,
        /// Party that already released
        caller: Address,
    },

    /// The submitted status byte is not a known discriminant.
    #[error("Invalid status discriminant: {0}")]
    InvalidStatus(u8),
}

impl ChannelError {
    /// Short revert-style reason, as surfaced to ledger clients.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::ChannelNotFound(_) => "ChannelID does not exist",
            Self::ChannelFull(_) => "This channel is full or not initialized correctly",
            Self::IncorrectSigner { .. } => "The signer is incorrect",
            Self::NotChannelParty { .. } => "Caller is not a party of this channel",
            Self::ChannelNotConnected(_) => "This channel has no counterparty",
            Self::AlreadyApproved { .. } => "Caller has already closed this channel",
            Self::InvalidStatus(_) => "Invalid status",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reasons_match_ledger_strings() {
        assert_eq!(
            ChannelError::ChannelNotFound(ChannelId(9)).reason(),
            "ChannelID does not exist"
        );
        assert_eq!(
            ChannelError::ChannelFull(ChannelId(0)).reason(),
            "This channel is full or not initialized correctly"
        );
        let err = ChannelError::IncorrectSigner {
            expected: Address::ZERO,
            detail: "recovered 0x01".into(),
        };
        assert_eq!(err.reason(), "The signer is incorrect");
        assert!(err.to_string().starts_with("The signer is incorrect"));
    }
}
