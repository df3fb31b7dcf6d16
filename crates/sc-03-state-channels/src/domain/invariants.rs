//! # Domain Invariants
//!
//! Preconditions checked before any channel mutation. Each returns the error
//! the operation must abort with, so callers can validate fully and only then
//! mutate.

use super::entities::Channel;
use super::errors::ChannelError;
use super::value_objects::{PartyRole, Status};
use shared_types::Address;

/// Invariant: a channel binds at most two distinct parties.
///
/// The opener may not join its own channel, a connected channel admits no
/// one else, and both parties must be able to move to `Connected`. Every
/// case reports `ChannelFull`.
pub fn invariant_can_join(channel: &Channel, caller: &Address) -> Result<(), ChannelError> {
    let can_connect = channel.party_a.status.can_transition_to(Status::Connected)
        && channel.party_b.status.can_transition_to(Status::Connected);

    if channel.is_connected() || *caller == channel.address_a || !can_connect {
        return Err(ChannelError::ChannelFull(channel.id));
    }
    Ok(())
}

/// Invariant: only a bound, connected, not-yet-released party may close.
///
/// Returns the caller's role and the counterparty whose attestation is required.
pub fn invariant_can_close(
    channel: &Channel,
    caller: &Address,
) -> Result<(PartyRole, Address), ChannelError> {
    let role = channel
        .role_of(caller)
        .ok_or(ChannelError::NotChannelParty {
            channel_id: channel.id,
            caller: *caller,
        })?;

    let counterparty = channel
        .address_of(role.other())
        .ok_or(ChannelError::ChannelNotConnected(channel.id))?;

    match channel.party(role).status {
        Status::Released => Err(ChannelError::AlreadyApproved {
            channel_id: channel.id,
            caller: *caller,
        }),
        status if !status.can_transition_to(Status::Released) => {
            Err(ChannelError::ChannelNotConnected(channel.id))
        }
        _ => Ok((role, counterparty)),
    }
}
