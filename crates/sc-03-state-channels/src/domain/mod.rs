//! Domain layer for state channels.

pub mod entities;
pub mod errors;
pub mod invariants;
pub mod value_objects;

pub use entities::{Channel, ChannelServiceConfig, CloseOutcome, CloseRequest, PartyState};
pub use errors::ChannelError;
pub use value_objects::{PartyRole, Status};
