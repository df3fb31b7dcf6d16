//! Ports for the state channel subsystem.

pub mod inbound;
pub mod outbound;

pub use inbound::StateChannelApi;
pub use outbound::BlockHeightProvider;
