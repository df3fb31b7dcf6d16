//! Adapters implementing the outbound ports.

pub mod block_clock;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock_verifier;

pub use block_clock::ManualBlockClock;
#[cfg(any(test, feature = "test-utils"))]
pub use mock_verifier::MockVerifier;
