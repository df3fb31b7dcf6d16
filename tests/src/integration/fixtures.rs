//! Shared fixtures: the three reference vehicles and a wired channel service.

use sc_01_canonical_encoding::{ClosePayload, SigningScheme, StateVector};
use sc_02_signature_verification::{AttestationSigner, EcdsaSignature, EcdsaVerifier};
use sc_03_state_channels::{ChannelService, ChannelServiceConfig, ManualBlockClock};
use shared_bus::InMemoryEventBus;
use shared_types::{Address, ChannelId, U256};
use std::sync::Arc;

/// Vehicle 1 secret key.
pub const CAR1_KEY: &str = "0x67a769636fd37e648890dd4f2c85c7a146cb9325e1d32eba80763ef01f44ae98";
/// Vehicle 2 secret key.
pub const CAR2_KEY: &str = "0x31a7e5c9ee676f39b66c8ca4e2b18c259fc1e93a38e52d62468c3a67041b4215";
/// Vehicle 3 secret key; never a party in these flows.
pub const CAR3_KEY: &str = "0x4b81ff866fc49aac8353f8b89f8add1f5ec7e93c4e17843e2a185420446de975";

/// Vehicle 1 address.
pub const CAR1_ADDRESS: &str = "0x8110d6959350570944fa2484e63d5803730e4406";
/// Vehicle 2 address.
pub const CAR2_ADDRESS: &str = "0x1740e5400a0d66bc6de97f1146db4afbbc3fb39d";
/// Vehicle 3 address.
pub const CAR3_ADDRESS: &str = "0xdac32803035c7ac78922278b5f950c1b0d18fb02";

/// Signer for a secret key constant.
pub fn car(key: &str) -> AttestationSigner {
    AttestationSigner::from_secret_hex(key).expect("fixture key is valid")
}

/// Address constant as a typed value.
pub fn address(hex: &str) -> Address {
    hex.parse().expect("fixture address is valid")
}

/// Vehicle 1's closing state.
pub fn car1_state() -> StateVector {
    StateVector {
        status: 3,
        nonce: U256::from(1337u64),
        latitude: 4_624_644,
        longitude: 1_435_776,
        direction: 0,
        speed: 232,
        acceleration: 1,
    }
}

/// Vehicle 2's closing state.
pub fn car2_state() -> StateVector {
    StateVector {
        status: 3,
        nonce: U256::from(1338u64),
        latitude: 4_815_069,
        longitude: 1_158_020,
        direction: 2,
        speed: 75,
        acceleration: -1,
    }
}

/// Counterparty attestation over `submitter`'s closing state.
pub fn attest(
    counterparty: &AttestationSigner,
    channel_id: ChannelId,
    submitter: Address,
    state: &StateVector,
    scheme: SigningScheme,
) -> EcdsaSignature {
    let payload = ClosePayload::new(channel_id, submitter, state.clone());
    counterparty
        .sign_payload(&payload, scheme)
        .expect("signing with a valid key")
}

/// Channel service with the production verifier.
pub struct Harness {
    /// Service under test.
    pub service: ChannelService,
    /// Notification bus the service publishes to.
    pub bus: Arc<InMemoryEventBus>,
    /// Block height source.
    pub clock: Arc<ManualBlockClock>,
}

impl Harness {
    /// Fresh registry under `scheme`.
    pub fn new(scheme: SigningScheme) -> Self {
        let bus = Arc::new(InMemoryEventBus::new());
        let clock = Arc::new(ManualBlockClock::starting_at(100));
        let service = ChannelService::new(
            Arc::new(EcdsaVerifier),
            clock.clone(),
            bus.clone(),
            ChannelServiceConfig {
                signing_scheme: scheme,
            },
        );
        Self {
            service,
            bus,
            clock,
        }
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new(SigningScheme::default())
    }
}
