//! # Channel Engine Benchmarks
//!
//! | Path | What is measured |
//! |------|------------------|
//! | encode | Canonical 288-byte payload encoding + keccak256 |
//! | recover | secp256k1 public key recovery to an address |
//! | close | Full close validation and release through the service |

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sc_01_canonical_encoding::{ClosePayload, SigningScheme, StateVector};
use sc_02_signature_verification::{AttestationSigner, EcdsaVerifier, SignatureVerifier};
use sc_03_state_channels::{
    ChannelService, ChannelServiceConfig, CloseRequest, ManualBlockClock, StateChannelApi,
};
use shared_bus::NoopPublisher;
use shared_types::{ChannelId, U256};
use std::sync::Arc;

fn state(nonce: u64) -> StateVector {
    StateVector {
        status: 3,
        nonce: U256::from(nonce),
        latitude: 4_624_644,
        longitude: 1_435_776,
        direction: 0,
        speed: 232,
        acceleration: 1,
    }
}

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("sc-01-canonical-encoding");
    let signer = AttestationSigner::random().address();
    let payload = ClosePayload::new(ChannelId(7), signer, state(1337));

    group.bench_function("encode", |b| b.iter(|| black_box(payload.encode())));
    group.bench_function("personal_digest", |b| {
        b.iter(|| black_box(payload.signing_digest(SigningScheme::PersonalSign)))
    });
    group.finish();
}

fn bench_recovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("sc-02-signature-verification");
    let attester = AttestationSigner::random();
    let payload = ClosePayload::new(ChannelId(0), attester.address(), state(1));
    let digest = payload.signing_digest(SigningScheme::PersonalSign);
    let signature = attester.sign_digest(&digest).expect("sign");
    let verifier = EcdsaVerifier;

    group.bench_function("recover_signer", |b| {
        b.iter(|| black_box(verifier.recover_signer(&digest, &signature)))
    });
    group.bench_function("sign_digest", |b| {
        b.iter(|| black_box(attester.sign_digest(&digest)))
    });
    group.finish();
}

fn bench_close(c: &mut Criterion) {
    let mut group = c.benchmark_group("sc-03-state-channels");
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");
    let (alice, bob) = (AttestationSigner::random(), AttestationSigner::random());
    let scheme = SigningScheme::PersonalSign;

    group.bench_function("open_join_close", |b| {
        b.iter(|| {
            runtime.block_on(async {
                let service = ChannelService::new(
                    Arc::new(EcdsaVerifier),
                    Arc::new(ManualBlockClock::new()),
                    Arc::new(NoopPublisher::default()),
                    ChannelServiceConfig {
                        signing_scheme: scheme,
                    },
                );
                let id = service.open(alice.address()).await.expect("open");
                service.join(bob.address(), id).await.expect("join");

                let payload = ClosePayload::new(id, alice.address(), state(2));
                let signature = bob.sign_payload(&payload, scheme).expect("sign");
                black_box(
                    service
                        .close(alice.address(), CloseRequest::new(id, signature, state(2)))
                        .await,
                )
            })
        })
    });
    group.finish();
}

criterion_group!(benches, bench_encoding, bench_recovery, bench_close);
criterion_main!(benches);
