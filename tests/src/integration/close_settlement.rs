//! # Close Settlement
//!
//! Dual cross-signed close between vehicle 1 and vehicle 2, and every way a
//! submission can be refused.

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use sc_01_canonical_encoding::{ClosePayload, SigningScheme};
    use sc_02_signature_verification::EcdsaSignature;
    use sc_03_state_channels::{
        ChannelError, CloseOutcome, CloseRequest, StateChannelApi, Status,
    };
    use shared_bus::{ChannelEvent, EventFilter, EventTopic};
    use shared_types::{ChannelId, U256};

    /// Channel 0 with vehicle 1 as A and vehicle 2 as B.
    async fn connected(h: &Harness) -> ChannelId {
        let id = h.service.open(address(CAR1_ADDRESS)).await.unwrap();
        h.service.join(address(CAR2_ADDRESS), id).await.unwrap();
        id
    }

    #[test]
    fn test_reference_payload_digest() {
        let payload = ClosePayload::new(ChannelId(0), address(CAR1_ADDRESS), car1_state());
        assert_eq!(
            hex::encode(payload.payload_hash()),
            "e2720a552f677aa07975f0fa063e7b400884cfea7e5553ae820a9392edb37425"
        );
        assert_eq!(
            hex::encode(payload.signing_digest(SigningScheme::PersonalSign)),
            "111a3150901c22267315a553ae903f737db07a95e5fbf73a7b7d96ec795e5f4d"
        );
    }

    #[tokio::test]
    async fn test_dual_close_settles() {
        let h = Harness::default();
        let id = connected(&h).await;
        let (car1, car2) = (car(CAR1_KEY), car(CAR2_KEY));
        let scheme = SigningScheme::PersonalSign;
        let mut settlement = h.bus.subscribe(EventFilter::topics(vec![EventTopic::Settlement]));

        let signature = attest(&car2, id, car1.address(), &car1_state(), scheme);
        let outcome = h
            .service
            .close(car1.address(), CloseRequest::new(id, signature, car1_state()))
            .await
            .unwrap();
        assert_eq!(outcome, CloseOutcome::Pending);

        let channel = h.service.channel(id).unwrap();
        assert_eq!(channel.party_a.status, Status::Released);
        assert_eq!(channel.party_b.status, Status::Connected);
        assert_eq!(channel.party_a.nonce, U256::from(1337u64));
        assert_eq!(channel.party_a.speed, 232);

        let signature = attest(&car1, id, car2.address(), &car2_state(), scheme);
        let outcome = h
            .service
            .close(car2.address(), CloseRequest::new(id, signature, car2_state()))
            .await
            .unwrap();
        assert_eq!(outcome, CloseOutcome::Settled);

        let channel = h.service.channel(id).unwrap();
        assert!(channel.is_settled());
        assert_eq!(channel.party_b.acceleration, -1);
        assert_eq!(channel.party_b.latitude, 4_815_069);

        assert_eq!(
            settlement.drain(),
            vec![
                ChannelEvent::CloseSubmitted {
                    channel_id: id,
                    party: car1.address(),
                    closed: false
                },
                ChannelEvent::CloseSubmitted {
                    channel_id: id,
                    party: car2.address(),
                    closed: true
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_outsider_attestation_rejected() {
        let h = Harness::default();
        let id = connected(&h).await;
        let car1 = car(CAR1_KEY);

        let forged = attest(
            &car(CAR3_KEY),
            id,
            car1.address(),
            &car1_state(),
            SigningScheme::PersonalSign,
        );
        let err = h
            .service
            .close(car1.address(), CloseRequest::new(id, forged, car1_state()))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ChannelError::IncorrectSigner { expected, .. } if expected == address(CAR2_ADDRESS)
        ));
        assert_eq!(err.reason(), "The signer is incorrect");
        assert_eq!(h.service.channel(id).unwrap().party_a.status, Status::Connected);
    }

    #[tokio::test]
    async fn test_tampered_field_breaks_attestation() {
        let h = Harness::default();
        let id = connected(&h).await;
        let car1 = car(CAR1_KEY);

        let signature = attest(
            &car(CAR2_KEY),
            id,
            car1.address(),
            &car1_state(),
            SigningScheme::PersonalSign,
        );
        let mut tampered = car1_state();
        tampered.speed = 10;

        let err = h
            .service
            .close(car1.address(), CloseRequest::new(id, signature, tampered))
            .await
            .unwrap_err();
        assert!(matches!(err, ChannelError::IncorrectSigner { .. }));
    }

    #[tokio::test]
    async fn test_self_signed_close_rejected() {
        let h = Harness::default();
        let id = connected(&h).await;
        let car1 = car(CAR1_KEY);

        let signature = attest(
            &car1,
            id,
            car1.address(),
            &car1_state(),
            SigningScheme::PersonalSign,
        );
        let err = h
            .service
            .close(car1.address(), CloseRequest::new(id, signature, car1_state()))
            .await
            .unwrap_err();
        assert!(matches!(err, ChannelError::IncorrectSigner { .. }));
    }

    #[tokio::test]
    async fn test_attestation_bound_to_submitter() {
        // Vehicle 2's attestation of vehicle 1's state cannot be replayed by
        // vehicle 2 itself: the payload names the submitter.
        let h = Harness::default();
        let id = connected(&h).await;
        let car2 = car(CAR2_KEY);

        let signature = attest(
            &car2,
            id,
            address(CAR1_ADDRESS),
            &car1_state(),
            SigningScheme::PersonalSign,
        );
        let err = h
            .service
            .close(car2.address(), CloseRequest::new(id, signature, car1_state()))
            .await
            .unwrap_err();
        assert!(matches!(err, ChannelError::IncorrectSigner { .. }));
    }

    #[tokio::test]
    async fn test_repeat_close_rejected() {
        let h = Harness::default();
        let id = connected(&h).await;
        let car1 = car(CAR1_KEY);
        let signature = attest(
            &car(CAR2_KEY),
            id,
            car1.address(),
            &car1_state(),
            SigningScheme::PersonalSign,
        );

        h.service
            .close(car1.address(), CloseRequest::new(id, signature, car1_state()))
            .await
            .unwrap();
        let err = h
            .service
            .close(car1.address(), CloseRequest::new(id, signature, car1_state()))
            .await
            .unwrap_err();
        assert!(matches!(err, ChannelError::AlreadyApproved { .. }));
    }

    #[tokio::test]
    async fn test_close_before_join_rejected() {
        let h = Harness::default();
        let car1 = car(CAR1_KEY);
        let id = h.service.open(car1.address()).await.unwrap();
        let signature = attest(
            &car(CAR2_KEY),
            id,
            car1.address(),
            &car1_state(),
            SigningScheme::PersonalSign,
        );

        let err = h
            .service
            .close(car1.address(), CloseRequest::new(id, signature, car1_state()))
            .await
            .unwrap_err();
        assert_eq!(err, ChannelError::ChannelNotConnected(id));
    }

    #[tokio::test]
    async fn test_garbage_signature_rejected_as_incorrect_signer() {
        let h = Harness::default();
        let id = connected(&h).await;
        let garbage = EcdsaSignature::from_slice(&[0u8; 65]).unwrap();

        let err = h
            .service
            .close(address(CAR1_ADDRESS), CloseRequest::new(id, garbage, car1_state()))
            .await
            .unwrap_err();
        assert!(matches!(err, ChannelError::IncorrectSigner { .. }));
    }

    #[tokio::test]
    async fn test_raw_scheme_round_trip() {
        let h = Harness::new(SigningScheme::RawDigest);
        let id = connected(&h).await;
        let (car1, car2) = (car(CAR1_KEY), car(CAR2_KEY));

        let personal = attest(
            &car2,
            id,
            car1.address(),
            &car1_state(),
            SigningScheme::PersonalSign,
        );
        assert!(h
            .service
            .close(car1.address(), CloseRequest::new(id, personal, car1_state()))
            .await
            .is_err());

        let raw = attest(&car2, id, car1.address(), &car1_state(), SigningScheme::RawDigest);
        assert_eq!(
            h.service
                .close(car1.address(), CloseRequest::new(id, raw, car1_state()))
                .await
                .unwrap(),
            CloseOutcome::Pending
        );
    }
}
