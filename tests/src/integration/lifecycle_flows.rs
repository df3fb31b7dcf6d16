//! # Lifecycle Flows
//!
//! Open and join sequencing with real vehicle addresses.

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use sc_03_state_channels::{ChannelError, StateChannelApi, Status};
    use shared_bus::{ChannelEvent, EventFilter, EventTopic};
    use shared_types::ChannelId;

    #[test]
    fn test_fixture_keys_derive_expected_addresses() {
        assert_eq!(car(CAR1_KEY).address(), address(CAR1_ADDRESS));
        assert_eq!(car(CAR2_KEY).address(), address(CAR2_ADDRESS));
        assert_eq!(car(CAR3_KEY).address(), address(CAR3_ADDRESS));
    }

    #[tokio::test]
    async fn test_ids_are_sequential_across_openers() {
        let h = Harness::default();
        let car1 = address(CAR1_ADDRESS);
        let car2 = address(CAR2_ADDRESS);

        assert_eq!(h.service.open(car1).await.unwrap(), ChannelId(0));
        assert_eq!(h.service.open(car2).await.unwrap(), ChannelId(1));
        assert_eq!(h.service.open(car1).await.unwrap(), ChannelId(2));
        assert_eq!(h.service.channel_count(), 3);
    }

    #[tokio::test]
    async fn test_join_binds_counterparty_at_current_height() {
        let h = Harness::default();
        let car1 = address(CAR1_ADDRESS);
        let car2 = address(CAR2_ADDRESS);
        let mut lifecycle = h.bus.subscribe(EventFilter::topics(vec![EventTopic::Lifecycle]));

        let id = h.service.open(car1).await.unwrap();
        h.clock.set_height(150);
        h.service.join(car2, id).await.unwrap();

        let channel = h.service.channel(id).unwrap();
        assert_eq!(channel.address_b, Some(car2));
        assert_eq!(channel.starting_block, 150);
        assert_eq!(channel.party_a.status, Status::Connected);
        assert_eq!(channel.party_b.status, Status::Connected);

        assert_eq!(
            lifecycle.drain(),
            vec![
                ChannelEvent::ChannelOpened {
                    channel_id: id,
                    party_a: car1
                },
                ChannelEvent::ChannelJoined {
                    channel_id: id,
                    party_b: car2,
                    starting_block: 150
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_third_vehicle_cannot_join_full_channel() {
        let h = Harness::default();
        let id = h.service.open(address(CAR1_ADDRESS)).await.unwrap();
        h.service.join(address(CAR2_ADDRESS), id).await.unwrap();

        let err = h.service.join(address(CAR3_ADDRESS), id).await.unwrap_err();
        assert_eq!(err, ChannelError::ChannelFull(id));
        assert_eq!(
            err.reason(),
            "This channel is full or not initialized correctly"
        );

        let channel = h.service.channel(id).unwrap();
        assert_eq!(channel.address_b, Some(address(CAR2_ADDRESS)));
    }

    #[tokio::test]
    async fn test_join_unknown_channel() {
        let h = Harness::default();
        let err = h
            .service
            .join(address(CAR2_ADDRESS), ChannelId(0))
            .await
            .unwrap_err();
        assert_eq!(err.reason(), "ChannelID does not exist");
        assert_eq!(h.service.channel_count(), 0);
    }
}
