//! # Node Ledger Flows
//!
//! The reference vehicles through the file-backed node, one handle per
//! command as the CLI does it.

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use channel_node::{ChannelNode, NodeConfig, NodeError};
    use sc_01_canonical_encoding::SigningScheme;
    use sc_03_state_channels::{ChannelError, CloseOutcome, CloseRequest};
    use shared_bus::ChannelEvent;
    use std::path::Path;

    fn node(path: &Path) -> ChannelNode {
        ChannelNode::new(NodeConfig {
            ledger_path: path.to_path_buf(),
            ..NodeConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_full_settlement_through_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger/channels.json");
        let (car1, car2) = (car(CAR1_KEY), car(CAR2_KEY));
        let scheme = SigningScheme::PersonalSign;

        let id = node(&path).open(car1.address()).await.unwrap().value;
        node(&path).join(car2.address(), id).await.unwrap();

        let signature = attest(&car2, id, car1.address(), &car1_state(), scheme);
        let first = node(&path)
            .close(car1.address(), CloseRequest::new(id, signature, car1_state()))
            .await
            .unwrap();
        assert_eq!(first.value, CloseOutcome::Pending);

        let signature = attest(&car1, id, car2.address(), &car2_state(), scheme);
        let second = node(&path)
            .close(car2.address(), CloseRequest::new(id, signature, car2_state()))
            .await
            .unwrap();
        assert_eq!(second.value, CloseOutcome::Settled);
        assert_eq!(second.block, 4);
        assert_eq!(
            second.events,
            vec![ChannelEvent::CloseSubmitted {
                channel_id: id,
                party: car2.address(),
                closed: true
            }]
        );

        assert!(node(&path).channel(id).unwrap().is_settled());
    }

    #[tokio::test]
    async fn test_rejection_leaves_ledger_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("channels.json");
        let car1 = car(CAR1_KEY);

        let id = node(&path).open(car1.address()).await.unwrap().value;
        node(&path).join(car(CAR2_KEY).address(), id).await.unwrap();
        let before = std::fs::read(&path).unwrap();

        let forged = attest(
            &car(CAR3_KEY),
            id,
            car1.address(),
            &car1_state(),
            SigningScheme::PersonalSign,
        );
        let err = node(&path)
            .close(car1.address(), CloseRequest::new(id, forged, car1_state()))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            NodeError::Channel(ChannelError::IncorrectSigner { .. })
        ));

        assert_eq!(std::fs::read(&path).unwrap(), before);
        assert_eq!(node(&path).height().unwrap(), 2);
    }
}
