use attest_types::{TxId, ValidatorAddress};
use attest_store::keys;
use proptest::prelude::*;

proptest! {
    #[test]
    fn request_keys_decode_back(bytes in prop::array::uniform32(any::<u8>())) {
        let id = TxId::new(bytes);
        for (make, tag) in [
            (keys::timeout_key as fn(&TxId) -> Vec<u8>, keys::TIMEOUT_TAG),
            (keys::weight_key, keys::WEIGHT_TAG),
            (keys::status_key, keys::STATUS_TAG),
            (keys::quorum_key, keys::QUORUM_TAG),
        ] {
            let key = make(&id);
            let (decoded_tag, decoded_id) = keys::decode_request_key(&key).unwrap();
            prop_assert_eq!(decoded_tag, tag);
            prop_assert_eq!(decoded_id, id);
        }
    }

    #[test]
    fn vote_keys_decode_back(
        id_bytes in prop::array::uniform32(any::<u8>()),
        addr_bytes in prop::array::uniform32(any::<u8>()),
    ) {
        let id = TxId::new(id_bytes);
        let voter = ValidatorAddress::new(addr_bytes);
        let key = keys::vote_key(&id, &voter);
        let (decoded_id, decoded_voter) = keys::decode_vote_key(&key).unwrap();
        prop_assert_eq!(decoded_id, id);
        prop_assert_eq!(decoded_voter, voter);
    }

    #[test]
    fn artifact_keys_decode_back(
        image_bytes in prop::array::uniform32(any::<u8>()),
        kind in any::<u16>(),
    ) {
        for (make, tag) in [
            (keys::register_key as fn(&TxId, u16) -> Vec<u8>, keys::REGISTER_TAG),
            (keys::artifact_key, keys::ARTIFACT_TAG),
        ] {
            let image = TxId::new(image_bytes);
            let key = make(&image, kind);
            let (decoded_tag, decoded_image, decoded_kind) =
                keys::decode_artifact_key(&key).unwrap();
            prop_assert_eq!(decoded_tag, tag);
            prop_assert_eq!(decoded_image, image);
            prop_assert_eq!(decoded_kind, kind);
        }
    }

    #[test]
    fn distinct_requests_never_share_keys(
        a in prop::array::uniform32(any::<u8>()),
        b in prop::array::uniform32(any::<u8>()),
    ) {
        prop_assume!(a != b);
        let (ida, idb) = (TxId::new(a), TxId::new(b));
        prop_assert_ne!(keys::timeout_key(&ida), keys::timeout_key(&idb));
        prop_assert_ne!(keys::weight_key(&ida), keys::weight_key(&idb));
        prop_assert_ne!(keys::status_key(&ida), keys::status_key(&idb));
        prop_assert_ne!(keys::quorum_key(&ida), keys::quorum_key(&idb));
    }

    #[test]
    fn decoders_reject_truncated_keys(
        bytes in prop::array::uniform32(any::<u8>()),
        cut in 1usize..35,
    ) {
        let id = TxId::new(bytes);
        let key = keys::timeout_key(&id);
        let truncated = &key[..key.len() - cut.min(key.len())];
        prop_assert!(keys::decode_request_key(truncated).is_none());
    }
}
