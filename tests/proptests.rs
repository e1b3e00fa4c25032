use proptest::prelude::*;
use std::collections::HashMap;

use chain_codec::{
    Address, BigInt, Blob, BlockNonce, CanonicalText, Hash, Log, Record, decode_mapping,
    encode_mapping,
};

fn arb_hash() -> impl Strategy<Value = Hash> {
    any::<[u8; 32]>().prop_map(Hash::from)
}

fn arb_address() -> impl Strategy<Value = Address> {
    any::<[u8; 20]>().prop_map(Address::from)
}

fn arb_big_int() -> impl Strategy<Value = BigInt> {
    "[0-9]{1,80}".prop_map(|digits| digits.parse::<BigInt>().unwrap())
}

fn arb_log() -> impl Strategy<Value = Log> {
    (
        arb_address(),
        proptest::collection::vec(arb_hash(), 0..5),
        proptest::collection::vec(any::<u8>(), 0..256),
        arb_big_int(),
        arb_hash(),
        arb_big_int(),
        arb_hash(),
        arb_big_int(),
        any::<bool>(),
    )
        .prop_map(
            |(address, topics, data, block_number, tx_hash, tx_index, block_hash, index, removed)| Log {
                address,
                topics,
                data: Blob::from(data),
                block_number,
                tx_hash,
                tx_index,
                block_hash,
                index,
                removed,
            },
        )
}

proptest! {
    #[test]
    fn hash_round_trip(hash in arb_hash()) {
        let text = hash.to_canonical();
        prop_assert_eq!(Hash::from_canonical(&text).unwrap(), hash);
    }

    #[test]
    fn nonce_round_trip(value in any::<u64>()) {
        let nonce = BlockNonce::from(value);
        let decoded = BlockNonce::from_canonical(&nonce.to_canonical()).unwrap();
        prop_assert_eq!(decoded.to_u64(), value);
    }

    #[test]
    fn hex_input_pads_to_full_width(digits in "[0-9a-fA-F]{1,64}") {
        let short = Hash::from_hex(&digits).unwrap();
        let full = Hash::from_hex(&format!("{:0>64}", digits)).unwrap();
        prop_assert_eq!(short, full);
    }

    #[test]
    fn hash_text_is_canonical(digits in "(0x)?[0-9a-fA-F]{0,64}") {
        let once = Hash::from_hex(&digits).unwrap().to_hex();
        let twice = Hash::from_hex(&once).unwrap().to_hex();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn big_int_matches_native_decimal(value in any::<u128>()) {
        let big = BigInt::from(value);
        prop_assert_eq!(big.to_canonical(), value.to_string());
        prop_assert_eq!(BigInt::from_canonical(&value.to_string()).unwrap(), big);
    }

    #[test]
    fn big_int_leading_zeros_are_dropped(zeros in 0usize..10, digits in "[1-9][0-9]{0,60}") {
        let padded = format!("{}{}", "0".repeat(zeros), digits);
        let value = BigInt::from_canonical(&padded).unwrap();
        prop_assert_eq!(value.to_canonical(), digits);
    }

    #[test]
    fn blob_round_trip(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let blob = Blob::from(data.clone());
        let decoded = Blob::from_canonical(&blob.to_canonical()).unwrap();
        prop_assert_eq!(&decoded[..], &data[..]);
    }

    #[test]
    fn hash_mapping_round_trip(entries in proptest::collection::hash_map(arb_hash(), arb_hash(), 0..16)) {
        let text = encode_mapping(&entries);
        let decoded: HashMap<Hash, Hash> = decode_mapping(&text).unwrap();
        prop_assert_eq!(decoded, entries);
    }

    #[test]
    fn log_round_trip(log in arb_log()) {
        let bytes = log.serialize();
        let decoded = Log::deserialize(&bytes).unwrap();
        prop_assert_eq!(decoded.serialize(), bytes);
        prop_assert_eq!(decoded, log);
    }
}
