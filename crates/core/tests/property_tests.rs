//! Property tests for tree construction and full sessions.

mod common;

use common::decode;
use henc_core::code::CodeTable;
use henc_core::encoder::{encode_with_config, EncoderConfig};
use henc_core::tree::CodeTree;
use proptest::prelude::*;

fn codes_for(freqs: &[u32]) -> CodeTable {
    let tree = CodeTree::from_frequencies(freqs).unwrap();
    CodeTable::from_tree(&tree).unwrap()
}

proptest! {
    #[test]
    fn prop_codes_are_prefix_free(freqs in prop::collection::vec(0u32..1000, 2..200)) {
        let table = codes_for(&freqs);
        let codes: Vec<&[u8]> = table.iter().map(|(_, code)| code).collect();

        prop_assert!(codes.len() >= 2);
        for (i, a) in codes.iter().enumerate() {
            prop_assert!(!a.is_empty());
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    prop_assert!(!b.starts_with(a));
                }
            }
        }
    }

    #[test]
    fn prop_every_nonzero_symbol_has_code(freqs in prop::collection::vec(0u32..50, 2..300)) {
        let table = codes_for(&freqs);
        for (symbol, &freq) in freqs.iter().enumerate() {
            if freq > 0 {
                prop_assert!(table.get_code(symbol).is_ok());
            }
        }
    }

    #[test]
    fn prop_build_is_deterministic(freqs in prop::collection::vec(0u32..20, 2..300)) {
        let first = CodeTree::from_frequencies(&freqs).unwrap();
        let second = CodeTree::from_frequencies(&freqs).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            CodeTable::from_tree(&first).unwrap(),
            CodeTable::from_tree(&second).unwrap()
        );
    }

    #[test]
    fn prop_uniform_lengths_near_log2(alphabet in 2usize..600) {
        let table = codes_for(&vec![1; alphabet]);
        let ceil_log2 = alphabet.next_power_of_two().trailing_zeros() as usize;

        let mut kraft = 0u64;
        for symbol in 0..alphabet {
            let len = table.code_len(symbol).unwrap();
            prop_assert!(len <= ceil_log2 && len + 1 >= ceil_log2);
            kraft += 1u64 << (ceil_log2 - len);
        }
        // Full binary tree: Kraft sum is exactly one
        prop_assert_eq!(kraft, 1u64 << ceil_log2);
    }

    #[test]
    fn prop_round_trip(
        data in prop::collection::vec(any::<u8>(), 0..2000),
        block_size in 1u64..300,
    ) {
        let config = EncoderConfig { alphabet_size: 257, block_size };

        let mut encoded = Vec::new();
        let stats = encode_with_config(&data[..], &mut encoded, config).unwrap();

        prop_assert_eq!(stats.output_bytes, encoded.len() as u64);
        prop_assert_eq!(decode(&encoded, config), data);
    }
}
