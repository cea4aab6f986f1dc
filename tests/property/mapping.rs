use proptest::prelude::*;
use sourcemap_annotate::{decode_mapping, invert, vlq, MappingEntry};

use crate::utils::{pc_sequence, vlq_value};

proptest! {
    #[test]
    fn test_inversion_lists_each_pc_once(sequence in pc_sequence()) {
        let map = invert(&sequence);

        for (pc, entry) in sequence.iter() {
            if let MappingEntry::Present(line) = entry {
                let pcs = map.get(line).unwrap();
                prop_assert_eq!(pcs.iter().filter(|&&p| p == pc).count(), 1);
            }
        }

        let mut listed = 0;
        for (line, pcs) in map.iter() {
            prop_assert!(!pcs.is_empty());
            prop_assert!(pcs.windows(2).all(|w| w[0] < w[1]));
            for &pc in pcs {
                prop_assert_eq!(sequence.get(pc), Some(MappingEntry::Present(line)));
            }
            listed += pcs.len();
        }
        prop_assert_eq!(listed, sequence.len() - sequence.absent_count());
    }

    #[test]
    fn test_zero_key_only_from_present_zero(sequence in pc_sequence()) {
        let map = invert(&sequence);
        let has_zero = sequence.iter().any(|(_, e)| e == MappingEntry::Present(0));
        prop_assert_eq!(map.contains_line(0), has_zero);
    }

    #[test]
    fn test_last_wins_is_last_pc(sequence in pc_sequence()) {
        let map = invert(&sequence);
        let last = map.last_wins();
        prop_assert_eq!(last.len(), map.len());
        for (line, pcs) in map.iter() {
            prop_assert_eq!(last.get(&line), pcs.last());
        }
    }

    #[test]
    fn test_single_value_tokens_decode_in_order(values in prop::collection::vec(vlq_value(), 1..32)) {
        let raw = values
            .iter()
            .map(|v| vlq::encode(&[*v]))
            .collect::<Vec<_>>()
            .join(";");
        let sequence = decode_mapping(&raw, ';');
        let decoded: Vec<_> = sequence.iter().map(|(_, e)| e.value()).collect();
        let expected: Vec<_> = values.into_iter().map(Some).collect();
        prop_assert_eq!(decoded, expected);
    }

    #[test]
    fn test_one_malformed_token_is_isolated(
        values in prop::collection::vec(-100i64..100, 1..16),
        index in any::<prop::sample::Index>(),
    ) {
        let broken = index.index(values.len());
        let tokens: Vec<String> = values
            .iter()
            .enumerate()
            .map(|(pc, v)| if pc == broken { "A!A".to_string() } else { vlq::encode(&[*v]) })
            .collect();
        let sequence = decode_mapping(&tokens.join(";"), ';');

        prop_assert_eq!(sequence.len(), values.len());
        prop_assert_eq!(sequence.absent_pcs(), vec![broken]);
    }
}

#[test]
fn test_end_to_end_example() {
    use sourcemap_annotate::Decoder;

    let sequence = decode_mapping("AAAA;ACAA;AAAA", ';');
    let map = invert(&sequence);

    let v = sequence.get(1).and_then(MappingEntry::value).unwrap();
    assert_ne!(v, 0);
    assert_eq!(map.get(0), Some(&[0, 2][..]));
    assert_eq!(map.get(v), Some(&[1][..]));

    // Full segments carry the line in their third value.
    let default_map = invert(&Decoder::default().decode_mapping("AAAA;AACA;AAAA"));
    assert_eq!(default_map.get(0), Some(&[0, 2][..]));
    assert_eq!(default_map.get(1), Some(&[1][..]));
}
