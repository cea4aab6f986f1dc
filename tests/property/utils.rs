use proptest::prelude::*;
use sourcemap_annotate::{MappingEntry, PcSequence};

/// Integers weighted toward group boundaries and the extremes of `i64`.
pub fn vlq_value() -> impl Strategy<Value = i64> {
    prop_oneof![
        -64i64..64,
        any::<i32>().prop_map(i64::from),
        any::<i64>(),
        Just(i64::MIN),
        Just(i64::MAX),
    ]
}

pub fn mapping_entry() -> impl Strategy<Value = MappingEntry> {
    prop_oneof![
        1 => Just(MappingEntry::Absent),
        3 => (-3i64..20).prop_map(MappingEntry::Present),
    ]
}

pub fn pc_sequence() -> impl Strategy<Value = PcSequence> {
    prop::collection::vec(mapping_entry(), 0..64).prop_map(PcSequence::new)
}
