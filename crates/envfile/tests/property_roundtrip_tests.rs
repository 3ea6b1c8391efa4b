//! Property tests for the env file format.

use std::collections::BTreeMap;

use proptest::prelude::*;
use vault2env_envfile::EnvFile;

fn key_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,15}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[^\r\n\u{0}]{0,32}"
}

proptest! {
    #[test]
    fn prop_serialize_then_parse_preserves_pairs(
        secrets in prop::collection::btree_map(key_strategy(), value_strategy(), 1..16)
    ) {
        let serialized = EnvFile::from_pairs(&secrets).serialize();
        let parsed = EnvFile::parse(&serialized);

        prop_assert_eq!(parsed.to_map(), secrets);
    }

    #[test]
    fn prop_set_keeps_unrelated_lines(
        existing in prop::collection::btree_map(key_strategy(), value_strategy(), 0..8),
        key in key_strategy(),
        value in value_strategy(),
    ) {
        let mut file = EnvFile::from_pairs(&existing);
        file.set(&key, &value);

        let mut expected: BTreeMap<String, String> = existing.clone();
        expected.insert(key, value);

        prop_assert_eq!(EnvFile::parse(&file.serialize()).to_map(), expected);
    }
}
