//! YAML normalization
//!
//! GitHub only accepts plain YAML, so the best available "compression" is a
//! parse + re-serialize round trip: comments, blank lines and incidental
//! formatting disappear, keys (in their original order), structure and
//! scalar values stay. Merge keys (`<<: *anchor`) are resolved into plain
//! mappings since GitHub Actions rejects them.

use serde_yaml::Value;

/// Re-serialize `text` in canonical form.
pub fn normalize(text: &str) -> Result<String, serde_yaml::Error> {
    let mut value: Value = serde_yaml::from_str(text)?;
    value.apply_merge()?;
    serde_yaml::to_string(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strips_comments_and_blank_lines() {
        let input = "# Workflow header\nname: CI\n\n\n# trigger\nenv: prod # inline\n";
        assert_eq!(normalize(input).unwrap(), "name: CI\nenv: prod\n");
    }

    #[test]
    fn test_keeps_key_order() {
        let out = normalize("zeta: 1\nalpha: 2\nmid: 3\n").unwrap();
        assert_eq!(out, "zeta: 1\nalpha: 2\nmid: 3\n");
    }

    #[test]
    fn test_preserves_structure() {
        let input = "jobs:\n  build:\n    runs-on: ubuntu-latest   # runner\n    steps:\n      - run: echo hi\n\n      - run: make\n";
        let out = normalize(input).unwrap();

        let before: Value = serde_yaml::from_str(input).unwrap();
        let after: Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(before, after);
        assert!(!out.contains('#'));
        assert!(!out.contains("\n\n"));
    }

    #[test]
    fn test_trailing_indent_lines_from_expansion_are_dropped() {
        let out = normalize("build:\n  steps:\n    - run: echo hi\n  \n  \n").unwrap();
        assert!(!out.contains("  \n"));
    }

    #[test]
    fn test_merge_keys_are_resolved() {
        let input = "defaults: &d\n  runs-on: ubuntu-latest\njobs:\n  a:\n    <<: *d\n    steps: []\n";
        let out = normalize(input).unwrap();

        assert!(!out.contains("<<"));
        let value: Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(value["jobs"]["a"]["runs-on"].as_str(), Some("ubuntu-latest"));
        assert!(value["jobs"]["a"]["steps"].is_sequence());
    }

    #[test]
    fn test_local_keys_win_over_merged_ones() {
        let input = "base: &b\n  runs-on: ubuntu-latest\n  timeout-minutes: 5\njob:\n  <<: *b\n  timeout-minutes: 30\n";
        let value: Value = serde_yaml::from_str(&normalize(input).unwrap()).unwrap();

        assert_eq!(value["job"]["timeout-minutes"].as_u64(), Some(30));
        assert_eq!(value["job"]["runs-on"].as_str(), Some("ubuntu-latest"));
    }

    #[test]
    fn test_empty_or_comment_only_document_becomes_null() {
        assert_eq!(normalize("").unwrap(), "null\n");
        assert_eq!(normalize("# nothing here\n\n").unwrap(), "null\n");
    }

    #[test]
    fn test_invalid_yaml_fails() {
        assert!(normalize("key: [unclosed\n").is_err());
        assert!(normalize("a: 1\n  b: 2\n").is_err());
    }

    #[test]
    fn test_idempotent_on_workflow() {
        let input = "name: CI\non:\n  push:\n    branches: [main]\njobs:\n  test:\n    runs-on: ubuntu-latest\n    steps:\n      - uses: actions/checkout@v4\n      - run: |\n          cargo test\n          cargo clippy\n";
        let once = normalize(input).unwrap();
        assert_eq!(normalize(&once).unwrap(), once);
    }

    fn yaml_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| Value::Number(n.into())),
            "[a-zA-Z0-9 _.:-]{0,16}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Sequence),
                prop::collection::vec(("[a-z_]{1,8}", inner), 0..4).prop_map(|entries| {
                    Value::Mapping(
                        entries
                            .into_iter()
                            .map(|(k, v)| (Value::String(k), v))
                            .collect(),
                    )
                }),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(value in yaml_value()) {
            let text = serde_yaml::to_string(&value).unwrap();
            let once = normalize(&text).unwrap();
            prop_assert_eq!(normalize(&once).unwrap(), once);
        }
    }
}
