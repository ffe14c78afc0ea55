//! Building through `IndexConfig`.

use bwtex::testing::sorted;
use bwtex::{build, build_with, IndexConfig};

use super::common::{LAST_COLUMN, PANAMABANANAS, SUFFIX_ARRAY};

#[test]
fn test_default_config_matches_build() {
    let from_config = build_with(PANAMABANANAS, &IndexConfig::default());
    let direct = build(PANAMABANANAS, 0);
    assert_eq!(from_config.suffix_array(), direct.suffix_array());
    assert_eq!(from_config.last_column(), direct.last_column());
}

#[test]
fn test_custom_sentinel_reproduces_reference() {
    let config = IndexConfig::default().with_sentinel('$');
    let index = build_with(PANAMABANANAS, &config);

    assert_eq!(index.sentinel(), '$');
    assert_eq!(index.last_column().iter().collect::<String>(), LAST_COLUMN);
    assert_eq!(index.suffix_array(), SUFFIX_ARRAY.as_slice());
    assert_eq!(sorted(index.lookup("ana")), vec![1, 7, 9]);
}

#[cfg(feature = "serde_json")]
mod json {
    use bwtex::{build_with, verify_index, IndexConfig, IndexError, SENTINEL};

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(IndexConfig::from_json("{}").unwrap(), IndexConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = IndexConfig::from_json(r#"{ "max_depth": 4 }"#).unwrap();
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.sentinel, SENTINEL);

        let index = build_with("panamabananas", &config);
        assert!(verify_index(&index).is_ok());
    }

    #[test]
    fn test_full_config() {
        let config = IndexConfig::from_json(r##"{ "max_depth": 0, "sentinel": "#" }"##).unwrap();
        assert_eq!(config.sentinel, '#');
        assert_eq!(build_with("abc", &config).sentinel(), '#');
    }

    #[test]
    fn test_malformed_config() {
        let err = IndexConfig::from_json(r#"{ "max_depth": -1 }"#).unwrap_err();
        assert!(matches!(err, IndexError::Config(_)));
        assert!(err.to_string().starts_with("invalid index config"));
    }
}
