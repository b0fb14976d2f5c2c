use serde::{Deserialize, Serialize};

/// How null and absent values compare.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NullPolicy {
    /// Absent equals only absent, null equals only null.
    #[default]
    Strict,
    /// Null and absent collapse into a single "nothing" state, so a field
    /// set to null matches a field that is missing.
    Loose,
}

/// How `NaN` numbers compare by value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NanPolicy {
    /// IEEE-754 semantics: `NaN` never equals `NaN`.
    #[default]
    Distinct,
    /// Any `NaN` equals any other `NaN`.
    Equal,
}

/// Comparison policies shared by equality, diffing, and change reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    /// Treatment of null versus absent.
    pub nulls: NullPolicy,
    /// Treatment of `NaN`.
    pub nan: NanPolicy,
}

impl CompareOptions {
    /// Strict comparison: the default.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Lenient comparison: null matches absent and `NaN` matches `NaN`.
    pub fn loose() -> Self {
        Self {
            nulls: NullPolicy::Loose,
            nan: NanPolicy::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_strict() {
        let opts = CompareOptions::default();
        assert_eq!(opts, CompareOptions::strict());
        assert_eq!(opts.nulls, NullPolicy::Strict);
        assert_eq!(opts.nan, NanPolicy::Distinct);
    }

    #[test]
    fn deserializes_from_toml_with_defaults() {
        let opts: CompareOptions = toml::from_str(r#"nulls = "loose""#).unwrap();
        assert_eq!(opts.nulls, NullPolicy::Loose);
        assert_eq!(opts.nan, NanPolicy::Distinct);

        let opts: CompareOptions = toml::from_str("").unwrap();
        assert_eq!(opts, CompareOptions::strict());
    }

    #[test]
    fn serde_roundtrip() {
        let opts = CompareOptions::loose();
        let json = serde_json::to_string(&opts).unwrap();
        assert_eq!(json, r#"{"nulls":"loose","nan":"equal"}"#);
        let parsed: CompareOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, opts);
    }
}
