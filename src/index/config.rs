//! Configuration for building and sizing the index.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordposError};

/// Number of hash buckets used when nothing else is configured.
pub const DEFAULT_BUCKET_COUNT: usize = 101;

/// Multiplier of the polynomial word hash.
pub const DEFAULT_HASH_BASE: u64 = 33;

/// What the builder does with a word that never occurs in the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyMatchPolicy {
    /// Index the word with an empty position list.
    #[default]
    Keep,
    /// Leave the word out of the index. It is still tracked in the vocabulary.
    Skip,
}

/// Configuration for the position index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Number of hash buckets.
    pub bucket_count: usize,

    /// Multiplier of the polynomial rolling hash.
    pub hash_base: u64,

    /// Policy for words without occurrences during the initial build.
    pub empty_match_policy: EmptyMatchPolicy,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            hash_base: DEFAULT_HASH_BASE,
            empty_match_policy: EmptyMatchPolicy::Keep,
        }
    }
}

impl IndexConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of hash buckets.
    pub fn with_bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = bucket_count;
        self
    }

    /// Set the hash multiplier.
    pub fn with_hash_base(mut self, hash_base: u64) -> Self {
        self.hash_base = hash_base;
        self
    }

    /// Set the empty-match policy.
    pub fn with_empty_match_policy(mut self, policy: EmptyMatchPolicy) -> Self {
        self.empty_match_policy = policy;
        self
    }

    /// Check that the configuration describes a usable table.
    pub fn validate(&self) -> Result<()> {
        if self.bucket_count == 0 {
            return Err(WordposError::invalid_config(
                "bucket_count must be greater than zero",
            ));
        }
        if self.hash_base == 0 {
            return Err(WordposError::invalid_config(
                "hash_base must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            WordposError::invalid_config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: IndexConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IndexConfig::default();
        assert_eq!(config.bucket_count, 101);
        assert_eq!(config.hash_base, 33);
        assert_eq!(config.empty_match_policy, EmptyMatchPolicy::Keep);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_buckets() {
        let config = IndexConfig::new().with_bucket_count(0);
        assert!(matches!(config.validate(), Err(WordposError::Config(_))));

        let config = IndexConfig::new().with_hash_base(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: IndexConfig =
            serde_json::from_str(r#"{"bucket_count": 7, "empty_match_policy": "skip"}"#).unwrap();
        assert_eq!(config.bucket_count, 7);
        assert_eq!(config.hash_base, DEFAULT_HASH_BASE);
        assert_eq!(config.empty_match_policy, EmptyMatchPolicy::Skip);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        fs::write(&path, r#"{"bucket_count": 13}"#).unwrap();
        assert_eq!(IndexConfig::from_file(&path).unwrap().bucket_count, 13);

        fs::write(&path, r#"{"bucket_count": 0}"#).unwrap();
        assert!(IndexConfig::from_file(&path).is_err());

        assert!(IndexConfig::from_file(dir.path().join("missing.json")).is_err());
    }
}
