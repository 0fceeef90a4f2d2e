use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::policy::{BannedTermSet, PolicyFilter, StripMode};

/// Length and count constraints applied by the generators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentLimits {
    /// Attributes are only appended while the title stays within this many chars.
    pub title_max_chars: usize,
    /// Leading attributes considered for the title.
    pub title_attributes: usize,
    pub bullet_max_chars: usize,
    pub meta_title_max_chars: usize,
    pub meta_description_max_chars: usize,
    pub description_min_words: usize,
    pub description_max_words: usize,
}

impl Default for ContentLimits {
    fn default() -> Self {
        Self {
            title_max_chars: 150,
            title_attributes: 3,
            bullet_max_chars: 85,
            meta_title_max_chars: 70,
            meta_description_max_chars: 160,
            description_min_words: 120,
            description_max_words: 160,
        }
    }
}

impl ContentLimits {
    /// Reject limits the generators cannot honor.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("bullet_max_chars", self.bullet_max_chars),
            ("meta_title_max_chars", self.meta_title_max_chars),
            ("meta_description_max_chars", self.meta_description_max_chars),
        ] {
            if value < 4 {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be at least 4 to fit a truncation marker"
                )));
            }
        }
        if self.description_min_words > self.description_max_words {
            return Err(Error::InvalidConfig(
                "description_min_words must be <= description_max_words".to_string(),
            ));
        }
        if self.description_max_words == 0 {
            return Err(Error::InvalidConfig(
                "description_max_words must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Banned-term policy settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Replaces the built-in list when present.
    pub banned_terms: Option<Vec<String>>,
    /// Appended to whichever list is active.
    pub extra_banned_terms: Vec<String>,
    pub strip_mode: StripMode,
}

impl PolicyConfig {
    pub fn term_set(&self) -> Result<BannedTermSet> {
        let mut terms = match &self.banned_terms {
            Some(terms) => BannedTermSet::new(terms)?,
            None => BannedTermSet::default(),
        };
        terms.extend(&self.extra_banned_terms)?;
        Ok(terms)
    }

    pub fn build_filter(&self) -> Result<PolicyFilter> {
        PolicyFilter::new(self.term_set()?, self.strip_mode)
    }
}

/// What to do with a row that lacks a required value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFieldPolicy {
    /// Abort the whole batch.
    #[default]
    FailBatch,
    /// Emit the row with empty generated columns and a skip note.
    SkipRow,
}

/// Batch-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub on_missing_field: MissingFieldPolicy,
}

/// Full configuration for a listcraft run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub policy: PolicyConfig,
    pub limits: ContentLimits,
    pub batch: BatchConfig,
}

impl ContentConfig {
    pub fn validate(&self) -> Result<()> {
        self.limits.validate()?;
        self.policy.term_set().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let config: ContentConfig = serde_json::from_str(
            r#"{"policy": {"extra_banned_terms": ["Miracle"], "strip_mode": "until_stable"},
                "limits": {"bullet_max_chars": 60}}"#,
        )
        .expect("parse config");

        assert_eq!(config.limits.bullet_max_chars, 60);
        assert_eq!(config.limits.meta_title_max_chars, 70);
        assert_eq!(config.batch.on_missing_field, MissingFieldPolicy::FailBatch);

        let filter = config.policy.build_filter().expect("filter");
        assert_eq!(filter.mode(), StripMode::UntilStable);
        assert_eq!(filter.detect("a miracle cure"), vec!["cure", "miracle"]);
    }

    #[test]
    fn replacing_terms_drops_defaults() {
        let policy = PolicyConfig {
            banned_terms: Some(vec!["foo".to_string()]),
            ..PolicyConfig::default()
        };
        let filter = policy.build_filter().expect("filter");
        assert_eq!(filter.detect("premium foo"), vec!["foo"]);
    }

    #[test]
    fn rejects_inverted_word_range() {
        let limits = ContentLimits {
            description_min_words: 200,
            ..ContentLimits::default()
        };
        assert!(matches!(limits.validate(), Err(Error::InvalidConfig(_))));
    }
}
