use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Marketplace terms that must never appear in listing content, in canonical order.
pub const DEFAULT_BANNED_TERMS: &[&str] = &[
    "cosplay",
    "weapon",
    "knife",
    "knives",
    "uv",
    "premium",
    "perfect",
    "medical",
    "cure",
    "heal",
    "therapeutic",
    "treatment",
    "clinical",
    "prescription",
    "surgical",
    "hospital",
    "doctor",
    "physician",
    "guaranteed",
    "warranty",
    "lifetime",
    "forever",
    "permanent",
    "fda",
    "approved",
    "certified",
    "authentic",
    "genuine",
    "original",
    "best",
    "top",
    "leading",
    "number one",
    "#1",
    "exclusive",
    "luxury",
    "deluxe",
    "elite",
    "superior",
    "supreme",
];

/// Ordered set of lowercase banned terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannedTermSet {
    terms: Vec<String>,
}

impl BannedTermSet {
    /// Build a term set from caller-supplied terms.
    ///
    /// Terms are trimmed and lowercased; repeated terms keep their first
    /// position. Blank terms are rejected because they would match any text.
    pub fn new<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self { terms: Vec::new() };
        set.extend(terms)?;
        Ok(set)
    }

    /// Append terms after the existing ones.
    pub fn extend<I, S>(&mut self, terms: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if term.is_empty() {
                return Err(Error::InvalidPolicy(
                    "banned terms must not be blank".to_string(),
                ));
            }
            if !self.terms.contains(&term) {
                self.terms.push(term);
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for BannedTermSet {
    fn default() -> Self {
        Self {
            terms: DEFAULT_BANNED_TERMS
                .iter()
                .map(|term| term.to_string())
                .collect(),
        }
    }
}

/// How many strip passes [`PolicyFilter::strip`] performs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StripMode {
    /// One pass over the term list.
    #[default]
    SinglePass,
    /// Repeat passes until the text stops changing, so fragments joined by a
    /// removal cannot leave a new banned term behind.
    UntilStable,
}

/// Detects and removes banned terms.
///
/// Matching is case-insensitive and substring based: `uv` matches inside
/// `mauve`, and removing it leaves `mae`.
#[derive(Debug, Clone)]
pub struct PolicyFilter {
    terms: BannedTermSet,
    patterns: Vec<Regex>,
    whitespace: Regex,
    mode: StripMode,
}

impl PolicyFilter {
    pub fn new(terms: BannedTermSet, mode: StripMode) -> Result<Self> {
        let patterns = terms
            .iter()
            .map(|term| {
                Regex::new(&format!("(?i){}", regex::escape(term))).map_err(|err| {
                    Error::InvalidPolicy(format!("banned term '{term}' cannot be compiled: {err}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let whitespace =
            Regex::new(r"\s+").map_err(|err| Error::InvalidPolicy(err.to_string()))?;

        Ok(Self {
            terms,
            patterns,
            whitespace,
            mode,
        })
    }

    pub fn terms(&self) -> &BannedTermSet {
        &self.terms
    }

    pub fn mode(&self) -> StripMode {
        self.mode
    }

    /// Return every banned term occurring in `text`, once each, in term-list order.
    pub fn detect<'a>(&'a self, text: &str) -> Vec<&'a str> {
        let lower = text.to_lowercase();
        self.terms
            .iter()
            .filter(|term| lower.contains(term))
            .collect()
    }

    /// Remove every banned term from `text` and normalize whitespace.
    pub fn strip(&self, text: &str) -> String {
        let mut current = self.strip_once(text);
        if self.mode == StripMode::UntilStable {
            loop {
                let next = self.strip_once(&current);
                if next == current {
                    break;
                }
                current = next;
            }
        }
        current
    }

    /// Detect then strip. Returns `None` when the text is already clean.
    pub fn clean(&self, text: &str) -> Option<(String, Vec<String>)> {
        let found = self.detect(text);
        if found.is_empty() {
            return None;
        }
        let terms = found.into_iter().map(str::to_string).collect();
        Some((self.strip(text), terms))
    }

    fn strip_once(&self, text: &str) -> String {
        let mut clean = text.to_string();
        for pattern in &self.patterns {
            clean = pattern.replace_all(&clean, "").into_owned();
        }
        self.whitespace.replace_all(&clean, " ").trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> PolicyFilter {
        PolicyFilter::new(BannedTermSet::default(), StripMode::SinglePass).expect("default policy")
    }

    #[test]
    fn detects_terms_in_list_order_once_each() {
        let filter = filter();
        let found = filter.detect("Perfect, perfect and PREMIUM cure");
        assert_eq!(found, vec!["premium", "perfect", "cure"]);
    }

    #[test]
    fn matches_inside_words() {
        let filter = filter();
        assert_eq!(filter.detect("a mauve finish"), vec!["uv"]);
        assert_eq!(filter.strip("a mauve finish"), "a mae finish");
    }

    #[test]
    fn strip_collapses_whitespace() {
        let filter = filter();
        assert_eq!(filter.strip("  the   best\tchoice  "), "the choice");
    }

    #[test]
    fn escapes_regex_metacharacters() {
        let filter = filter();
        assert_eq!(filter.strip("Rated #1 seller"), "Rated seller");
        assert_eq!(filter.strip("Rated 1 seller"), "Rated 1 seller");
    }

    #[test]
    fn until_stable_removes_terms_rebuilt_by_removal() {
        let terms = BannedTermSet::new(["top", "xx"]).expect("terms");
        let single = PolicyFilter::new(terms.clone(), StripMode::SinglePass).expect("filter");
        let stable = PolicyFilter::new(terms, StripMode::UntilStable).expect("filter");

        assert_eq!(single.strip("toxxp"), "top");
        assert_eq!(stable.strip("toxxp"), "");
    }

    #[test]
    fn clean_returns_none_for_clean_text() {
        let filter = filter();
        assert!(filter.clean("Sturdy steel frame").is_none());
    }

    #[test]
    fn term_set_rejects_blank_terms() {
        assert!(matches!(
            BannedTermSet::new(["ok", "  "]),
            Err(Error::InvalidPolicy(_))
        ));
    }

    #[test]
    fn term_set_normalizes_and_dedups() {
        let set = BannedTermSet::new([" Foo ", "foo", "BAR"]).expect("terms");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["foo", "bar"]);
    }
}
