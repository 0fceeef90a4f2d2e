use std::fmt;

use serde::{Deserialize, Serialize};

/// Generated field a violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "field", content = "position")]
pub enum ContentField {
    Title,
    /// 1-based bullet position.
    Bullet(usize),
    Description,
    MetaTitle,
    MetaDescription,
}

impl fmt::Display for ContentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentField::Title => f.write_str("Title"),
            ContentField::Bullet(position) => write!(f, "Bullet {position}"),
            ContentField::Description => f.write_str("Description"),
            ContentField::MetaTitle => f.write_str("Meta title"),
            ContentField::MetaDescription => f.write_str("Meta description"),
        }
    }
}

/// What was corrected or left unmet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ViolationKind {
    Truncated { limit: usize },
    BannedWordRemoved { terms: Vec<String> },
    WordCountBelowMinimum { count: usize, min: usize },
    WordCountOutOfRange { count: usize, min: usize, max: usize },
}

impl ViolationKind {
    /// Stable code used to aggregate violations in reports.
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::Truncated { .. } => "truncated",
            ViolationKind::BannedWordRemoved { .. } => "banned_word_removed",
            ViolationKind::WordCountBelowMinimum { .. } => "word_count_below_minimum",
            ViolationKind::WordCountOutOfRange { .. } => "word_count_out_of_range",
        }
    }
}

/// A single automatic correction or unmet constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    #[serde(flatten)]
    pub field: ContentField,
    #[serde(flatten)]
    pub kind: ViolationKind,
}

impl Violation {
    pub fn new(field: ContentField, kind: ViolationKind) -> Self {
        Self { field, kind }
    }

    pub fn truncated(field: ContentField, limit: usize) -> Self {
        Self::new(field, ViolationKind::Truncated { limit })
    }

    pub fn banned_words(field: ContentField, terms: Vec<String>) -> Self {
        Self::new(field, ViolationKind::BannedWordRemoved { terms })
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.field, &self.kind) {
            (ContentField::Bullet(_), ViolationKind::Truncated { .. }) => {
                write!(f, "{} truncated to meet length limit", self.field)
            }
            (field, ViolationKind::Truncated { limit }) => {
                write!(f, "{field} truncated to {limit} chars")
            }
            (field, ViolationKind::BannedWordRemoved { terms }) => {
                write!(f, "{field} had banned words: {}", terms.join(", "))
            }
            (field, ViolationKind::WordCountBelowMinimum { count, min }) => {
                write!(f, "{field} word count ({count}) below minimum {min} words")
            }
            (field, ViolationKind::WordCountOutOfRange { count, min, max }) => {
                write!(f, "{field} word count ({count}) outside {min}-{max} range")
            }
        }
    }
}

/// Ordered violations for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViolationLog {
    entries: Vec<Violation>,
}

impl ViolationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.entries.push(violation);
    }

    pub fn extend(&mut self, other: ViolationLog) {
        self.entries.extend(other.entries);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.entries.iter()
    }

    /// Messages joined with `"; "`, or `None` when the log is empty.
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return "None".to_string();
        }
        self.entries
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl From<Vec<Violation>> for ViolationLog {
    fn from(entries: Vec<Violation>) -> Self {
        Self { entries }
    }
}

impl IntoIterator for ViolationLog {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_reference_wording() {
        let log = ViolationLog::from(vec![
            Violation::banned_words(ContentField::Title, vec!["premium".into(), "uv".into()]),
            Violation::truncated(ContentField::Bullet(3), 85),
            Violation::truncated(ContentField::MetaTitle, 70),
            Violation::new(
                ContentField::Description,
                ViolationKind::WordCountOutOfRange {
                    count: 110,
                    min: 120,
                    max: 160,
                },
            ),
        ]);

        assert_eq!(
            log.render(),
            "Title had banned words: premium, uv; \
             Bullet 3 truncated to meet length limit; \
             Meta title truncated to 70 chars; \
             Description word count (110) outside 120-160 range"
        );
    }

    #[test]
    fn empty_log_renders_none() {
        assert_eq!(ViolationLog::new().render(), "None");
    }

    #[test]
    fn serializes_as_tagged_records() {
        let violation = Violation::truncated(ContentField::Bullet(2), 85);
        let json = serde_json::to_value(&violation).expect("serialize violation");
        assert_eq!(
            json,
            serde_json::json!({"field": "bullet", "position": 2, "kind": "truncated", "limit": 85})
        );
    }
}
