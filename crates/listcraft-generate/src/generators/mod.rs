//! Field generators.
//!
//! Every generator builds its field from fixed templates, corrects length
//! breaches, and strips banned terms as its last step.

pub mod bullets;
pub mod description;
pub mod meta;
pub mod title;

pub use bullets::{BULLET_TEMPLATES, BulletGenerator, BulletSlot, BulletTemplate};
pub use description::{DescriptionGenerator, SENTENCE_RULES, SentenceRule, planned_sentences};
pub use meta::{MetaDescriptionGenerator, MetaTitleGenerator};
pub use title::TitleGenerator;

use listcraft_core::{
    ContentField, ContentLimits, PolicyFilter, ProductInput, Violation, ViolationLog,
};

/// Shared inputs for field generators.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorContext<'a> {
    pub policy: &'a PolicyFilter,
    pub limits: &'a ContentLimits,
}

/// One generated field plus the violations raised while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOutput {
    pub value: String,
    pub violations: ViolationLog,
}

/// Produces a single listing field from product attributes.
pub trait FieldGenerator {
    fn id(&self) -> &'static str;

    fn generate(&self, input: &ProductInput, ctx: &GeneratorContext<'_>) -> FieldOutput;
}

/// Strip banned terms from `text`, recording a violation when any were found.
pub(crate) fn enforce_policy(
    policy: &PolicyFilter,
    field: ContentField,
    text: String,
    violations: &mut ViolationLog,
) -> String {
    match policy.clean(&text) {
        Some((cleaned, terms)) => {
            violations.push(Violation::banned_words(field, terms));
            cleaned
        }
        None => text,
    }
}
