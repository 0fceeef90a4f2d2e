use listcraft_core::text::word_count;
use listcraft_core::{ContentField, ProductInput, Violation, ViolationKind, ViolationLog};

use super::{FieldGenerator, FieldOutput, GeneratorContext, enforce_policy};

/// A candidate description sentence and the condition under which it appears.
#[derive(Clone, Copy)]
pub struct SentenceRule {
    pub id: &'static str,
    applies: fn(&ProductInput) -> bool,
    render: fn(&ProductInput) -> String,
}

impl SentenceRule {
    pub fn applies(&self, input: &ProductInput) -> bool {
        (self.applies)(input)
    }

    pub fn render(&self, input: &ProductInput) -> String {
        (self.render)(input)
    }
}

fn always(_: &ProductInput) -> bool {
    true
}

fn fixed(id: &'static str, render: fn(&ProductInput) -> String) -> SentenceRule {
    SentenceRule {
        id,
        applies: always,
        render,
    }
}

fn joined(items: &[String]) -> String {
    items.join(", ")
}

/// Description skeleton, evaluated in order.
pub static SENTENCE_RULES: std::sync::LazyLock<Vec<SentenceRule>> = std::sync::LazyLock::new(|| {
    vec![
        fixed("opening", |input| {
            format!(
                "The {} {} delivers outstanding performance and value for everyday use.",
                input.brand, input.product_type
            )
        }),
        fixed("opening_design", |_| {
            "This carefully designed product brings together functionality and reliability in one comprehensive solution.".to_string()
        }),
        SentenceRule {
            id: "key_features",
            applies: |input| !input.attributes.is_empty(),
            render: |input| {
                let end = input.attributes.len().min(2);
                format!(
                    "Key features include {}, making it an ideal choice for various applications.",
                    joined(&input.attributes[..end])
                )
            },
        },
        SentenceRule {
            id: "additional_capabilities",
            applies: |input| input.attributes.len() > 2,
            render: |input| {
                let end = input.attributes.len().min(4);
                format!(
                    "Additional capabilities encompass {}, enhancing overall versatility and user satisfaction.",
                    joined(&input.attributes[2..end])
                )
            },
        },
        SentenceRule {
            id: "also_incorporates",
            applies: |input| input.attributes.len() > 4,
            render: |input| {
                format!(
                    "The product also incorporates {}, adding extra value to your investment.",
                    input.attributes[4]
                )
            },
        },
        fixed("quality_build", |input| {
            format!(
                "Built with meticulous attention to detail, this {} ensures dependable operation across different scenarios.",
                input.product_type
            )
        }),
        fixed("design_fit", |_| {
            "Its thoughtful design accommodates both personal and professional requirements with equal effectiveness.".to_string()
        }),
        SentenceRule {
            id: "keywords_prioritized",
            applies: |input| !input.keywords.is_empty(),
            render: |input| {
                let end = input.keywords.len().min(2);
                format!(
                    "Essential aspects like {} have been prioritized in the development process.",
                    joined(&input.keywords[..end])
                )
            },
        },
        SentenceRule {
            id: "keyword_focus",
            applies: |input| input.keywords.len() > 2,
            render: |input| {
                format!(
                    "The focus on {} further enhances the overall user experience.",
                    input.keywords[2]
                )
            },
        },
        fixed("brand_commitment", |input| {
            format!(
                "{} maintains high standards throughout the manufacturing process, ensuring consistent quality.",
                input.brand
            )
        }),
        fixed("dedication", |_| {
            "This dedication to excellence translates into a product that meets and exceeds expectations.".to_string()
        }),
        fixed("usage", |_| {
            "Suitable for home, office, or on-the-go use, it adapts seamlessly to your lifestyle.".to_string()
        }),
        fixed("lasting_value", |_| {
            "The combination of practical features and durable construction provides lasting value.".to_string()
        }),
        fixed("optimized", |_| {
            "Every element has been optimized to deliver maximum benefit to users.".to_string()
        }),
        fixed("closing", |_| {
            "This product represents a smart investment for those seeking quality and reliability.".to_string()
        }),
    ]
});

/// Ids of the sentence rules that fire for `input`, in output order.
pub fn planned_sentences(input: &ProductInput) -> Vec<&'static str> {
    SENTENCE_RULES
        .iter()
        .filter(|rule| rule.applies(input))
        .map(|rule| rule.id)
        .collect()
}

/// Cut `text` to its first `max` words and end it on a period.
fn trim_to_words(text: &str, max: usize) -> String {
    let trimmed = text.split_whitespace().take(max).collect::<Vec<_>>().join(" ");
    if trimmed.ends_with('.') {
        return trimmed;
    }
    match trimmed.rsplit_once(' ') {
        Some((head, _)) => format!("{head}."),
        None => format!("{trimmed}."),
    }
}

/// Long-form description held to the configured word range.
pub struct DescriptionGenerator;

impl FieldGenerator for DescriptionGenerator {
    fn id(&self) -> &'static str {
        "description"
    }

    fn generate(&self, input: &ProductInput, ctx: &GeneratorContext<'_>) -> FieldOutput {
        let min = ctx.limits.description_min_words;
        let max = ctx.limits.description_max_words;
        let mut violations = ViolationLog::new();

        let sentences: Vec<String> = SENTENCE_RULES
            .iter()
            .filter(|rule| rule.applies(input))
            .map(|rule| rule.render(input))
            .collect();
        let mut description = sentences.join(" ");

        let count = word_count(&description);
        if count > max {
            description = trim_to_words(&description, max);
        } else if count < min {
            // Not padded; the fixed skeleton alone is expected to reach the minimum.
            violations.push(Violation::new(
                ContentField::Description,
                ViolationKind::WordCountBelowMinimum { count, min },
            ));
        }

        let description = enforce_policy(
            ctx.policy,
            ContentField::Description,
            description,
            &mut violations,
        );

        let count = word_count(&description);
        if count < min || count > max {
            violations.push(Violation::new(
                ContentField::Description,
                ViolationKind::WordCountOutOfRange { count, min, max },
            ));
        }

        FieldOutput {
            value: description,
            violations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_input_uses_only_fixed_sentences() {
        let input = ProductInput::new("Acme", "Lamp", "", "");
        assert_eq!(
            planned_sentences(&input),
            vec![
                "opening",
                "opening_design",
                "quality_build",
                "design_fit",
                "brand_commitment",
                "dedication",
                "usage",
                "lasting_value",
                "optimized",
                "closing",
            ]
        );
    }

    #[test]
    fn conditional_sentences_follow_attribute_and_keyword_counts() {
        let input = ProductInput::new("Acme", "Lamp", "a, b, c", "").with_keywords("k1, k2, k3");
        let planned = planned_sentences(&input);
        assert!(planned.contains(&"key_features"));
        assert!(planned.contains(&"additional_capabilities"));
        assert!(!planned.contains(&"also_incorporates"));
        assert!(planned.contains(&"keywords_prioritized"));
        assert!(planned.contains(&"keyword_focus"));
    }

    #[test]
    fn capabilities_sentence_uses_third_and_fourth_attributes() {
        let input = ProductInput::new("Acme", "Lamp", "a, b, c, d, e", "");
        let rule = SENTENCE_RULES
            .iter()
            .find(|rule| rule.id == "additional_capabilities")
            .expect("rule");
        assert_eq!(
            rule.render(&input),
            "Additional capabilities encompass c, d, enhancing overall versatility and user satisfaction."
        );
    }

    #[test]
    fn trim_drops_partial_clause() {
        assert_eq!(trim_to_words("one two. three four five", 4), "one two. three.");
        assert_eq!(trim_to_words("one two. three", 2), "one two.");
        assert_eq!(trim_to_words("single", 1), "single.");
    }
}
