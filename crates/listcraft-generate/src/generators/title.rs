use listcraft_core::text::char_len;
use listcraft_core::{ContentField, ProductInput, ViolationLog};

use super::{FieldGenerator, FieldOutput, GeneratorContext, enforce_policy};

/// Brand, product type and the leading attributes that fit the title limit.
pub struct TitleGenerator;

impl FieldGenerator for TitleGenerator {
    fn id(&self) -> &'static str {
        "title"
    }

    fn generate(&self, input: &ProductInput, ctx: &GeneratorContext<'_>) -> FieldOutput {
        let mut violations = ViolationLog::new();
        let mut parts: Vec<&str> = vec![input.brand.as_str()];
        if !input.product_type.is_empty() {
            parts.push(input.product_type.as_str());
        }

        let mut length = parts.iter().map(|part| char_len(part)).sum::<usize>() + parts.len() - 1;
        // Each candidate is checked on its own; a skipped attribute does not stop later ones.
        for attribute in input.attributes.iter().take(ctx.limits.title_attributes) {
            let candidate = length + 1 + char_len(attribute);
            if candidate <= ctx.limits.title_max_chars {
                parts.push(attribute);
                length = candidate;
            }
        }

        let title = enforce_policy(
            ctx.policy,
            ContentField::Title,
            parts.join(" "),
            &mut violations,
        );

        FieldOutput {
            value: title,
            violations,
        }
    }
}

#[cfg(test)]
mod tests {
    use listcraft_core::{BannedTermSet, ContentLimits, PolicyFilter, StripMode};

    use super::*;

    fn run(input: &ProductInput) -> FieldOutput {
        let policy =
            PolicyFilter::new(BannedTermSet::default(), StripMode::SinglePass).expect("policy");
        let limits = ContentLimits::default();
        TitleGenerator.generate(
            input,
            &GeneratorContext {
                policy: &policy,
                limits: &limits,
            },
        )
    }

    #[test]
    fn joins_brand_type_and_first_three_attributes() {
        let input = ProductInput::new("Acme", "Desk Lamp", "Brass, Dimmable, LED, USB", "");
        let output = run(&input);
        assert_eq!(output.value, "Acme Desk Lamp Brass Dimmable LED");
        assert!(output.violations.is_empty());
    }

    #[test]
    fn skips_empty_product_type() {
        let input = ProductInput::new("Acme", "", "Brass", "");
        assert_eq!(run(&input).value, "Acme Brass");
    }

    #[test]
    fn skips_only_attributes_that_overflow() {
        let long = "x".repeat(141);
        let input = ProductInput::new("Acme", "Lamp", &format!("{long}, Brass"), "");
        let output = run(&input);
        assert_eq!(output.value, "Acme Lamp Brass");
    }

    #[test]
    fn accepts_attribute_landing_exactly_on_limit() {
        let long = "x".repeat(140);
        let input = ProductInput::new("Acme", "Lamp", &format!("{long}, Brass"), "");
        let output = run(&input);
        assert_eq!(output.value, format!("Acme Lamp {long}"));
        assert_eq!(char_len(&output.value), 150);
    }

    #[test]
    fn strips_banned_words_and_reports_them() {
        let input = ProductInput::new("Acme", "Premium Lamp", "UV Resistant", "");
        let output = run(&input);
        assert_eq!(output.value, "Acme Lamp Resistant");
        assert_eq!(
            output.violations.render(),
            "Title had banned words: uv, premium"
        );
    }
}
