use listcraft_core::text::{char_len, ellipsize};
use listcraft_core::{ContentField, ProductInput, Violation, ViolationLog};

use super::{FieldGenerator, FieldOutput, GeneratorContext, enforce_policy};

/// `{brand} {product_type} | Shop Now`, shortened when over the limit.
pub struct MetaTitleGenerator;

impl FieldGenerator for MetaTitleGenerator {
    fn id(&self) -> &'static str {
        "meta_title"
    }

    fn generate(&self, input: &ProductInput, ctx: &GeneratorContext<'_>) -> FieldOutput {
        let max = ctx.limits.meta_title_max_chars;
        let mut violations = ViolationLog::new();

        let mut meta_title = format!("{} {} | Shop Now", input.brand, input.product_type);
        if char_len(&meta_title) > max {
            // The call to action is dropped before cutting into the name.
            let name = format!("{} {}", input.brand, input.product_type);
            meta_title = ellipsize(&name, max);
            violations.push(Violation::truncated(ContentField::MetaTitle, max));
        }

        let meta_title = enforce_policy(
            ctx.policy,
            ContentField::MetaTitle,
            meta_title,
            &mut violations,
        );

        FieldOutput {
            value: meta_title,
            violations,
        }
    }
}

/// Search snippet naming the first two attributes.
pub struct MetaDescriptionGenerator;

impl FieldGenerator for MetaDescriptionGenerator {
    fn id(&self) -> &'static str {
        "meta_description"
    }

    fn generate(&self, input: &ProductInput, ctx: &GeneratorContext<'_>) -> FieldOutput {
        let max = ctx.limits.meta_description_max_chars;
        let mut violations = ViolationLog::new();

        let key_attributes = if input.attributes.is_empty() {
            "quality features".to_string()
        } else {
            let end = input.attributes.len().min(2);
            input.attributes[..end].join(", ")
        };

        let mut meta_description = format!(
            "Shop {} {} with {key_attributes}. Great value and reliable performance for your needs.",
            input.brand, input.product_type
        );
        if char_len(&meta_description) > max {
            meta_description = ellipsize(&meta_description, max);
            violations.push(Violation::truncated(ContentField::MetaDescription, max));
        }

        let meta_description = enforce_policy(
            ctx.policy,
            ContentField::MetaDescription,
            meta_description,
            &mut violations,
        );

        FieldOutput {
            value: meta_description,
            violations,
        }
    }
}

#[cfg(test)]
mod tests {
    use listcraft_core::{BannedTermSet, ContentLimits, PolicyFilter, StripMode};

    use super::*;

    fn run(generator: &dyn FieldGenerator, input: &ProductInput) -> FieldOutput {
        let policy =
            PolicyFilter::new(BannedTermSet::default(), StripMode::SinglePass).expect("policy");
        let limits = ContentLimits::default();
        generator.generate(
            input,
            &GeneratorContext {
                policy: &policy,
                limits: &limits,
            },
        )
    }

    #[test]
    fn short_meta_title_keeps_call_to_action() {
        let input = ProductInput::new("Acme", "Lamp", "", "");
        let output = run(&MetaTitleGenerator, &input);
        assert_eq!(output.value, "Acme Lamp | Shop Now");
        assert!(output.violations.is_empty());
    }

    #[test]
    fn meta_description_falls_back_without_attributes() {
        let input = ProductInput::new("Acme", "Lamp", "", "");
        let output = run(&MetaDescriptionGenerator, &input);
        assert_eq!(
            output.value,
            "Shop Acme Lamp with quality features. Great value and reliable performance for your needs."
        );
    }

    #[test]
    fn meta_description_truncates_long_names() {
        let brand = "B".repeat(120);
        let input = ProductInput::new(brand, "Lamp", "Brass, Dimmable", "");
        let output = run(&MetaDescriptionGenerator, &input);
        assert_eq!(char_len(&output.value), 160);
        assert!(output.value.ends_with("..."));
        assert_eq!(
            output.violations.render(),
            "Meta description truncated to 160 chars"
        );
    }
}
