use listcraft_core::text::{char_len, ellipsize};
use listcraft_core::{ContentField, ProductInput, Violation, ViolationLog};

use super::{FieldGenerator, FieldOutput, GeneratorContext, enforce_policy};

/// What fills the variable part of a bullet template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletSlot {
    /// `{brand} {product_type}`; consumes no attribute.
    Headline,
    /// The attribute at `index`, or `fallback` when the product has fewer attributes.
    Attribute {
        index: usize,
        fallback: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletTemplate {
    pub prefix: &'static str,
    pub slot: BulletSlot,
    pub suffix: &'static str,
}

impl BulletTemplate {
    pub fn render(&self, input: &ProductInput) -> String {
        let filler = match self.slot {
            BulletSlot::Headline => format!("{} {}", input.brand, input.product_type),
            BulletSlot::Attribute { index, fallback } => {
                input.attribute(index).unwrap_or(fallback).to_string()
            }
        };
        format!("{}{filler}{}", self.prefix, self.suffix)
    }
}

const fn attribute(
    prefix: &'static str,
    index: usize,
    fallback: &'static str,
    suffix: &'static str,
) -> BulletTemplate {
    BulletTemplate {
        prefix,
        slot: BulletSlot::Attribute { index, fallback },
        suffix,
    }
}

/// The eight bullets, in output order.
pub const BULLET_TEMPLATES: [BulletTemplate; 8] = [
    BulletTemplate {
        prefix: "",
        slot: BulletSlot::Headline,
        suffix: " designed for quality and reliability",
    },
    attribute("Features ", 0, "durable construction", ""),
    attribute("", 1, "Easy to use", " design"),
    attribute("Suitable for ", 2, "everyday use", ""),
    attribute("", 3, "Versatile", " functionality"),
    attribute("Includes ", 4, "essential features", ""),
    attribute("", 5, "Built to last", ""),
    attribute("Ideal for ", 6, "home or office", ""),
];

/// Eight HTML list items, each within the bullet length limit.
pub struct BulletGenerator;

impl FieldGenerator for BulletGenerator {
    fn id(&self) -> &'static str {
        "bullets"
    }

    fn generate(&self, input: &ProductInput, ctx: &GeneratorContext<'_>) -> FieldOutput {
        let max = ctx.limits.bullet_max_chars;
        let mut violations = ViolationLog::new();
        let mut items = Vec::with_capacity(BULLET_TEMPLATES.len());

        for (index, template) in BULLET_TEMPLATES.iter().enumerate() {
            let field = ContentField::Bullet(index + 1);
            let mut bullet = template.render(input);

            if let Some(keyword) = input.keyword(index) {
                let extended = format!("{bullet} with {keyword}");
                if char_len(&extended) <= max {
                    bullet = extended;
                }
            }

            // Truncate first, clean second; cleaning may shorten but never regrows.
            if char_len(&bullet) > max {
                bullet = ellipsize(&bullet, max);
                violations.push(Violation::truncated(field, max));
            }

            let bullet = enforce_policy(ctx.policy, field, bullet, &mut violations);
            items.push(format!("<li>{bullet}</li>"));
        }

        FieldOutput {
            value: format!("<ul>\n{}\n</ul>", items.join("\n")),
            violations,
        }
    }
}
