use tracing::debug;

use listcraft_core::{ContentConfig, ContentLimits, PolicyFilter, ProductInput, ViolationLog};

use crate::errors::BatchError;
use crate::generators::{
    BulletGenerator, DescriptionGenerator, FieldGenerator, FieldOutput, GeneratorContext,
    MetaDescriptionGenerator, MetaTitleGenerator, TitleGenerator,
};
use crate::model::GeneratedContent;

/// Generates every listing field for a product under one content policy.
#[derive(Debug, Clone)]
pub struct ContentGenerator {
    policy: PolicyFilter,
    limits: ContentLimits,
}

impl ContentGenerator {
    pub fn new(policy: PolicyFilter, limits: ContentLimits) -> Result<Self, BatchError> {
        limits.validate()?;
        Ok(Self { policy, limits })
    }

    pub fn from_config(config: &ContentConfig) -> Result<Self, BatchError> {
        Self::new(config.policy.build_filter()?, config.limits.clone())
    }

    pub fn policy(&self) -> &PolicyFilter {
        &self.policy
    }

    pub fn limits(&self) -> &ContentLimits {
        &self.limits
    }

    pub fn generate_title(&self, input: &ProductInput) -> FieldOutput {
        self.run(&TitleGenerator, input)
    }

    pub fn generate_bullets(&self, input: &ProductInput) -> FieldOutput {
        self.run(&BulletGenerator, input)
    }

    pub fn generate_description(&self, input: &ProductInput) -> FieldOutput {
        self.run(&DescriptionGenerator, input)
    }

    pub fn generate_meta_title(&self, input: &ProductInput) -> FieldOutput {
        self.run(&MetaTitleGenerator, input)
    }

    pub fn generate_meta_description(&self, input: &ProductInput) -> FieldOutput {
        self.run(&MetaDescriptionGenerator, input)
    }

    /// All five fields; violations follow field order.
    pub fn generate(&self, input: &ProductInput) -> GeneratedContent {
        let mut violations = ViolationLog::new();
        let mut take = |output: FieldOutput| {
            violations.extend(output.violations);
            output.value
        };

        let walmart_title = take(self.generate_title(input));
        let html_bullets = take(self.generate_bullets(input));
        let new_description = take(self.generate_description(input));
        let meta_title = take(self.generate_meta_title(input));
        let meta_description = take(self.generate_meta_description(input));

        GeneratedContent {
            walmart_title,
            html_bullets,
            new_description,
            meta_title,
            meta_description,
            violations,
        }
    }

    fn run(&self, generator: &dyn FieldGenerator, input: &ProductInput) -> FieldOutput {
        let ctx = GeneratorContext {
            policy: &self.policy,
            limits: &self.limits,
        };
        let output = generator.generate(input, &ctx);
        if !output.violations.is_empty() {
            debug!(
                generator = generator.id(),
                violations = output.violations.len(),
                "field corrected"
            );
        }
        output
    }
}
