//! Core contracts for listcraft.
//!
//! This crate defines the marketplace content policy, the violation model,
//! product inputs and the limits shared by the generators and the CLI.

pub mod config;
pub mod error;
pub mod policy;
pub mod product;
pub mod text;
pub mod violation;

pub use config::{BatchConfig, ContentConfig, ContentLimits, MissingFieldPolicy, PolicyConfig};
pub use error::{Error, Result};
pub use policy::{BannedTermSet, DEFAULT_BANNED_TERMS, PolicyFilter, StripMode};
pub use product::ProductInput;
pub use violation::{ContentField, Violation, ViolationKind, ViolationLog};
