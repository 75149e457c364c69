//! Template catalog infrastructure
//!
//! This module provides the registry that holds template descriptors, the
//! lint pass that checks template data, and the loader for templates written
//! as TOML blueprints.
//!
//! # Example
//!
//! ```rust
//! use site_composer::template::{lint, TemplateRegistry};
//! use site_composer::{catalog, IdGenerator};
//!
//! let registry = TemplateRegistry::from_templates(catalog::builtin_templates()).unwrap();
//! let ids = IdGenerator::new();
//!
//! assert!(registry.get("bistro").is_some());
//! assert!(lint::check_registry(&registry, &ids).is_empty());
//! ```

pub mod blueprint;
pub mod lint;
mod registry;

pub use blueprint::{Blueprint, BlueprintError};
pub use lint::{LintCategory, LintWarning};
pub use registry::{RegistryError, TemplateRegistry};
