//! Crate-level error type

use thiserror::Error;

use crate::config::ConfigError;
use crate::template::{BlueprintError, RegistryError};

/// Any failure while assembling the engine
///
/// Unknown template ids and unsupported languages are not errors; those
/// lookups return `None`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("blueprint error: {0}")]
    Blueprint(#[from] BlueprintError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_converts() {
        let err: Error = RegistryError::Duplicate { id: "bistro".into() }.into();
        assert!(matches!(err, Error::Registry(_)));
        assert_eq!(err.to_string(), "registry error: duplicate template id: bistro");
    }

    #[test]
    fn test_blueprint_error_message() {
        let err: Error = BlueprintError::NoPages { id: "empty".into() }.into();
        assert_eq!(err.to_string(), "blueprint error: template empty defines no pages");
    }
}
