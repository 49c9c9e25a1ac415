//! Configuration types for composition and execution.

use serde::{Deserialize, Serialize};

/// Options for the program combinators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeConfig {
    /// Reject malformed input programs before building anything
    pub validate_inputs: bool,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            validate_inputs: true,
        }
    }
}

/// Limits for the reference interpreter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Maximum number of statements executed before giving up
    pub max_steps: u64,
    /// Lower bound on the register file length
    pub min_registers: usize,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            max_steps: 1_000_000,
            min_registers: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let compose_config = ComposeConfig::default();
        assert!(compose_config.validate_inputs);

        let exec_config = ExecutionConfig::default();
        assert_eq!(exec_config.max_steps, 1_000_000);
        assert_eq!(exec_config.min_registers, 1);
    }

    #[test]
    fn test_execution_config_serialization() {
        let config = ExecutionConfig {
            max_steps: 42,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ExecutionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.max_steps, 42);
        assert_eq!(deserialized.min_registers, config.min_registers);
    }
}
