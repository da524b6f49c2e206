/// Configuration loading and wiring errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    #[error("unknown {component} provider: {name}")]
    UnknownProvider { component: String, name: String },

    #[error("missing setting {key}: {reason}")]
    MissingSetting { key: String, reason: String },

    #[error("environment variable {var} is not set")]
    MissingEnvVar { var: String },
}
