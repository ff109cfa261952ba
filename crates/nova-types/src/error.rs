pub type Result<T> = std::result::Result<T, DescriptorError>;

/// Errors produced while converting JVM descriptors into [`crate::Type`]s.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    #[error("invalid descriptor: {0}")]
    Invalid(String),

    #[error("descriptor has trailing input after a complete type: {0}")]
    TrailingInput(String),

    #[error("`void` is only valid as a method return type: {0}")]
    MisplacedVoid(String),
}
