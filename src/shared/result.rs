/// Type alias for Result with anyhow::Error as the error type.
/// Keeps error handling uniform across ports, adapters and use cases.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
