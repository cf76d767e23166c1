/// Result alias with `anyhow::Error`, used everywhere a caller only needs
/// to propagate or display the failure.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
