mod app_error;

pub use app_error::AppError;

/// Result alias used by handlers and queries alike.
pub type Result<T, E = AppError> = std::result::Result<T, E>;
