use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutolinkError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No item with id '{0}' in the loaded set")]
    ItemNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type AutolinkResult<T> = Result<T, AutolinkError>;

/// Attaches a human-readable message when converting foreign errors or empty
/// options into [`AutolinkError`].
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AutolinkResult<T>;
    fn with_context<F>(self, f: F) -> AutolinkResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> AutolinkResult<T> {
        self.map_err(|e| AutolinkError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AutolinkResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AutolinkError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> AutolinkResult<T> {
        self.ok_or_else(|| AutolinkError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> AutolinkResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| AutolinkError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! autolink_error {
    ($error_type:ident, $msg:expr) => {
        AutolinkError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        AutolinkError::$error_type(format!($fmt, $($arg)*))
    };
}
