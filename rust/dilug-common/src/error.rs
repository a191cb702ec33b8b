use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

pub type StdErrorBoxed = Box<dyn std::error::Error + Send + Sync + 'static>;

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_pattern(message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidPattern {
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_skip_range(min_skip: i32, max_skip: i32, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidSkipRange {
                min_skip,
                max_skip,
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn sink_io(context: impl Into<String>, source: std::io::Error) -> Error {
        Error(
            ErrorKind::SinkIo {
                context: context.into(),
                source,
            }
            .into(),
        )
    }

    pub fn index_not_loaded() -> Error {
        Error(ErrorKind::IndexNotLoaded.into())
    }

    pub fn index_load(reason: impl Into<String>) -> Error {
        Error(
            ErrorKind::IndexLoad {
                reason: reason.into(),
            }
            .into(),
        )
    }

    pub fn worker_stopped() -> Error {
        Error(ErrorKind::WorkerStopped.into())
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_format(element: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidFormat {
                element: element.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Error {
        Error(
            ErrorKind::Io {
                context: context.into(),
                source,
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid pattern: {message}")]
    InvalidPattern { message: String },

    #[error("invalid skip range [{min_skip}, {max_skip}]: {message}")]
    InvalidSkipRange {
        min_skip: i32,
        max_skip: i32,
        message: String,
    },

    #[error("sink failure while {context}: {source}")]
    SinkIo {
        context: String,
        source: std::io::Error,
    },

    #[error("occurrence index is not loaded")]
    IndexNotLoaded,

    #[error("failed to load occurrence index: {reason}")]
    IndexLoad { reason: String },

    #[error("scan worker is stopped")]
    WorkerStopped,

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("invalid format for '{element}': {message}")]
    InvalidFormat { element: String, message: String },

    #[error("IO error for '{context}': {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::io("", e)
    }
}

impl From<std::convert::Infallible> for Error {
    fn from(_: std::convert::Infallible) -> Self {
        Error::invalid_arg("conversion", "infallible")
    }
}
