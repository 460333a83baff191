use ntp_util::ResourceLocation;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io::Error as IoError,
};

/// Errors raised while building or writing resources
#[derive(Debug)]
pub enum DataGenError {
    StdIo(IoError),
    Json(serde_json::Error),
    /// A record referenced another record that had not been registered yet
    MissingReference {
        kind: &'static str,
        location: ResourceLocation,
    },
}

impl Display for DataGenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DataGenError::StdIo(error) => Display::fmt(error, f),
            DataGenError::Json(error) => Display::fmt(error, f),
            DataGenError::MissingReference { kind, location } =>
                write!(f, "Reference to unknown {} {}", kind, location),
        }
    }
}

impl Error for DataGenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DataGenError::StdIo(error) => Some(error),
            DataGenError::Json(error) => Some(error),
            _ => None,
        }
    }
}

impl From<IoError> for DataGenError {
    fn from(x: IoError) -> Self {
        DataGenError::StdIo(x)
    }
}

impl From<serde_json::Error> for DataGenError {
    fn from(x: serde_json::Error) -> Self {
        DataGenError::Json(x)
    }
}
