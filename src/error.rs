use std::fmt;

#[derive(Debug)]
pub enum NewsdeskError {
    ApiError { status: u16, message: String },
    NetworkError(reqwest::Error),
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    Other(String),
}

impl fmt::Display for NewsdeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewsdeskError::ApiError { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            NewsdeskError::NetworkError(e) => write!(f, "Network error: {}", e),
            NewsdeskError::IoError(e) => write!(f, "IO error: {}", e),
            NewsdeskError::JsonError(e) => write!(f, "JSON error: {}", e),
            NewsdeskError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for NewsdeskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NewsdeskError::NetworkError(e) => Some(e),
            NewsdeskError::IoError(e) => Some(e),
            NewsdeskError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for NewsdeskError {
    fn from(err: reqwest::Error) -> Self {
        NewsdeskError::NetworkError(err)
    }
}

impl From<std::io::Error> for NewsdeskError {
    fn from(err: std::io::Error) -> Self {
        NewsdeskError::IoError(err)
    }
}

impl From<serde_json::Error> for NewsdeskError {
    fn from(err: serde_json::Error) -> Self {
        NewsdeskError::JsonError(err)
    }
}

impl From<String> for NewsdeskError {
    fn from(msg: String) -> Self {
        NewsdeskError::Other(msg)
    }
}

impl From<&str> for NewsdeskError {
    fn from(msg: &str) -> Self {
        NewsdeskError::Other(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NewsdeskError>;
