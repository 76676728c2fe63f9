use std::fmt;

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalPhoto {
    pub url: String,
    pub provider: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    AnimalFetched {
        request_id: RequestId,
        result: Result<AnimalPhoto, FetchError>,
    },
    SurpriseFetched {
        request_id: RequestId,
        result: Result<AnimalPhoto, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// True when strict validation ran out of attempts rather than the
    /// request itself failing.
    pub fn is_retry_exhausted(&self) -> bool {
        matches!(self.kind, FailureKind::RetryExhausted { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
    InvalidJson,
    MissingImageUrl { provider: String },
    UnknownProvider { name: String },
    RetryExhausted { attempts: u32 },
    /// The engine worker is not running; the command never reached it.
    EngineUnavailable,
    /// The task serving a command panicked before reporting.
    TaskFailed,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Network => write!(f, "network error"),
            FailureKind::InvalidJson => write!(f, "invalid json"),
            FailureKind::MissingImageUrl { provider } => {
                write!(f, "no image url in {provider} response")
            }
            FailureKind::UnknownProvider { name } => write!(f, "unknown provider {name}"),
            FailureKind::RetryExhausted { attempts } => {
                write!(f, "no valid image after {attempts} attempts")
            }
            FailureKind::EngineUnavailable => write!(f, "fetch engine unavailable"),
            FailureKind::TaskFailed => write!(f, "fetch task failed"),
        }
    }
}
