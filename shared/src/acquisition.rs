use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dashboard::Dashboard;
use crate::supply::Snapshot;

/// The only message shown to users when data could not be loaded.
pub const FAILURE_MESSAGE: &str = "Failed to fetch data. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AcquisitionError {
    #[error("could not build HTTP client: {0}")]
    Client(String),

    #[error("request to {endpoint} failed: {message}")]
    Request { endpoint: String, message: String },

    #[error("{endpoint} returned status {status}; body preview: {preview}")]
    Status {
        endpoint: String,
        status: u16,
        preview: String,
    },

    #[error("failed to decode {endpoint} payload: {message}")]
    Decode { endpoint: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AcquisitionState {
    Loading,
    Ready,
    Error,
}

/// Load lifecycle of one dashboard session.
///
/// Starts in `Loading` and moves exactly once, to `Ready` or `Failed`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Acquisition {
    #[default]
    Loading,
    Ready(Dashboard),
    Failed { message: String },
}

impl Acquisition {
    pub fn new() -> Self {
        Self::Loading
    }

    /// Applies the outcome of a supply pass. No-op unless still loading.
    pub fn resolve(self, outcome: Result<Snapshot, AcquisitionError>) -> Self {
        match self {
            Self::Loading => match outcome {
                Ok(snapshot) => Self::Ready(Dashboard::from_snapshot(snapshot)),
                Err(_) => Self::Failed {
                    message: FAILURE_MESSAGE.to_string(),
                },
            },
            settled => settled,
        }
    }

    pub fn state(&self) -> AcquisitionState {
        match self {
            Self::Loading => AcquisitionState::Loading,
            Self::Ready(_) => AcquisitionState::Ready,
            Self::Failed { .. } => AcquisitionState::Error,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        match self {
            Self::Ready(dashboard) => Some(dashboard),
            _ => None,
        }
    }

    pub fn dashboard_mut(&mut self) -> Option<&mut Dashboard> {
        match self {
            Self::Ready(dashboard) => Some(dashboard),
            _ => None,
        }
    }
}
