//! Identity scanner trait and outcomes.

mod scripted;

pub use scripted::ScriptedScanner;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a scanned id comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScanSource {
    /// Barcode or QR code read through the camera.
    Camera,

    /// Student card tapped on an NFC reader.
    Nfc,
}

impl std::fmt::Display for ScanSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanSource::Camera => write!(f, "camera"),
            ScanSource::Nfc => write!(f, "NFC"),
        }
    }
}

/// Why a scanner could not be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum UnavailableReason {
    #[error("this device has no supported scanner")]
    UnsupportedHardware,

    #[error("permission to use the scanner was denied")]
    PermissionDenied,
}

/// The single result of one scan request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A raw id string was read.
    Scanned(String),

    /// The shopper dismissed the scan.
    Cancelled,

    /// The scanner could not be started.
    Unavailable(UnavailableReason),

    /// The scanner started but failed.
    Failed(String),
}

impl ScanOutcome {
    /// Creates a Scanned outcome.
    pub fn scanned(raw: impl Into<String>) -> Self {
        ScanOutcome::Scanned(raw.into())
    }

    /// Creates a Failed outcome.
    pub fn failed(cause: impl Into<String>) -> Self {
        ScanOutcome::Failed(cause.into())
    }
}

/// A source of scanned student ids.
///
/// Each call to [`Scanner::scan`] yields exactly one outcome. Implementations
/// report faults as [`ScanOutcome::Failed`] rather than panicking.
#[async_trait]
pub trait Scanner: Send + Sync {
    /// The kind of hardware behind this scanner.
    fn source(&self) -> ScanSource;

    /// Waits for one scan outcome.
    async fn scan(&self) -> ScanOutcome;
}
