//! Render fingerprinting — deterministic identity for a render call.
//!
//! Because `chart::synthesize` is deterministic and composition is a pure
//! function of (signal, theme, series), the hash of the canonical signal
//! JSON identifies the produced document exactly. Callers can use it as a
//! cache key or to dedupe repeated renders of the same feed record.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::SignalData;

/// Blake3 hash of the canonical JSON form of a signal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderFingerprint(String);

impl RenderFingerprint {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(blake3::hash(bytes).to_hex().to_string())
    }

    /// First 12 hex chars, for file names and log lines.
    pub fn short(&self) -> &str {
        &self.0[..12]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RenderFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fingerprint of one signal record.
///
/// Serde struct serialization has a fixed field order, so the JSON is
/// canonical and the hash deterministic.
pub fn fingerprint(signal: &SignalData) -> RenderFingerprint {
    let json = serde_json::to_string(signal).expect("SignalData must serialize");
    RenderFingerprint::from_bytes(json.as_bytes())
}
