//! Dialog capability flags advertised per resource type.

use serde::{Deserialize, Serialize};

/// Which property dialogs the UI offers for a resource type.
///
/// Every flag defaults to true; a type opts out of individual dialogs.
/// The flags are independent: no combination is checked or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogSupport {
    /// Availability/release scheduling dialog.
    #[serde(default = "default_true")]
    pub availability: bool,
    /// Description field on the properties page.
    #[serde(default = "default_true")]
    pub description: bool,
    /// Group-access dialog.
    #[serde(default = "default_true")]
    pub groups: bool,
    /// Change-notification dialog.
    #[serde(default = "default_true")]
    pub notification: bool,
    /// Optional-properties dialog.
    #[serde(default = "default_true")]
    pub optional_properties: bool,
    /// Public-access dialog.
    #[serde(default = "default_true")]
    pub public: bool,
    /// Copyright/rights dialog.
    #[serde(default = "default_true")]
    pub rights: bool,
}

impl Default for DialogSupport {
    fn default() -> Self {
        Self {
            availability: true,
            description: true,
            groups: true,
            notification: true,
            optional_properties: true,
            public: true,
            rights: true,
        }
    }
}

fn default_true() -> bool {
    true
}
