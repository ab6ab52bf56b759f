/// Music source display metadata
use serde::{Deserialize, Serialize};

/// Identity and presentation details of a music source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Stable identifier used by the registry (e.g. `spotify`)
    pub id: String,

    /// Human readable name
    pub name: String,

    /// Icon name for the UI
    pub icon: String,

    /// Brand color (hex)
    pub color: String,
}
