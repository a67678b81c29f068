//! Resource model matching the frontend Resource interface.

use serde::{Deserialize, Serialize};

/// A bookable room or asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub capacity: i32,
    /// Ordered equipment list, displayed as-is by the frontend.
    pub equipment: Vec<String>,
    /// Admin-controlled flag; reported to clients, never enforced.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}
