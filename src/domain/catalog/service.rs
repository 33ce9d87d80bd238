//! Nearby service reference records (gyms, food outlets).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ServiceId;

/// A nearby gym or food outlet, looked up only when a plan detail panel is
/// expanded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyService {
    pub id: ServiceId,
    pub name: String,
    /// Distance text, e.g. "0.8 miles".
    pub distance: String,
    pub rating: f64,
    pub address: String,
}
