use serde::{Deserialize, Serialize};

/// Office site an employee checks in against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub id: u64,
    pub name: String,
    pub address: String,
    pub geofence: Geofence,
}

/// Circular geofence around a branch site. The backend validates
/// check-ins against it; the client only carries the shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geofence {
    pub center: GeoPoint,
    pub radius_m: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}
