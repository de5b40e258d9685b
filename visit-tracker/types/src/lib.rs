//! Shared wire types for the visit tracker service and its JSON clients.

use serde::{Deserialize, Serialize};

// =====================================================
// Domain Types
// =====================================================

/// A random map pin recorded for one visit.
///
/// Field order matters: markers are stored as JSON text and the serialized
/// form is what `/api/locations` hands back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationMarker {
    /// Latitude in degrees, 4 decimal places
    pub lat: f64,
    /// Longitude in degrees, 4 decimal places
    pub lng: f64,
    /// UTC ISO-8601 timestamp with a trailing `Z`
    pub ts: String,
    /// "Visit #<counter value at creation>"
    pub note: String,
}

// =====================================================
// API Response Types
// =====================================================

/// Body of `GET /api/visits`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitsResponse {
    pub visits: i64,
}

/// Body of `GET /api/locations`, newest entry first.
///
/// Entries are the stored JSON values as written, so an entry need not be a
/// complete [`LocationMarker`]. Use [`LocationsResponse::markers`] for the
/// typed view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationsResponse {
    pub locations: Vec<serde_json::Value>,
}

impl LocationsResponse {
    /// Entries that decode as a full marker, in list order.
    pub fn markers(&self) -> Vec<LocationMarker> {
        self.locations
            .iter()
            .filter_map(|v| LocationMarker::deserialize(v).ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_json_field_order() {
        let marker = LocationMarker {
            lat: 12.3456,
            lng: -120.5,
            ts: "2025-01-02T03:04:05.000006Z".to_string(),
            note: "Visit #7".to_string(),
        };
        let json = serde_json::to_string(&marker).unwrap();
        assert_eq!(
            json,
            r#"{"lat":12.3456,"lng":-120.5,"ts":"2025-01-02T03:04:05.000006Z","note":"Visit #7"}"#
        );
    }

    #[test]
    fn test_marker_accepts_integral_coordinates() {
        // Entries written by other clients may carry plain integers.
        let marker: LocationMarker =
            serde_json::from_str(r#"{"lat":10,"lng":-20,"ts":"t","note":"Visit #1"}"#).unwrap();
        assert_eq!(marker.lat, 10.0);
        assert_eq!(marker.lng, -20.0);
    }

    #[test]
    fn test_markers_view_skips_partial_entries() {
        let resp: LocationsResponse = serde_json::from_str(
            r#"{"locations":[{"lat":1.5,"lng":2.5,"ts":"t","note":"Visit #2"},{"lat":3.5},7]}"#,
        )
        .unwrap();
        assert_eq!(resp.locations.len(), 3);
        let markers = resp.markers();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].note, "Visit #2");
    }

    #[test]
    fn test_marker_rejects_missing_fields() {
        assert!(serde_json::from_str::<LocationMarker>(r#"{"lat":1.0,"lng":2.0}"#).is_err());
    }
}
