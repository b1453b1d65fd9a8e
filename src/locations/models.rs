use crate::difficulty::Difficulty;
use crate::geo::models::LatLng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    pub info: String,
    pub image_url: String,
    pub coordinates: LatLng,
    /// Only ever set for [`Difficulty::Easy`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub difficulty: Difficulty,
}

/// One line of the locations catalog.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub id: Option<String>,
    pub name: String,
    pub info: String,
    pub image_url: String,
    pub coordinates: LatLng,
    pub hint: Option<String>,
    pub difficulty: Difficulty,
}

impl LocationRecord {
    /// `None` if the coordinates are out of range.
    pub fn into_location(self) -> Option<Location> {
        if !self.coordinates.is_valid() {
            return None;
        }
        let hint = self
            .hint
            .filter(|hint| self.difficulty.has_hints() && !hint.trim().is_empty());
        Some(Location {
            id: self
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            name: self.name,
            info: self.info,
            image_url: self.image_url,
            coordinates: self.coordinates,
            hint,
            difficulty: self.difficulty,
        })
    }
}
