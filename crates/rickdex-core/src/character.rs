//! Character domain types
//!
//! Mirrors the JSON shape of `GET /character/{id}`. Decoding into these
//! structs happens at the API boundary so the rest of the workspace never
//! touches an untyped `serde_json::Value`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Life status as reported by the API.
///
/// The API sends `"Alive"`, `"Dead"` and lowercase `"unknown"`. Anything else
/// decodes as [`CharacterStatus::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum CharacterStatus {
    Alive,
    Dead,
    #[default]
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl CharacterStatus {
    /// Display label, identical to the wire text.
    pub fn label(&self) -> &'static str {
        match self {
            CharacterStatus::Alive => "Alive",
            CharacterStatus::Dead => "Dead",
            CharacterStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Named link to another API resource (origin or last known location)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocationRef {
    pub name: String,
    /// Empty when the API has no resource for this location
    #[serde(default)]
    pub url: String,
}

/// A single character record
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub status: CharacterStatus,
    pub species: String,

    /// Subspecies or variant; frequently empty
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub gender: String,

    #[serde(default)]
    pub origin: LocationRef,

    #[serde(default)]
    pub location: LocationRef,

    /// Avatar URL (300x300 jpeg)
    pub image: String,

    /// Episode resource URLs this character appears in
    #[serde(default)]
    pub episode: Vec<String>,

    /// Canonical resource URL of this character
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

impl Character {
    /// Case-insensitive substring match on the name.
    ///
    /// An empty query matches everything.
    pub fn matches_name(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Type text for display, `-` when the API left it blank
    pub fn type_label(&self) -> &str {
        if self.kind.is_empty() {
            "-"
        } else {
            &self.kind
        }
    }

    pub fn episode_count(&self) -> usize {
        self.episode.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RICK_JSON: &str = r#"{
        "id": 1,
        "name": "Rick Sanchez",
        "status": "Alive",
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": {"name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1"},
        "location": {"name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3"},
        "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
        "episode": [
            "https://rickandmortyapi.com/api/episode/1",
            "https://rickandmortyapi.com/api/episode/2"
        ],
        "url": "https://rickandmortyapi.com/api/character/1",
        "created": "2017-11-04T18:48:46.250Z"
    }"#;

    fn character(name: &str) -> Character {
        Character {
            id: 1,
            name: name.to_string(),
            status: CharacterStatus::Alive,
            species: "Human".to_string(),
            kind: String::new(),
            gender: "Male".to_string(),
            origin: LocationRef::default(),
            location: LocationRef::default(),
            image: String::new(),
            episode: Vec::new(),
            url: String::new(),
            created: None,
        }
    }

    #[test]
    fn test_decode_full_record() {
        let rick: Character = serde_json::from_str(RICK_JSON).unwrap();
        assert_eq!(rick.id, 1);
        assert_eq!(rick.name, "Rick Sanchez");
        assert_eq!(rick.status, CharacterStatus::Alive);
        assert_eq!(rick.origin.name, "Earth (C-137)");
        assert_eq!(rick.location.name, "Citadel of Ricks");
        assert_eq!(rick.episode_count(), 2);
        assert!(rick.created.is_some());
    }

    #[test]
    fn test_decode_minimal_record_uses_defaults() {
        let json = r#"{"id": 7, "name": "Abradolf Lincler", "status": "unknown",
                       "species": "Human", "image": "x.jpeg"}"#;
        let c: Character = serde_json::from_str(json).unwrap();
        assert_eq!(c.status, CharacterStatus::Unknown);
        assert!(c.kind.is_empty());
        assert!(c.origin.name.is_empty());
        assert!(c.created.is_none());
    }

    #[test]
    fn test_decode_missing_required_field_fails() {
        let json = r#"{"id": 7, "status": "Alive", "species": "Human", "image": ""}"#;
        assert!(serde_json::from_str::<Character>(json).is_err());
    }

    #[test]
    fn test_status_unrecognised_value_is_unknown() {
        let status: CharacterStatus = serde_json::from_str(r#""Missing""#).unwrap();
        assert_eq!(status, CharacterStatus::Unknown);
    }

    #[test]
    fn test_status_labels_match_wire_text() {
        assert_eq!(CharacterStatus::Alive.to_string(), "Alive");
        assert_eq!(CharacterStatus::Dead.to_string(), "Dead");
        assert_eq!(CharacterStatus::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_matches_name_is_case_insensitive() {
        let morty = character("Morty Smith");
        assert!(morty.matches_name("morty"));
        assert!(morty.matches_name("SMITH"));
        assert!(morty.matches_name("ty sm"));
        assert!(!morty.matches_name("rick"));
    }

    #[test]
    fn test_matches_name_empty_query_matches() {
        assert!(character("Birdperson").matches_name(""));
    }

    #[test]
    fn test_type_label_placeholder_when_empty() {
        let mut c = character("Squanchy");
        assert_eq!(c.type_label(), "-");
        c.kind = "Cat-Person".to_string();
        assert_eq!(c.type_label(), "Cat-Person");
    }
}
