//! Headless mode - JSON event output instead of the TUI
//!
//! Fetches the data for the start route once and prints the outcome to
//! stdout as NDJSON (newline-delimited JSON), one event per line. Each event
//! has an "event" field naming its type.
//!
//! # Example Output
//!
//! ```json
//! {"event":"page_loaded","page":1,"pages":42,"count":826,"characters":[...],"timestamp":1704700001000}
//! {"event":"request_failed","target":"/profile/9999","error":"Remote request failed: HTTP 404 Not Found","timestamp":1704700002000}
//! ```

pub mod runner;

use std::io::Write;

use chrono::Utc;
use serde::Serialize;
use tracing::error;

use rickdex_core::{Character, CharacterPage};

/// One row of a loaded page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterSummary {
    pub id: u32,
    pub name: String,
    pub species: String,
    pub status: String,
}

impl From<&Character> for CharacterSummary {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            species: character.species.clone(),
            status: character.status.label().to_string(),
        }
    }
}

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A page of the character list arrived
    PageLoaded {
        page: u32,
        pages: u32,
        count: u32,
        characters: Vec<CharacterSummary>,
        timestamp: i64,
    },

    /// A single character arrived
    CharacterLoaded {
        character: Box<Character>,
        timestamp: i64,
    },

    /// A fetch failed; `target` is the route whose data was requested
    RequestFailed {
        target: String,
        error: String,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as one NDJSON line, logging (not returning) failures
    pub fn write_to<W: Write>(&self, out: &mut W) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(out, "{}", json) {
            error!("Failed to write headless event: {}", e);
            return;
        }

        // Flush to ensure immediate output
        if let Err(e) = out.flush() {
            error!("Failed to flush headless output: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn page_loaded(page: u32, data: &CharacterPage) -> Self {
        Self::PageLoaded {
            page,
            pages: data.info.pages,
            count: data.info.count,
            characters: data.results.iter().map(CharacterSummary::from).collect(),
            timestamp: Self::now(),
        }
    }

    pub fn character_loaded(character: Character) -> Self {
        Self::CharacterLoaded {
            character: Box::new(character),
            timestamp: Self::now(),
        }
    }

    pub fn request_failed(target: impl Into<String>, error: impl Into<String>) -> Self {
        Self::RequestFailed {
            target: target.into(),
            error: error.into(),
            timestamp: Self::now(),
        }
    }
}
