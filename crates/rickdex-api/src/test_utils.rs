//! Test utilities for API consumers
//!
//! Provides fixture builders for characters and pages, a scripted
//! [`FakeSource`] implementing [`CharacterSource`], and a minimal local HTTP
//! stub for exercising [`crate::ApiClient`] end to end.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rickdex_core::prelude::*;
use rickdex_core::{Character, CharacterPage, CharacterStatus, LocationRef, PageInfo};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use crate::client::CharacterSource;

// ─────────────────────────────────────────────────────────────────
// Fixtures
// ─────────────────────────────────────────────────────────────────

/// Creates a test character with human/alive defaults.
///
/// # Arguments
/// * `id` - Character id
/// * `name` - Display name
pub fn test_character(id: u32, name: &str) -> Character {
    test_character_full(id, name, "Human", CharacterStatus::Alive)
}

/// Creates a test character with species and status specified.
pub fn test_character_full(
    id: u32,
    name: &str,
    species: &str,
    status: CharacterStatus,
) -> Character {
    Character {
        id,
        name: name.to_string(),
        status,
        species: species.to_string(),
        kind: String::new(),
        gender: "Male".to_string(),
        origin: LocationRef {
            name: "Earth (C-137)".to_string(),
            url: "https://rickandmortyapi.com/api/location/1".to_string(),
        },
        location: LocationRef {
            name: "Citadel of Ricks".to_string(),
            url: "https://rickandmortyapi.com/api/location/3".to_string(),
        },
        image: format!("https://rickandmortyapi.com/api/character/avatar/{}.jpeg", id),
        episode: Vec::new(),
        url: format!("https://rickandmortyapi.com/api/character/{}", id),
        created: None,
    }
}

/// Creates a page with the given total page count and results.
pub fn test_page(pages: u32, results: Vec<Character>) -> CharacterPage {
    CharacterPage {
        info: PageInfo {
            count: results.len() as u32,
            pages,
            next: None,
            prev: None,
        },
        results,
    }
}

// ─────────────────────────────────────────────────────────────────
// Scripted source
// ─────────────────────────────────────────────────────────────────

/// One call observed by [`FakeSource`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchCall {
    Page(u32),
    Character(u32),
}

/// In-memory [`CharacterSource`] with scripted replies.
///
/// Pages and characters that were not scripted fail with
/// [`Error::RemoteRequest`], which is how tests simulate network errors.
#[derive(Debug, Default)]
pub struct FakeSource {
    pages: HashMap<u32, CharacterPage>,
    characters: HashMap<u32, Character>,
    calls: Mutex<Vec<FetchCall>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32, data: CharacterPage) -> Self {
        self.pages.insert(page, data);
        self
    }

    pub fn with_character(mut self, character: Character) -> Self {
        self.characters.insert(character.id, character);
        self
    }

    /// Every fetch made so far, in call order
    pub fn calls(&self) -> Vec<FetchCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn record(&self, call: FetchCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl CharacterSource for FakeSource {
    async fn fetch_page(&self, page: u32) -> Result<CharacterPage> {
        self.record(FetchCall::Page(page));
        self.pages
            .get(&page)
            .cloned()
            .ok_or_else(|| Error::remote(format!("no scripted page {}", page)))
    }

    async fn fetch_character(&self, id: u32) -> Result<Character> {
        self.record(FetchCall::Character(id));
        self.characters
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::remote(format!("no scripted character {}", id)))
    }
}

// ─────────────────────────────────────────────────────────────────
// Local HTTP stub
// ─────────────────────────────────────────────────────────────────

/// Canned HTTP response served by [`spawn_stub_server`]
#[derive(Debug, Clone)]
pub struct StubResponse {
    status: u16,
    body: String,
}

impl StubResponse {
    pub fn ok(body: &str) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    fn to_http(&self) -> String {
        let reason = match self.status {
            200 => "OK",
            404 => "Not Found",
            500 => "Internal Server Error",
            _ => "Status",
        };
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status,
            reason,
            self.body.len(),
            self.body
        )
    }
}

/// Serve `responses` in order on a random local port.
///
/// Returns the API base URL (`http://127.0.0.1:PORT/api`) and the list of
/// request targets (path + query) received so far. Once the scripted
/// responses run out every further request gets a 500.
pub async fn spawn_stub_server(responses: Vec<StubResponse>) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub server");
    let addr = listener
        .local_addr()
        .expect("Failed to read stub server address");

    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = requests.clone();

    tokio::spawn(async move {
        let mut responses = responses.into_iter();
        while let Ok((mut stream, _)) = listener.accept().await {
            let target = read_request_target(&mut stream).await;
            if let Ok(mut seen) = seen.lock() {
                seen.push(target);
            }
            let response = responses
                .next()
                .unwrap_or_else(|| StubResponse::status(500, "{}"));
            let _ = stream.write_all(response.to_http().as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    (format!("http://{}/api", addr), requests)
}

/// Read the request head and return the target from the request line
async fn read_request_target(stream: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                head.extend_from_slice(&chunk[..n]);
                if head.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
        }
    }

    String::from_utf8_lossy(&head)
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or_default()
        .to_string()
}
