//! # rickdex-api - Remote API Client
//!
//! Talks to the Rick and Morty REST API and decodes its JSON into the typed
//! records of [`rickdex_core`].
//!
//! ## Public API
//!
//! - [`CharacterSource`] - Anything that can produce character pages and records
//! - [`ApiClient`] - `reqwest`-backed implementation against the public API
//! - [`endpoints`] - URL construction for the two endpoints
//!
//! Every failure (network, non-2xx status, malformed payload) surfaces as
//! [`rickdex_core::Error::RemoteRequest`].

pub mod client;
pub mod endpoints;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{ApiClient, CharacterSource, LocalCharacterSource, DEFAULT_BASE_URL};
pub use endpoints::{character_collection_url, character_url};
