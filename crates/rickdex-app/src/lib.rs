//! rickdex-app - Application state and orchestration for rickdex
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management,
//! the Engine abstraction shared by the TUI and headless runners, routing between the
//! List and Detail views, and configuration loading.

pub mod actions;
pub mod config;
pub mod detail_view_state;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod list_view_state;
pub mod message;
pub mod process;
pub mod request;
pub mod route;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::Settings;
pub use detail_view_state::DetailViewState;
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use list_view_state::{ListFocus, ListViewState};
pub use message::Message;
pub use request::RequestId;
pub use route::{Navigator, Route};
pub use state::{AppPhase, AppState, Screen};

// Re-export API types for the TUI and binary
pub use rickdex_api::{ApiClient, CharacterSource};
