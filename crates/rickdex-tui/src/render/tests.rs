//! Full-screen rendering tests driven through the TEA update function

use super::*;
use crate::test_utils::TestTerminal;
use rickdex_api::test_utils::{test_character, test_character_full, test_page};
use rickdex_app::handler::update;
use rickdex_app::{Message, Route, Settings, UpdateAction};
use rickdex_core::CharacterStatus;

/// Mount the start route and return the request id of its fetch
fn start(state: &mut AppState) -> rickdex_app::RequestId {
    match update(state, Message::Init).action {
        Some(UpdateAction::FetchPage { request, .. })
        | Some(UpdateAction::FetchCharacter { request, .. }) => request,
        None => panic!("mounting must fetch"),
    }
}

fn draw(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_page_one_scenario() {
    let mut state = AppState::default();
    let request = start(&mut state);
    update(
        &mut state,
        Message::PageLoaded {
            request,
            page: test_page(
                42,
                vec![test_character_full(
                    1,
                    "Rick Sanchez",
                    "Human",
                    CharacterStatus::Alive,
                )],
            ),
        },
    );

    let term = draw(&state);
    let rows = term.lines_containing("Rick Sanchez");
    assert_eq!(rows.len(), 1);
    assert!(rows[0].contains("Human"));
    assert!(rows[0].contains("Alive"));
    assert!(term.buffer_contains("Last (42)"));
}

#[test]
fn test_list_before_first_reply() {
    let mut state = AppState::default();
    start(&mut state);

    let term = draw(&state);
    assert!(term.buffer_contains("Loading..."));
    assert!(!term.buffer_contains("Last ("));
    assert!(!term.buffer_contains("First"));
}

#[test]
fn test_search_hides_non_matching_rows() {
    let mut state = AppState::default();
    let request = start(&mut state);
    update(
        &mut state,
        Message::PageLoaded {
            request,
            page: test_page(
                42,
                vec![
                    test_character(1, "Rick Sanchez"),
                    test_character(2, "Morty Smith"),
                ],
            ),
        },
    );
    update(
        &mut state,
        Message::SearchInput {
            text: "morty".to_string(),
        },
    );

    let term = draw(&state);
    assert!(term.buffer_contains("Morty Smith"));
    assert!(!term.buffer_contains("Rick Sanchez"));
}

#[test]
fn test_failed_detail_stays_on_loading() {
    let mut state = AppState::new(Route::Profile { id: 2 }, Settings::default());
    let request = start(&mut state);
    update(
        &mut state,
        Message::CharacterLoadFailed {
            request,
            id: 2,
            error: "connection refused".to_string(),
        },
    );

    // Ticks keep coming; the placeholder never goes away
    for _ in 0..5 {
        update(&mut state, Message::Tick);
    }

    let term = draw(&state);
    assert!(term.buffer_contains("Loading..."));
    assert!(term.buffer_contains("characters / #2"));
}

#[test]
fn test_loaded_profile_shows_origin_and_location() {
    let mut state = AppState::new(Route::Profile { id: 2 }, Settings::default());
    let request = start(&mut state);
    update(
        &mut state,
        Message::CharacterLoaded {
            request,
            character: Box::new(test_character(2, "Morty Smith")),
        },
    );

    let term = draw(&state);
    assert!(term.buffer_contains("Morty Smith"));
    assert!(term.buffer_contains("Earth (C-137)"));
    assert!(term.buffer_contains("Citadel of Ricks"));
    assert!(!term.buffer_contains("Loading..."));
}

#[test]
fn test_hidden_image_url_setting() {
    let mut settings = Settings::default();
    settings.ui.show_image_url = false;
    let mut state = AppState::new(Route::Profile { id: 2 }, settings);
    let request = start(&mut state);
    update(
        &mut state,
        Message::CharacterLoaded {
            request,
            character: Box::new(test_character(2, "Morty Smith")),
        },
    );

    let term = draw(&state);
    assert!(!term.buffer_contains("avatar/2.jpeg"));
}

#[test]
fn test_list_image_column_follows_setting() {
    for show in [true, false] {
        let mut settings = Settings::default();
        settings.ui.show_image_url = show;
        let mut state = AppState::new(Route::List, settings);
        let request = start(&mut state);
        update(
            &mut state,
            Message::PageLoaded {
                request,
                page: test_page(42, vec![test_character(1, "Rick Sanchez")]),
            },
        );

        let mut term = TestTerminal::with_size(160, 24);
        term.draw_with(|frame| view(frame, &state));
        assert_eq!(term.buffer_contains("avatar/1.jpeg"), show);
    }
}
