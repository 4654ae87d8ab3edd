//! Detail View state: one character, or "not yet loaded"

use rickdex_core::Character;

use crate::request::RequestId;

/// State of the profile screen for a single character id
#[derive(Debug, Clone)]
pub struct DetailViewState {
    /// Id bound from the route
    pub id: u32,
    /// `None` until the record arrives; stays `None` forever on failure
    pub character: Option<Character>,
    pub pending: Option<RequestId>,
}

impl DetailViewState {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            character: None,
            pending: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.character.is_none()
    }

    pub fn begin_request(&mut self, request: RequestId) {
        self.pending = Some(request);
    }

    /// Returns `false` if the reply is stale or for another id
    pub fn apply_character(&mut self, request: RequestId, character: Character) -> bool {
        if self.pending != Some(request) || character.id != self.id {
            return false;
        }
        self.pending = None;
        self.character = Some(character);
        true
    }

    /// Failure leaves the view loading; only the pending marker is cleared
    pub fn fail_request(&mut self, request: RequestId) -> bool {
        if self.pending != Some(request) {
            return false;
        }
        self.pending = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequestCounter;
    use rickdex_api::test_utils::test_character;

    #[test]
    fn test_loading_until_character_arrives() {
        let mut counter = RequestCounter::new();
        let mut state = DetailViewState::new(2);
        let request = counter.next_id();
        state.begin_request(request);
        assert!(state.is_loading());

        assert!(state.apply_character(request, test_character(2, "Morty Smith")));
        assert!(!state.is_loading());
        assert_eq!(state.character.as_ref().unwrap().name, "Morty Smith");
    }

    #[test]
    fn test_failure_stays_loading() {
        let mut counter = RequestCounter::new();
        let mut state = DetailViewState::new(2);
        let request = counter.next_id();
        state.begin_request(request);

        assert!(state.fail_request(request));
        assert!(state.is_loading());
        assert!(state.pending.is_none());
    }

    #[test]
    fn test_reply_for_other_id_is_ignored() {
        let mut counter = RequestCounter::new();
        let mut state = DetailViewState::new(2);
        let request = counter.next_id();
        state.begin_request(request);

        assert!(!state.apply_character(request, test_character(3, "Summer Smith")));
        assert!(state.is_loading());
    }
}
