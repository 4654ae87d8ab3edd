//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::detail_view_state::DetailViewState;
use crate::handler::UpdateAction;
use crate::list_view_state::ListViewState;
use crate::request::{RequestCounter, RequestId};
use crate::route::{Navigator, Route};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// The mounted view, one per route
#[derive(Debug, Clone)]
pub enum Screen {
    List(ListViewState),
    Profile(DetailViewState),
}

impl Screen {
    /// Unmounted placeholder for a route; [`AppState::mount`] replaces it
    fn placeholder(route: Route) -> Self {
        match route {
            Route::List => Screen::List(ListViewState::new()),
            Route::Profile { id } => Screen::Profile(DetailViewState::new(id)),
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current application phase
    pub phase: AppPhase,

    /// Application settings from config file
    pub settings: Settings,

    /// Route history; the last entry is on screen
    pub navigator: Navigator,

    /// View state for the active route
    pub screen: Screen,

    /// Source of request tags
    requests: RequestCounter,

    /// Page for the very first list mount (`--page`); later mounts start at 1
    initial_page: Option<u32>,

    /// Animation frame counter for the loading indicator
    pub animation_frame: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Route::List, Settings::default())
    }
}

impl AppState {
    /// Create a new AppState starting at `start`. Nothing is fetched until
    /// the route is mounted.
    pub fn new(start: Route, settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            settings,
            navigator: Navigator::new(start),
            screen: Screen::placeholder(start),
            requests: RequestCounter::new(),
            initial_page: None,
            animation_frame: 0,
        }
    }

    /// Open the list at `page` instead of page 1 the first time it mounts
    pub fn with_initial_page(mut self, page: u32) -> Self {
        self.initial_page = Some(page.max(1));
        self
    }

    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    pub fn next_request_id(&mut self) -> RequestId {
        self.requests.next_id()
    }

    /// Replace the screen with fresh state for the current route and return
    /// the fetch that fills it.
    pub fn mount(&mut self) -> UpdateAction {
        match self.navigator.current() {
            Route::List => {
                let page = self.initial_page.take().unwrap_or(1);
                let request = self.next_request_id();
                let mut list = ListViewState::new();
                list.begin_request(page, request);
                self.screen = Screen::List(list);
                UpdateAction::FetchPage { request, page }
            }
            Route::Profile { id } => {
                let request = self.next_request_id();
                let mut detail = DetailViewState::new(id);
                detail.begin_request(request);
                self.screen = Screen::Profile(detail);
                UpdateAction::FetchCharacter { request, id }
            }
        }
    }

    pub fn list(&self) -> Option<&ListViewState> {
        match &self.screen {
            Screen::List(list) => Some(list),
            Screen::Profile(_) => None,
        }
    }

    pub fn list_mut(&mut self) -> Option<&mut ListViewState> {
        match &mut self.screen {
            Screen::List(list) => Some(list),
            Screen::Profile(_) => None,
        }
    }

    pub fn detail(&self) -> Option<&DetailViewState> {
        match &self.screen {
            Screen::Profile(detail) => Some(detail),
            Screen::List(_) => None,
        }
    }

    pub fn detail_mut(&mut self) -> Option<&mut DetailViewState> {
        match &mut self.screen {
            Screen::Profile(detail) => Some(detail),
            Screen::List(_) => None,
        }
    }

    /// True while the mounted view waits for data
    pub fn is_loading(&self) -> bool {
        match &self.screen {
            Screen::List(list) => list.is_loading(),
            Screen::Profile(detail) => detail.is_loading(),
        }
    }

    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
