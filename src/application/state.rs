//! Application state for the kiosk terminal.
//!
//! [`App`] pairs the [`FlowController`] with transient view state that only
//! lives as long as one visit to a screen: the carousel position and consent
//! checkbox on the check-in screen, and the reveal sequence on the success
//! screen.

use std::sync::Arc;
use std::time::{Duration, Instant};

use super::controller::{FlowController, FlowEvent, SubmitOutcome};
use crate::domain::{CheckinBackend, PROMOTIONS, Promotion, Screen};

/// Delay before the success headline appears.
pub const HEADLINE_DELAY: Duration = Duration::from_millis(500);
/// Delay before the points badge appears.
pub const POINTS_DELAY: Duration = Duration::from_millis(1500);
/// Delay before the closing decorations appear.
pub const FINALE_DELAY: Duration = Duration::from_millis(2500);

/// Check-in screen state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckinView {
    /// Index into [`PROMOTIONS`].
    pub slide: usize,
    /// Consent to text notifications; pre-checked.
    pub agreed: bool,
}

impl Default for CheckinView {
    fn default() -> Self {
        Self {
            slide: 0,
            agreed: true,
        }
    }
}

impl CheckinView {
    pub fn next_slide(&mut self) {
        self.slide = (self.slide + 1) % PROMOTIONS.len();
    }

    pub fn prev_slide(&mut self) {
        self.slide = (self.slide + PROMOTIONS.len() - 1) % PROMOTIONS.len();
    }

    pub fn promotion(&self) -> &'static Promotion {
        &PROMOTIONS[self.slide]
    }

    pub fn toggle_agreed(&mut self) {
        self.agreed = !self.agreed;
    }
}

/// How much of the success screen has been revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RevealStage {
    Blank,
    Headline,
    Points,
    Finale,
}

/// Success screen state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessView {
    pub entered_at: Instant,
}

impl SuccessView {
    pub fn stage_at(&self, now: Instant) -> RevealStage {
        let elapsed = now.saturating_duration_since(self.entered_at);
        if elapsed >= FINALE_DELAY {
            RevealStage::Finale
        } else if elapsed >= POINTS_DELAY {
            RevealStage::Points
        } else if elapsed >= HEADLINE_DELAY {
            RevealStage::Headline
        } else {
            RevealStage::Blank
        }
    }

    pub fn stage(&self) -> RevealStage {
        self.stage_at(Instant::now())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    Welcome,
    Checkin(CheckinView),
    Success(SuccessView),
}

impl ScreenView {
    fn for_screen(screen: Screen) -> Self {
        match screen {
            Screen::Welcome => ScreenView::Welcome,
            Screen::Checkin => ScreenView::Checkin(CheckinView::default()),
            Screen::Success => ScreenView::Success(SuccessView {
                entered_at: Instant::now(),
            }),
        }
    }

    pub fn screen(&self) -> Screen {
        match self {
            ScreenView::Welcome => Screen::Welcome,
            ScreenView::Checkin(_) => Screen::Checkin,
            ScreenView::Success(_) => Screen::Success,
        }
    }
}

/// Main application state for the kiosk terminal.
pub struct App {
    pub controller: FlowController,
    pub view: ScreenView,
    /// Cleared when the operator quits.
    pub running: bool,
}

impl App {
    pub fn new(backend: Arc<dyn CheckinBackend>, reset_delay: Duration) -> Self {
        let controller = FlowController::new(backend, reset_delay);
        let view = ScreenView::for_screen(controller.screen());
        Self {
            controller,
            view,
            running: true,
        }
    }

    /// Replaces the view state if the controller has moved to another screen.
    pub fn sync_view(&mut self) {
        let screen = self.controller.screen();
        if self.view.screen() != screen {
            self.view = ScreenView::for_screen(screen);
        }
    }

    pub fn tap(&mut self) {
        self.controller.tap();
        self.sync_view();
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.controller.submit()
    }

    /// Applies a background event received from the controller.
    pub fn apply(&mut self, event: FlowEvent) -> bool {
        let applied = self.controller.apply(event);
        self.sync_view();
        applied
    }

    /// Waits for the controller's next background event and applies it.
    pub async fn advance(&mut self) -> Option<Screen> {
        let screen = self.controller.advance().await;
        self.sync_view();
        screen
    }

    pub fn checkin_view_mut(&mut self) -> Option<&mut CheckinView> {
        match &mut self.view {
            ScreenView::Checkin(view) => Some(view),
            _ => None,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
        self.controller.dispose();
    }
}
