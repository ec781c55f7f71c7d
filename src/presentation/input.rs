use super::layout::{CheckinLayout, CheckinTarget};
use crate::application::{App, ScreenView, SubmitOutcome};
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::debug;

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
            app.quit();
            return;
        }

        match app.view {
            ScreenView::Welcome => Self::handle_welcome(app, key),
            ScreenView::Checkin(_) => {
                if let Some(target) = Self::checkin_key_target(key) {
                    Self::activate(app, target);
                }
            }
            // The success screen dismisses itself.
            ScreenView::Success(_) => {}
        }
    }

    /// Handles a click or touch. `area` is the terminal area the current
    /// screen was drawn into.
    ///
    /// Anywhere on the welcome screen counts as a tap. On the check-in
    /// screen the click is hit-tested against the keypad, the check-in
    /// button, the carousel arrows and the consent text.
    pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        match app.view {
            ScreenView::Welcome => app.tap(),
            ScreenView::Checkin(_) => {
                let target = CheckinLayout::new(area).target_at(mouse.column, mouse.row);
                debug!(column = mouse.column, row = mouse.row, ?target, "check-in screen clicked");
                if let Some(target) = target {
                    Self::activate(app, target);
                }
            }
            ScreenView::Success(_) => {}
        }
    }

    fn handle_welcome(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => app.tap(),
            _ => {}
        }
    }

    fn checkin_key_target(key: KeyCode) -> Option<CheckinTarget> {
        match key {
            KeyCode::Char(c) if c.is_ascii_digit() => Some(CheckinTarget::Digit(c)),
            KeyCode::Backspace => Some(CheckinTarget::Backspace),
            KeyCode::Delete | KeyCode::Esc => Some(CheckinTarget::Clear),
            KeyCode::Enter => Some(CheckinTarget::Submit),
            KeyCode::Left => Some(CheckinTarget::PrevSlide),
            KeyCode::Right => Some(CheckinTarget::NextSlide),
            KeyCode::Char(' ') => Some(CheckinTarget::Consent),
            _ => None,
        }
    }

    fn activate(app: &mut App, target: CheckinTarget) {
        match target {
            CheckinTarget::Digit(c) => {
                app.controller.press_digit(c);
            }
            CheckinTarget::Clear => app.controller.clear(),
            CheckinTarget::Backspace => app.controller.backspace(),
            CheckinTarget::Submit => {
                let outcome = app.submit();
                if outcome != SubmitOutcome::Started {
                    debug!(?outcome, "check-in not submitted");
                }
            }
            CheckinTarget::PrevSlide => {
                if let Some(view) = app.checkin_view_mut() {
                    view.prev_slide();
                }
            }
            CheckinTarget::NextSlide => {
                if let Some(view) = app.checkin_view_mut() {
                    view.next_slide();
                }
            }
            CheckinTarget::Consent => {
                if let Some(view) = app.checkin_view_mut() {
                    view.toggle_agreed();
                }
            }
        }
    }
}
