//! Screen flow for the check-in kiosk.
//!
//! The controller is the single owner of the current [`Screen`], the phone
//! number being typed and the last [`CheckinResult`]. Background work (the
//! check-in request and the success-screen reset timer) runs as spawned tasks
//! that report back through a channel; nothing outside the controller mutates
//! flow state.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::checkin::submit_checkin;
use crate::domain::{CheckinBackend, CheckinResult, PhoneNumber, Screen};

/// Result of asking the controller to submit the current phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The check-in request is now in flight.
    Started,
    /// Fewer than ten digits have been entered.
    Incomplete,
    /// Submission is only possible from the check-in screen.
    NotOnCheckin,
    /// A check-in request is already in flight.
    AlreadySubmitting,
}

/// Completion of background work, tagged with the cycle that started it.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowEvent {
    CheckinFinished { cycle: u64, result: CheckinResult },
    ResetElapsed { cycle: u64 },
}

pub struct FlowController {
    screen: Screen,
    phone: PhoneNumber,
    result: CheckinResult,
    /// Incremented every time the flow returns to the welcome screen.
    cycle: u64,
    backend: Arc<dyn CheckinBackend>,
    reset_delay: Duration,
    submission: Option<JoinHandle<()>>,
    reset_timer: Option<JoinHandle<()>>,
    events_tx: mpsc::UnboundedSender<FlowEvent>,
    events_rx: mpsc::UnboundedReceiver<FlowEvent>,
}

impl FlowController {
    /// Creates a controller on the welcome screen.
    ///
    /// `reset_delay` is how long the success screen stays up.
    pub fn new(backend: Arc<dyn CheckinBackend>, reset_delay: Duration) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            screen: Screen::Welcome,
            phone: PhoneNumber::default(),
            result: CheckinResult::default(),
            cycle: 0,
            backend,
            reset_delay,
            submission: None,
            reset_timer: None,
            events_tx,
            events_rx,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    pub fn result(&self) -> &CheckinResult {
        &self.result
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_some()
    }

    pub fn reset_scheduled(&self) -> bool {
        self.reset_timer.is_some()
    }

    /// Leaves the welcome screen. Returns `false` on any other screen.
    pub fn tap(&mut self) -> bool {
        if self.screen != Screen::Welcome {
            return false;
        }
        self.phone.clear();
        self.screen = Screen::Checkin;
        info!(cycle = self.cycle, "check-in started");
        true
    }

    fn accepts_input(&self) -> bool {
        self.screen == Screen::Checkin && self.submission.is_none()
    }

    /// Appends a keypad digit. Ignored off the check-in screen, while a
    /// submission is in flight, or once ten digits are entered.
    pub fn press_digit(&mut self, digit: char) -> bool {
        if !self.accepts_input() {
            debug!(screen = ?self.screen, "digit ignored");
            return false;
        }
        self.phone.append(digit)
    }

    pub fn clear(&mut self) {
        if self.accepts_input() {
            self.phone.clear();
        }
    }

    pub fn backspace(&mut self) {
        if self.accepts_input() {
            self.phone.backspace();
        }
    }

    /// Starts the check-in request for the entered number.
    ///
    /// The screen changes to [`Screen::Success`] once the request finishes,
    /// whatever its outcome, via [`FlowController::apply`].
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.screen != Screen::Checkin {
            return SubmitOutcome::NotOnCheckin;
        }
        if self.submission.is_some() {
            return SubmitOutcome::AlreadySubmitting;
        }
        if !self.phone.is_complete() {
            return SubmitOutcome::Incomplete;
        }

        let backend = Arc::clone(&self.backend);
        let events = self.events_tx.clone();
        let phone = self.phone.as_str().to_string();
        let cycle = self.cycle;

        info!(cycle, "check-in submitted");
        self.submission = Some(tokio::spawn(async move {
            let report = FinishReport::new(events, cycle);
            let result = submit_checkin(backend, &phone).await;
            report.send(result);
        }));

        SubmitOutcome::Started
    }

    /// Waits for the next background event without applying it.
    pub async fn next_event(&mut self) -> Option<FlowEvent> {
        self.events_rx.recv().await
    }

    /// Applies a background event. Events from an earlier cycle, or that no
    /// longer match the current screen, are dropped and `false` is returned.
    pub fn apply(&mut self, event: FlowEvent) -> bool {
        match event {
            FlowEvent::CheckinFinished { cycle, result }
                if cycle == self.cycle && self.screen == Screen::Checkin && self.submission.is_some() =>
            {
                self.submission = None;
                self.result = result;
                self.screen = Screen::Success;
                self.schedule_reset();
                true
            }
            FlowEvent::ResetElapsed { cycle } if cycle == self.cycle && self.screen == Screen::Success => {
                self.reset_timer = None;
                self.reset();
                true
            }
            stale => {
                debug!(?stale, current = self.cycle, "stale flow event dropped");
                false
            }
        }
    }

    /// Waits for background events until one is applied and returns the
    /// resulting screen.
    pub async fn advance(&mut self) -> Option<Screen> {
        loop {
            let event = self.next_event().await?;
            if self.apply(event) {
                return Some(self.screen);
            }
        }
    }

    fn schedule_reset(&mut self) {
        if let Some(timer) = self.reset_timer.take() {
            timer.abort();
        }
        let events = self.events_tx.clone();
        let cycle = self.cycle;
        let delay = self.reset_delay;
        self.reset_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(FlowEvent::ResetElapsed { cycle });
        }));
    }

    /// Returns to the welcome screen with an empty number and no result.
    fn reset(&mut self) {
        self.dispose();
        self.screen = Screen::Welcome;
        self.phone.clear();
        self.result = CheckinResult::default();
        self.cycle += 1;
        info!(cycle = self.cycle, "flow reset to welcome");
    }

    /// Cancels the in-flight submission and the reset timer.
    pub fn dispose(&mut self) {
        if let Some(submission) = self.submission.take() {
            submission.abort();
        }
        if let Some(timer) = self.reset_timer.take() {
            timer.abort();
        }
    }
}

/// Reports the end of a submission task.
///
/// If the task panics before reporting, the default result is sent while
/// unwinding so the flow still reaches the success screen. An aborted task
/// reports nothing.
struct FinishReport {
    events: mpsc::UnboundedSender<FlowEvent>,
    cycle: u64,
    sent: bool,
}

impl FinishReport {
    fn new(events: mpsc::UnboundedSender<FlowEvent>, cycle: u64) -> Self {
        Self {
            events,
            cycle,
            sent: false,
        }
    }

    fn send(mut self, result: CheckinResult) {
        self.sent = true;
        let _ = self.events.send(FlowEvent::CheckinFinished {
            cycle: self.cycle,
            result,
        });
    }
}

impl Drop for FinishReport {
    fn drop(&mut self) {
        if !self.sent && std::thread::panicking() {
            warn!(cycle = self.cycle, "check-in task panicked, showing default result");
            let _ = self.events.send(FlowEvent::CheckinFinished {
                cycle: self.cycle,
                result: CheckinResult::default(),
            });
        }
    }
}

impl Drop for FlowController {
    fn drop(&mut self) {
        self.dispose();
    }
}
