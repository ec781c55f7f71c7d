//! Seam between the flow and whatever answers check-in requests.

use async_trait::async_trait;

use super::errors::CheckinOutcome;
use super::models::CheckinResult;

/// A check-in backend.
///
/// Implementations perform at most one attempt per call; callers never retry.
#[async_trait]
pub trait CheckinBackend: Send + Sync {
    /// Checks the customer in and returns their loyalty summary.
    async fn checkin(&self, phone: &str) -> CheckinOutcome<CheckinResult>;

    /// Creates a booking for the customer. The response carries nothing the
    /// kiosk uses.
    async fn create_booking(&self, phone: &str) -> CheckinOutcome<()>;
}
