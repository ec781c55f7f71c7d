//! Fire-and-forget check-in submission.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{CheckinBackend, CheckinResult};

/// Checks `phone` in and creates a booking for it.
///
/// Never fails: a failed check-in yields [`CheckinResult::default`]. The
/// booking runs as its own task whose outcome is only logged, so a slow
/// booking never holds back the returned result. Each request is attempted
/// exactly once.
pub async fn submit_checkin(backend: Arc<dyn CheckinBackend>, phone: &str) -> CheckinResult {
    let booking_backend = Arc::clone(&backend);
    let booking_phone = phone.to_string();
    tokio::spawn(async move {
        if let Err(err) = booking_backend.create_booking(&booking_phone).await {
            warn!(%err, "booking creation failed");
        }
    });

    match backend.checkin(phone).await {
        Ok(result) => {
            info!(points = result.reward_points, "check-in accepted");
            result
        }
        Err(err) => {
            warn!(%err, "check-in submission failed");
            CheckinResult::default()
        }
    }
}
