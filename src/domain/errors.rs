/// Ways a call to the check-in backend can fail.
///
/// None of these ever reach the kiosk user; they are logged and the flow
/// continues with a default [`CheckinResult`](super::CheckinResult).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckinError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Backend responded with status {0}")]
    Status(u16),

    #[error("Malformed response body: {0}")]
    MalformedBody(String),
}

pub type CheckinOutcome<T> = Result<T, CheckinError>;
