use serde::{Deserialize, Serialize};

/// The screen the kiosk is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Idle attract screen; any tap starts a check-in.
    #[default]
    Welcome,
    /// Phone number entry.
    Checkin,
    /// Confirmation with the customer's points.
    Success,
}

/// Loyalty summary returned by a successful check-in.
///
/// The default value stands in when the backend could not be reached, so the
/// success screen always has something deterministic to show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinResult {
    #[serde(default)]
    pub reward_points: u32,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
}

/// One slide of the check-in screen carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Promotion {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub highlight: &'static str,
}

pub const PROMOTIONS: [Promotion; 3] = [
    Promotion {
        title: "10% OFF",
        subtitle: "WHEN YOU REDEEM",
        highlight: "10 REWARD POINTS",
    },
    Promotion {
        title: "FREE NAIL ART",
        subtitle: "WITH PURCHASE OF",
        highlight: "FULL SET",
    },
    Promotion {
        title: "REFER A FRIEND",
        subtitle: "AND EARN",
        highlight: "5 BONUS POINTS",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkin_result_reads_camel_case() {
        let body = r#"{"rewardPoints": 42, "customerName": "Ada", "customerPhone": "5551234567"}"#;
        let result: CheckinResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.reward_points, 42);
        assert_eq!(result.customer_name, "Ada");
        assert_eq!(result.customer_phone, "5551234567");
    }

    #[test]
    fn test_checkin_result_missing_fields_default() {
        let result: CheckinResult = serde_json::from_str(r#"{"rewardPoints": 3}"#).unwrap();
        assert_eq!(result.reward_points, 3);
        assert!(result.customer_name.is_empty());
        assert!(result.customer_phone.is_empty());
    }

    #[test]
    fn test_checkin_result_rejects_negative_points() {
        assert!(serde_json::from_str::<CheckinResult>(r#"{"rewardPoints": -1}"#).is_err());
    }

    #[test]
    fn test_initial_screen_is_welcome() {
        assert_eq!(Screen::default(), Screen::Welcome);
    }
}
