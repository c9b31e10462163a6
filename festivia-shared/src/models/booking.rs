use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a booking as shown in history tables.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

/// One row of a user's paginated booking history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub event_title: String,
    pub booked_at: DateTime<Utc>,
    pub amount: f64,
    pub status: BookingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_deserializes_backend_shape() {
        let body = r#"{
            "_id": "b3",
            "event_title": "Midnight Jazz",
            "booked_at": "2026-08-01T12:00:00Z",
            "amount": 45.0,
            "status": "confirmed"
        }"#;
        let booking: BookingSummary = serde_json::from_str(body).unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);
    }
}
