use serde::{Deserialize, Serialize};

/// One point of the monthly sales series rendered by dashboard charts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyPoint {
    pub month: String,
    pub amount: f64,
}

/// Aggregated dashboard figures. Computed entirely by the backend; the
/// client only renders them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub total_events: u64,
    pub total_bookings: u64,
    pub total_revenue: f64,
    pub active_subscriptions: u64,
    #[serde(default)]
    pub monthly_sales: Vec<MonthlyPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_tolerate_missing_series() {
        let body = r#"{
            "total_events": 12,
            "total_bookings": 340,
            "total_revenue": 1280.5,
            "active_subscriptions": 27
        }"#;
        let stats: DashboardStats = serde_json::from_str(body).unwrap();
        assert_eq!(stats.total_bookings, 340);
        assert!(stats.monthly_sales.is_empty());
    }
}
