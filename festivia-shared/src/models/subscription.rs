use serde::{Deserialize, Serialize};

/// A subscription plan offered to end users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subscription {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration_days: u32,
    pub is_active: bool,
}

/// Payload for creating a subscription plan. Built from a
/// [`SubscriptionForm`] that already passed validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewSubscription {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration_days: u32,
}

/// A single inline validation failure, keyed by form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Raw subscription form input, validated synchronously before any
/// request is sent. Invalid forms never reach the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub duration_days: String,
}

impl SubscriptionForm {
    pub const MAX_NAME_LEN: usize = 64;

    /// Validate every field, collecting one message per failing field.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        } else if name.len() > Self::MAX_NAME_LEN {
            errors.push(FieldError::new("name", "Name is too long"));
        }

        if self.description.trim().is_empty() {
            errors.push(FieldError::new("description", "Description is required"));
        }

        match self.price.trim().parse::<f64>() {
            Ok(price) if price > 0.0 => {}
            Ok(_) => errors.push(FieldError::new("price", "Price must be greater than zero")),
            Err(_) => errors.push(FieldError::new("price", "Price must be a number")),
        }

        match self.duration_days.trim().parse::<u32>() {
            Ok(days) if days >= 1 => {}
            _ => errors.push(FieldError::new(
                "duration_days",
                "Duration must be at least one day",
            )),
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Convert to the request payload. Fails with the same field errors
    /// as [`Self::validate`], so callers cannot submit an invalid form.
    pub fn to_payload(&self) -> Result<NewSubscription, Vec<FieldError>> {
        self.validate()?;
        Ok(NewSubscription {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: self.price.trim().parse().unwrap_or_default(),
            duration_days: self.duration_days.trim().parse().unwrap_or_default(),
        })
    }

    /// Message for one field, if that field failed validation.
    #[must_use]
    pub fn field_message<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
        errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SubscriptionForm {
        SubscriptionForm {
            name: "Gold".to_string(),
            description: "Priority booking".to_string(),
            price: "19.99".to_string(),
            duration_days: "30".to_string(),
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn empty_form_fails_every_field() {
        let errors = SubscriptionForm::default().validate().unwrap_err();
        for field in ["name", "description", "price", "duration_days"] {
            assert!(
                SubscriptionForm::field_message(&errors, field).is_some(),
                "expected an error for {field}"
            );
        }
    }

    #[test]
    fn price_must_be_positive_number() {
        let mut form = valid_form();
        form.price = "free".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            SubscriptionForm::field_message(&errors, "price"),
            Some("Price must be a number")
        );

        form.price = "0".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            SubscriptionForm::field_message(&errors, "price"),
            Some("Price must be greater than zero")
        );
    }

    #[test]
    fn overlong_name_is_rejected() {
        let mut form = valid_form();
        form.name = "x".repeat(SubscriptionForm::MAX_NAME_LEN + 1);
        let errors = form.validate().unwrap_err();
        assert_eq!(
            SubscriptionForm::field_message(&errors, "name"),
            Some("Name is too long")
        );
    }

    #[test]
    fn payload_trims_and_parses_fields() {
        let mut form = valid_form();
        form.name = "  Gold  ".to_string();
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.name, "Gold");
        assert!((payload.price - 19.99).abs() < f64::EPSILON);
        assert_eq!(payload.duration_days, 30);
    }

    #[test]
    fn invalid_form_never_produces_a_payload() {
        assert!(SubscriptionForm::default().to_payload().is_err());
    }

    #[test]
    fn subscription_uses_backend_id_field() {
        let body = r#"{
            "_id": "s1",
            "name": "Gold",
            "description": "Priority booking",
            "price": 19.99,
            "duration_days": 30,
            "is_active": true
        }"#;
        let plan: Subscription = serde_json::from_str(body).unwrap();
        assert_eq!(plan.id, "s1");
        assert!(plan.is_active);
    }
}
