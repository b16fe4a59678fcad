//! Provider-agnostic purchase event.

use super::errors::PurchaseEventError;
use super::event_type::PurchaseEventType;

/// A purchase lifecycle event decoded from a provider webhook.
///
/// Built once per inbound request by a webhook adapter and consumed by a
/// single notification run. Fields are private so the event cannot change
/// after construction; optional details are attached with the `with_*`
/// builder methods. Blank optional strings are stored as absent.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseEvent {
    event_type: PurchaseEventType,
    store: String,
    country_code: Option<String>,
    price: Option<f64>,
    product_id: Option<String>,
    renewal_number: Option<u32>,
}

impl PurchaseEvent {
    /// Creates an event with no optional details.
    ///
    /// # Errors
    ///
    /// Returns `EmptyEventType` if the event type tag is blank.
    pub fn new(
        event_type: impl Into<PurchaseEventType>,
        store: impl Into<String>,
    ) -> Result<Self, PurchaseEventError> {
        let event_type = event_type.into();
        if event_type.as_str().trim().is_empty() {
            return Err(PurchaseEventError::EmptyEventType);
        }

        Ok(Self {
            event_type,
            store: store.into(),
            country_code: None,
            price: None,
            product_id: None,
            renewal_number: None,
        })
    }

    pub fn with_country_code(mut self, country_code: Option<String>) -> Self {
        self.country_code = non_blank(country_code);
        self
    }

    /// Attaches the price. Non-finite amounts are treated as absent.
    pub fn with_price(mut self, price: Option<f64>) -> Self {
        self.price = price.filter(|p| p.is_finite());
        self
    }

    pub fn with_product_id(mut self, product_id: Option<String>) -> Self {
        self.product_id = non_blank(product_id);
        self
    }

    pub fn with_renewal_number(mut self, renewal_number: Option<u32>) -> Self {
        self.renewal_number = renewal_number;
        self
    }

    pub fn event_type(&self) -> &PurchaseEventType {
        &self.event_type
    }

    /// Raw marketplace code as sent by the provider.
    pub fn store(&self) -> &str {
        &self.store
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    pub fn price(&self) -> Option<f64> {
        self.price
    }

    pub fn product_id(&self) -> Option<&str> {
        self.product_id.as_deref()
    }

    pub fn renewal_number(&self) -> Option<u32> {
        self.renewal_number
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_event_has_no_details() {
        let event = PurchaseEvent::new("RENEWAL", "APP_STORE").unwrap();

        assert_eq!(event.event_type(), &PurchaseEventType::Renewal);
        assert_eq!(event.store(), "APP_STORE");
        assert!(event.country_code().is_none());
        assert!(event.price().is_none());
        assert!(event.product_id().is_none());
        assert!(event.renewal_number().is_none());
    }

    #[test]
    fn empty_event_type_is_rejected() {
        assert_eq!(
            PurchaseEvent::new("", "APP_STORE"),
            Err(PurchaseEventError::EmptyEventType)
        );
        assert_eq!(
            PurchaseEvent::new("   ", "APP_STORE"),
            Err(PurchaseEventError::EmptyEventType)
        );
    }

    #[test]
    fn unknown_event_type_is_accepted() {
        let event = PurchaseEvent::new("TRIAL_STARTED", "APP_STORE").unwrap();
        assert!(!event.event_type().is_supported());
    }

    #[test]
    fn builder_attaches_details() {
        let event = PurchaseEvent::new(PurchaseEventType::Renewal, "APP_STORE")
            .unwrap()
            .with_country_code(Some("US".to_string()))
            .with_price(Some(9.99))
            .with_product_id(Some("pro_monthly".to_string()))
            .with_renewal_number(Some(3));

        assert_eq!(event.country_code(), Some("US"));
        assert_eq!(event.price(), Some(9.99));
        assert_eq!(event.product_id(), Some("pro_monthly"));
        assert_eq!(event.renewal_number(), Some(3));
    }

    #[test]
    fn blank_strings_are_stored_as_absent() {
        let event = PurchaseEvent::new("RENEWAL", "APP_STORE")
            .unwrap()
            .with_country_code(Some(" ".to_string()))
            .with_product_id(Some(String::new()));

        assert!(event.country_code().is_none());
        assert!(event.product_id().is_none());
    }

    #[test]
    fn non_finite_price_is_stored_as_absent() {
        let event = PurchaseEvent::new("RENEWAL", "APP_STORE")
            .unwrap()
            .with_price(Some(f64::NAN));

        assert!(event.price().is_none());
    }
}
