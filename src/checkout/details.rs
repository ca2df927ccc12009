use serde::{Deserialize, Serialize};

/// Delivery form. All three fields are required free text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryDetails {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
}

impl DeliveryDetails {
    pub fn new(
        customer_name: impl Into<String>,
        customer_phone: impl Into<String>,
        customer_address: impl Into<String>,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            customer_phone: customer_phone.into(),
            customer_address: customer_address.into(),
        }
    }

    /// Names of the empty fields. Presence is all that is checked.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("customer_name", &self.customer_name),
            ("customer_phone", &self.customer_phone),
            ("customer_address", &self.customer_address),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
