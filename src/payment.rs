//! UPI payment-app links.
//!
//! Payment is manual: the customer pays in their UPI app and types the
//! transaction reference back in. Nothing here talks to a gateway.

use crate::money::{to_decimal, DECIMAL_PLACES};
use reqwest::Url;
use thiserror::Error;

const PHONEPE_BASE: &str = "phonepe://pay";
const PAYTM_BASE: &str = "paytmmpay://pay";

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Invalid payment link: {0}")]
pub struct PaymentLinkError(String);

/// Who receives the payment.
#[derive(Debug, Clone, PartialEq)]
pub struct Payee {
    /// Virtual payment address, e.g. `kitchen@okaxis`.
    pub upi_id: String,
    pub name: String,
}

impl Default for Payee {
    fn default() -> Self {
        Self {
            upi_id: "storefront@upi".to_string(),
            name: "Storefront".to_string(),
        }
    }
}

impl Payee {
    pub fn new(upi_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            upi_id: upi_id.into(),
            name: name.into(),
        }
    }
}

/// Intent links that open a payment app with the amount pre-filled.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentLinks {
    pub phonepe: Url,
    pub paytm: Url,
}

impl PaymentLinks {
    pub fn for_amount(payee: &Payee, amount: f64) -> Result<Self, PaymentLinkError> {
        let amount = format_amount(amount);
        let params = [
            ("pa", payee.upi_id.as_str()),
            ("pn", payee.name.as_str()),
            ("am", amount.as_str()),
            ("cu", "INR"),
        ];
        let link = |base: &str| {
            Url::parse_with_params(base, &params).map_err(|e| PaymentLinkError(e.to_string()))
        };

        Ok(Self {
            phonepe: link(PHONEPE_BASE)?,
            paytm: link(PAYTM_BASE)?,
        })
    }
}

/// Whole amounts print without decimals (`260`), others with up to two (`260.5`).
fn format_amount(amount: f64) -> String {
    to_decimal(amount).round_dp(DECIMAL_PLACES).normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn query(url: &Url) -> HashMap<String, String> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_links_carry_payee_and_amount() {
        let payee = Payee::new("kitchen@okaxis", "Momo Corner");
        let links = PaymentLinks::for_amount(&payee, 260.0).unwrap();

        assert_eq!(links.phonepe.scheme(), "phonepe");
        assert_eq!(links.paytm.scheme(), "paytmmpay");

        for url in [&links.phonepe, &links.paytm] {
            let params = query(url);
            assert_eq!(params["pa"], "kitchen@okaxis");
            assert_eq!(params["pn"], "Momo Corner");
            assert_eq!(params["am"], "260");
            assert_eq!(params["cu"], "INR");
        }
    }

    #[test]
    fn test_amount_formatting() {
        assert_eq!(format_amount(450.0), "450");
        assert_eq!(format_amount(260.5), "260.5");
        assert_eq!(format_amount(99.999), "100");
    }
}
