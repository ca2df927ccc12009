use std::fmt::Display;

/// Number of digits in a UPI transaction reference (UTR).
pub const REFERENCE_LEN: usize = 12;

/// The UTR typed by the customer, reduced to its digits. It is never checked
/// against the payment network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentReference(String);

impl PaymentReference {
    /// Keeps only the ASCII digits of `input`.
    ///
    /// Extra digits are kept rather than cut at [`REFERENCE_LEN`], so a pasted
    /// 13-digit value stays incomplete instead of silently losing a digit.
    pub fn from_input(input: &str) -> Self {
        Self(input.chars().filter(char::is_ascii_digit).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exactly [`REFERENCE_LEN`] digits.
    pub fn is_complete(&self) -> bool {
        self.0.len() == REFERENCE_LEN
    }
}

impl Display for PaymentReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_non_digits() {
        let reference = PaymentReference::from_input("UTR 4021-5566 7788x12");
        assert_eq!(reference.as_str(), "402155667788");
        assert!(reference.is_complete());
    }

    #[test]
    fn test_only_twelve_digits_complete() {
        assert!(!PaymentReference::from_input("12345678901").is_complete());
        assert!(!PaymentReference::from_input("1234567890123").is_complete());
        assert!(!PaymentReference::from_input("abc").is_complete());
        assert!(PaymentReference::from_input("abc").is_empty());
    }

    #[test]
    fn test_extra_digits_are_not_truncated() {
        let reference = PaymentReference::from_input("4021556677881");
        assert_eq!(reference.len(), 13);
        assert_eq!(reference.as_str(), "4021556677881");
        assert!(!reference.is_complete());
    }

    #[test]
    fn test_non_ascii_digits_are_dropped() {
        let reference = PaymentReference::from_input("١٢٣123456789012");
        assert_eq!(reference.as_str(), "123456789012");
    }
}
