//! Wallet balance — `GET /api/balance`.

use serde::{Deserialize, Serialize};

use crate::ExtraFields;

/// Response of `GET /api/balance`.
///
/// `balance` is denominated in the smallest currency unit (satoshis). It is
/// unsigned, so a negative or fractional value fails to decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BalanceResponse {
    pub balance: u64,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl BalanceResponse {
    pub fn new(balance: u64) -> Self {
        Self {
            balance,
            extra: ExtraFields::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_integer_balance() {
        let b: BalanceResponse = serde_json::from_str(r#"{"balance":12500}"#).unwrap();
        assert_eq!(b.balance, 12_500);
    }

    #[test]
    fn rejects_negative_and_fractional() {
        assert!(serde_json::from_str::<BalanceResponse>(r#"{"balance":-1}"#).is_err());
        assert!(serde_json::from_str::<BalanceResponse>(r#"{"balance":1.5}"#).is_err());
    }
}
