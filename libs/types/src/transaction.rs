//! Transaction record and payload validation
//!
//! A `Transaction` is immutable once stored: validation is the only way to
//! construct one from external input, and no field is ever mutated after a
//! successful insert. Monetary amounts are `Decimal` end-to-end; the raw
//! JSON literal reaches `Decimal::from_str` without passing through a
//! binary float.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

use crate::errors::RejectionReason;
use crate::ids::{AccountId, TransactionId};

/// Transaction direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxType {
    /// Funds flowing into the account
    Credit,
    /// Funds flowing out of the account
    Debit,
}

impl TxType {
    pub fn is_credit(&self) -> bool {
        matches!(self, TxType::Credit)
    }

    /// Wire label for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            TxType::Credit => "credit",
            TxType::Debit => "debit",
        }
    }
}

/// A validated financial transaction event
///
/// Append-only: the id is the producer's idempotency key and the store
/// rejects a second insert under the same id rather than overwriting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Caller-supplied unique id (idempotency key)
    pub id: TransactionId,
    /// Owning account, non-empty
    pub account: AccountId,
    /// Strictly positive amount, exact decimal
    pub amount: Decimal,
    /// Credit or debit
    #[serde(rename = "type")]
    pub tx_type: TxType,
    /// Event time as supplied by the caller, not server receipt time
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Validate an untyped JSON payload into a `Transaction`.
    ///
    /// Checks run in a fixed order and short-circuit on the first failure:
    /// id, account, amount, type, timestamp. Pure and deterministic; no
    /// side effects.
    pub fn from_payload(raw: &Value) -> Result<Self, RejectionReason> {
        let id = match raw.get("id").and_then(Value::as_str) {
            Some(s) if !s.is_empty() => TransactionId::new(s),
            _ => return Err(RejectionReason::MissingField("id")),
        };

        let account = match raw.get("account").and_then(Value::as_str) {
            Some(s) if !s.is_empty() => AccountId::new(s),
            _ => return Err(RejectionReason::MissingField("account")),
        };

        let amount = match raw.get("amount") {
            None | Some(Value::Null) => {
                return Err(RejectionReason::MissingField("amount"))
            }
            Some(Value::Number(n)) => parse_amount(&n.to_string())?,
            Some(_) => return Err(RejectionReason::InvalidAmount),
        };

        let tx_type = match raw.get("type") {
            None | Some(Value::Null) => {
                return Err(RejectionReason::MissingField("type"))
            }
            Some(Value::String(s)) if s == "credit" => TxType::Credit,
            Some(Value::String(s)) if s == "debit" => TxType::Debit,
            Some(_) => return Err(RejectionReason::InvalidType),
        };

        let timestamp = match raw.get("timestamp") {
            None | Some(Value::Null) => {
                return Err(RejectionReason::MissingField("timestamp"))
            }
            Some(Value::String(s)) => DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|_| RejectionReason::InvalidTimestamp)?,
            Some(_) => return Err(RejectionReason::InvalidTimestamp),
        };

        Ok(Self {
            id,
            account,
            amount,
            tx_type,
            timestamp,
        })
    }
}

/// Parse a JSON number literal into a strictly positive `Decimal`.
///
/// `from_str` covers plain literals; `from_scientific` covers exponent
/// notation, which JSON permits.
fn parse_amount(literal: &str) -> Result<Decimal, RejectionReason> {
    let amount = Decimal::from_str(literal)
        .or_else(|_| Decimal::from_scientific(literal))
        .map_err(|_| RejectionReason::InvalidAmount)?;

    if amount > Decimal::ZERO {
        Ok(amount)
    } else {
        Err(RejectionReason::InvalidAmount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn payload(json: &str) -> Value {
        serde_json::from_str(json).unwrap()
    }

    const VALID: &str = r#"{
        "id": "tx-1",
        "account": "A123",
        "amount": 250.50,
        "type": "credit",
        "timestamp": "2026-01-10T14:00:00Z"
    }"#;

    #[test]
    fn test_valid_payload() {
        let tx = Transaction::from_payload(&payload(VALID)).unwrap();
        assert_eq!(tx.id.as_str(), "tx-1");
        assert_eq!(tx.account.as_str(), "A123");
        assert_eq!(tx.amount, Decimal::from_str("250.50").unwrap());
        assert_eq!(tx.tx_type, TxType::Credit);
        assert_eq!(tx.timestamp.to_rfc3339(), "2026-01-10T14:00:00+00:00");
    }

    #[test]
    fn test_amount_scale_preserved() {
        // "250.50" must not collapse to "250.5" on the way in
        let tx = Transaction::from_payload(&payload(VALID)).unwrap();
        assert_eq!(tx.amount.to_string(), "250.50");
    }

    #[test]
    fn test_missing_fields_report_first_in_order() {
        let raw = payload(r#"{}"#);
        assert_eq!(
            Transaction::from_payload(&raw),
            Err(RejectionReason::MissingField("id"))
        );

        let raw = payload(r#"{"id": "tx-1"}"#);
        assert_eq!(
            Transaction::from_payload(&raw),
            Err(RejectionReason::MissingField("account"))
        );

        let raw = payload(r#"{"id": "tx-1", "account": "A123"}"#);
        assert_eq!(
            Transaction::from_payload(&raw),
            Err(RejectionReason::MissingField("amount"))
        );

        let raw = payload(r#"{"id": "tx-1", "account": "A123", "amount": 1}"#);
        assert_eq!(
            Transaction::from_payload(&raw),
            Err(RejectionReason::MissingField("type"))
        );

        let raw = payload(
            r#"{"id": "tx-1", "account": "A123", "amount": 1, "type": "debit"}"#,
        );
        assert_eq!(
            Transaction::from_payload(&raw),
            Err(RejectionReason::MissingField("timestamp"))
        );
    }

    #[test]
    fn test_empty_strings_count_as_missing() {
        let raw = payload(
            r#"{"id": "", "account": "A123", "amount": 1, "type": "debit",
                "timestamp": "2026-01-10T14:00:00Z"}"#,
        );
        assert_eq!(
            Transaction::from_payload(&raw),
            Err(RejectionReason::MissingField("id"))
        );

        let raw = payload(
            r#"{"id": "tx-1", "account": "", "amount": 1, "type": "debit",
                "timestamp": "2026-01-10T14:00:00Z"}"#,
        );
        assert_eq!(
            Transaction::from_payload(&raw),
            Err(RejectionReason::MissingField("account"))
        );
    }

    #[test]
    fn test_negative_and_zero_amounts_rejected() {
        for amount in ["-5", "0", "-0.01"] {
            let raw = payload(&format!(
                r#"{{"id": "tx-1", "account": "A123", "amount": {amount},
                    "type": "credit", "timestamp": "2026-01-10T14:00:00Z"}}"#
            ));
            assert_eq!(
                Transaction::from_payload(&raw),
                Err(RejectionReason::InvalidAmount),
                "amount {amount} should be rejected"
            );
        }
    }

    #[test]
    fn test_non_numeric_amount_rejected() {
        let raw = payload(
            r#"{"id": "tx-1", "account": "A123", "amount": "250.50",
                "type": "credit", "timestamp": "2026-01-10T14:00:00Z"}"#,
        );
        assert_eq!(
            Transaction::from_payload(&raw),
            Err(RejectionReason::InvalidAmount)
        );
    }

    #[test]
    fn test_scientific_notation_amount() {
        let raw = payload(
            r#"{"id": "tx-1", "account": "A123", "amount": 2.5e3,
                "type": "credit", "timestamp": "2026-01-10T14:00:00Z"}"#,
        );
        let tx = Transaction::from_payload(&raw).unwrap();
        assert_eq!(tx.amount, Decimal::from(2500));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let raw = payload(
            r#"{"id": "tx-1", "account": "A123", "amount": 1,
                "type": "transfer", "timestamp": "2026-01-10T14:00:00Z"}"#,
        );
        assert_eq!(
            Transaction::from_payload(&raw),
            Err(RejectionReason::InvalidType)
        );
    }

    #[test]
    fn test_bad_timestamp_rejected() {
        let raw = payload(
            r#"{"id": "tx-1", "account": "A123", "amount": 1,
                "type": "credit", "timestamp": "yesterday"}"#,
        );
        assert_eq!(
            Transaction::from_payload(&raw),
            Err(RejectionReason::InvalidTimestamp)
        );
    }

    #[test]
    fn test_timestamp_with_offset_normalized_to_utc() {
        let raw = payload(
            r#"{"id": "tx-1", "account": "A123", "amount": 1,
                "type": "credit", "timestamp": "2026-01-10T15:00:00+01:00"}"#,
        );
        let tx = Transaction::from_payload(&raw).unwrap();
        assert_eq!(tx.timestamp.to_rfc3339(), "2026-01-10T14:00:00+00:00");
    }

    #[test]
    fn test_serde_roundtrip() {
        let tx = Transaction::from_payload(&payload(VALID)).unwrap();
        let json = serde_json::to_string(&tx).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, back);
        // Amounts serialize as exact decimal strings
        assert!(json.contains("\"250.50\""));
        assert!(json.contains("\"type\":\"credit\""));
    }

    proptest! {
        #[test]
        fn prop_valid_payloads_validate(
            cents in 1i64..1_000_000_000,
            account_idx in 0usize..5,
            credit in proptest::bool::ANY,
            offset_secs in 0i64..86_400,
        ) {
            let accounts = ["A123", "B456", "C789", "D012", "E345"];
            let amount = Decimal::new(cents, 2);
            let tx_type = if credit { "credit" } else { "debit" };
            let ts = DateTime::parse_from_rfc3339("2026-01-10T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc)
                + chrono::Duration::seconds(offset_secs);

            let raw = payload(&format!(
                r#"{{"id": "tx-{cents}", "account": "{}", "amount": {amount},
                    "type": "{tx_type}", "timestamp": "{}"}}"#,
                accounts[account_idx],
                ts.to_rfc3339(),
            ));

            let tx = Transaction::from_payload(&raw).unwrap();
            prop_assert_eq!(tx.amount, amount);
            prop_assert_eq!(tx.account.as_str(), accounts[account_idx]);
            prop_assert_eq!(tx.timestamp, ts);
            prop_assert_eq!(tx.tx_type.is_credit(), credit);
        }
    }
}
