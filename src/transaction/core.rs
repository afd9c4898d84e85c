//! Defines the core data model for transactions and how the transaction list is persisted.

use std::fmt::Display;

use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
    Error,
    storage::{get_item, set_item},
};

// ============================================================================
// MODELS
// ============================================================================

/// The storage key holding the JSON array of every registered transaction.
pub const TRANSACTIONS_KEY: &str = "@gofinances:transactions";

/// Whether money came in or went out.
///
/// Serialized as `"positive"` and `"negative"`, which is the format of the
/// stored transaction list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    /// Money earned, e.g. a salary payment.
    #[serde(rename = "positive")]
    Income,
    /// Money spent, e.g. groceries.
    #[serde(rename = "negative")]
    Expense,
}

impl TransactionType {
    /// The value used for this type in forms and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "positive",
            TransactionType::Expense => "negative",
        }
    }

    /// Parse a form or storage value, returning `None` for anything else.
    pub fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "positive" => Some(TransactionType::Income),
            "negative" => Some(TransactionType::Expense),
            _ => None,
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered income or expense.
///
/// Transactions are only ever appended to the stored list, never edited or
/// removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// An opaque, unique identifier, see [new_transaction_id].
    pub id: String,
    /// What the transaction was for.
    pub name: String,
    /// How much money moved. Always positive, the direction is given by `transaction_type`.
    pub amount: f64,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The key of the transaction's category, see [crate::category::CATEGORIES].
    pub category: String,
    /// When the transaction was registered.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

impl Transaction {
    /// Create a transaction from already validated parts.
    pub fn new(
        id: String,
        name: &str,
        amount: f64,
        transaction_type: TransactionType,
        category: &str,
        date: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            name: name.to_owned(),
            amount,
            transaction_type,
            category: category.to_owned(),
            date,
        }
    }

    /// The amount with the sign implied by the transaction type.
    pub fn signed_amount(&self) -> f64 {
        match self.transaction_type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

/// Generate an identifier for a new transaction.
pub fn new_transaction_id() -> String {
    Uuid::new_v4().to_string()
}

// ============================================================================
// STORAGE
// ============================================================================

/// Get every stored transaction in the order they were registered.
///
/// An absent list is treated as empty.
///
/// # Errors
/// Returns an [Error::SqlError] if the list could not be read, or an
/// [Error::JSONSerializationError] if the stored value is not a valid list
/// of transactions.
pub fn get_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    match get_item(TRANSACTIONS_KEY, connection)? {
        Some(data) => serde_json::from_str(&data).map_err(Error::from),
        None => Ok(Vec::new()),
    }
}

/// Append `transaction` to the stored list.
///
/// The whole list is read, extended by one and written back, so existing
/// entries keep their order and content. Callers must hold the connection
/// lock for the duration of the call so concurrent appends do not race.
///
/// # Errors
/// Returns an error if the list could not be read, decoded, encoded or
/// written. The stored list is left unchanged in that case.
pub fn append_transaction(transaction: Transaction, connection: &Connection) -> Result<(), Error> {
    let mut transactions = get_transactions(connection)?;
    transactions.push(transaction);

    let data = serde_json::to_string(&transactions)?;
    set_item(TRANSACTIONS_KEY, &data, connection)
}

#[cfg(test)]
mod transaction_type_tests {
    use super::TransactionType;

    #[test]
    fn parses_form_values() {
        assert_eq!(
            TransactionType::from_form_value("positive"),
            Some(TransactionType::Income)
        );
        assert_eq!(
            TransactionType::from_form_value("negative"),
            Some(TransactionType::Expense)
        );
        assert_eq!(TransactionType::from_form_value(""), None);
        assert_eq!(TransactionType::from_form_value("income"), None);
    }

    #[test]
    fn serializes_as_positive_and_negative() {
        assert_eq!(
            serde_json::to_string(&TransactionType::Income).unwrap(),
            "\"positive\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionType::Expense).unwrap(),
            "\"negative\""
        );
    }
}
