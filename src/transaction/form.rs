//! Form data and field validation for registering a transaction.

use serde::{Deserialize, Serialize};

use crate::{category::CategorySelection, transaction::TransactionType};

pub const NAME_REQUIRED: &str = "Nome é obrigatório";
pub const AMOUNT_REQUIRED: &str = "O valor é obrigatório";
pub const AMOUNT_NOT_A_NUMBER: &str = "Informe um valor númerico";
pub const AMOUNT_NOT_POSITIVE: &str = "O valor não pode ser negativo";
pub const AMOUNT_TOO_PRECISE: &str = "Informe no máximo duas casas decimais";
pub const AMOUNT_TOO_LARGE: &str = "O valor é muito alto";

/// The largest amount that can be registered.
pub const MAX_AMOUNT: f64 = 999_999_999_999.99;

/// The raw form data submitted from the register page.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TransactionForm {
    #[serde(default)]
    pub name: String,
    /// The amount as typed, parsed during validation.
    #[serde(default)]
    pub amount: String,
    /// Either "positive" or "negative", absent if neither button was chosen.
    #[serde(default)]
    pub transaction_type: Option<String>,
    /// The selected category key, or the placeholder key.
    #[serde(default)]
    pub category: Option<String>,
}

/// The fields that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedFields {
    pub name: String,
    pub amount: f64,
}

/// Validation messages for each field, `None` where the field is valid.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub amount: Option<&'static str>,
}

/// Check the name and amount fields.
///
/// All fields are checked so that every problem can be shown at once.
///
/// # Errors
/// Returns the message for each invalid field.
pub fn validate_fields(form: &TransactionForm) -> Result<ValidatedFields, FieldErrors> {
    let name = form.name.trim();
    let name_error = name.is_empty().then_some(NAME_REQUIRED);

    let amount = parse_amount(&form.amount);

    match (name_error, amount) {
        (None, Ok(amount)) => Ok(ValidatedFields {
            name: name.to_owned(),
            amount,
        }),
        (name_error, amount) => Err(FieldErrors {
            name: name_error,
            amount: amount.err(),
        }),
    }
}

fn parse_amount(text: &str) -> Result<f64, &'static str> {
    let text = text.trim();

    if text.is_empty() {
        return Err(AMOUNT_REQUIRED);
    }

    let amount = match text.parse::<f64>() {
        Ok(amount) if amount.is_finite() => amount,
        _ => return Err(AMOUNT_NOT_A_NUMBER),
    };

    if amount <= 0.0 {
        return Err(AMOUNT_NOT_POSITIVE);
    }

    if amount > MAX_AMOUNT {
        return Err(AMOUNT_TOO_LARGE);
    }

    // Whole cents only, e.g. "0.001" and "1e-3" are rejected.
    if (amount * 100.0).round() / 100.0 != amount {
        return Err(AMOUNT_TOO_PRECISE);
    }

    Ok(amount)
}

/// Everything the register form displays.
///
/// The register page starts from [FormState::default]; after a failed
/// submission the form is rendered again from the submitted values.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FormState {
    pub name: String,
    pub amount: String,
    pub transaction_type: Option<TransactionType>,
    pub category: CategorySelection,
    pub errors: FieldErrors,
}
