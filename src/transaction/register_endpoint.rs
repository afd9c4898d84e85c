//! Defines the endpoint for registering a new transaction.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use rusqlite::Connection;
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    category::{CategorySelection, find_category},
    endpoints,
    transaction::{
        Transaction, TransactionType, append_transaction,
        form::{FormState, TransactionForm, validate_fields},
        new_transaction_id,
        register_page::register_form_view,
    },
};

/// The state needed to register a transaction.
#[derive(Debug, Clone)]
pub struct RegisterTransactionState {
    /// The database connection holding the stored transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for RegisterTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for registering a new transaction.
///
/// Invalid fields re-render the form with the error messages, a missing type
/// or category is reported with an alert, and on success the client is
/// redirected to the transactions listing.
pub async fn register_transaction_endpoint(
    State(state): State<RegisterTransactionState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let transaction_type = form
        .transaction_type
        .as_deref()
        .and_then(TransactionType::from_form_value);
    let category_key = form.category.as_deref().unwrap_or_default();
    let category = find_category(category_key);

    let fields = match validate_fields(&form) {
        Ok(fields) => fields,
        Err(errors) => {
            let form_state = FormState {
                name: form.name,
                amount: form.amount,
                transaction_type,
                category: category.map(CategorySelection::from).unwrap_or_default(),
                errors,
            };

            return register_form_view(&form_state).into_response();
        }
    };

    let Some(transaction_type) = transaction_type else {
        return Error::MissingTransactionType.into_alert_response();
    };

    let category = match category {
        Some(category) => category,
        None if category_key.is_empty() || category_key == CategorySelection::UNSELECTED_KEY => {
            return Error::MissingCategory.into_alert_response();
        }
        None => {
            tracing::warn!("Tried to register a transaction with unknown category {category_key:?}");
            return Error::InvalidCategory(category_key.to_owned()).into_alert_response();
        }
    };

    let transaction = Transaction::new(
        new_transaction_id(),
        &fields.name,
        fields.amount,
        transaction_type,
        category.key,
        OffsetDateTime::now_utc(),
    );

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    if let Err(error) = append_transaction(transaction, &connection) {
        tracing::error!("could not save transaction: {error}");

        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
