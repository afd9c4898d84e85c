//! Transaction registration for the finances application.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and how the transaction list is stored
//! - Validation of the register form
//! - View handlers for the register page and the transactions listing

mod core;
mod form;
mod register_endpoint;
mod register_page;
mod transactions_page;

pub use core::{
    TRANSACTIONS_KEY, Transaction, TransactionType, append_transaction, get_transactions,
    new_transaction_id,
};
pub use register_endpoint::register_transaction_endpoint;
pub use register_page::get_register_page;
pub use transactions_page::get_transactions_page;
