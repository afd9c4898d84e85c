//! The API endpoints URIs.

/// The root route which redirects to the transactions listing.
pub const ROOT: &str = "/";
/// The page listing the stored transactions.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The page for registering a new transaction.
pub const REGISTER_VIEW: &str = "/transactions/new";
/// The modal for picking a category.
pub const CATEGORY_PICKER: &str = "/categories/picker";
/// The fragment showing the chosen category in the register form.
pub const CATEGORY_SELECTION: &str = "/categories/selection";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to register transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";
