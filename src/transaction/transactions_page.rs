//! Defines the route handler for the page that lists the registered transactions.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use time::{UtcOffset, macros::format_description};

use crate::{
    AppState, Error,
    category::find_category,
    endpoints,
    html::{
        LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        base, format_currency,
    },
    navigation::NavBar,
    timezone::get_local_offset,
    transaction::{Transaction, TransactionType, get_transactions},
};

/// The state needed for the transactions listing.
#[derive(Debug, Clone)]
pub struct TransactionsPageState {
    /// The database connection holding the stored transactions.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,
}

impl FromRef<AppState> for TransactionsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

fn transaction_row(transaction: &Transaction, local_offset: UtcOffset) -> Markup {
    let amount_style = match transaction.transaction_type {
        TransactionType::Income => "text-green-600 dark:text-green-400",
        TransactionType::Expense => "text-red-600 dark:text-red-400",
    };
    let category_name = find_category(&transaction.category)
        .map(|category| category.name)
        .unwrap_or(transaction.category.as_str());
    let date = transaction
        .date
        .to_offset(local_offset)
        .format(format_description!("[day]/[month]/[year]"))
        .unwrap_or_else(|_| transaction.date.date().to_string());

    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (transaction.name) }
            td class={ (TABLE_CELL_STYLE) " " (amount_style) }
            {
                (format_currency(transaction.signed_amount()))
            }
            td class=(TABLE_CELL_STYLE) { (category_name) }
            td class=(TABLE_CELL_STYLE) { time datetime=(transaction.date.date()) { (date) } }
        }
    }
}

fn transactions_view(transactions: &[Transaction], local_offset: UtcOffset) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h2 class="mb-4 text-xl font-bold" { "Listagem" }

            @if transactions.is_empty() {
                p
                {
                    "Nenhuma transação cadastrada. "
                    a href=(endpoints::REGISTER_VIEW) class=(LINK_STYLE) { "Cadastrar transação" }
                }
            } @else {
                div class="relative overflow-x-auto shadow-md sm:rounded-lg w-full max-w-4xl"
                {
                    table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Nome" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Valor" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Categoria" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Data" }
                            }
                        }

                        tbody
                        {
                            @for transaction in transactions {
                                (transaction_row(transaction, local_offset))
                            }
                        }
                    }
                }
            }
        }
    };

    base("Listagem", &content)
}

/// Renders the list of registered transactions in the order they were registered.
pub async fn get_transactions_page(
    State(state): State<TransactionsPageState>,
) -> Result<Response, Error> {
    let local_offset = get_local_offset(&state.local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        Error::InvalidTimezoneError(state.local_timezone.clone())
    })?;

    let transactions = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        // Storage errors are logged when rendered as the error page.
        get_transactions(&connection)?
    };

    Ok(transactions_view(&transactions, local_offset).into_response())
}

#[cfg(test)]
mod transactions_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use rusqlite::Connection;
    use scraper::Selector;
    use time::macros::datetime;

    use crate::{
        db::initialize,
        endpoints,
        storage::set_item,
        test_utils::{assert_content_type, assert_status_ok, assert_valid_html, parse_html_document},
        transaction::{
            TRANSACTIONS_KEY, Transaction, TransactionType, append_transaction,
            get_transactions_page,
        },
    };

    use super::TransactionsPageState;

    fn get_test_state(local_timezone: &str) -> TransactionsPageState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        TransactionsPageState {
            db_connection: Arc::new(Mutex::new(conn)),
            local_timezone: local_timezone.to_owned(),
        }
    }

    fn add_transaction(state: &TransactionsPageState, transaction: Transaction) {
        let connection = state.db_connection.lock().unwrap();
        append_transaction(transaction, &connection).unwrap();
    }

    #[tokio::test]
    async fn lists_transactions_in_registration_order() {
        let state = get_test_state("Etc/UTC");
        add_transaction(
            &state,
            Transaction::new(
                "1".to_owned(),
                "Salário",
                5000.0,
                TransactionType::Income,
                "salary",
                datetime!(2024-01-05 09:30 UTC),
            ),
        );
        add_transaction(
            &state,
            Transaction::new(
                "2".to_owned(),
                "Almoço",
                25.9,
                TransactionType::Expense,
                "food",
                datetime!(2024-01-06 12:00 UTC),
            ),
        );

        let response = get_transactions_page(State(state)).await.unwrap();

        assert_status_ok(&response);
        assert_content_type(&response, "text/html; charset=utf-8");
        let document = parse_html_document(response).await;
        assert_valid_html(&document);

        let rows = document
            .select(&Selector::parse("tbody tr").unwrap())
            .map(|row| {
                row.select(&Selector::parse("td").unwrap())
                    .map(|cell| cell.text().collect::<String>().trim().to_owned())
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "Salário");
        assert_eq!(rows[0][2], "Salário");
        assert_eq!(rows[0][3], "05/01/2024");
        assert_eq!(rows[1][0], "Almoço");
        assert_eq!(rows[1][1], "-R$ 25,90");
        assert_eq!(rows[1][2], "Alimentação");
        assert_eq!(rows[1][3], "06/01/2024");
    }

    #[tokio::test]
    async fn smallest_and_largest_amounts_are_listed_in_reais() {
        let state = get_test_state("Etc/UTC");
        add_transaction(
            &state,
            Transaction::new(
                "1".to_owned(),
                "Troco",
                0.01,
                TransactionType::Expense,
                "food",
                datetime!(2024-01-05 09:30 UTC),
            ),
        );
        add_transaction(
            &state,
            Transaction::new(
                "2".to_owned(),
                "Herança",
                999_999_999_999.99,
                TransactionType::Income,
                "salary",
                datetime!(2024-01-06 12:00 UTC),
            ),
        );

        let response = get_transactions_page(State(state)).await.unwrap();

        let document = parse_html_document(response).await;
        let amounts = document
            .select(&Selector::parse("tbody td:nth-child(2)").unwrap())
            .map(|cell| cell.text().collect::<String>().trim().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(amounts, vec!["-R$ 0,01", "R$ 999.999.999.999,99"]);
    }

    #[tokio::test]
    async fn dates_use_local_timezone() {
        let state = get_test_state("America/Sao_Paulo");
        add_transaction(
            &state,
            Transaction::new(
                "1".to_owned(),
                "Pizza",
                60.0,
                TransactionType::Expense,
                "food",
                datetime!(2024-01-06 01:00 UTC),
            ),
        );

        let response = get_transactions_page(State(state)).await.unwrap();

        let document = parse_html_document(response).await;
        let date = document
            .select(&Selector::parse("tbody td:last-child").unwrap())
            .next()
            .unwrap()
            .text()
            .collect::<String>();
        assert_eq!(date.trim(), "05/01/2024");
    }

    #[tokio::test]
    async fn empty_list_links_to_register_page() {
        let state = get_test_state("Etc/UTC");

        let response = get_transactions_page(State(state)).await.unwrap();

        let document = parse_html_document(response).await;
        assert_eq!(
            document
                .select(&Selector::parse("table").unwrap())
                .count(),
            0
        );
        let link = document
            .select(&Selector::parse(&format!("a[href='{}']", endpoints::REGISTER_VIEW)).unwrap())
            .find(|link| link.text().collect::<String>() == "Cadastrar transação");
        assert!(link.is_some(), "want link to the register page");
    }

    #[tokio::test]
    async fn unknown_category_shows_key() {
        let state = get_test_state("Etc/UTC");
        add_transaction(
            &state,
            Transaction::new(
                "1".to_owned(),
                "Presente",
                80.0,
                TransactionType::Expense,
                "gifts",
                datetime!(2024-01-06 12:00 UTC),
            ),
        );

        let response = get_transactions_page(State(state)).await.unwrap();

        let document = parse_html_document(response).await;
        let cells = document
            .select(&Selector::parse("tbody td").unwrap())
            .map(|cell| cell.text().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(cells[2].trim(), "gifts");
    }

    #[tokio::test]
    async fn corrupt_storage_is_an_error() {
        let state = get_test_state("Etc/UTC");
        {
            let connection = state.db_connection.lock().unwrap();
            set_item(TRANSACTIONS_KEY, "{", &connection).unwrap();
        }

        let result = get_transactions_page(State(state)).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn invalid_timezone_is_an_error() {
        let state = get_test_state("Not/A_Timezone");

        let response = match get_transactions_page(State(state)).await {
            Ok(_) => panic!("want an error for an invalid timezone"),
            Err(error) => axum::response::IntoResponse::into_response(error),
        };

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
