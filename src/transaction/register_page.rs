//! Defines the route handler and templates for the page for registering a transaction.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

use crate::{
    category::{CATEGORY_MODAL_ID, category_field},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_ERROR_STYLE, FORM_RADIO_INPUT_STYLE,
        FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base, loading_spinner,
    },
    navigation::NavBar,
    transaction::{TransactionType, form::FormState},
};

fn transaction_type_button(
    transaction_type: TransactionType,
    title: &str,
    icon: &str,
    selected: Option<TransactionType>,
) -> Markup {
    let id = format!("transaction-type-{transaction_type}");

    html! {
        div class="flex flex-1"
        {
            input
                type="radio"
                name="transaction_type"
                id=(id)
                value=(transaction_type.as_str())
                checked[selected == Some(transaction_type)]
                class=(FORM_RADIO_INPUT_STYLE);

            label for=(id) class=(FORM_RADIO_LABEL_STYLE)
            {
                span aria-hidden="true" class="me-2" { (icon) }
                (title)
            }
        }
    }
}

/// The register form, rendered from `state`.
///
/// Successful submissions redirect away from the page; failed field
/// validation swaps this form in again with the errors filled in.
pub fn register_form_view(state: &FormState) -> Markup {
    let spinner = loading_spinner();

    html! {
        form
            hx-post=(endpoints::TRANSACTIONS_API)
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            div
            {
                input
                    name="name"
                    id="name"
                    type="text"
                    placeholder="Nome"
                    autocapitalize="sentences"
                    autocorrect="off"
                    required
                    autofocus
                    value=(state.name)
                    class=(FORM_TEXT_INPUT_STYLE);

                @if let Some(error) = state.errors.name {
                    p class=(FORM_ERROR_STYLE) { (error) }
                }
            }

            div
            {
                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="0.01"
                    placeholder="Preço"
                    inputmode="decimal"
                    required
                    value=(state.amount)
                    class=(FORM_TEXT_INPUT_STYLE);

                @if let Some(error) = state.errors.amount {
                    p class=(FORM_ERROR_STYLE) { (error) }
                }
            }

            div class="flex gap-2"
            {
                (transaction_type_button(TransactionType::Income, "Income", "↑", state.transaction_type))
                (transaction_type_button(TransactionType::Expense, "Outcome", "↓", state.transaction_type))
            }

            (category_field(&state.category))

            button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
            {
                span
                    id="indicator"
                    class="inline htmx-indicator"
                {
                    (spinner)
                }
                " Enviar"
            }
        }
    }
}

fn register_view() -> Markup {
    let nav_bar = NavBar::new(endpoints::REGISTER_VIEW).into_html();
    let form = register_form_view(&FormState::default());

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h2 class="w-full mb-4 text-xl font-bold" { "Cadastro" }

            (form)
        }

        div id=(CATEGORY_MODAL_ID) {}
    };

    base("Cadastro", &content)
}

/// Renders the page for registering a transaction.
///
/// The form always starts empty, so returning here after a successful
/// submission shows a reset form.
pub async fn get_register_page() -> Response {
    register_view().into_response()
}
