//! Alert system for displaying error messages to users.
//!
//! Alerts are rendered as HTML fragments that htmx swaps into the
//! `#alert-container` element defined by the base page template.

use maud::{Markup, html};

/// An alert message shown in the page's alert container.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// An error message with extra details.
    Error { message: String, details: String },
    /// An error message without details.
    ErrorSimple { message: String },
}

impl Alert {
    pub fn into_html(self) -> Markup {
        let (message, details) = match self {
            Alert::Error { message, details } => (message, details),
            Alert::ErrorSimple { message } => (message, String::new()),
        };

        html! {
            div
                role="alert"
                class=(ERROR_STYLE)
            {
                div class="flex-1"
                {
                    p class="font-medium alert-message" { (message) }

                    @if !details.is_empty() {
                        p class="mt-1 text-sm alert-details" { (details) }
                    }
                }

                button
                    type="button"
                    aria-label="Fechar"
                    class="ms-3 -mx-1.5 -my-1.5 rounded-lg p-1.5 inline-flex h-8 w-8"
                    onclick="this.closest('#alert-container').classList.add('hidden')"
                {
                    "✕"
                }
            }
        }
    }
}

const ERROR_STYLE: &str = "flex items-start p-4 mb-4 text-red-800 border \
    border-red-300 rounded-lg bg-red-50 dark:bg-gray-800 dark:text-red-400 \
    dark:border-red-800";

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::Alert;

    fn text_of(html: &Html, selector: &str) -> Option<String> {
        html.select(&Selector::parse(selector).unwrap())
            .next()
            .map(|element| element.text().collect::<String>().trim().to_owned())
    }

    #[test]
    fn renders_message_and_details() {
        let alert = Alert::Error {
            message: "Não foi possível salvar".to_owned(),
            details: "Tente novamente".to_owned(),
        };

        let html = Html::parse_fragment(&alert.into_html().into_string());

        assert_eq!(
            text_of(&html, ".alert-message").as_deref(),
            Some("Não foi possível salvar")
        );
        assert_eq!(
            text_of(&html, ".alert-details").as_deref(),
            Some("Tente novamente")
        );
    }

    #[test]
    fn simple_error_omits_details() {
        let alert = Alert::ErrorSimple {
            message: "Selecione a categoria".to_owned(),
        };

        let html = Html::parse_fragment(&alert.into_html().into_string());

        assert_eq!(text_of(&html, ".alert-details"), None);
    }
}
