//! Transaction categories and the modal used to pick one.
//!
//! The category catalogue is fixed. The register form shows the current
//! [CategorySelection] as a button; clicking it loads the picker modal
//! ([get_category_picker]), and confirming a choice swaps in a new category
//! field ([get_category_selection]) while emptying the modal.

use axum::{
    extract::Query,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    Error, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_RADIO_INPUT_STYLE,
        FORM_RADIO_LABEL_STYLE,
    },
};

/// A category that a transaction can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// The identifier stored with each transaction.
    pub key: &'static str,
    /// The display name.
    pub name: &'static str,
}

/// Every category a transaction can be registered with.
pub const CATEGORIES: &[Category] = &[
    Category {
        key: "purchases",
        name: "Compras",
    },
    Category {
        key: "food",
        name: "Alimentação",
    },
    Category {
        key: "salary",
        name: "Salário",
    },
    Category {
        key: "car",
        name: "Carro",
    },
    Category {
        key: "leisure",
        name: "Lazer",
    },
    Category {
        key: "studies",
        name: "Estudos",
    },
];

/// Look up a category by its key.
pub fn find_category(key: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.key == key)
}

/// The category currently chosen in the register form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySelection {
    pub key: String,
    pub name: String,
}

impl CategorySelection {
    /// The key of the placeholder selection shown before the user picks a category.
    pub const UNSELECTED_KEY: &'static str = "category";
    const UNSELECTED_NAME: &'static str = "Categoria";

    /// Whether the user has picked a category.
    pub fn is_selected(&self) -> bool {
        self.key != Self::UNSELECTED_KEY
    }
}

impl Default for CategorySelection {
    fn default() -> Self {
        Self {
            key: Self::UNSELECTED_KEY.to_owned(),
            name: Self::UNSELECTED_NAME.to_owned(),
        }
    }
}

impl From<&Category> for CategorySelection {
    fn from(category: &Category) -> Self {
        Self {
            key: category.key.to_owned(),
            name: category.name.to_owned(),
        }
    }
}

/// The id of the element that holds the category picker modal.
pub const CATEGORY_MODAL_ID: &str = "category-modal";
const CATEGORY_FIELD_ID: &str = "category-field";

/// The category field of the register form.
///
/// Holds the selected key in a hidden input and a button that opens the picker.
pub fn category_field(selection: &CategorySelection) -> Markup {
    let picker_url = format!("{}?selected={}", endpoints::CATEGORY_PICKER, selection.key);
    let text_style = if selection.is_selected() {
        "text-gray-900 dark:text-white"
    } else {
        "text-gray-500 dark:text-gray-400"
    };

    html! {
        div id=(CATEGORY_FIELD_ID)
        {
            input type="hidden" name="category" value=(selection.key);

            button
                type="button"
                hx-get=(picker_url)
                hx-target={ "#" (CATEGORY_MODAL_ID) }
                class="flex w-full justify-between items-center p-2.5 rounded text-sm \
                    bg-gray-50 dark:bg-gray-700 border border-gray-300 dark:border-gray-600"
            {
                span class=(text_style) { (selection.name) }
                span aria-hidden="true" { "›" }
            }
        }
    }
}

fn category_picker_view(selected_key: Option<&str>) -> Markup {
    html! {
        div
            class="fixed inset-0 z-50 flex items-center justify-center bg-gray-900/50"
        {
            form
                hx-get=(endpoints::CATEGORY_SELECTION)
                hx-target={ "#" (CATEGORY_FIELD_ID) }
                hx-swap="outerHTML"
                hx-target-error="#alert-container"
                class="w-full max-w-md p-6 space-y-4 bg-white rounded-lg dark:bg-gray-800"
            {
                h2 class="text-xl font-bold" { "Categoria" }

                ul class="space-y-2"
                {
                    @for category in CATEGORIES {
                        li class="flex"
                        {
                            input
                                type="radio"
                                name="category"
                                id={ "category-" (category.key) }
                                value=(category.key)
                                checked[selected_key == Some(category.key)]
                                class=(FORM_RADIO_INPUT_STYLE);

                            label
                                for={ "category-" (category.key) }
                                class=(FORM_RADIO_LABEL_STYLE)
                            {
                                (category.name)
                            }
                        }
                    }
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Selecionar" }

                button
                    type="button"
                    class=(BUTTON_SECONDARY_STYLE)
                    onclick={ "document.getElementById('" (CATEGORY_MODAL_ID) "').innerHTML = ''" }
                {
                    "Cancelar"
                }
            }
        }
    }
}

/// The query parameters for the category picker.
#[derive(Debug, Deserialize)]
pub struct CategoryPickerQuery {
    /// The key of the category currently shown in the register form.
    pub selected: Option<String>,
}

/// Render the category picker modal.
pub async fn get_category_picker(Query(query): Query<CategoryPickerQuery>) -> Response {
    category_picker_view(query.selected.as_deref()).into_response()
}

/// The query parameters sent when confirming a category in the picker.
#[derive(Debug, Deserialize)]
pub struct CategorySelectionQuery {
    pub category: Option<String>,
}

/// Render the register form's category field for the chosen category and close the picker.
pub async fn get_category_selection(Query(query): Query<CategorySelectionQuery>) -> Response {
    let Some(key) = query.category else {
        return Error::MissingCategory.into_alert_response();
    };

    let Some(category) = find_category(&key) else {
        tracing::warn!("Tried to select unknown category {key:?}");
        return Error::InvalidCategory(key).into_alert_response();
    };

    html! {
        (category_field(&CategorySelection::from(category)))
        div id=(CATEGORY_MODAL_ID) hx-swap-oob="true" {}
    }
    .into_response()
}
