#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod http;

pub(crate) use form::{
    assert_form_input, assert_form_submit_button_with_text, assert_hx_endpoint, must_get_form,
};
pub(crate) use http::{
    assert_alert_message, assert_content_type, assert_hx_redirect, assert_status_ok,
    assert_valid_html, parse_html_document, parse_html_fragment,
};
