pub mod adopt_form;
pub mod donate_form;

pub use adopt_form::AdoptFormModal;
pub use donate_form::DonateFormModal;

use super::button::Button;
use loklok_shared::i18n::FormStrings;
use loklok_shared::{FormError, FormField};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

pub fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

pub fn bind_textarea(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

/// Inline message under `field` when the last validation failed on it
pub fn field_error(error: &Option<FormError>, field: FormField, strings: &FormStrings) -> Html {
    match error {
        Some(error) if error.field() == field => html! {
            <p class="form-message error" role="alert">{ error.message(strings) }</p>
        },
        _ => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct SubmittedProps {
    pub title: String,
    pub message: String,
    pub close_label: String,
    pub on_close: Callback<()>,
}

/// Thank-you panel shown once a simulated submission completes
#[function_component(Submitted)]
pub fn submitted(props: &SubmittedProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="form-submitted">
            <span class="form-submitted-icon">{"✓"}</span>
            <h3>{ &props.title }</h3>
            <p>{ &props.message }</p>
            <Button onclick={on_close}>{ props.close_label.clone() }</Button>
        </div>
    }
}
