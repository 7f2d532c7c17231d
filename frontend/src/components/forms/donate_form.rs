use super::{bind_input, field_error, Submitted};
use crate::components::button::{Button, ButtonSize};
use crate::components::modal::Modal;
use crate::components::Strings;
use crate::hooks::use_simulated_submit;
use crate::services::logging::Logger;
use loklok_shared::forms::{is_preset_selected, preset_amount, PRESET_VALUES};
use loklok_shared::{DonateForm, FormError, FormField, Intent, Locale, SubmissionState};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DonateFormModalProps {
    /// Amount from the tier card that opened the form
    pub prefill: Option<String>,
    pub strings: Strings,
    pub locale: Locale,
    pub delay_ms: u32,
    pub on_intent: Callback<Intent>,
}

#[function_component(DonateFormModal)]
pub fn donate_form_modal(props: &DonateFormModalProps) -> Html {
    let forms = &props.strings.forms;

    let amount = {
        let prefill = props.prefill.clone();
        use_state(move || DonateForm::with_prefill(prefill.as_deref()).amount)
    };
    let name = use_state(String::new);
    let card_number = use_state(String::new);
    let error = use_state(|| Option::<FormError>::None);
    let submission = use_simulated_submit("donate-form", props.delay_ms);

    let on_close = {
        let on_intent = props.on_intent.clone();
        Callback::from(move |_: ()| on_intent.emit(Intent::CloseDonate))
    };

    let on_submit = {
        let form = DonateForm {
            amount: (*amount).clone(),
            name: (*name).clone(),
            card_number: (*card_number).clone(),
        };
        let error = error.clone();
        let begin = submission.actions.begin.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.to_record() {
                Ok(record) => {
                    let summary = serde_json::to_string(&record).unwrap_or_default();
                    Logger::info_with_component("donate-form", &format!("sending donation {}", summary));
                    error.set(None);
                    begin.emit(());
                }
                Err(e) => {
                    Logger::debug_with_component("donate-form", &format!("rejected: {}", e));
                    error.set(Some(e));
                }
            }
        })
    };

    if submission.state == SubmissionState::Submitted {
        return html! {
            <Modal class={classes!("form-modal")} on_close={on_close.clone()}>
                <Submitted
                    title={forms.success_title.clone()}
                    message={forms.success_message_donate.clone()}
                    close_label={forms.close.clone()}
                    {on_close}
                />
            </Modal>
        };
    }

    let pending = matches!(submission.state, SubmissionState::Pending(_));

    let presets = PRESET_VALUES.iter().map(|&value| {
        let label = preset_amount(props.locale, value);
        let selected = is_preset_selected(&amount, value);
        let onclick = {
            let amount = amount.clone();
            let label = label.clone();
            Callback::from(move |_: MouseEvent| amount.set(label.clone()))
        };
        html! {
            <button
                type="button"
                class={classes!("amount-preset", selected.then_some("active"))}
                disabled={pending}
                {onclick}
            >
                { label }
            </button>
        }
    });

    html! {
        <Modal class={classes!("form-modal")} on_close={on_close}>
            <h2 class="form-title">{ format!("❤ {}", forms.donate_title) }</h2>

            <form class="site-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="donate-amount">{ &forms.amount_label }</label>
                    <div class="amount-presets">{ for presets }</div>
                    <input
                        type="text"
                        id="donate-amount"
                        placeholder={props.strings.donate.custom_amount.clone()}
                        value={(*amount).clone()}
                        oninput={bind_input(&amount)}
                        disabled={pending}
                    />
                </div>

                <div class="form-group">
                    <label for="donate-name">{ FormField::Name.label(forms) }</label>
                    <input
                        type="text"
                        id="donate-name"
                        required=true
                        value={(*name).clone()}
                        oninput={bind_input(&name)}
                        disabled={pending}
                    />
                    { field_error(&error, FormField::Name, forms) }
                </div>

                <div class="form-group">
                    <label for="donate-card">{ FormField::CardNumber.label(forms) }</label>
                    <input
                        type="text"
                        id="donate-card"
                        inputmode="numeric"
                        autocomplete="cc-number"
                        placeholder="0000 0000 0000 0000"
                        required=true
                        value={(*card_number).clone()}
                        oninput={bind_input(&card_number)}
                        disabled={pending}
                    />
                    { field_error(&error, FormField::CardNumber, forms) }
                </div>

                <Button
                    button_type="submit"
                    size={ButtonSize::Lg}
                    class={classes!("form-submit")}
                    disabled={pending}
                >
                    { if pending { forms.submitting.clone() } else { forms.submit_donate.clone() } }
                </Button>
            </form>
        </Modal>
    }
}
