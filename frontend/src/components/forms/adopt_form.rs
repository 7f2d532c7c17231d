use super::{bind_input, bind_textarea, field_error, Submitted};
use crate::components::button::{Button, ButtonSize};
use crate::components::modal::Modal;
use crate::components::Strings;
use crate::hooks::use_simulated_submit;
use crate::services::logging::Logger;
use loklok_shared::{AdoptForm, Animal, FormError, FormField, Intent, SubmissionState};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AdoptFormModalProps {
    pub animal: Animal,
    pub strings: Strings,
    pub delay_ms: u32,
    pub on_intent: Callback<Intent>,
}

/// Adoption application for the animal whose detail view was open
#[function_component(AdoptFormModal)]
pub fn adopt_form_modal(props: &AdoptFormModalProps) -> Html {
    let forms = &props.strings.forms;

    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let message = use_state(String::new);
    let error = use_state(|| Option::<FormError>::None);
    let submission = use_simulated_submit("adopt-form", props.delay_ms);

    let on_close = {
        let on_intent = props.on_intent.clone();
        Callback::from(move |_: ()| on_intent.emit(Intent::CloseAdopt))
    };

    let on_submit = {
        let form = AdoptForm {
            name: (*name).clone(),
            email: (*email).clone(),
            phone: (*phone).clone(),
            message: (*message).clone(),
        };
        let animal_id = props.animal.id;
        let error = error.clone();
        let begin = submission.actions.begin.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.to_inquiry(animal_id) {
                Ok(inquiry) => {
                    Logger::info_with_component(
                        "adopt-form",
                        &format!("sending application for animal {}", inquiry.animal_id),
                    );
                    error.set(None);
                    begin.emit(());
                }
                Err(e) => {
                    Logger::debug_with_component("adopt-form", &format!("rejected: {}", e));
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
                    message={forms.success_message_adopt.clone()}
                    close_label={forms.close.clone()}
                    {on_close}
                />
            </Modal>
        };
    }

    let pending = matches!(submission.state, SubmissionState::Pending(_));

    html! {
        <Modal class={classes!("form-modal")} on_close={on_close}>
            <h2 class="form-title">{ &forms.adopt_title }</h2>
            <p class="form-subtitle">
                { format!("{} ", forms.adopt_subtitle) }
                <strong>{ &props.animal.name }</strong>
            </p>

            <form class="site-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="adopt-name">{ FormField::Name.label(forms) }</label>
                    <input
                        type="text"
                        id="adopt-name"
                        required=true
                        value={(*name).clone()}
                        oninput={bind_input(&name)}
                        disabled={pending}
                    />
                    { field_error(&error, FormField::Name, forms) }
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="adopt-email">{ FormField::Email.label(forms) }</label>
                        <input
                            type="email"
                            id="adopt-email"
                            required=true
                            value={(*email).clone()}
                            oninput={bind_input(&email)}
                            disabled={pending}
                        />
                        { field_error(&error, FormField::Email, forms) }
                    </div>
                    <div class="form-group">
                        <label for="adopt-phone">{ FormField::Phone.label(forms) }</label>
                        <input
                            type="tel"
                            id="adopt-phone"
                            required=true
                            value={(*phone).clone()}
                            oninput={bind_input(&phone)}
                            disabled={pending}
                        />
                        { field_error(&error, FormField::Phone, forms) }
                    </div>
                </div>

                <div class="form-group">
                    <label for="adopt-message">{ FormField::Message.label(forms) }</label>
                    <textarea
                        id="adopt-message"
                        rows="4"
                        required=true
                        value={(*message).clone()}
                        oninput={bind_textarea(&message)}
                        disabled={pending}
                    />
                    { field_error(&error, FormField::Message, forms) }
                </div>

                <Button
                    button_type="submit"
                    size={ButtonSize::Lg}
                    class={classes!("form-submit")}
                    disabled={pending}
                >
                    { if pending { forms.submitting.clone() } else { forms.submit_adopt.clone() } }
                </Button>
            </form>
        </Modal>
    }
}
