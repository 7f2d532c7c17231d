use crate::components::button::{Button, ButtonSize};
use crate::components::Strings;
use loklok_shared::{Anchor, Intent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DonateProps {
    pub strings: Strings,
    pub on_intent: Callback<Intent>,
}

#[function_component(Donate)]
pub fn donate(props: &DonateProps) -> Html {
    let donate = &props.strings.donate;

    let tiers = props.strings.donation_tiers().into_iter().map(|(amount, title, description)| {
        let on_intent = props.on_intent.clone();
        let prefill = amount.to_string();
        let onclick = Callback::from(move |_: MouseEvent| {
            on_intent.emit(Intent::OpenDonate(Some(prefill.clone())));
        });
        html! {
            <button type="button" class="donate-tier" {onclick}>
                <span class="donate-tier-amount">{ amount }</span>
                <h3 class="donate-tier-title">{ title }</h3>
                <p class="donate-tier-description">{ description }</p>
            </button>
        }
    });

    let on_generic = {
        let on_intent = props.on_intent.clone();
        Callback::from(move |_: MouseEvent| on_intent.emit(Intent::OpenDonate(None)))
    };

    html! {
        <section id={Anchor::Donate.id()} class="donate">
            <h2 class="section-title">{ &donate.title }</h2>
            <p class="section-lead">{ &donate.subtitle }</p>
            <div class="donate-tiers">{ for tiers }</div>
            <Button size={ButtonSize::Lg} onclick={on_generic}>
                { format!("❤ {}", donate.btn) }
            </Button>
        </section>
    }
}
