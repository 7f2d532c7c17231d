use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::nav_bar::navigate;
use crate::components::Strings;
use loklok_shared::{Anchor, Intent};
use yew::prelude::*;

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1548199973-03cce0bbc87b?auto=format&fit=crop&w=1200&q=80";

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub strings: Strings,
    pub on_intent: Callback<Intent>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let hero = &props.strings.hero;
    let labels = &props.strings.labels;

    let on_image_click = {
        let on_intent = props.on_intent.clone();
        Callback::from(move |_: MouseEvent| on_intent.emit(Intent::ShowGallery))
    };

    html! {
        <section id={Anchor::Home.id()} class="hero">
            <div class="hero-copy">
                <span class="hero-badge">{ format!("⚠ {}", labels.urgent_badge) }</span>
                <h1 class="hero-title">{ &hero.title }</h1>
                <p class="hero-subtitle">{ &hero.subtitle }</p>
                <div class="hero-actions">
                    <Button size={ButtonSize::Lg} onclick={navigate(&props.on_intent, Anchor::Pets)}>
                        { hero.cta_primary.clone() }
                    </Button>
                    <Button
                        variant={ButtonVariant::Outline}
                        size={ButtonSize::Lg}
                        onclick={navigate(&props.on_intent, Anchor::Donate)}
                    >
                        { hero.cta_secondary.clone() }
                    </Button>
                </div>
            </div>
            <div class="hero-visual" onclick={on_image_click}>
                <img src={HERO_IMAGE} alt={hero.title.clone()} />
                <div class="hero-visual-badge">
                    <span class="hero-visual-badge-title">{ &labels.hero_badge_title }</span>
                    <span class="hero-visual-badge-value">{ &labels.hero_badge_value }</span>
                </div>
            </div>
        </section>
    }
}
