use crate::components::Strings;
use loklok_shared::Anchor;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub strings: Strings,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let about = &props.strings.about;

    html! {
        <section id={Anchor::About.id()} class="about">
            <h2 class="section-title">{ &about.title }</h2>
            <p class="section-lead">{ &about.text }</p>
            <div class="about-cards">
                <div class="about-card">
                    <span class="about-card-icon">{"🎯"}</span>
                    <h3>{ &about.mission }</h3>
                    <p>{ &about.mission_text }</p>
                </div>
                <div class="about-card">
                    <span class="about-card-icon">{"👁"}</span>
                    <h3>{ &about.vision }</h3>
                    <p>{ &about.vision_text }</p>
                </div>
            </div>
        </section>
    }
}
