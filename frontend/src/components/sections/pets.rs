use crate::components::animal_card::AnimalCard;
use crate::components::button::{Button, ButtonVariant};
use crate::components::Strings;
use loklok_shared::{Anchor, Animal, Intent, Locale};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PetsProps {
    pub strings: Strings,
    pub locale: Locale,
    /// Already cut down to the home preview
    pub animals: Vec<Animal>,
    pub on_intent: Callback<Intent>,
}

#[function_component(Pets)]
pub fn pets(props: &PetsProps) -> Html {
    let strings = props.strings;

    let on_view_all = {
        let on_intent = props.on_intent.clone();
        Callback::from(move |_: MouseEvent| on_intent.emit(Intent::ShowGallery))
    };
    let on_select = props.on_intent.reform(Intent::SelectAnimal);

    html! {
        <section id={Anchor::Pets.id()} class="pets">
            <div class="pets-header">
                <div>
                    <span class="section-eyebrow">{ &strings.nav.pets }</span>
                    <h2 class="section-title">{ &strings.labels.pets_heading }</h2>
                </div>
                <Button variant={ButtonVariant::Secondary} onclick={on_view_all}>
                    { format!("{} →", strings.filters.view_all_btn) }
                </Button>
            </div>
            <div class="animal-grid">
                { for props.animals.iter().map(|animal| html! {
                    <AnimalCard
                        key={animal.id.to_string()}
                        animal={animal.clone()}
                        strings={strings}
                        locale={props.locale}
                        on_select={on_select.clone()}
                    />
                }) }
            </div>
        </section>
    }
}
