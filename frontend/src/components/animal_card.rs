use super::Strings;
use loklok_shared::{Animal, AnimalId, Gender, Locale};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AnimalCardProps {
    pub animal: Animal,
    pub strings: Strings,
    pub locale: Locale,
    pub on_select: Callback<AnimalId>,
}

pub fn gender_symbol(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "♂",
        Gender::Female => "♀",
    }
}

#[function_component(AnimalCard)]
pub fn animal_card(props: &AnimalCardProps) -> Html {
    let animal = &props.animal;
    let labels = &props.strings.labels;

    let on_click = {
        let on_select = props.on_select.clone();
        let id = animal.id;
        Callback::from(move |_: MouseEvent| on_select.emit(id))
    };

    html! {
        <article
            class={classes!("animal-card", animal.adopted.then_some("animal-card-adopted"))}
            onclick={on_click}
        >
            <div class="animal-card-image">
                <img src={animal.image.clone()} alt={animal.name.clone()} loading="lazy" />
                if animal.adopted {
                    <span class="animal-card-badge">{ &labels.adopted_badge }</span>
                }
            </div>
            <div class="animal-card-body">
                <div class="animal-card-heading">
                    <h3 class="animal-card-name">{ &animal.name }</h3>
                    <span class="animal-card-gender" title={props.strings.gender_label(animal.gender).to_string()}>
                        { gender_symbol(animal.gender) }
                    </span>
                </div>
                <p class="animal-card-meta">{ format!("{} • {}", animal.breed, animal.age) }</p>
                <ul class="animal-card-tags">
                    { for animal.tags(props.locale).iter().map(|tag| html! {
                        <li class="tag">{ tag }</li>
                    }) }
                </ul>
                <span class="animal-card-cta">{ format!("{} →", labels.meet_me) }</span>
            </div>
        </article>
    }
}
