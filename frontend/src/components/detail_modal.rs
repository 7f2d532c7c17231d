use super::button::{Button, ButtonSize, ButtonVariant};
use super::modal::Modal;
use super::Strings;
use loklok_shared::{Animal, Intent, Locale};
use yew::prelude::*;

pub fn tag_label(tag: &str) -> String {
    format!("#{}", tag)
}

#[derive(Properties, PartialEq)]
pub struct DetailModalProps {
    pub animal: Animal,
    pub strings: Strings,
    pub locale: Locale,
    /// Home layout variant: adds the health block and a back button
    #[prop_or_default]
    pub full: bool,
    pub on_intent: Callback<Intent>,
}

#[function_component(DetailModal)]
pub fn detail_modal(props: &DetailModalProps) -> Html {
    let animal = &props.animal;
    let strings = props.strings;
    let details = &strings.details;

    let on_close = {
        let on_intent = props.on_intent.clone();
        Callback::from(move |_: ()| on_intent.emit(Intent::CloseDetail))
    };
    let on_back = {
        let on_intent = props.on_intent.clone();
        Callback::from(move |_: MouseEvent| on_intent.emit(Intent::CloseDetail))
    };
    let on_adopt = {
        let on_intent = props.on_intent.clone();
        Callback::from(move |_: MouseEvent| on_intent.emit(Intent::OpenAdopt))
    };

    let adopt_label = if animal.adopted {
        strings.labels.found_home.clone()
    } else {
        format!("❤ {}", details.adopt_me)
    };

    let facts = [
        (details.age.as_str(), animal.age.as_str()),
        (details.gender.as_str(), strings.gender_label(animal.gender)),
        (details.size.as_str(), strings.size_label(animal.size)),
    ];

    html! {
        <Modal class={classes!("detail-modal")} {on_close}>
            <div class="detail-image">
                <img src={animal.image.clone()} alt={animal.name.clone()} />
            </div>
            <div class="detail-body">
                <h2 class="detail-name">{ &animal.name }</h2>
                <p class="detail-breed">{ &animal.breed }</p>

                <div class="detail-facts">
                    { for facts.into_iter().map(|(label, value)| html! {
                        <div class="detail-fact">
                            <span class="detail-fact-label">{ label }</span>
                            <span class="detail-fact-value">{ value }</span>
                        </div>
                    }) }
                </div>

                <h3 class="detail-heading">{ &details.about }</h3>
                <p class="detail-description">{ animal.description(props.locale) }</p>

                if props.full {
                    <div class="detail-health">
                        <h4>{ format!("🩺 {}", details.health) }</h4>
                        <p>{ &details.health_text }</p>
                    </div>
                }

                <ul class="detail-tags">
                    { for animal.tags(props.locale).iter().map(|tag| html! {
                        <li class="tag">{ tag_label(tag) }</li>
                    }) }
                </ul>

                <div class="detail-actions">
                    if props.full {
                        <Button variant={ButtonVariant::Outline} onclick={on_back}>
                            { format!("← {}", details.back) }
                        </Button>
                    }
                    <Button size={ButtonSize::Lg} disabled={animal.adopted} onclick={on_adopt}>
                        { adopt_label }
                    </Button>
                </div>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_hashed() {
        assert_eq!(tag_label("Playful"), "#Playful");
        assert_eq!(tag_label("Oyuncu"), "#Oyuncu");
    }
}
