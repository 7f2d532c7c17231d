use super::animal_card::AnimalCard;
use super::button::{Button, ButtonVariant};
use super::category_tabs::CategoryTabs;
use super::Strings;
use loklok_shared::{Animal, CategoryFilter, Intent, Locale};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub strings: Strings,
    pub locale: Locale,
    pub filter: CategoryFilter,
    pub animals: Vec<Animal>,
    pub on_intent: Callback<Intent>,
}

/// Full roster layout with the category tabs
#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let strings = props.strings;

    let on_back = {
        let on_intent = props.on_intent.clone();
        Callback::from(move |_: MouseEvent| on_intent.emit(Intent::ShowHome))
    };
    let on_select = props.on_intent.reform(Intent::SelectAnimal);

    html! {
        <main class="gallery">
            <div class="gallery-bar">
                <Button variant={ButtonVariant::Ghost} class={classes!("gallery-back")} onclick={on_back}>
                    { format!("← {}", strings.nav.back_home) }
                </Button>
            </div>
            <h1 class="gallery-title">{ &strings.labels.gallery_title }</h1>
            <CategoryTabs strings={strings} active={props.filter} on_intent={props.on_intent.clone()} />
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
        </main>
    }
}
