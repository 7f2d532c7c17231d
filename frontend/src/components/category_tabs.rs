use super::Strings;
use loklok_shared::{CategoryFilter, Intent};
use yew::prelude::*;

pub fn filter_label(strings: &Strings, filter: CategoryFilter) -> &str {
    match filter {
        CategoryFilter::All => &strings.filters.all,
        CategoryFilter::Dog => &strings.filters.dogs,
        CategoryFilter::Cat => &strings.filters.cats,
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryTabsProps {
    pub strings: Strings,
    pub active: CategoryFilter,
    pub on_intent: Callback<Intent>,
}

#[function_component(CategoryTabs)]
pub fn category_tabs(props: &CategoryTabsProps) -> Html {
    html! {
        <div class="category-tabs" role="tablist">
            { for CategoryFilter::ALL.iter().map(|&filter| {
                let on_intent = props.on_intent.clone();
                let onclick = Callback::from(move |_: MouseEvent| {
                    on_intent.emit(Intent::SelectCategory(filter));
                });
                let active = filter == props.active;
                html! {
                    <button
                        type="button"
                        role="tab"
                        aria-selected={active.to_string()}
                        class={classes!("category-tab", active.then_some("active"))}
                        {onclick}
                    >
                        { filter_label(&props.strings, filter) }
                    </button>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loklok_shared::Locale;

    #[test]
    fn test_every_filter_has_a_label() {
        for locale in Locale::ALL {
            let strings = Strings::load(locale).unwrap();
            for filter in CategoryFilter::ALL {
                assert!(!filter_label(&strings, filter).is_empty());
            }
        }
    }
}
