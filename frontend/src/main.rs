mod components;
mod hooks;
mod services;

use components::sections::{About, Donate, Footer, Hero, Pets, Stats};
use components::{AdoptFormModal, DetailModal, DonateFormModal, Gallery, NavBar, Strings};
use hooks::{use_scroll_tracker, use_site_state};
use loklok_shared::{
    catalog, Animal, Catalog, DataError, Intent, Locale, NavigationKind, Overlay, PendingScroll,
    SiteConfig, ViewState,
};
use services::config::load_site_config;
use services::logging::Logger;
use services::scroll::scroll_to_anchor;
use std::rc::Rc;
use yew::prelude::*;

/// Parse the roster, the adoption series and every string table up front so
/// a broken data file shows one error page instead of failing mid-session.
fn load_catalog() -> Result<Rc<Catalog>, DataError> {
    for locale in Locale::ALL {
        Strings::load(locale)?;
    }
    Ok(Rc::new(catalog()?.clone()))
}

/// Second phase of anchor navigation, run after the layout is committed
fn perform_scroll(pending: PendingScroll, header_offset: f64) {
    let phase = match pending.kind {
        NavigationKind::Immediate => "in place",
        NavigationKind::AfterLayout => "after layout switch",
    };
    match scroll_to_anchor(pending.anchor, header_offset) {
        Ok(Some(top)) => Logger::debug_with_component(
            "navigation",
            &format!("scrolled to #{} ({}) at {}", pending.anchor, phase, top),
        ),
        Ok(None) => Logger::warn_with_component(
            "navigation",
            &format!("section #{} is not in the document", pending.anchor),
        ),
        Err(e) => Logger::error_with_component(
            "navigation",
            &format!("failed to scroll to #{}: {}", pending.anchor, e),
        ),
    }
}

#[derive(Properties, PartialEq)]
struct LoadErrorProps {
    message: String,
}

#[function_component(LoadError)]
fn load_error(props: &LoadErrorProps) -> Html {
    html! {
        <div class="load-error">
            <h1>{"🐾 LokLok"}</h1>
            <p>{"Something went wrong while loading the shelter data."}</p>
            <pre>{ &props.message }</pre>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SiteProps {
    catalog: Rc<Catalog>,
    config: SiteConfig,
}

#[function_component(Site)]
fn site(props: &SiteProps) -> Html {
    let site = use_site_state(props.catalog.clone(), props.config.clone());
    let state = &site.state;
    let on_intent = site.actions.dispatch.clone();

    use_scroll_tracker(on_intent.reform(Intent::Scrolled));

    {
        let on_intent = on_intent.clone();
        let header_offset = state.config().header_offset;
        use_effect_with(state.pending_scroll(), move |pending| {
            if let Some(pending) = *pending {
                perform_scroll(pending, header_offset);
                on_intent.emit(Intent::ScrollHandled(pending.seq));
            }
            || ()
        });
    }

    let strings = match Strings::load(state.locale()) {
        Ok(strings) => strings,
        Err(e) => return html! { <LoadError message={e.to_string()} /> },
    };
    let locale = state.locale();
    let config = state.config();

    let overlay = match state.overlay() {
        Overlay::None => html! {},
        Overlay::Detail(_) => match state.selected_animal() {
            Some(animal) => html! {
                <DetailModal
                    animal={animal.clone()}
                    {strings}
                    {locale}
                    full={state.view() == ViewState::Home}
                    on_intent={on_intent.clone()}
                />
            },
            None => html! {},
        },
        Overlay::Adopt(_) => match state.selected_animal() {
            Some(animal) => html! {
                <AdoptFormModal
                    key={animal.id.to_string()}
                    animal={animal.clone()}
                    {strings}
                    delay_ms={config.adopt_delay_ms}
                    on_intent={on_intent.clone()}
                />
            },
            None => html! {},
        },
        Overlay::Donate { prefill } => html! {
            <DonateFormModal
                prefill={prefill.clone()}
                {strings}
                {locale}
                delay_ms={config.donate_delay_ms}
                on_intent={on_intent.clone()}
            />
        },
    };

    let animals: Vec<Animal> = state.displayed_animals().into_iter().cloned().collect();

    let layout = match state.view() {
        ViewState::Home => html! {
            <>
                <main>
                    <Hero {strings} on_intent={on_intent.clone()} />
                    <About {strings} />
                    <Stats {strings} data={state.catalog().adoption_stats().to_vec()} />
                    <Pets {strings} {locale} {animals} on_intent={on_intent.clone()} />
                    <Donate {strings} on_intent={on_intent.clone()} />
                </main>
                <Footer {strings} on_intent={on_intent.clone()} />
            </>
        },
        ViewState::Gallery => html! {
            <Gallery
                {strings}
                {locale}
                filter={state.filter()}
                {animals}
                on_intent={on_intent.clone()}
            />
        },
    };

    html! {
        <div class="site" lang={locale.tag().to_lowercase()}>
            <NavBar
                {strings}
                {locale}
                view={state.view()}
                scrolled={state.is_scrolled()}
                language_menu_open={state.language_menu_open()}
                mobile_menu_open={state.mobile_menu_open()}
                on_intent={on_intent.clone()}
            />
            { layout }
            { overlay }
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let loaded = use_memo((), |_| {
        let config = load_site_config();
        let catalog = load_catalog();
        match &catalog {
            Ok(catalog) => Logger::info_with_component(
                "app",
                &format!("loaded {} animals", catalog.animals().len()),
            ),
            Err(e) => Logger::error_with_component("app", &format!("failed to load site data: {}", e)),
        }
        (catalog, config)
    });

    match &loaded.0 {
        Ok(catalog) => html! { <Site catalog={catalog.clone()} config={loaded.1.clone()} /> },
        Err(e) => html! { <LoadError message={e.to_string()} /> },
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_data_loads() {
        let catalog = load_catalog().unwrap();
        assert!(!catalog.animals().is_empty());
        assert!(!catalog.adoption_stats().is_empty());
    }
}
