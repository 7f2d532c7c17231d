use super::button::{Button, ButtonSize};
use super::Strings;
use crate::hooks::use_outside_click;
use loklok_shared::{Anchor, Intent, Locale, ViewState};
use yew::prelude::*;

/// Click handler for an in-page link: suppress the jump and let the site
/// state sequence the scroll.
pub fn navigate(on_intent: &Callback<Intent>, anchor: Anchor) -> Callback<MouseEvent> {
    let on_intent = on_intent.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        on_intent.emit(Intent::NavigateTo(anchor));
    })
}

pub fn anchor_label(strings: &Strings, anchor: Anchor) -> &str {
    match anchor {
        Anchor::Home => &strings.nav.home,
        Anchor::About => &strings.nav.about,
        Anchor::Pets => &strings.nav.pets,
        Anchor::Donate => &strings.nav.donate,
    }
}

/// The transparent header is only used over the hero, before scrolling
pub fn is_solid(view: ViewState, scrolled: bool) -> bool {
    view == ViewState::Gallery || scrolled
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub strings: Strings,
    pub locale: Locale,
    pub view: ViewState,
    pub scrolled: bool,
    pub language_menu_open: bool,
    pub mobile_menu_open: bool,
    pub on_intent: Callback<Intent>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let strings = props.strings;

    let on_toggle_mobile = {
        let on_intent = props.on_intent.clone();
        Callback::from(move |_: MouseEvent| on_intent.emit(Intent::ToggleMobileMenu))
    };

    let on_adopt_cta = navigate(&props.on_intent, Anchor::Pets);

    let links = Anchor::NAV_ORDER.iter().map(|&anchor| {
        html! {
            <a class="nav-link" href={anchor.href()} onclick={navigate(&props.on_intent, anchor)}>
                { anchor_label(&strings, anchor) }
            </a>
        }
    });

    let mobile_links = Anchor::NAV_ORDER.iter().map(|&anchor| {
        html! {
            <a class="mobile-menu-link" href={anchor.href()} onclick={navigate(&props.on_intent, anchor)}>
                { anchor_label(&strings, anchor) }
            </a>
        }
    });

    let mobile_locales = Locale::ALL.iter().map(|&locale| {
        let on_intent = props.on_intent.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_intent.emit(Intent::SetLocale(locale)));
        html! {
            <button
                type="button"
                class={classes!("mobile-locale", (locale == props.locale).then_some("active"))}
                {onclick}
            >
                { locale.tag() }
            </button>
        }
    });

    html! {
        <nav class={classes!("nav-bar", is_solid(props.view, props.scrolled).then_some("nav-bar-solid"))}>
            <div class="nav-bar-inner">
                <a class="nav-logo" href={Anchor::Home.href()} onclick={navigate(&props.on_intent, Anchor::Home)}>
                    <span class="nav-logo-mark">{"🐾"}</span>
                    <span class="nav-logo-text">{"LokLok"}</span>
                </a>

                <div class="nav-links">
                    { for links }
                    <LanguageMenu
                        locale={props.locale}
                        open={props.language_menu_open}
                        on_intent={props.on_intent.clone()}
                    />
                    <Button size={ButtonSize::Sm} onclick={on_adopt_cta}>
                        { strings.nav.adopt_btn.clone() }
                    </Button>
                </div>

                <button
                    type="button"
                    class="nav-mobile-toggle"
                    aria-label="menu"
                    aria-expanded={props.mobile_menu_open.to_string()}
                    onclick={on_toggle_mobile}
                >
                    { if props.mobile_menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            if props.mobile_menu_open {
                <div class="mobile-menu">
                    { for mobile_links }
                    <div class="mobile-locales">{ for mobile_locales }</div>
                </div>
            }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageMenuProps {
    pub locale: Locale,
    pub open: bool,
    pub on_intent: Callback<Intent>,
}

/// Locale dropdown, dismissed by a choice or a press anywhere outside it
#[function_component(LanguageMenu)]
pub fn language_menu(props: &LanguageMenuProps) -> Html {
    let container = use_node_ref();

    {
        let on_intent = props.on_intent.clone();
        use_outside_click(
            container.clone(),
            props.open,
            Callback::from(move |_| on_intent.emit(Intent::CloseLanguageMenu)),
        );
    }

    let on_toggle = {
        let on_intent = props.on_intent.clone();
        Callback::from(move |_: MouseEvent| on_intent.emit(Intent::ToggleLanguageMenu))
    };

    let options = Locale::ALL.iter().map(|&locale| {
        let on_intent = props.on_intent.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_intent.emit(Intent::SetLocale(locale)));
        html! {
            <li>
                <button
                    type="button"
                    class={classes!("language-option", (locale == props.locale).then_some("active"))}
                    {onclick}
                >
                    { locale.native_name() }
                </button>
            </li>
        }
    });

    html! {
        <div class="language-menu" ref={container}>
            <button
                type="button"
                class="language-toggle"
                aria-haspopup="true"
                aria-expanded={props.open.to_string()}
                onclick={on_toggle}
            >
                <span>{"🌐"}</span>
                <span>{ props.locale.tag() }</span>
                <span class="language-caret">{"▾"}</span>
            </button>
            if props.open {
                <ul class="language-dropdown">{ for options }</ul>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_is_solid_on_gallery_or_after_scroll() {
        assert!(!is_solid(ViewState::Home, false));
        assert!(is_solid(ViewState::Home, true));
        assert!(is_solid(ViewState::Gallery, false));
    }

    #[test]
    fn test_anchor_labels_follow_locale() {
        let tr = Strings::load(Locale::Tr).unwrap();
        for anchor in Anchor::NAV_ORDER {
            assert!(!anchor_label(&tr, anchor).is_empty());
        }
        assert_eq!(anchor_label(&tr, Anchor::Home), "Ana Sayfa");
    }
}
