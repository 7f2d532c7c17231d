use crate::components::nav_bar::{anchor_label, navigate};
use crate::components::Strings;
use loklok_shared::{Anchor, Intent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub strings: Strings,
    pub on_intent: Callback<Intent>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let strings = props.strings;
    let footer = &strings.footer;

    html! {
        <footer class="footer">
            <div class="footer-columns">
                <div class="footer-brand">
                    <span class="nav-logo-text">{"🐾 LokLok"}</span>
                    <p>{ &footer.tagline }</p>
                </div>
                <div class="footer-links">
                    <h4>{ &footer.quick_links }</h4>
                    <ul>
                        { for Anchor::NAV_ORDER.iter().map(|&anchor| html! {
                            <li>
                                <a href={anchor.href()} onclick={navigate(&props.on_intent, anchor)}>
                                    { anchor_label(&strings, anchor) }
                                </a>
                            </li>
                        }) }
                    </ul>
                </div>
                <div class="footer-contact">
                    <h4>{ &footer.contact }</h4>
                    <ul>
                        <li>{"📍 Kadıköy, İstanbul"}</li>
                        <li>{"📞 +90 (216) 555 01 23"}</li>
                        <li>{"✉ hello@loklok.org"}</li>
                    </ul>
                </div>
            </div>
            <p class="footer-rights">{ format!("© 2024 LokLok. {}", footer.rights) }</p>
        </footer>
    }
}
