use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Backdrop plus dialog body. A click on the backdrop closes; clicks inside
/// the body stay inside.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class={classes!("modal", props.class.clone())} role="dialog" aria-modal="true" onclick={on_modal_click}>
                <button type="button" class="modal-close" aria-label="close" onclick={on_close_click}>
                    {"✕"}
                </button>
                { for props.children.iter() }
            </div>
        </div>
    }
}
