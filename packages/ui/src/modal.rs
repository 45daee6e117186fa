//! Modal primitives.

use dioxus::prelude::*;

use crate::components::Button;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`, unless `locked` is set
/// (a submit is in flight).
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    #[props(default = false)] locked: bool,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| {
                if !locked {
                    on_close.call(())
                }
            },
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Tone of an [`AlertModal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertVariant {
    Success,
    Error,
}

/// A small notice dialog layered above whatever modal opened it.
#[component]
pub fn AlertModal(
    open: bool,
    title: String,
    #[props(default = "".to_string())] message: String,
    variant: AlertVariant,
    on_close: EventHandler<()>,
) -> Element {
    if !open {
        return rsx! {};
    }

    let variant_class = match variant {
        AlertVariant::Success => "alert-success",
        AlertVariant::Error => "alert-error",
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            div {
                class: "alert {variant_class}",
                h3 { class: "alert-title", "{title}" }
                if !message.is_empty() {
                    p { class: "alert-message", "{message}" }
                }
                Button {
                    class: "alert-close",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
        }
    }
}
