//! Basic form controls shared across views.

use dioxus::prelude::*;

/// Visual style of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    fn css_class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Danger => "btn-danger",
        }
    }
}

#[component]
pub fn Button(
    #[props(default = ButtonVariant::Secondary)] variant: ButtonVariant,
    #[props(default = "".to_string())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let variant_class = variant.css_class();

    rsx! {
        button {
            class: "btn {variant_class} {class}",
            r#type: r#type,
            disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

/// Labeled text input with an error slot underneath.
#[component]
pub fn Input(
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] class: String,
    #[props(default = "".to_string())] value: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] label: Option<String>,
    #[props(default)] error: Option<String>,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "field",
            if let Some(label) = label {
                label { class: "field-label", "{label}" }
            }
            input {
                class: "input {class}",
                r#type: r#type,
                placeholder: "{placeholder}",
                value: "{value}",
                disabled,
                oninput: move |evt| oninput.call(evt),
            }
            if let Some(error) = error {
                p { class: "field-error", "{error}" }
            }
        }
    }
}

/// Labeled multi-line input.
#[component]
pub fn TextArea(
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] value: String,
    #[props(default = 4u32)] rows: u32,
    #[props(default)] label: Option<String>,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "field",
            if let Some(label) = label {
                label { class: "field-label", "{label}" }
            }
            textarea {
                class: "input",
                placeholder: "{placeholder}",
                rows: "{rows}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}
