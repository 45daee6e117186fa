//! Password input with a visibility toggle and an optional live
//! strength meter.

use api::strength::password_strength;
use dioxus::prelude::*;

use crate::icons::{FaEye, FaEyeSlash};
use crate::Icon;

#[component]
pub fn PasswordInput(
    label: String,
    value: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default)] error: Option<String>,
    #[props(default = false)] show_strength: bool,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    let mut visible = use_signal(|| false);

    let input_type = if visible() { "text" } else { "password" };
    let toggle_label = if visible() {
        "Hide password"
    } else {
        "Show password"
    };
    let meter_value = value.clone();

    rsx! {
        div {
            class: "field",
            label { class: "field-label", "{label}" }
            div {
                class: "password-wrap",
                input {
                    class: "input",
                    r#type: "{input_type}",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |evt| oninput.call(evt),
                }
                button {
                    r#type: "button",
                    class: "password-toggle",
                    aria_label: "{toggle_label}",
                    onclick: move |_| {
                        let v = visible();
                        visible.set(!v);
                    },
                    if visible() {
                        Icon { icon: FaEyeSlash, width: 16, height: 16 }
                    } else {
                        Icon { icon: FaEye, width: 16, height: 16 }
                    }
                }
            }
            if let Some(error) = error {
                p { class: "field-error", "{error}" }
            }
            if show_strength && !meter_value.is_empty() {
                StrengthMeter { password: meter_value }
            }
        }
    }
}

/// The three signup password requirements as a live ✓/○ checklist.
#[component]
pub fn PasswordChecklist(password: String) -> Element {
    let checks = api::validate::password_checks(&password);

    rsx! {
        ul {
            class: "password-checklist",
            RequirementRow { met: checks.has_min_length, label: "At least 8 characters" }
            RequirementRow { met: checks.has_uppercase, label: "One uppercase letter" }
            RequirementRow { met: checks.has_digit, label: "One number" }
        }
    }
}

#[component]
fn RequirementRow(met: bool, label: String) -> Element {
    let class = if met { "req met" } else { "req" };
    let mark = if met { "✓" } else { "○" };

    rsx! {
        li { class: "{class}", "{mark} {label}" }
    }
}

/// Score bar, level label, and improvement hints for a candidate
/// password.
#[component]
pub fn StrengthMeter(password: String) -> Element {
    let strength = password_strength(&password);
    let level_class = strength.level.css_class();
    let level_label = strength.level.label();
    let width = strength.score;

    rsx! {
        div {
            class: "strength",
            div {
                class: "strength-track",
                div {
                    class: "strength-bar {level_class}",
                    style: "width: {width}%",
                }
            }
            span { class: "strength-label {level_class}", "{level_label}" }
            if !strength.feedback.is_empty() {
                ul {
                    class: "strength-feedback",
                    for hint in strength.feedback {
                        li { "{hint}" }
                    }
                }
            }
        }
    }
}
