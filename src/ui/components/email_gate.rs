use dioxus::prelude::*;

use crate::usecase::services::capture_service::is_valid_email;

#[component]
pub fn EmailGate(
    mut email_input: Signal<String>,
    submitting: Signal<bool>,
    mut gate_error: Signal<Option<String>>,
    on_submit: EventHandler<String>,
) -> Element {
    let email = email_input();
    let border = if email.trim().is_empty() || is_valid_email(email.trim()) {
        "#ccc"
    } else {
        "#d63638"
    };
    let button_label = if submitting() { "Processing..." } else { "Submit" };

    rsx! {
        div {
            style: "max-width: 480px; margin: 40px auto; padding: 24px; border: 1px solid #dee2e6; border-radius: 8px; background: #fff;",
            h3 { style: "margin-top: 0;", "Get access to the prop firm comparison table" }
            p { style: "color: #555;", "Enter your email to see the latest prop firm deals." }
            form {
                style: "display: flex; gap: 8px;",
                onsubmit: move |event| {
                    event.prevent_default();
                    on_submit.call(email_input.peek().trim().to_string());
                },
                input {
                    r#type: "email",
                    placeholder: "you@example.com",
                    value: "{email}",
                    disabled: submitting(),
                    style: "flex: 1; padding: 10px; border: 1px solid {border}; border-radius: 4px;",
                    oninput: move |event| email_input.set(event.value()),
                    onfocus: move |_| gate_error.set(None),
                }
                button {
                    r#type: "submit",
                    disabled: submitting(),
                    style: "padding: 10px 18px; background: #115bff; color: white; border: none; border-radius: 4px; cursor: pointer;",
                    "{button_label}"
                }
            }
            if submitting() {
                p { style: "color: #555;", "Submitting..." }
            }
            if let Some(message) = gate_error() {
                p { style: "color: #d63638; margin-bottom: 0;", "{message}" }
            }
        }
    }
}
