//! Login page.

use crate::frontend::services::session::SessionState;
use dioxus::{events::KeyboardEvent, prelude::*};

#[component]
pub fn Login() -> Element {
    let session = use_context::<SessionState>();
    let mut username = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    // The guard takes over once the marker is stored.
    let mut submit = move || {
        if busy() {
            return;
        }
        let name = username.read().clone();
        let mut session = session;
        busy.set(true);
        error.set(None);
        spawn(async move {
            if let Err(e) = session.login(&name).await {
                log::warn!("Login failed: {e:#}");
                error.set(Some(format!("{e:#}")));
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "card login",
            h1 { "Jewelry Calculator" }
            p { class: "hint", "Sign in to price a piece." }
            input {
                class: "text-input",
                r#type: "text",
                value: "{username}",
                maxlength: "32",
                placeholder: "Your name",
                autofocus: true,
                disabled: busy(),
                oninput: move |e| {
                    username.set(e.value());
                    error.set(None);
                },
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        submit();
                    }
                },
            }
            button {
                class: "primary",
                disabled: busy(),
                onclick: move |_| submit(),
                "Sign in"
            }
            if let Some(message) = error() {
                div { class: "error-message", "{message}" }
            }
        }
    }
}
