use crate::Route;
use dioxus::prelude::*;
use types::Role;

/// Sign-in screen. There is no credential check here: submitting opens the
/// chosen role's area.
#[component]
pub fn Login() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Admin);

    rsx! {
        div { class: "page page-login login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "TrainDesk" }
                    p { class: "login-subtitle", "Training Management" }
                }
                form {
                    onsubmit: move |e| {
                        e.prevent_default();
                        let role = role();
                        tracing::info!(%role, "signing in");
                        navigator().push(Route::home(role));
                    },
                    div { class: "form-group",
                        label { class: "form-label", r#for: "email", "Email" }
                        input {
                            id: "email",
                            class: "form-input",
                            r#type: "email",
                            placeholder: "e.g. jsmith@example.com",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "password", "Password" }
                        input {
                            id: "password",
                            class: "form-input",
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "role", "Sign in as" }
                        select {
                            id: "role",
                            class: "form-input",
                            value: "{role}",
                            onchange: move |e| match e.value().parse::<Role>() {
                                Ok(r) => role.set(r),
                                Err(err) => tracing::warn!(%err, "ignoring role selection"),
                            },
                            for r in Role::ALL {
                                option { key: "{r}", value: "{r}", {r.title()} }
                            }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary login-btn",
                        "Sign in"
                    }
                }
            }
        }
    }
}
