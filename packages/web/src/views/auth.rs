//! Sign-in / sign-up page.

use dioxus::prelude::*;
use ui::{show_toast, use_auth, use_toasts, ToastLevel};

#[component]
pub fn AuthPage() -> Element {
    let auth = use_auth();
    let toasts = use_toasts();
    let mut registering = use_signal(|| false);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut full_name = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    // Already signed in: this page has nothing to offer.
    if !auth().loading && auth().user.is_some() {
        ui::auth::redirect_to("/dashboard");
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut toasts = toasts;
        spawn(async move {
            error.set(None);

            if registering() && password() != confirm_password() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            submitting.set(true);
            let result = if registering() {
                ui::sign_up(auth, email(), password(), full_name()).await
            } else {
                ui::sign_in(auth, email(), password()).await
            };

            match result {
                Ok(()) => {
                    if registering() {
                        show_toast(
                            &mut toasts,
                            ToastLevel::Success,
                            "Account created",
                            "Welcome to Crestline Lending! You are now signed in",
                        );
                    } else {
                        show_toast(
                            &mut toasts,
                            ToastLevel::Success,
                            "Welcome back!",
                            "You have successfully signed in",
                        );
                    }
                    ui::auth::redirect_to("/dashboard");
                }
                Err(e) => {
                    // Service message shown verbatim; resubmitting retries.
                    error.set(Some(e));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card card",
                h1 { "Crestline Lending" }
                p { class: "text-muted",
                    if registering() { "Create your account" } else { "Sign in to your account" }
                }

                form { class: "form", onsubmit: handle_submit,
                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    if registering() {
                        input {
                            class: "input",
                            r#type: "text",
                            placeholder: "Full name",
                            value: full_name(),
                            oninput: move |evt: FormEvent| full_name.set(evt.value()),
                        }
                    }

                    input {
                        class: "input",
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    input {
                        class: "input",
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    if registering() {
                        input {
                            class: "input",
                            r#type: "password",
                            placeholder: "Confirm password",
                            value: confirm_password(),
                            oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                        }
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() {
                            "Please wait..."
                        } else if registering() {
                            "Create account"
                        } else {
                            "Sign in"
                        }
                    }
                }

                button {
                    class: "btn btn-ghost btn-sm",
                    onclick: move |_| {
                        error.set(None);
                        registering.toggle();
                    },
                    if registering() {
                        "Already have an account? Sign in"
                    } else {
                        "New here? Create an account"
                    }
                }

                a { class: "auth-back", href: "/", "\u{2190} Back to home" }
            }
        }
    }
}
