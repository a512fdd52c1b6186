//! Site header shared by the public pages.

use api::Role;
use dioxus::prelude::*;

use crate::auth::{use_auth, SignOutButton};

#[component]
pub fn Header() -> Element {
    let auth = use_auth();

    rsx! {
        header { class: "site-header",
            div { class: "container header-row",
                a { class: "brand", href: "/",
                    span { class: "brand-mark", "CL" }
                    span { class: "brand-name", "Crestline Lending" }
                }

                nav { class: "header-nav",
                    a { href: "/#home", "Home" }
                    a { href: "/#services", "Services" }
                    a { href: "/chat", "Chat" }
                }

                div { class: "header-actions",
                    if auth().loading {
                        span { class: "spinner spinner-sm" }
                    } else if auth().user.is_some() {
                        if auth().can_access(&[Role::Staff, Role::Admin]) {
                            a { class: "btn btn-outline btn-sm", href: "/admin", "Admin" }
                        }
                        a { class: "btn btn-outline btn-sm", href: "/dashboard", "Dashboard" }
                        SignOutButton { class: "btn btn-ghost btn-sm" }
                    } else {
                        a { class: "btn btn-primary btn-sm", href: "/auth", "Sign In" }
                    }
                }
            }
        }
    }
}
