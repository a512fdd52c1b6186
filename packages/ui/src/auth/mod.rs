//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] owns the authenticated-user lifecycle for the whole app:
//! it runs the explicit session check at mount, keeps a single background
//! watcher for session changes, and exposes the state as a context signal via
//! [`use_auth`]. Consumers never mutate the state directly; they go through
//! [`sign_up`], [`sign_in`], [`sign_out`], and [`refresh_profile`].

use api::{Role, SessionInfo};
use dioxus::prelude::*;

mod state;
pub use state::{AuthState, SessionChange};

use crate::toast::{show_toast, use_toasts, ToastLevel};

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Apply a session observation and run the follow-up it demands. The profile
/// fetch is initiated (and awaited) before `loading` resolves, so role-gated
/// consumers never see `loading == false` with a fetch still unattempted.
async fn apply_session_update(mut auth: Signal<AuthState>, session: Option<SessionInfo>) {
    let change = auth.write().apply_session(session);
    match change {
        SessionChange::FetchProfile { user_id, epoch } => {
            match api::fetch_profile().await {
                Ok(profile) => {
                    auth.write().apply_profile(epoch, profile);
                }
                Err(e) => {
                    // Fail closed: profile stays None, gates deny.
                    tracing::error!("Failed to fetch profile for {}: {}", user_id, e);
                }
            }
            auth.write().finish_loading();
        }
        SessionChange::SignedOut | SessionChange::Unchanged => {}
    }
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(AuthState::default);

    // Explicit session check at mount. The watcher below may observe the same
    // session first or second; apply_session converges either way.
    let _ = use_resource(move || async move {
        let mut auth_state = auth_state;
        match api::current_session().await {
            Ok(session) => apply_session_update(auth_state, session).await,
            Err(e) => {
                tracing::error!("Initial session check failed: {}", e);
                auth_state.write().finish_loading();
            }
        }
    });

    // Single session watcher per provider (every 30s). The task lives in this
    // component's scope, so unmounting the provider cancels it; no second
    // watcher can ever observe on behalf of a torn-down provider.
    use_effect(move || {
        spawn(async move {
            loop {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(std::time::Duration::from_secs(30)).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(std::time::Duration::from_secs(30)).await;

                // Don't race the initial check while it is still in flight.
                if auth_state.peek().loading {
                    continue;
                }
                match api::current_session().await {
                    Ok(session) => apply_session_update(auth_state, session).await,
                    Err(e) => {
                        // Terminal for this tick; state keeps its last value.
                        tracing::warn!("Session watcher check failed: {}", e);
                    }
                }
            }
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Register a new account. On success a confirmation toast is shown and the
/// session flows through the normal state path. Never touches the profiles
/// table; provisioning is the backend's job.
pub async fn sign_up(
    auth: Signal<AuthState>,
    email: String,
    password: String,
    full_name: String,
) -> Result<(), String> {
    api::auth::validate_sign_up(&email, &password, &full_name).map_err(|e| e.to_string())?;

    match api::sign_up(email, password, full_name).await {
        Ok(user) => {
            apply_session_update(
                auth,
                Some(SessionInfo {
                    user,
                    expires_at: None,
                }),
            )
            .await;
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}

/// Sign in with email and password. The return value only reports whether the
/// credentials were accepted; the state change flows through the session path.
pub async fn sign_in(
    auth: Signal<AuthState>,
    email: String,
    password: String,
) -> Result<(), String> {
    api::auth::validate_sign_in(&email, &password).map_err(|e| e.to_string())?;

    match api::sign_in(email, password).await {
        Ok(user) => {
            apply_session_update(
                auth,
                Some(SessionInfo {
                    user,
                    expires_at: None,
                }),
            )
            .await;
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}

/// Sign out. On success `user`, `session`, and `profile` clear in one update.
pub async fn sign_out(auth: Signal<AuthState>) -> Result<(), String> {
    match api::sign_out().await {
        Ok(()) => {
            apply_session_update(auth, None).await;
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}

/// Re-fetch the current user's profile row. No-op when signed out; a failed
/// fetch is logged and leaves the profile unchanged.
pub async fn refresh_profile(mut auth: Signal<AuthState>) {
    let Some((user_id, epoch)) = auth.peek().profile_request() else {
        tracing::debug!("refresh_profile: no user signed in");
        return;
    };

    match api::fetch_profile().await {
        Ok(profile) => {
            auth.write().apply_profile(epoch, profile);
        }
        Err(e) => {
            tracing::error!("Failed to refresh profile for {}: {}", user_id, e);
        }
    }
}

/// Client-side redirect, a no-op on the server render pass.
pub fn redirect_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
    }
}

/// Full-screen spinner shown while the auth state is loading.
#[component]
pub fn LoadingScreen() -> Element {
    rsx! {
        div { class: "flex items-center justify-center min-h-screen",
            div { class: "spinner" }
        }
    }
}

/// Renders its children only for authenticated users; anonymous visitors are
/// sent to the sign-in page once loading has resolved.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let auth = use_auth();

    if auth().loading {
        return rsx! {
            LoadingScreen {}
        };
    }

    if auth().user.is_none() {
        redirect_to("/auth");
        return rsx! {};
    }

    rsx! {
        {children}
    }
}

/// Renders its children only when the profile's role is in `allowed`.
/// Missing profile means no elevated access; those users land on the customer
/// dashboard instead.
#[component]
pub fn RequireRole(allowed: Vec<Role>, children: Element) -> Element {
    let auth = use_auth();

    if auth().loading {
        return rsx! {
            LoadingScreen {}
        };
    }

    if auth().user.is_none() {
        redirect_to("/auth");
        return rsx! {};
    }

    if !auth().can_access(&allowed) {
        redirect_to("/dashboard");
        return rsx! {};
    }

    rsx! {
        {children}
    }
}

/// Button to sign out the current user.
#[component]
pub fn SignOutButton(
    #[props(default = "Sign Out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth = use_auth();
    let mut toasts = use_toasts();

    let onclick = move |_| async move {
        match sign_out(auth).await {
            Ok(()) => {
                show_toast(
                    &mut toasts,
                    ToastLevel::Success,
                    "Signed out",
                    "You have been signed out successfully",
                );
                redirect_to("/");
            }
            Err(e) => {
                show_toast(&mut toasts, ToastLevel::Error, "Sign out failed", &e);
            }
        }
    };

    rsx! {
        button { class: "{class}", onclick: onclick, "{label}" }
    }
}
