//! Pure state machine behind the auth provider.
//!
//! All session and profile transitions funnel through [`AuthState`], whether
//! they come from the mount-time session check, the background watcher, or an
//! explicit sign-in/sign-out. The two startup paths can complete in either
//! order; `apply_session` is idempotent and last-write-wins, so they converge.
//!
//! Profile fetches are guarded by an *epoch*: every user transition bumps it,
//! and a fetch result is only applied when its epoch still matches. A fetch
//! that resolves after a sign-out (or after a different user signed in) is
//! dropped instead of repopulating stale data.

use api::{ProfileInfo, Role, SessionInfo, UserInfo};

/// What the caller must do after applying a session update.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionChange {
    /// A user is (newly) present: initiate a profile fetch for this epoch
    /// before resolving `loading`.
    FetchProfile { user_id: String, epoch: u64 },
    /// No user. Profile was cleared in the same update; nothing to fetch.
    SignedOut,
    /// Same user re-delivered (token rotation or the second leg of the
    /// startup race). No new profile fetch.
    Unchanged,
}

/// Who is logged in and what is their role — the single source of truth.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub session: Option<SessionInfo>,
    pub profile: Option<ProfileInfo>,
    /// True from construction until the first resolution of either "no
    /// session" or "session present, profile fetch attempted". Role-gated
    /// content must not render while this is true.
    pub loading: bool,
    epoch: u64,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            session: None,
            profile: None,
            loading: true,
            epoch: 0,
        }
    }
}

impl AuthState {
    /// Apply an authoritative "current session" observation. Last-write-wins
    /// on `{user, session}`; `profile` never survives a user change.
    pub fn apply_session(&mut self, session: Option<SessionInfo>) -> SessionChange {
        match session {
            None => {
                // user, session, and profile clear in the same update.
                if self.user.is_some() {
                    self.epoch += 1;
                }
                self.user = None;
                self.session = None;
                self.profile = None;
                self.loading = false;
                SessionChange::SignedOut
            }
            Some(info) => {
                let same_user = self
                    .user
                    .as_ref()
                    .map(|u| u.id == info.user.id)
                    .unwrap_or(false);

                if same_user {
                    // Refresh the session reference (token rotation) but keep
                    // the profile; no duplicate fetch.
                    self.session = Some(info);
                    return SessionChange::Unchanged;
                }

                self.epoch += 1;
                let user_id = info.user.id.clone();
                self.user = Some(info.user.clone());
                self.session = Some(info);
                self.profile = None;
                SessionChange::FetchProfile {
                    user_id,
                    epoch: self.epoch,
                }
            }
        }
    }

    /// Apply a profile fetch result. Returns false when the result is stale
    /// (epoch mismatch) or no user is signed in; state is untouched then.
    /// `Ok(None)` from the fetch is a legitimate "no row yet", kept as `None`.
    pub fn apply_profile(&mut self, epoch: u64, profile: Option<ProfileInfo>) -> bool {
        if epoch != self.epoch || self.user.is_none() {
            return false;
        }
        self.profile = profile;
        true
    }

    /// The id and epoch a profile refresh should run under, or `None` when
    /// signed out (a refresh is then a no-op by contract).
    pub fn profile_request(&self) -> Option<(String, u64)> {
        self.user.as_ref().map(|u| (u.id.clone(), self.epoch))
    }

    /// Resolve the initial loading state. Called once the first "no session"
    /// observation lands or the first profile fetch has been attempted.
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    /// Fail-closed role check: no profile means no elevated access.
    pub fn can_access(&self, allowed: &[Role]) -> bool {
        self.profile
            .as_ref()
            .map(|p| allowed.contains(&p.role))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_for(id: &str) -> SessionInfo {
        SessionInfo {
            user: UserInfo {
                id: id.to_string(),
                email: format!("{}@example.com", id),
                full_name: Some("Test User".to_string()),
            },
            expires_at: None,
        }
    }

    fn profile_for(user_id: &str, role: Role) -> ProfileInfo {
        ProfileInfo {
            id: format!("profile-{}", user_id),
            user_id: user_id.to_string(),
            full_name: Some("Test User".to_string()),
            role,
            created_at: "2025-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn starts_loading_and_signed_out() {
        let state = AuthState::default();
        assert!(state.loading);
        assert!(state.user.is_none());
        assert!(state.session.is_none());
        assert!(state.profile.is_none());
    }

    #[test]
    fn no_session_resolves_loading() {
        let mut state = AuthState::default();
        assert_eq!(state.apply_session(None), SessionChange::SignedOut);
        assert!(!state.loading);
        assert!(state.user.is_none());
    }

    #[test]
    fn sign_out_clears_user_session_and_profile_together() {
        let mut state = AuthState::default();
        let change = state.apply_session(Some(session_for("alice")));
        let SessionChange::FetchProfile { epoch, .. } = change else {
            panic!("expected a profile fetch");
        };
        assert!(state.apply_profile(epoch, Some(profile_for("alice", Role::Admin))));
        state.finish_loading();

        assert_eq!(state.apply_session(None), SessionChange::SignedOut);
        assert!(state.user.is_none());
        assert!(state.session.is_none());
        assert!(state.profile.is_none());
    }

    #[test]
    fn startup_race_converges_with_exactly_one_fetch() {
        // The initial session check and the first watcher observation deliver
        // the same session in some order; only the first triggers a fetch and
        // the final state is identical either way.
        let mut state = AuthState::default();

        let first = state.apply_session(Some(session_for("alice")));
        assert!(matches!(first, SessionChange::FetchProfile { .. }));

        let second = state.apply_session(Some(session_for("alice")));
        assert_eq!(second, SessionChange::Unchanged);

        let SessionChange::FetchProfile { epoch, .. } = first else {
            unreachable!()
        };
        assert!(state.apply_profile(epoch, Some(profile_for("alice", Role::Customer))));
        state.finish_loading();

        assert_eq!(state.user.as_ref().unwrap().id, "alice");
        assert_eq!(state.profile.as_ref().unwrap().role, Role::Customer);
        assert!(!state.loading);
    }

    #[test]
    fn refresh_is_noop_when_signed_out() {
        let state = AuthState::default();
        assert!(state.profile_request().is_none());

        let mut state = AuthState::default();
        state.apply_session(None);
        assert!(state.profile_request().is_none());
    }

    #[test]
    fn profile_resolving_after_sign_out_is_dropped() {
        let mut state = AuthState::default();
        let SessionChange::FetchProfile { epoch, .. } =
            state.apply_session(Some(session_for("alice")))
        else {
            panic!("expected a profile fetch");
        };

        // Sign-out lands while the fetch is in flight.
        state.apply_session(None);

        assert!(!state.apply_profile(epoch, Some(profile_for("alice", Role::Admin))));
        assert!(state.profile.is_none());
    }

    #[test]
    fn profile_from_previous_user_is_dropped_after_user_switch() {
        let mut state = AuthState::default();
        let SessionChange::FetchProfile { epoch: old_epoch, .. } =
            state.apply_session(Some(session_for("alice")))
        else {
            panic!("expected a profile fetch");
        };

        let SessionChange::FetchProfile { epoch: new_epoch, .. } =
            state.apply_session(Some(session_for("bob")))
        else {
            panic!("expected a profile fetch for the new user");
        };

        assert!(!state.apply_profile(old_epoch, Some(profile_for("alice", Role::Admin))));
        assert!(state.profile.is_none());

        assert!(state.apply_profile(new_epoch, Some(profile_for("bob", Role::Customer))));
        assert_eq!(state.profile.as_ref().unwrap().user_id, "bob");
    }

    #[test]
    fn role_gate_fails_closed() {
        let staff_only = [Role::Staff, Role::Admin];

        let state = AuthState::default();
        assert!(!state.can_access(&staff_only));

        let mut state = AuthState::default();
        let SessionChange::FetchProfile { epoch, .. } =
            state.apply_session(Some(session_for("alice")))
        else {
            panic!("expected a profile fetch");
        };

        // No profile row yet: authenticated but not elevated.
        assert!(state.apply_profile(epoch, None));
        state.finish_loading();
        assert!(state.user.is_some());
        assert!(!state.can_access(&staff_only));

        // Customer profile: still denied.
        let mut customer = state.clone();
        assert!(customer.apply_profile(epoch, Some(profile_for("alice", Role::Customer))));
        assert!(!customer.can_access(&staff_only));

        // Admin profile: allowed, and stays allowed with loading resolved.
        assert!(state.apply_profile(epoch, Some(profile_for("alice", Role::Admin))));
        assert!(state.can_access(&staff_only));
        assert!(!state.loading);
    }

    #[test]
    fn admin_sign_in_scenario() {
        let mut state = AuthState::default();
        let SessionChange::FetchProfile { user_id, epoch } =
            state.apply_session(Some(session_for("admin1")))
        else {
            panic!("expected a profile fetch");
        };
        assert_eq!(user_id, "admin1");

        assert!(state.apply_profile(epoch, Some(profile_for("admin1", Role::Admin))));
        state.finish_loading();

        assert!(!state.loading);
        assert_eq!(state.profile.as_ref().unwrap().role, Role::Admin);
        assert!(state.can_access(&[Role::Staff, Role::Admin]));
    }

    #[test]
    fn token_rotation_keeps_profile() {
        let mut state = AuthState::default();
        let SessionChange::FetchProfile { epoch, .. } =
            state.apply_session(Some(session_for("alice")))
        else {
            panic!("expected a profile fetch");
        };
        state.apply_profile(epoch, Some(profile_for("alice", Role::Staff)));
        state.finish_loading();

        let mut rotated = session_for("alice");
        rotated.expires_at = Some("2025-06-01T00:00:00+00:00".to_string());
        assert_eq!(state.apply_session(Some(rotated)), SessionChange::Unchanged);

        assert!(state.profile.is_some());
        assert!(state.session.as_ref().unwrap().expires_at.is_some());
    }
}
