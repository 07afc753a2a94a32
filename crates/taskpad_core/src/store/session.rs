//! Session store: authenticated identity lifecycle.
//!
//! # Responsibility
//! - Track the current identity through login/register/logout.
//! - Mirror identity and auth token to durable records.
//!
//! # Invariants
//! - State is `Unknown` only before the startup `restore` has run.
//! - `Authenticated` requires BOTH the identity and token records; a stale
//!   half-pair restores as `Unauthenticated`.
//! - No password is ever validated or stored; authentication here is an
//!   interface-shaped stub.

use crate::model::identity::Identity;
use crate::notify::{NoticeHub, NoticeListener};
use crate::repo::record_store::{RecordStore, IDENTITY_KEY, TOKEN_KEY};
use crate::store::{StoreError, StoreResult};
use log::{info, warn};
use uuid::Uuid;

/// Authentication state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Before the startup restore attempt.
    Unknown,
    Unauthenticated,
    Authenticated(Identity),
}

/// Holds the current authenticated identity, if any.
pub struct SessionStore<S: RecordStore> {
    records: S,
    state: SessionState,
    notices: NoticeHub,
}

impl<S: RecordStore> SessionStore<S> {
    /// Creates a store in the `Unknown` state; call [`restore`] next.
    ///
    /// [`restore`]: SessionStore::restore
    pub fn new(records: S) -> Self {
        Self {
            records,
            state: SessionState::Unknown,
            notices: NoticeHub::new(),
        }
    }

    /// Restores a persisted session, once, at startup.
    ///
    /// Transitions to `Authenticated` only when both the identity and the
    /// token record are present; anything else (absent, corrupt) lands in
    /// `Unauthenticated`. Completes before returning, so consumers may gate
    /// protected reads on the resulting state.
    pub fn restore(&mut self) -> StoreResult<()> {
        let identity = self.records.load_typed::<Identity>(IDENTITY_KEY)?;
        let token = self.records.load_typed::<String>(TOKEN_KEY)?;

        self.state = match (identity, token) {
            (Some(identity), Some(_)) => {
                info!("event=session_restore module=session status=ok id={}", identity.id);
                SessionState::Authenticated(identity)
            }
            _ => {
                info!("event=session_restore module=session status=ok id=none");
                SessionState::Unauthenticated
            }
        };
        Ok(())
    }

    /// Logs in against the simulated remote endpoint.
    ///
    /// # Contract
    /// - The display name is the email's local part (text before `@`).
    /// - On success: persists identity + token, transitions to
    ///   `Authenticated`, emits a success notice, returns the identity.
    /// - On failure: state is unchanged, an error notice is emitted and the
    ///   error is returned to the caller.
    pub fn login(&mut self, email: &str, _password: &str) -> StoreResult<Identity> {
        let username = match email.split_once('@') {
            Some((local, _)) if !local.trim().is_empty() => local.trim().to_string(),
            _ => {
                self.notices.error("Login failed");
                warn!("event=login module=session status=error reason=invalid_email");
                return Err(StoreError::RemoteRejected(
                    "email has no usable local part".to_string(),
                ));
            }
        };

        self.establish(Identity::new(username, email), "login", "Logged in successfully")
    }

    /// Registers a new account against the simulated remote endpoint.
    ///
    /// Same contract as [`login`], but the supplied username is used
    /// directly instead of being derived from the email.
    ///
    /// [`login`]: SessionStore::login
    pub fn register(&mut self, username: &str, email: &str, _password: &str) -> StoreResult<Identity> {
        if username.trim().is_empty() || !email.contains('@') {
            self.notices.error("Registration failed");
            warn!("event=register module=session status=error reason=invalid_input");
            return Err(StoreError::RemoteRejected(
                "username and email are required".to_string(),
            ));
        }

        self.establish(
            Identity::new(username.trim(), email),
            "register",
            "Registered successfully",
        )
    }

    /// Clears the session. Cannot fail: a storage error while removing the
    /// records is logged and swallowed, and in-memory state is cleared
    /// regardless, so a half-removed pair can never restore as authenticated.
    pub fn logout(&mut self) {
        for key in [IDENTITY_KEY, TOKEN_KEY] {
            if let Err(err) = self.records.remove(key) {
                warn!("event=logout module=session status=error key={key} error={err}");
            }
        }
        self.state = SessionState::Unauthenticated;
        self.notices.success("Logged out successfully");
        info!("event=logout module=session status=ok");
    }

    /// Current state snapshot.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The active identity, if authenticated.
    pub fn identity(&self) -> Option<&Identity> {
        match &self.state {
            SessionState::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// Registers a notice listener for this store's operation outcomes.
    pub fn subscribe(&mut self, listener: NoticeListener) {
        self.notices.subscribe(listener);
    }

    fn establish(
        &mut self,
        identity: Identity,
        event: &str,
        message: &str,
    ) -> StoreResult<Identity> {
        let token = format!("tok-{}", Uuid::new_v4().simple());

        if let Err(err) = self
            .records
            .save_typed(IDENTITY_KEY, &identity)
            .and_then(|()| self.records.save_typed(TOKEN_KEY, &token))
        {
            self.notices.error(match event {
                "login" => "Login failed",
                _ => "Registration failed",
            });
            warn!("event={event} module=session status=error error={err}");
            return Err(err.into());
        }

        info!("event={event} module=session status=ok id={}", identity.id);
        self.state = SessionState::Authenticated(identity.clone());
        self.notices.success(message);
        Ok(identity)
    }
}
