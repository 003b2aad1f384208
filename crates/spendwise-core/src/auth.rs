//! Sign-in provider boundary and the screen glue around it
//!
//! The provider is opaque: configure, check availability, sign in, sign out,
//! read the current account. Errors come from a small closed set mapped 1:1
//! to user-facing alerts; anything uncategorized falls back to a generic
//! message carrying the raw text. No retry logic anywhere; a failed attempt
//! ends there until the user re-initiates.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleAccount {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    pub photo: Option<String>,
    pub family_name: Option<String>,
    pub given_name: Option<String>,
}

/// What a successful sign-in hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInPayload {
    pub user: GoogleAccount,
    pub id_token: Option<String>,
    pub server_auth_code: Option<String>,
    pub scopes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInConfig {
    pub web_client_id: String,
    pub offline_access: bool,
}

/// Closed error set surfaced by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignInError {
    #[error("sign-in was cancelled")]
    Cancelled,
    #[error("a sign-in attempt is already in progress")]
    InProgress,
    #[error("play services not available or outdated")]
    PlayServicesNotAvailable,
    #[error("{0}")]
    Provider(String),
}

impl SignInError {
    /// User-facing alert (title, body) for this error.
    pub fn alert(&self) -> (&'static str, String) {
        match self {
            Self::Cancelled => ("Cancelled", "Sign-in was cancelled".to_string()),
            Self::InProgress => ("In Progress", "Sign-in is already in progress".to_string()),
            Self::PlayServicesNotAvailable => {
                ("Error", "Play Services not available or outdated".to_string())
            }
            Self::Provider(message) => {
                let body = if message.is_empty() {
                    "Unknown error occurred".to_string()
                } else {
                    message.clone()
                };
                ("Sign-In Failed", body)
            }
        }
    }
}

/// Third-party sign-in provider boundary.
#[async_trait]
pub trait SignInProvider {
    fn configure(&mut self, config: SignInConfig);
    async fn has_play_services(&self) -> Result<(), SignInError>;
    async fn sign_in(&mut self) -> Result<SignInPayload, SignInError>;
    async fn sign_out(&mut self) -> Result<(), SignInError>;
    async fn current_user(&self) -> Option<SignInPayload>;
}

/// Screen-side state of the sign-in glue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInState {
    /// Provider configuration is still running; show a spinner.
    Initializing,
    SignedOut,
    /// An attempt is in flight.
    Busy,
    SignedIn(GoogleAccount),
}

/// Glue controller for the sign-in screen: one piece of state, one alert
/// slot, no retries.
#[derive(Debug)]
pub struct SignInScreen {
    state: SignInState,
    configured: bool,
    alert: Option<(String, String)>,
}

impl Default for SignInScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SignInScreen {
    pub fn new() -> Self {
        Self {
            state: SignInState::Initializing,
            configured: false,
            alert: None,
        }
    }

    pub fn state(&self) -> &SignInState {
        &self.state
    }

    pub fn alert(&self) -> Option<&(String, String)> {
        self.alert.as_ref()
    }

    pub fn account(&self) -> Option<&GoogleAccount> {
        match &self.state {
            SignInState::SignedIn(account) => Some(account),
            _ => None,
        }
    }

    /// Finish initialization: record whether configuration succeeded and
    /// restore an already signed-in account if the provider has one.
    pub fn finish_init(&mut self, configured: bool, existing: Option<SignInPayload>) {
        self.configured = configured;
        self.state = match existing {
            Some(payload) => SignInState::SignedIn(payload.user),
            None => SignInState::SignedOut,
        };
        if !configured {
            self.alert = Some((
                "Initialization Error".to_string(),
                "Google Sign-In is not configured yet".to_string(),
            ));
        }
    }

    /// Gate a new attempt. Refuses while unconfigured, initializing or busy;
    /// the refusal surfaces as an alert rather than an error.
    pub fn begin_attempt(&mut self) -> bool {
        match self.state {
            SignInState::Initializing => false,
            SignInState::Busy => {
                let (title, body) = SignInError::InProgress.alert();
                self.alert = Some((title.to_string(), body));
                false
            }
            _ if !self.configured => {
                self.alert = Some((
                    "Error".to_string(),
                    "Google Sign-In is not configured yet".to_string(),
                ));
                false
            }
            _ => {
                self.alert = None;
                self.state = SignInState::Busy;
                true
            }
        }
    }

    pub fn resolve_sign_in(&mut self, result: Result<SignInPayload, SignInError>) {
        match result {
            Ok(payload) => {
                let name = payload
                    .user
                    .name
                    .clone()
                    .unwrap_or_else(|| "User".to_string());
                self.alert = Some(("Success".to_string(), format!("Welcome {name}!")));
                self.state = SignInState::SignedIn(payload.user);
            }
            Err(err) => {
                let (title, body) = err.alert();
                self.alert = Some((title.to_string(), body));
                self.state = SignInState::SignedOut;
            }
        }
    }

    pub fn resolve_sign_out(&mut self, result: Result<(), SignInError>) {
        match result {
            Ok(()) => {
                self.alert = Some((
                    "Signed Out".to_string(),
                    "You have been signed out successfully".to_string(),
                ));
                self.state = SignInState::SignedOut;
            }
            Err(_) => {
                self.alert = Some(("Error".to_string(), "Failed to sign out".to_string()));
            }
        }
    }
}

/// Stand-in provider fulfilling the boundary contract for local runs.
///
/// TODO: swap for the real OAuth exchange once the backend exposes the
/// token endpoint.
#[derive(Debug, Default)]
pub struct StubSignIn {
    config: Option<SignInConfig>,
    account: Option<SignInPayload>,
}

#[async_trait]
impl SignInProvider for StubSignIn {
    fn configure(&mut self, config: SignInConfig) {
        self.config = Some(config);
    }

    async fn has_play_services(&self) -> Result<(), SignInError> {
        // Nothing to probe off-device
        Ok(())
    }

    async fn sign_in(&mut self) -> Result<SignInPayload, SignInError> {
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| SignInError::Provider("provider not configured".to_string()))?;
        let payload = SignInPayload {
            user: GoogleAccount {
                id: "demo-user".to_string(),
                name: Some("Demo User".to_string()),
                email: "demo@spendwise.io".to_string(),
                photo: None,
                family_name: Some("User".to_string()),
                given_name: Some("Demo".to_string()),
            },
            id_token: Some(format!("stub-token-for-{}", config.web_client_id)),
            server_auth_code: config.offline_access.then(|| "stub-auth-code".to_string()),
            scopes: vec!["email".to_string(), "profile".to_string()],
        };
        self.account = Some(payload.clone());
        Ok(payload)
    }

    async fn sign_out(&mut self) -> Result<(), SignInError> {
        self.account = None;
        Ok(())
    }

    async fn current_user(&self) -> Option<SignInPayload> {
        self.account.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Scripted provider: pops pre-seeded responses in order.
    struct ScriptedProvider {
        responses: VecDeque<Result<SignInPayload, SignInError>>,
    }

    #[async_trait]
    impl SignInProvider for ScriptedProvider {
        fn configure(&mut self, _config: SignInConfig) {}

        async fn has_play_services(&self) -> Result<(), SignInError> {
            Ok(())
        }

        async fn sign_in(&mut self) -> Result<SignInPayload, SignInError> {
            self.responses
                .pop_front()
                .unwrap_or(Err(SignInError::Cancelled))
        }

        async fn sign_out(&mut self) -> Result<(), SignInError> {
            Ok(())
        }

        async fn current_user(&self) -> Option<SignInPayload> {
            None
        }
    }

    fn demo_payload() -> SignInPayload {
        SignInPayload {
            user: GoogleAccount {
                id: "1".to_string(),
                name: Some("Ada".to_string()),
                email: "ada@example.com".to_string(),
                photo: None,
                family_name: None,
                given_name: Some("Ada".to_string()),
            },
            id_token: Some("token".to_string()),
            server_auth_code: None,
            scopes: vec!["email".to_string()],
        }
    }

    #[test]
    fn closed_error_set_maps_to_alerts() {
        assert_eq!(
            SignInError::Cancelled.alert(),
            ("Cancelled", "Sign-in was cancelled".to_string())
        );
        assert_eq!(
            SignInError::InProgress.alert(),
            ("In Progress", "Sign-in is already in progress".to_string())
        );
        assert_eq!(
            SignInError::PlayServicesNotAvailable.alert(),
            ("Error", "Play Services not available or outdated".to_string())
        );
        assert_eq!(
            SignInError::Provider("quota exhausted".to_string()).alert(),
            ("Sign-In Failed", "quota exhausted".to_string())
        );
        // Uncategorized with no message falls back to the generic body
        assert_eq!(
            SignInError::Provider(String::new()).alert(),
            ("Sign-In Failed", "Unknown error occurred".to_string())
        );
    }

    #[test]
    fn attempt_refused_until_configured() {
        let mut screen = SignInScreen::new();
        assert!(!screen.begin_attempt()); // still initializing

        screen.finish_init(false, None);
        assert!(!screen.begin_attempt());
        assert_eq!(
            screen.alert().map(|(title, _)| title.as_str()),
            Some("Error")
        );

        let mut configured = SignInScreen::new();
        configured.finish_init(true, None);
        assert!(configured.begin_attempt());
        assert_eq!(*configured.state(), SignInState::Busy);
    }

    #[test]
    fn busy_attempt_surfaces_in_progress() {
        let mut screen = SignInScreen::new();
        screen.finish_init(true, None);
        assert!(screen.begin_attempt());
        assert!(!screen.begin_attempt());
        assert_eq!(
            screen.alert().map(|(title, _)| title.as_str()),
            Some("In Progress")
        );
    }

    #[test]
    fn failure_is_terminal_for_the_attempt() {
        let mut screen = SignInScreen::new();
        screen.finish_init(true, None);
        screen.begin_attempt();
        screen.resolve_sign_in(Err(SignInError::Cancelled));
        assert_eq!(*screen.state(), SignInState::SignedOut);
        // A fresh attempt requires explicit re-initiation and is allowed
        assert!(screen.begin_attempt());
    }

    #[test]
    fn init_restores_existing_account() {
        let mut screen = SignInScreen::new();
        screen.finish_init(true, Some(demo_payload()));
        assert!(matches!(screen.state(), SignInState::SignedIn(a) if a.email == "ada@example.com"));
    }

    #[tokio::test]
    async fn scripted_provider_drives_the_glue() {
        let mut provider = ScriptedProvider {
            responses: VecDeque::from([
                Err(SignInError::PlayServicesNotAvailable),
                Ok(demo_payload()),
            ]),
        };
        let mut screen = SignInScreen::new();
        screen.finish_init(true, provider.current_user().await);

        // First attempt fails with a categorized code
        assert!(screen.begin_attempt());
        let result = provider.sign_in().await;
        screen.resolve_sign_in(result);
        assert_eq!(*screen.state(), SignInState::SignedOut);
        assert_eq!(
            screen.alert().map(|(title, _)| title.as_str()),
            Some("Error")
        );

        // User re-initiates; second attempt lands
        assert!(screen.begin_attempt());
        let result = provider.sign_in().await;
        screen.resolve_sign_in(result);
        assert!(matches!(screen.state(), SignInState::SignedIn(_)));
        assert_eq!(
            screen.alert().map(|(_, body)| body.as_str()),
            Some("Welcome Ada!")
        );
    }

    #[tokio::test]
    async fn stub_provider_round_trips_the_contract() {
        let mut provider = StubSignIn::default();
        // Unconfigured sign-in is an uncategorized provider error
        assert!(matches!(
            provider.sign_in().await,
            Err(SignInError::Provider(_))
        ));

        provider.configure(SignInConfig {
            web_client_id: "client-123".to_string(),
            offline_access: true,
        });
        let payload = provider.sign_in().await.expect("configured sign-in");
        assert_eq!(payload.server_auth_code.as_deref(), Some("stub-auth-code"));
        assert!(provider.current_user().await.is_some());

        provider.sign_out().await.expect("sign out");
        assert!(provider.current_user().await.is_none());
    }
}
