//! # Spendwise Core Library
//!
//! This crate provides the core functionality for the Spendwise TUI
//! application. It contains the app-shell logic, boundary traits and
//! configuration that are independent of any specific user interface.
//!
//! ## Modules
//!
//! - `api`: configured HTTP client boundary and the warm-up ping
//! - `auth`: sign-in provider boundary and the sign-in screen glue
//! - `nav`: route tree, tabs and the navigation boundary
//! - `onboarding`: carousel state controller and the onboarding deck
//! - `settings`: application configuration management
//! - `startup`: one-shot readiness gate for splash-screen dismissal
//! - `theme`: UI theming system

pub mod api;
pub mod auth;
pub mod nav;
pub mod onboarding;
pub mod settings;
pub mod startup;
pub mod theme;

#[cfg(test)]
mod tests {
    use crate::onboarding::{onboarding_pages, Carousel};
    use crate::settings::Settings;
    use crate::startup::StartupGate;
    use crate::theme::ThemeVariant;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.theme, ThemeVariant::EmeraldLight);
        assert_eq!(settings.api_url, "http://localhost:3000/api");
        assert_eq!(settings.web_client_id, "[PASTE-WEB-CLIENT-ID]");
        assert!(settings.offline_access);
    }

    #[test]
    fn test_settings_validation() {
        let settings = Settings::default();

        // Default settings should fail validation (placeholder client id)
        assert!(settings.is_valid().is_err());

        let mut configured = Settings::default();
        configured.web_client_id = "936996911068.apps.googleusercontent.com".to_string();
        assert!(configured.is_valid().is_ok());
    }

    #[test]
    fn test_drag_to_last_page_swaps_affordances() {
        // N=3, user drags to offset = 2 * viewport width
        let width = 120.0;
        let mut carousel = Carousel::new(onboarding_pages().len());

        carousel.on_scroll(2.0 * width, width);

        assert_eq!(carousel.current_index(), 2);
        assert!(carousel.is_last()); // finish control shown
        assert!(!carousel.skip_visible()); // skip control hidden
    }

    #[test]
    fn test_failed_warm_up_still_releases_splash_once() {
        let mut gate = StartupGate::new();
        gate.resolve(Err(anyhow::anyhow!("remote call refused")));

        assert!(gate.is_ready());
        assert!(gate.take_splash_release(true));
        assert!(!gate.take_splash_release(true));
    }
}
