//! Route tree and the navigation boundary
//!
//! Mirrors the app's screen groups: the onboarding screen, an auth stack and
//! the tabbed dashboard with a nested settings stack. Navigation itself is a
//! boundary trait; the shell decides what "replace" means.

use strum::EnumIter;

/// Screens in the auth stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRoute {
    Index,
    Login,
    Register,
}

/// Screens in the settings stack inside the Settings tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsRoute {
    #[default]
    Index,
    Profile,
}

/// Dashboard tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter)]
pub enum Tab {
    #[default]
    Home,
    Expense,
    Settings,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Expense => "Expense",
            Self::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Home => "⌂",
            Self::Expense => "▤",
            Self::Settings => "⚙",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Home => Self::Expense,
            Self::Expense => Self::Settings,
            Self::Settings => Self::Home, // Loop back to the first tab
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::Home => Self::Settings, // Loop back to the last tab
            Self::Expense => Self::Home,
            Self::Settings => Self::Expense,
        }
    }
}

/// Top-level routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Onboarding,
    Auth(AuthRoute),
    Dashboard(Tab),
}

impl Route {
    /// Destination of both the skip and the finish affordance.
    pub const AFTER_ONBOARDING: Route = Route::Auth(AuthRoute::Index);
}

/// Navigation boundary: replace the current route, fire-and-forget.
pub trait Navigator {
    fn replace(&mut self, route: Route);
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn tabs_cycle_in_display_order() {
        let order: Vec<Tab> = Tab::iter().collect();
        assert_eq!(order, vec![Tab::Home, Tab::Expense, Tab::Settings]);

        let mut tab = Tab::Home;
        for expected in [Tab::Expense, Tab::Settings, Tab::Home] {
            tab = tab.next();
            assert_eq!(tab, expected);
        }
        assert_eq!(Tab::Home.previous(), Tab::Settings);
    }

    #[test]
    fn onboarding_exits_into_the_auth_stack() {
        assert_eq!(Route::AFTER_ONBOARDING, Route::Auth(AuthRoute::Index));
    }

    #[test]
    fn navigator_replace_swaps_the_route() {
        struct Recorder {
            route: Route,
        }
        impl Navigator for Recorder {
            fn replace(&mut self, route: Route) {
                self.route = route;
            }
        }

        let mut recorder = Recorder {
            route: Route::Onboarding,
        };
        recorder.replace(Route::AFTER_ONBOARDING);
        assert_eq!(recorder.route, Route::Auth(AuthRoute::Index));
        recorder.replace(Route::Dashboard(Tab::Home));
        assert_eq!(recorder.route, Route::Dashboard(Tab::Home));
    }
}
