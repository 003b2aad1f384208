pub mod app;
pub mod dashboard;
pub mod footer;
pub mod onboarding;
pub mod signin;
pub mod splash;
