use super::{
    dashboard::render_dashboard,
    footer::render_footer,
    onboarding::render_onboarding,
    signin::render_auth,
    splash::{render_splash, SplashOverlay},
};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use ratatui::{
    prelude::{Constraint, CrosstermBackend, Direction, Layout, Terminal},
    widgets::{Block, Borders},
};
use spendwise_core::{
    api::ApiClient,
    auth::{SignInProvider, SignInScreen, StubSignIn},
    nav::{AuthRoute, Navigator, Route, SettingsRoute, Tab},
    onboarding::{onboarding_pages, Carousel, Page},
    settings::Settings,
    startup::{SplashService, StartupGate, WARM_UP_TIMEOUT},
    theme::{Element, Theme},
};
use std::io::Stdout;
use tokio::sync::oneshot;
use tracing::info;

/// Easing factor per tick for the animated scroll (fraction of the remaining
/// distance). The animation is cosmetic; logical state never waits for it.
const SCROLL_EASING: f32 = 0.35;
/// Below this distance the animation snaps to its target.
const SCROLL_SNAP_EPSILON: f32 = 0.5;
/// Wheel "drag" step as a fraction of the viewport width.
const DRAG_STEP_FRACTION: f32 = 0.25;

/// The shell's implementation of the navigation boundary.
#[derive(Debug)]
struct Router {
    route: Route,
}

impl Router {
    fn new() -> Self {
        Self {
            route: Route::Onboarding,
        }
    }

    fn route(&self) -> Route {
        self.route
    }
}

impl Navigator for Router {
    fn replace(&mut self, route: Route) {
        info!("replacing route {:?} -> {:?}", self.route, route);
        self.route = route;
    }
}

pub struct App {
    should_quit: bool,
    theme: Theme,
    settings: Settings,
    router: Router,

    // Startup gate and its collaborators
    gate: StartupGate,
    warm_up: Option<oneshot::Receiver<anyhow::Result<()>>>,
    splash: SplashOverlay,
    laid_out: bool,

    // Onboarding carousel + visual scroll state
    pages: Vec<Page>,
    carousel: Carousel,
    scroll_x: f32,
    scroll_target: Option<f32>,
    viewport_width: f32,

    // Sign-in glue
    provider: StubSignIn,
    sign_in: SignInScreen,
    sign_in_started: bool,

    settings_route: SettingsRoute,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let theme = Theme::new(settings.theme);
        let pages = onboarding_pages();
        let carousel = Carousel::new(pages.len());
        Self {
            should_quit: false,
            theme,
            settings,
            router: Router::new(),
            gate: StartupGate::new(),
            warm_up: None,
            splash: SplashOverlay::new(),
            laid_out: false,
            pages,
            carousel,
            scroll_x: 0.0,
            scroll_target: None,
            viewport_width: 0.0,
            provider: StubSignIn::default(),
            sign_in: SignInScreen::new(),
            sign_in_started: false,
            settings_route: SettingsRoute::default(),
        }
    }

    pub async fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        self.spawn_warm_up();
        while !self.should_quit {
            self.poll_warm_up();
            self.tick_scroll();
            self.sync_viewport(terminal.size()?.width);
            self.draw(terminal)?;
            self.after_draw().await;
            self.handle_events().await?;
        }
        Ok(())
    }

    /// Kick off the one-shot warm-up. The outcome comes back over a channel;
    /// the gate resolves either way, bounded by the warm-up timeout.
    fn spawn_warm_up(&mut self) {
        let api = ApiClient::new(&self.settings);
        let (tx, rx) = oneshot::channel();
        self.warm_up = Some(rx);
        tokio::spawn(async move {
            let outcome = match tokio::time::timeout(WARM_UP_TIMEOUT, api.warm_up()).await {
                Ok(result) => result,
                Err(_) => Err(anyhow::anyhow!("warm-up timed out")),
            };
            let _ = tx.send(outcome);
        });
    }

    fn poll_warm_up(&mut self) {
        if let Some(rx) = &mut self.warm_up {
            match rx.try_recv() {
                Ok(outcome) => {
                    self.gate.resolve(outcome);
                    self.warm_up = None;
                }
                Err(oneshot::error::TryRecvError::Closed) => {
                    self.gate
                        .resolve(Err(anyhow::anyhow!("warm-up task dropped")));
                    self.warm_up = None;
                }
                Err(oneshot::error::TryRecvError::Empty) => {}
            }
        }
    }

    /// Advance the cosmetic scroll toward its target and let the passive
    /// path reconcile the index against the in-flight offset.
    fn tick_scroll(&mut self) {
        if let Some(target) = self.scroll_target {
            let remaining = target - self.scroll_x;
            if remaining.abs() < SCROLL_SNAP_EPSILON {
                self.scroll_x = target;
                self.scroll_target = None;
            } else {
                self.scroll_x += remaining * SCROLL_EASING;
            }
            self.carousel.on_scroll(self.scroll_x, self.viewport_width);
        }
    }

    /// Track terminal width as the carousel's viewport width and keep the
    /// scroll offset consistent across resizes.
    fn sync_viewport(&mut self, width: u16) {
        let width = width as f32;
        if (width - self.viewport_width).abs() > f32::EPSILON {
            self.viewport_width = width;
            self.scroll_x = self.carousel.current_index() as f32 * width;
            self.scroll_target = None;
        }
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        terminal.draw(|frame| {
            let area = frame.size();
            let background = Block::new()
                .borders(Borders::NONE)
                .style(self.theme.ratatui_style(Element::Background));
            frame.render_widget(background, area);

            // Nothing paints behind the splash before the gate opens
            if !self.gate.is_ready() {
                render_splash(frame, area, &self.theme);
                return;
            }

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(3)])
                .split(area);

            match self.router.route() {
                Route::Onboarding => {
                    render_onboarding(frame, chunks[0], &self.theme, &self.pages, &self.carousel)
                }
                Route::Auth(route) => {
                    render_auth(frame, chunks[0], &self.theme, route, &self.sign_in)
                }
                Route::Dashboard(tab) => render_dashboard(
                    frame,
                    chunks[0],
                    &self.theme,
                    tab,
                    self.settings_route,
                    &self.settings,
                    self.sign_in.account(),
                ),
            }
            render_footer(frame, chunks[1], &self.theme, &self.router.route());
        })?;

        if self.gate.is_ready() {
            // First content frame counts as the first layout pass
            self.laid_out = true;
        }
        Ok(())
    }

    async fn after_draw(&mut self) {
        if self.gate.take_splash_release(self.laid_out) {
            self.splash.hide().await;
        }

        // Configure the sign-in provider once the auth area is first shown
        if !self.sign_in_started && matches!(self.router.route(), Route::Auth(_)) {
            self.sign_in_started = true;
            self.provider.configure(self.settings.sign_in_config());
            let configured = self.settings.is_valid().is_ok();
            let existing = self.provider.current_user().await;
            self.sign_in.finish_init(configured, existing);
        }
    }

    async fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key(key).await,
                Event::Mouse(mouse) => {
                    if self.gate.is_ready() && self.router.route() == Route::Onboarding {
                        match mouse.kind {
                            MouseEventKind::ScrollRight | MouseEventKind::ScrollDown => {
                                self.drag_by(self.viewport_width * DRAG_STEP_FRACTION);
                            }
                            MouseEventKind::ScrollLeft | MouseEventKind::ScrollUp => {
                                self.drag_by(-self.viewport_width * DRAG_STEP_FRACTION);
                            }
                            _ => {}
                        }
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    async fn on_key(&mut self, key: KeyEvent) {
        // Global bindings
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('t') => {
                self.theme.toggle();
                self.settings.theme = self.theme.variant();
                self.settings.save().unwrap_or_default();
                return;
            }
            _ => {}
        }

        // Before the gate opens the screen shows nothing but the splash
        if !self.gate.is_ready() {
            return;
        }

        match self.router.route() {
            Route::Onboarding => self.on_onboarding_key(key.code),
            Route::Auth(route) => self.on_auth_key(route, key.code).await,
            Route::Dashboard(tab) => self.on_dashboard_key(tab, key.code),
        }
    }

    fn on_onboarding_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Right | KeyCode::Char('l') => {
                if let Some(request) = self.carousel.next(self.viewport_width) {
                    self.scroll_target = Some(request.offset);
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if let Some(request) = self.carousel.previous(self.viewport_width) {
                    self.scroll_target = Some(request.offset);
                }
            }
            KeyCode::Enter => {
                if self.carousel.is_last() {
                    // Get Started
                    self.router.replace(Route::AFTER_ONBOARDING);
                } else if let Some(request) = self.carousel.next(self.viewport_width) {
                    self.scroll_target = Some(request.offset);
                }
            }
            KeyCode::Char('s') => {
                if self.carousel.skip_visible() {
                    self.router.replace(Route::AFTER_ONBOARDING);
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                let request = self.carousel.go_to_page(index, self.viewport_width);
                self.scroll_target = Some(request.offset);
            }
            _ => {}
        }
    }

    async fn on_auth_key(&mut self, route: AuthRoute, code: KeyCode) {
        match (route, code) {
            (AuthRoute::Index, KeyCode::Char('g')) => self.attempt_sign_in().await,
            (AuthRoute::Index, KeyCode::Char('o')) => {
                let result = self.provider.sign_out().await;
                self.sign_in.resolve_sign_out(result);
            }
            (AuthRoute::Index, KeyCode::Enter) => {
                if self.sign_in.account().is_some() {
                    self.router.replace(Route::Dashboard(Tab::Home));
                }
            }
            (AuthRoute::Index, KeyCode::Char('l')) => {
                self.router.replace(Route::Auth(AuthRoute::Login));
            }
            (AuthRoute::Index, KeyCode::Char('r')) => {
                self.router.replace(Route::Auth(AuthRoute::Register));
            }
            (AuthRoute::Login | AuthRoute::Register, KeyCode::Esc) => {
                self.router.replace(Route::Auth(AuthRoute::Index));
            }
            _ => {}
        }
    }

    fn on_dashboard_key(&mut self, tab: Tab, code: KeyCode) {
        match code {
            KeyCode::Tab => self.router.replace(Route::Dashboard(tab.next())),
            KeyCode::BackTab => self.router.replace(Route::Dashboard(tab.previous())),
            KeyCode::Char('1') => self.router.replace(Route::Dashboard(Tab::Home)),
            KeyCode::Char('2') => self.router.replace(Route::Dashboard(Tab::Expense)),
            KeyCode::Char('3') => self.router.replace(Route::Dashboard(Tab::Settings)),
            KeyCode::Char('p') if tab == Tab::Settings => {
                self.settings_route = SettingsRoute::Profile;
            }
            KeyCode::Esc if tab == Tab::Settings => {
                self.settings_route = SettingsRoute::Index;
            }
            _ => {}
        }
    }

    /// One sign-in attempt, end to end. Failures are terminal; the user has
    /// to press the button again.
    async fn attempt_sign_in(&mut self) {
        if !self.sign_in.begin_attempt() {
            return;
        }
        if let Err(err) = self.provider.has_play_services().await {
            self.sign_in.resolve_sign_in(Err(err));
            return;
        }
        let result = self.provider.sign_in().await;
        self.sign_in.resolve_sign_in(result);
    }

    /// Continuous drag: move the offset directly and let the passive path
    /// reconcile, then snap to the nearest page boundary.
    fn drag_by(&mut self, delta: f32) {
        if self.viewport_width <= 0.0 {
            return;
        }
        let max_offset = (self.carousel.len() - 1) as f32 * self.viewport_width;
        self.scroll_x = (self.scroll_x + delta).clamp(0.0, max_offset);
        self.carousel.on_scroll(self.scroll_x, self.viewport_width);
        self.scroll_target = Some(self.carousel.current_index() as f32 * self.viewport_width);
    }
}
