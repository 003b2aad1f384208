use async_trait::async_trait;
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};
use spendwise_core::startup::SplashService;
use spendwise_core::theme::{Element, Theme};

const SPLASH_LOGO: &str = r#"
   ███████╗██████╗ ███████╗███╗   ██╗██████╗ ██╗    ██╗██╗███████╗███████╗
   ██╔════╝██╔══██╗██╔════╝████╗  ██║██╔══██╗██║    ██║██║██╔════╝██╔════╝
   ███████╗██████╔╝█████╗  ██╔██╗ ██║██║  ██║██║ █╗ ██║██║███████╗█████╗
   ╚════██║██╔═══╝ ██╔══╝  ██║╚██╗██║██║  ██║██║███╗██║██║╚════██║██╔══╝
   ███████║██║     ███████╗██║ ╚████║██████╔╝╚███╔███╔╝██║███████║███████╗
   ╚══════╝╚═╝     ╚══════╝╚═╝  ╚═══╝╚═════╝  ╚══╝╚══╝ ╚═╝╚══════╝╚══════╝
"#;

const LOGO_HEIGHT: u16 = 8;
const TAGLINE_HEIGHT: u16 = 1;
const GAP_HEIGHT: u16 = 1;
const TOTAL_HEIGHT: u16 = LOGO_HEIGHT + GAP_HEIGHT + TAGLINE_HEIGHT;

/// Splash overlay owned by the shell. Hiding is idempotent; the startup gate
/// guarantees a single hide per screen lifetime regardless.
#[derive(Debug, Default)]
pub struct SplashOverlay {
    hidden: bool,
}

impl SplashOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

#[async_trait]
impl SplashService for SplashOverlay {
    async fn hide(&mut self) {
        self.hidden = true;
    }
}

/// Full-screen cover while the startup gate is not ready. Nothing else is
/// painted behind it.
pub fn render_splash(frame: &mut Frame, area: Rect, theme: &Theme) {
    let cover = Block::new()
        .borders(Borders::NONE)
        .style(theme.ratatui_style(Element::Background));
    frame.render_widget(cover, area);

    let top_padding = (area.height.saturating_sub(TOTAL_HEIGHT)) / 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(top_padding),
            Constraint::Length(LOGO_HEIGHT),
            Constraint::Length(GAP_HEIGHT),
            Constraint::Length(TAGLINE_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    let logo = Paragraph::new(SPLASH_LOGO)
        .alignment(Alignment::Center)
        .style(theme.ratatui_style(Element::Accent));
    frame.render_widget(logo, chunks[1]);

    let tagline = Paragraph::new("warming up...")
        .alignment(Alignment::Center)
        .style(theme.ratatui_style(Element::Inactive));
    frame.render_widget(tagline, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hide_is_idempotent() {
        let mut splash = SplashOverlay::new();
        assert!(!splash.is_hidden());
        splash.hide().await;
        splash.hide().await;
        assert!(splash.is_hidden());
    }
}
