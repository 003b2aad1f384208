use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use spendwise_core::auth::{SignInScreen, SignInState};
use spendwise_core::nav::AuthRoute;
use spendwise_core::theme::{Element, Theme};

/// Auth stack. Index hosts the Google sign-in glue; login/register are
/// placeholder panes reached from it.
pub fn render_auth(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    route: AuthRoute,
    screen: &SignInScreen,
) {
    match route {
        AuthRoute::Index => render_sign_in(frame, area, theme, screen),
        AuthRoute::Login => render_placeholder(frame, area, theme, "Login", "Email sign-in lands here."),
        AuthRoute::Register => {
            render_placeholder(frame, area, theme, "Register", "Account creation lands here.")
        }
    }
}

fn render_sign_in(frame: &mut Frame, area: Rect, theme: &Theme, screen: &SignInScreen) {
    let block = Block::new()
        .borders(Borders::ALL)
        .title(" Welcome to Spendwise ")
        .style(theme.ratatui_style(Element::Border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // centered status card
            Constraint::Length(1), // alert line
        ])
        .split(inner);

    let card: Vec<Line> = match screen.state() {
        SignInState::Initializing => vec![
            Line::from(Span::styled(
                "Initializing Google Sign-In...",
                theme.ratatui_style(Element::Info),
            )),
        ],
        SignInState::Busy => vec![
            Line::from(Span::styled(
                "Signing in...",
                theme.ratatui_style(Element::Info),
            )),
        ],
        SignInState::SignedOut => vec![
            Line::from(Span::styled(
                "[G] Sign in with Google",
                theme.accent_style(),
            )),
            Line::default(),
            Line::from(Span::styled(
                "[L]ogin with email  |  [R]egister",
                theme.ratatui_style(Element::Inactive),
            )),
        ],
        SignInState::SignedIn(account) => {
            let name = account.name.as_deref().unwrap_or("User");
            vec![
                Line::from(Span::styled(
                    format!("● {name}"),
                    theme.accent_style(),
                )),
                Line::from(Span::styled(
                    account.email.clone(),
                    theme.text_style(),
                )),
                Line::default(),
                Line::from(Span::styled(
                    "[ENTER] Continue  |  [O] Sign out",
                    theme.ratatui_style(Element::Inactive),
                )),
            ]
        }
    };

    let card_height = card.len() as u16;
    let top_padding = (chunks[0].height.saturating_sub(card_height)) / 2;
    let card_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(top_padding),
            Constraint::Length(card_height),
            Constraint::Min(0),
        ])
        .split(chunks[0]);

    let card = Paragraph::new(card).alignment(Alignment::Center);
    frame.render_widget(card, card_chunks[1]);

    if let Some((title, body)) = screen.alert() {
        let style = match title.as_str() {
            "Success" | "Signed Out" => theme.accent_style(),
            _ => theme.warning_style(),
        };
        let alert = Paragraph::new(format!("{title}: {body}"))
            .alignment(Alignment::Center)
            .style(style);
        frame.render_widget(alert, chunks[1]);
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, theme: &Theme, title: &str, body: &str) {
    let block = Block::new()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .style(theme.ratatui_style(Element::Border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = Paragraph::new(vec![
        Line::from(Span::styled(body.to_string(), theme.text_style())),
        Line::default(),
        Line::from(Span::styled(
            "[ESC] Back",
            theme.ratatui_style(Element::Inactive),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(text, inner);
}
