use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};
use spendwise_core::auth::GoogleAccount;
use spendwise_core::nav::{SettingsRoute, Tab};
use spendwise_core::settings::Settings;
use spendwise_core::theme::{Element, Theme, ThemeVariant};
use strum::IntoEnumIterator;

/// Authenticated area: tab bar on top, the active tab's pane below.
pub fn render_dashboard(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    tab: Tab,
    settings_route: SettingsRoute,
    settings: &Settings,
    account: Option<&GoogleAccount>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_tab_bar(frame, chunks[0], theme, tab);

    match tab {
        Tab::Home => render_home(frame, chunks[1], theme, account),
        Tab::Expense => render_expense(frame, chunks[1], theme),
        Tab::Settings => render_settings(frame, chunks[1], theme, settings_route, settings, account),
    }
}

fn render_tab_bar(frame: &mut Frame, area: Rect, theme: &Theme, active: Tab) {
    let titles: Vec<Line> = Tab::iter()
        .map(|tab| Line::from(format!(" {} {} ", tab.icon(), tab.title())))
        .collect();
    let selected = Tab::iter().position(|tab| tab == active).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(theme.ratatui_style(Element::Inactive))
        .highlight_style(theme.accent_style())
        .block(
            Block::new()
                .borders(Borders::ALL)
                .style(theme.ratatui_style(Element::Border)),
        );
    frame.render_widget(tabs, area);
}

fn render_home(frame: &mut Frame, area: Rect, theme: &Theme, account: Option<&GoogleAccount>) {
    let block = pane_block(theme, " Home ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let greeting = match account.and_then(|a| a.given_name.as_deref()) {
        Some(name) => format!("Welcome back, {name}!"),
        None => "Welcome back!".to_string(),
    };
    let lines = vec![
        Line::from(Span::styled(greeting, theme.title_style())),
        Line::default(),
        Line::from(Span::styled(
            "This month: no expenses recorded yet.",
            theme.text_style(),
        )),
    ];
    frame.render_widget(centered(lines), inner);
}

fn render_expense(frame: &mut Frame, area: Rect, theme: &Theme) {
    let block = pane_block(theme, " Expense ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled("No expenses yet", theme.title_style())),
        Line::default(),
        Line::from(Span::styled(
            "Recorded expenses will show up here.",
            theme.text_style(),
        )),
    ];
    frame.render_widget(centered(lines), inner);
}

fn render_settings(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    route: SettingsRoute,
    settings: &Settings,
    account: Option<&GoogleAccount>,
) {
    match route {
        SettingsRoute::Index => {
            let block = pane_block(theme, " Settings ");
            let inner = block.inner(area);
            frame.render_widget(block, area);

            let theme_label = match settings.theme {
                ThemeVariant::EmeraldLight => "Light",
                ThemeVariant::EmeraldDark => "Dark",
            };
            let lines = vec![
                Line::from(Span::styled("[P] Profile", theme.accent_style())),
                Line::default(),
                Line::from(Span::styled(
                    format!("[T] Theme: {theme_label}"),
                    theme.text_style(),
                )),
            ];
            frame.render_widget(centered(lines), inner);
        }
        SettingsRoute::Profile => {
            let block = pane_block(theme, " Profile ");
            let inner = block.inner(area);
            frame.render_widget(block, area);

            let lines = match account {
                Some(account) => vec![
                    Line::from(Span::styled(
                        account.name.clone().unwrap_or_else(|| "User".to_string()),
                        theme.title_style(),
                    )),
                    Line::from(Span::styled(account.email.clone(), theme.text_style())),
                    Line::default(),
                    Line::from(Span::styled(
                        "[ESC] Back",
                        theme.ratatui_style(Element::Inactive),
                    )),
                ],
                None => vec![
                    Line::from(Span::styled("Not signed in", theme.warning_style())),
                    Line::default(),
                    Line::from(Span::styled(
                        "[ESC] Back",
                        theme.ratatui_style(Element::Inactive),
                    )),
                ],
            };
            frame.render_widget(centered(lines), inner);
        }
    }
}

fn pane_block(theme: &Theme, title: &'static str) -> Block<'static> {
    Block::new()
        .borders(Borders::ALL)
        .title(title)
        .style(theme.ratatui_style(Element::Border))
}

fn centered(lines: Vec<Line<'_>>) -> Paragraph<'_> {
    Paragraph::new(lines).alignment(Alignment::Center)
}
