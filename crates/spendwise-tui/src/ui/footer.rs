use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use spendwise_core::nav::Route;
use spendwise_core::theme::{Element, Theme};

/// Contextual key hints for the current route.
pub fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme, route: &Route) {
    let footer_block = Block::default()
        .borders(Borders::ALL)
        .style(theme.ratatui_style(Element::Border));

    let inner_area = footer_block.inner(area);

    let content = match route {
        Route::Onboarding => Line::from(vec![
            Span::raw("[←/→]"),
            Span::styled(" Pages", theme.ratatui_style(Element::Inactive)),
            Span::raw(" | [T]"),
            Span::styled("heme", theme.ratatui_style(Element::Inactive)),
            Span::raw(" | [Q]"),
            Span::styled("uit", theme.ratatui_style(Element::Inactive)),
        ]),
        Route::Auth(_) => Line::from(vec![
            Span::raw("[G]"),
            Span::styled(" Google Sign-In", theme.ratatui_style(Element::Inactive)),
            Span::raw(" | [T]"),
            Span::styled("heme", theme.ratatui_style(Element::Inactive)),
            Span::raw(" | [Q]"),
            Span::styled("uit", theme.ratatui_style(Element::Inactive)),
        ]),
        Route::Dashboard(_) => Line::from(vec![
            Span::raw("[TAB]"),
            Span::styled(" Next tab", theme.ratatui_style(Element::Inactive)),
            Span::raw(" | [1-3]"),
            Span::styled(" Jump", theme.ratatui_style(Element::Inactive)),
            Span::raw(" | [T]"),
            Span::styled("heme", theme.ratatui_style(Element::Inactive)),
            Span::raw(" | [Q]"),
            Span::styled("uit", theme.ratatui_style(Element::Inactive)),
        ]),
    }
    .alignment(Alignment::Center);

    let footer_paragraph = Paragraph::new(content).style(theme.ratatui_style(Element::Text));

    frame.render_widget(footer_block, area);
    frame.render_widget(footer_paragraph, inner_area);
}
