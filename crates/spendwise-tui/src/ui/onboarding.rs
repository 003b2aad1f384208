use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use spendwise_core::onboarding::{Carousel, Page, PageIcon};
use spendwise_core::theme::{Element, Theme};

const WALLET_ART: &str = r#"
  ┌───────────────┐
  │  ┌─────────┐  │
  │  │ $ $ $ $ │ ●│
  │  └─────────┘  │
  └───────────────┘
"#;

const PIE_CHART_ART: &str = r#"
      ▄▄████▄▄
    ██▀▀    ▀███
   ██    ▄▄▄▄███
    ██▄▄████████
      ▀▀████▀▀
"#;

const TROPHY_ART: &str = r#"
   ┌─┐ ▄███▄ ┌─┐
   └──███████──┘
       ▀███▀
        ███
      ▄█████▄
"#;

const ART_HEIGHT: u16 = 7;

fn page_art(icon: PageIcon) -> &'static str {
    match icon {
        PageIcon::Wallet => WALLET_ART,
        PageIcon::PieChart => PIE_CHART_ART,
        PageIcon::Trophy => TROPHY_ART,
    }
}

fn page_glyph(icon: PageIcon) -> &'static str {
    match icon {
        PageIcon::Wallet => "▣",
        PageIcon::PieChart => "◔",
        PageIcon::Trophy => "♛",
    }
}

/// Onboarding screen: hero pane on top, bottom sheet with icon, title,
/// description, indicator dots and the page-position-dependent affordance.
pub fn render_onboarding(frame: &mut Frame, area: Rect, theme: &Theme, pages: &[Page], carousel: &Carousel) {
    let page = &pages[carousel.current_index().min(pages.len() - 1)];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(ART_HEIGHT + 2), // hero pane
            Constraint::Length(9),           // bottom sheet
        ])
        .split(area);

    render_hero(frame, chunks[0], theme, page, carousel);
    render_sheet(frame, chunks[1], theme, page, carousel);
}

fn render_hero(frame: &mut Frame, area: Rect, theme: &Theme, page: &Page, carousel: &Carousel) {
    // Skip affordance sits in the hero border, gone on the last page
    let mut hero_block = Block::new()
        .borders(Borders::ALL)
        .style(theme.ratatui_style(Element::Border));
    if carousel.skip_visible() {
        hero_block = hero_block.title(
            ratatui::widgets::block::Title::from(" [S]kip ")
                .alignment(Alignment::Right),
        );
    }
    let inner = hero_block.inner(area);
    frame.render_widget(hero_block, area);

    let top_padding = (inner.height.saturating_sub(ART_HEIGHT)) / 2;
    let hero_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(top_padding),
            Constraint::Length(ART_HEIGHT),
            Constraint::Min(0),
        ])
        .split(inner);

    let art = Paragraph::new(page_art(page.icon))
        .alignment(Alignment::Center)
        .style(theme.ratatui_style(Element::Accent));
    frame.render_widget(art, hero_chunks[1]);
}

fn render_sheet(frame: &mut Frame, area: Rect, theme: &Theme, page: &Page, carousel: &Carousel) {
    let sheet_block = Block::new()
        .borders(Borders::TOP)
        .style(theme.ratatui_style(Element::Border));
    let inner = sheet_block.inner(area);
    frame.render_widget(sheet_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // icon
            Constraint::Length(1), // title
            Constraint::Length(2), // description (wrapped)
            Constraint::Length(1), // spacer
            Constraint::Length(1), // dots
            Constraint::Length(1), // spacer
            Constraint::Length(1), // action
        ])
        .split(inner);

    let icon = Paragraph::new(page_glyph(page.icon))
        .alignment(Alignment::Center)
        .style(theme.ratatui_style(Element::Accent));
    frame.render_widget(icon, chunks[0]);

    let title = Paragraph::new(page.title)
        .alignment(Alignment::Center)
        .style(theme.title_style());
    frame.render_widget(title, chunks[1]);

    let wrap_width = (inner.width.saturating_sub(8)).max(20) as usize;
    let description = textwrap::wrap(page.description, wrap_width).join("\n");
    let description = Paragraph::new(description)
        .alignment(Alignment::Center)
        .style(theme.text_style());
    frame.render_widget(description, chunks[2]);

    let dots = Paragraph::new(indicator_line(theme, carousel)).alignment(Alignment::Center);
    frame.render_widget(dots, chunks[4]);

    // Next on every page but the last, Get Started only there
    let action = if carousel.is_last() {
        "[ENTER] Get Started →"
    } else {
        "[ENTER] Next →"
    };
    let action = Paragraph::new(action)
        .alignment(Alignment::Center)
        .style(theme.accent_style());
    frame.render_widget(action, chunks[6]);
}

/// Dot row: the active dot is wide, every other dot narrow, keyed purely off
/// the carousel's current index.
fn indicator_line<'a>(theme: &Theme, carousel: &Carousel) -> Line<'a> {
    let mut spans = Vec::with_capacity(carousel.len() * 2);
    for index in 0..carousel.len() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        let width = carousel.dot_width(index) as usize;
        let style = if index == carousel.current_index() {
            theme.ratatui_style(Element::Accent)
        } else {
            theme.ratatui_style(Element::Inactive)
        };
        spans.push(Span::styled("━".repeat(width), style));
    }
    Line::from(spans)
}
