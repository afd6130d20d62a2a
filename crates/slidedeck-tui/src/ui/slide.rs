//! Slide area
//!
//! The bordered main panel. Shows the loading notice, the error screen, or the
//! current slide with its `k / N` counter, depending on view status.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use slidedeck_app::{ClickTarget, SlideBody, ViewStatus, Viewer, VisualTree};

use super::{HitMap, width};

const LOADING_MESSAGE: &str = "Loading presentation...";
const EMPTY_MESSAGE: &str = "No slides in this presentation";
const ERROR_PREFIX: &str = "Error: ";
const ERROR_CLOSE_LABEL: &str = "[ Close ]";
const TEXT_MARGIN: Margin = Margin { horizontal: 1, vertical: 0 };

/// Render the slide area.
pub fn render(frame: &mut Frame, viewer: &Viewer, area: Rect, hits: &mut HitMap) {
    let visual = viewer.current_visual();

    let mut block = Block::default().borders(Borders::ALL);
    if let Some(tree) = &visual {
        block = block.title_bottom(Line::from(format!(" {} ", tree.position)).right_aligned());
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match viewer.state().status() {
        ViewStatus::Loading => render_notice(frame, inner, LOADING_MESSAGE),
        ViewStatus::Error => {
            let message = viewer.state().error_message().unwrap_or_default();
            render_error(frame, message, inner, hits);
        },
        ViewStatus::Ready => match visual {
            Some(tree) => render_visual(frame, &tree, inner),
            None => render_notice(frame, inner, EMPTY_MESSAGE),
        },
    }
}

fn render_visual(frame: &mut Frame, tree: &VisualTree, area: Rect) {
    match &tree.body {
        SlideBody::Text { heading, lines } => {
            let heading_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

            let mut text: Vec<Line> =
                heading.lines().map(|l| Line::styled(l.to_string(), heading_style)).collect();
            text.push(Line::default());
            text.extend(lines.iter().flat_map(|l| l.lines()).map(|l| Line::raw(l.to_string())));

            let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
            frame.render_widget(paragraph, area.inner(TEXT_MARGIN));
        },
        SlideBody::Fallback { label, caption } => {
            let text = Text::from(vec![
                Line::styled(label.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Line::styled(*caption, Style::default().fg(Color::DarkGray)),
            ]);
            render_centered(frame, area, text);
        },
    }
}

fn render_notice(frame: &mut Frame, area: Rect, message: &str) {
    render_centered(frame, area, Text::styled(message, Style::default().fg(Color::DarkGray)));
}

/// Error message with its own close control underneath.
fn render_error(frame: &mut Frame, message: &str, area: Rect, hits: &mut HitMap) {
    let text_width = width(ERROR_PREFIX) + width(message);
    let message_height = text_width.div_ceil(area.width.max(1)).max(1);

    let chunks = Layout::vertical([
        Constraint::Length(message_height),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .split(area);

    let [message_area, _, close_row] = chunks.as_ref() else {
        return;
    };

    let error = Paragraph::new(Line::from(vec![
        Span::styled(ERROR_PREFIX, Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw(message.to_string()),
    ]))
    .centered()
    .wrap(Wrap { trim: true });
    frame.render_widget(error, *message_area);

    let close_width = width(ERROR_CLOSE_LABEL).min(close_row.width);
    let close_x = close_row.x + (close_row.width - close_width) / 2;
    let button = Rect::new(close_x, close_row.y, close_width, close_row.height);

    let close = Paragraph::new(ERROR_CLOSE_LABEL).style(Style::default().fg(Color::Yellow));
    frame.render_widget(close, button);
    hits.push(button, ClickTarget::Close);
}

fn render_centered(frame: &mut Frame, area: Rect, text: Text<'_>) {
    let height = text.height() as u16;
    let chunks = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center).split(area);
    let [row] = chunks.as_ref() else {
        return;
    };
    frame.render_widget(Paragraph::new(text).centered(), *row);
}
