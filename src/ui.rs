use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

const HELP: &[(&str, &str)] = &[
    ("Enter", "commit now"),
    ("Ctrl-z", "undo"),
    ("Ctrl-y", "redo"),
    ("Ctrl-l", "clear history"),
    ("F2", "show full timeline in status"),
    ("PgUp/PgDn", "scroll timeline"),
    ("F1", "toggle this help"),
    ("Esc", "close help / quit"),
];

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.size());

    render_editor(frame, app, chunks[0]);
    render_timeline(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);
    render_message_line(frame, app, chunks[3]);

    if app.help.get() {
        let area = centered(frame.size(), 44, HELP.len() as u16 + 2);
        render_help(frame, app, area);
        app.set_help_region(Some(area));
    } else {
        app.set_help_region(None);
    }
}

fn render_editor(frame: &mut Frame, app: &App, area: Rect) {
    let title = if app.has_pending_edit() { "Value [+]" } else { "Value" };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title, app.theme.var("accent")));
    let inner = block.inner(area);

    let editor = Paragraph::new(app.editor.buffer.as_str())
        .style(app.theme.var("text"))
        .block(block);
    frame.render_widget(editor, area);

    if !app.help.get() {
        let x = inner.x + (app.editor.cursor_column() as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor(x, inner.y);
    }
}

fn render_timeline(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Timeline", app.theme.var("accent")));
    let inner = block.inner(area);

    let timeline = app.history.timeline();
    let cursor = timeline.cursor();
    let lines: Vec<Line> = timeline
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            let text = if value.is_empty() { "(empty)" } else { value.as_str() };
            if idx == cursor {
                Line::from(vec![
                    Span::styled("> ", app.theme.var("accent")),
                    Span::styled(text.to_string(), app.theme.var("text")),
                ])
            } else {
                let var = if idx < cursor { "text" } else { "muted" };
                Line::from(vec![Span::raw("  "), Span::styled(text.to_string(), app.theme.var(var))])
            }
        })
        .collect();

    let content_width = timeline
        .iter()
        .map(|v| v.width() + 2)
        .max()
        .unwrap_or(0)
        .min(u16::MAX as usize) as u16;
    let content_height = lines.len().min(u16::MAX as usize) as u16;

    app.sync_list((content_width, content_height), inner);
    let (x, y) = app.list_scroll.position();

    let list = Paragraph::new(lines).block(block).scroll((y, x));
    frame.render_widget(list, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let text = if app.timeline_key.is_pressed() {
        app.history
            .timeline()
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(" | ")
    } else {
        app.status.clone()
    };
    let theme_name = app.theme.theme_name().unwrap_or("default");
    let right = format!("{} ", theme_name);
    let pad = (area.width as usize)
        .saturating_sub(text.width() + right.width() + 1);

    let status = Line::from(vec![
        Span::raw(" "),
        Span::raw(text),
        Span::raw(" ".repeat(pad)),
        Span::raw(right),
    ]);
    frame.render_widget(Paragraph::new(status).style(app.theme.var("status")), area);
}

fn render_message_line(frame: &mut Frame, app: &App, area: Rect) {
    let content = match (&app.message, app.previous.get()) {
        (Some(msg), _) => Span::styled(msg.clone(), app.theme.var("error")),
        (None, Some(prev)) => Span::styled(format!("previous: {}", prev), app.theme.var("muted")),
        (None, None) => Span::raw(""),
    };
    frame.render_widget(Paragraph::new(Line::from(content)), area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    frame.render_widget(Clear, area);
    let border = if app.help_hover.is_hovered() { "accent" } else { "panel" };
    let lines: Vec<Line> = HELP
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!(" {:<10}", key), app.theme.var("accent")),
                Span::styled(*what, app.theme.var("text")),
            ])
        })
        .collect();
    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.theme.var(border))
            .title("Help"),
    );
    frame.render_widget(help, area);
}

/// A `width` x `height` rectangle centered in `area`, clipped to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
