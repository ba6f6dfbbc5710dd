//! Help overlay.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::theme;
use crate::ui::centered_rect;

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Help ")
        .title_style(theme::accent_bold());
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Controls");
    key(&mut lines, "j / k", "Move between controls");
    key(&mut lines, "h / l", "Adjust slider or cycle mode");
    lines.push(Line::from(""));

    section(&mut lines, "Scenarios");
    key(&mut lines, "1", "Apply preset: Normal Day");
    key(&mut lines, "2", "Apply preset: Traffic Spike");
    key(&mut lines, "3", "Apply preset: Region Failure");
    key(&mut lines, "r", "Reset to the default scenario");
    lines.push(Line::from(""));

    section(&mut lines, "Output");
    key(&mut lines, "e", "Export snapshot (manifest.json, metrics.csv, report.md)");
    lines.push(Line::from(""));

    section(&mut lines, "General");
    key(&mut lines, "?", "Toggle this help");
    key(&mut lines, "q / Esc", "Quit");
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to dismiss...",
        theme::neutral(),
    )));

    f.render_widget(Paragraph::new(lines), inner);
}

fn section(lines: &mut Vec<Line>, title: &str) {
    lines.push(Line::from(Span::styled(
        title.to_string(),
        theme::accent_bold(),
    )));
}

fn key(lines: &mut Vec<Line>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {keys:>8}  "), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
