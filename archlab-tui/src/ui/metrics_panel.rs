//! Metric cards — latency, cost, availability, recovery objectives,
//! CloudWatch volume.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let m = &app.metrics;

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ])
        .split(area);

    card(
        f,
        cards[0],
        " Latency ",
        format!("{} ms", m.latency_ms),
        "p95 simulated",
        theme::latency_style(m.latency_ms),
    );
    card(
        f,
        cards[1],
        " Cost ",
        format!("${}", m.monthly_cost),
        "est. monthly",
        theme::accent(),
    );
    card(
        f,
        cards[2],
        " Availability ",
        format!("{:.2}%", m.availability_pct),
        "rolling 30-day",
        theme::availability_style(m.availability_pct),
    );
    card(
        f,
        cards[3],
        " RTO / RPO ",
        format!("{} / {} min", m.rto_minutes, m.rpo_minutes),
        "recovery objectives",
        theme::neutral(),
    );
    card(
        f,
        cards[4],
        " CloudWatch ",
        format!("{} alarms", m.cloudwatch_alarms),
        &format!("{} signals/min", m.cloudwatch_signals),
        theme::alarm_style(m.cloudwatch_alarms),
    );
}

fn card(f: &mut Frame, area: Rect, title: &str, value: String, caption: &str, style: Style) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border())
        .title(title)
        .title_style(theme::muted());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(value, style)),
        Line::from(Span::styled(caption.to_string(), theme::muted())),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}
