//! Architecture view — failover badge, region cards, traffic paths,
//! pod fleet, data tier.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use archlab_core::domain::Region;

use crate::app::AppState;
use crate::theme;

const GAUGE_WIDTH: usize = 20;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // failover badge
            Constraint::Length(6), // region cards
            Constraint::Length(2), // traffic paths
            Constraint::Length(1), // pod fleet
            Constraint::Length(1), // data tier
            Constraint::Min(0),
        ])
        .split(area);

    render_badge(f, chunks[0], app);

    let regions = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_region_card(f, regions[0], app, Region::Primary);
    render_region_card(f, regions[1], app, Region::Secondary);

    render_paths(f, chunks[2], app);
    render_pods(f, chunks[3], app);
    render_data_tier(f, chunks[4], app);
}

fn render_badge(f: &mut Frame, area: Rect, app: &AppState) {
    let m = &app.metrics;
    let line = if m.active_region == Region::Secondary {
        Line::from(Span::styled(
            format!(" FAILOVER ACTIVE — serving from {}", m.active_region.name()),
            theme::negative(),
        ))
    } else if m.degraded {
        Line::from(Span::styled(
            " AZ DEGRADED — primary path impaired",
            theme::warning(),
        ))
    } else {
        Line::from(Span::styled(" Primary path active", theme::positive()))
    };
    f.render_widget(Paragraph::new(line), area);
}

fn render_region_card(f: &mut Frame, area: Rect, app: &AppState, region: Region) {
    let m = &app.metrics;
    let serving = m.active_region == region;
    let impaired = region == Region::Primary && m.active_region == Region::Secondary;

    let border = if serving {
        theme::accent()
    } else {
        theme::dimmed()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {} ", region.name()))
        .title_style(if serving {
            theme::accent_bold()
        } else {
            theme::dimmed()
        });
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (status, status_style) = if impaired {
        ("IMPAIRED".to_string(), theme::negative())
    } else if serving && m.degraded {
        ("SERVING (degraded)".to_string(), theme::warning())
    } else if serving {
        ("SERVING".to_string(), theme::positive())
    } else {
        (
            format!("STANDBY ({})", app.inputs.dr_mode.title()),
            theme::muted(),
        )
    };

    let body = if serving { theme::secondary() } else { theme::dimmed() };
    let lines = vec![
        Line::from(Span::styled(status, status_style)),
        Line::from(Span::styled(
            format!("ALB → EKS ×{} → EC2 ×{}", m.pod_count, m.ec2_count),
            body,
        )),
        Line::from(Span::styled(
            format!(
                "PG ×{} · Mongo ×{} · Redis ×{}",
                m.pg_readers, m.mongo_shards, m.redis_nodes
            ),
            body,
        )),
        Line::from(Span::styled(
            format!("CloudWatch: {} alarms", m.cloudwatch_alarms),
            if serving {
                theme::alarm_style(m.cloudwatch_alarms)
            } else {
                theme::dimmed()
            },
        )),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_paths(f: &mut Frame, area: Rect, app: &AppState) {
    let m = &app.metrics;
    let lines = vec![
        Line::from(vec![
            Span::styled(" public  ", theme::secondary()),
            Span::styled(gauge(m.public_intensity), theme::accent()),
            Span::styled(format!(" {:>3}%", m.public_intensity), theme::secondary()),
            Span::styled(format!("   {} req/min", m.request_flow), theme::neutral()),
        ]),
        Line::from(vec![
            Span::styled(" private ", theme::secondary()),
            Span::styled(gauge(m.private_intensity), theme::neutral()),
            Span::styled(format!(" {:>3}%", m.private_intensity), theme::secondary()),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_pods(f: &mut Frame, area: Rect, app: &AppState) {
    let m = &app.metrics;
    let mut spans = vec![Span::styled(
        format!(" pods ×{:<2} ", m.pod_count),
        theme::secondary(),
    )];
    for i in 0..m.pod_count {
        // During an AZ loss every fifth pod sits in the lost zone.
        let lost = m.degraded && i % 5 == 4;
        spans.push(Span::styled(
            "● ",
            if lost { theme::dimmed() } else { theme::positive() },
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_data_tier(f: &mut Frame, area: Rect, app: &AppState) {
    let m = &app.metrics;
    let line = Line::from(vec![
        Span::styled(" data tier ", theme::secondary()),
        Span::styled(
            format!(
                "EC2 {} · PG {} · Mongo {} · Redis {}",
                m.ec2_count, m.pg_readers, m.mongo_shards, m.redis_nodes
            ),
            theme::muted(),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn gauge(intensity: u32) -> String {
    let filled = (intensity as usize * GAUGE_WIDTH) / 100;
    let filled = filled.min(GAUGE_WIDTH);
    format!(
        "[{}{}]",
        "=".repeat(filled),
        " ".repeat(GAUGE_WIDTH - filled)
    )
}
