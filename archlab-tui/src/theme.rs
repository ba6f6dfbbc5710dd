//! Neon-on-charcoal theme tokens and value-graded style helpers.

use ratatui::style::{Color, Modifier, Style};

const ACCENT: Color = Color::Rgb(0, 255, 255);
const POSITIVE: Color = Color::Rgb(0, 255, 128);
const NEGATIVE: Color = Color::Rgb(255, 20, 147);
const WARNING: Color = Color::Rgb(255, 140, 0);
const NEUTRAL: Color = Color::Rgb(147, 112, 219);
const MUTED: Color = Color::Rgb(100, 149, 237);
const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn secondary() -> Style {
    Style::default().fg(TEXT_SECONDARY)
}

/// Dimmed style for impaired regions and shed pods.
pub fn dimmed() -> Style {
    Style::default().fg(TEXT_SECONDARY).add_modifier(Modifier::DIM)
}

pub fn panel_border() -> Style {
    Style::default().fg(MUTED)
}

pub fn panel_title() -> Style {
    accent_bold()
}

/// Availability grading: green above 99.5, cyan above 99.0, orange above
/// 97.0, pink below.
pub fn availability_style(pct: f64) -> Style {
    match pct {
        p if p >= 99.5 => positive(),
        p if p >= 99.0 => accent(),
        p if p >= 97.0 => warning(),
        _ => negative(),
    }
}

/// Latency grading: green under 60ms, cyan under 90ms, orange under
/// 120ms, pink above.
pub fn latency_style(ms: u32) -> Style {
    match ms {
        m if m < 60 => positive(),
        m if m < 90 => accent(),
        m if m < 120 => warning(),
        _ => negative(),
    }
}

/// Alarm grading on the three discrete counts the model produces.
pub fn alarm_style(count: u32) -> Style {
    match count {
        c if c <= 3 => positive(),
        c if c <= 8 => warning(),
        _ => negative(),
    }
}
