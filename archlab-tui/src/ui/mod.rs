//! Top-level UI layout — controls column, architecture view, metric cards.

pub mod architecture_panel;
pub mod controls_panel;
pub mod metrics_panel;
pub mod overlays;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Overlay};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    // Controls column on the left, architecture + metrics on the right.
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(40)])
        .split(main_area);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(12), Constraint::Length(4)])
        .split(columns[1]);

    draw_block(f, columns[0], " Controls ", |f, inner| {
        controls_panel::render(f, inner, app)
    });
    draw_block(f, right[0], " Architecture ", |f, inner| {
        architecture_panel::render(f, inner, app)
    });
    metrics_panel::render(f, right[1], app);

    status_bar::render(f, status_area, app);

    if app.overlay == Overlay::Help {
        overlays::render_help(f, main_area);
    }
}

/// Draw a bordered block and render its content into the inner rect.
fn draw_block(f: &mut Frame, area: Rect, title: &str, render: impl FnOnce(&mut Frame, Rect)) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border())
        .title(title)
        .title_style(theme::panel_title());
    let inner = block.inner(area);
    f.render_widget(block, area);
    render(f, inner);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
