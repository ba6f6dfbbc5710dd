//! Controls column — load/storage sliders, mode selectors, preset hints.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use archlab_core::domain::{DATA_TB_MAX, DATA_TB_MIN, USERS_MAX, USERS_MIN};
use archlab_core::presets::ScenarioPreset;

use crate::app::{AppState, Control};
use crate::theme;

const BAR_WIDTH: usize = 14;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "[j/k]select [h/l]adjust",
        theme::muted(),
    )));
    lines.push(Line::from(""));

    slider_line(
        &mut lines,
        app,
        Control::Users,
        frac(app.inputs.users, USERS_MIN, USERS_MAX),
        format!("{}", app.inputs.users),
    );
    slider_line(
        &mut lines,
        app,
        Control::DataTb,
        frac(app.inputs.data_tb, DATA_TB_MIN, DATA_TB_MAX),
        format!("{} TB", app.inputs.data_tb),
    );
    lines.push(Line::from(""));

    selector_line(&mut lines, app, Control::Resilience, app.inputs.resilience.title());
    selector_line(&mut lines, app, Control::Failure, app.inputs.failure.title());
    selector_line(&mut lines, app, Control::DrMode, app.inputs.dr_mode.title());

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Presets", theme::accent_bold())));
    for (key, preset) in [
        ('1', ScenarioPreset::NormalDay),
        ('2', ScenarioPreset::TrafficSpike),
        ('3', ScenarioPreset::RegionFailure),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("  [{key}] "), theme::accent()),
            Span::styled(format!("{:<15}", preset.title()), theme::secondary()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("      {}", preset.describe()),
            theme::muted(),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[r]eset [e]xport snapshot [?]help [q]uit",
        theme::muted(),
    )));

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn frac(value: u32, min: u32, max: u32) -> f64 {
    (value - min) as f64 / (max - min) as f64
}

fn row_style(app: &AppState, control: Control) -> ratatui::style::Style {
    if app.cursor == control {
        theme::accent().add_modifier(Modifier::REVERSED)
    } else {
        theme::muted()
    }
}

fn slider_line(lines: &mut Vec<Line>, app: &AppState, control: Control, frac: f64, value: String) {
    let style = row_style(app, control);
    let filled = (frac * BAR_WIDTH as f64).round() as usize;
    let empty = BAR_WIDTH.saturating_sub(filled);
    let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

    lines.push(Line::from(vec![
        Span::styled(format!("{:>16}: ", control.label()), style),
        Span::styled(
            bar,
            if app.cursor == control {
                theme::accent()
            } else {
                theme::muted()
            },
        ),
        Span::styled(format!(" {value}"), style),
    ]));
}

fn selector_line(lines: &mut Vec<Line>, app: &AppState, control: Control, title: &str) {
    let style = row_style(app, control);
    lines.push(Line::from(vec![
        Span::styled(format!("{:>16}: ", control.label()), style),
        Span::styled(format!("◂ {title:^14} ▸"), style),
    ]));
}
