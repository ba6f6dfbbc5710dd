//! Keyboard input dispatch — overlay first, then global keys, then controls.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use archlab_core::presets::ScenarioPreset;

use crate::app::{AppState, Overlay};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. The help overlay consumes input first.
    if app.overlay == Overlay::Help {
        app.overlay = Overlay::None;
        return;
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
        }
        KeyCode::Char('1') => app.apply_preset(ScenarioPreset::NormalDay),
        KeyCode::Char('2') => app.apply_preset(ScenarioPreset::TrafficSpike),
        KeyCode::Char('3') => app.apply_preset(ScenarioPreset::RegionFailure),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Char('e') => match app.export_snapshot() {
            Ok(run_dir) => app.set_status(format!("Snapshot saved to {}", run_dir.display())),
            Err(err) => app.set_error(format!("Snapshot failed: {err}")),
        },

        // 3. Control navigation and adjustment.
        KeyCode::Char('j') | KeyCode::Down => {
            app.cursor = app.cursor.next();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.prev();
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.adjust(-1);
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.adjust(1);
        }
        _ => {}
    }
}
