//! Application state — single-owner, main-thread only.
//!
//! The state is the five-knob input vector plus the metrics derived from
//! it. `recompute` re-derives the full metric vector after every change,
//! so `metrics` is never stale and never carries anything over.

use std::path::PathBuf;

use archlab_core::domain::{
    DrMode, FailureMode, ResilienceMode, ScenarioInputs, DATA_TB_MAX, DATA_TB_MIN, USERS_MAX,
    USERS_MIN, USERS_STEP,
};
use archlab_core::model::SimulatedMetrics;
use archlab_core::presets::ScenarioPreset;
use archlab_runner::{save_artifacts, ScenarioReport};

/// Which control row the cursor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Users,
    DataTb,
    Resilience,
    Failure,
    DrMode,
}

impl Control {
    pub const COUNT: usize = 5;

    pub fn index(self) -> usize {
        match self {
            Control::Users => 0,
            Control::DataTb => 1,
            Control::Resilience => 2,
            Control::Failure => 3,
            Control::DrMode => 4,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Control::Users),
            1 => Some(Control::DataTb),
            2 => Some(Control::Resilience),
            3 => Some(Control::Failure),
            4 => Some(Control::DrMode),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Control::Users => "Concurrent Users",
            Control::DataTb => "Data Volume",
            Control::Resilience => "Resilience",
            Control::Failure => "Failure",
            Control::DrMode => "DR Posture",
        }
    }

    pub fn next(self) -> Control {
        Control::from_index((self.index() + 1) % Self::COUNT).unwrap()
    }

    pub fn prev(self) -> Control {
        Control::from_index((self.index() + Self::COUNT - 1) % Self::COUNT).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

/// Top-level application state.
pub struct AppState {
    pub inputs: ScenarioInputs,
    pub metrics: SimulatedMetrics,
    pub cursor: Control,
    pub overlay: Overlay,
    pub running: bool,
    pub status_message: Option<(String, StatusLevel)>,
    pub output_dir: PathBuf,
}

impl AppState {
    pub fn new(output_dir: PathBuf) -> Self {
        let inputs = ScenarioInputs::default();
        Self {
            inputs,
            metrics: SimulatedMetrics::compute(&inputs),
            cursor: Control::Users,
            overlay: Overlay::None,
            running: true,
            status_message: None,
            output_dir,
        }
    }

    /// Re-derive the full metric vector from the current inputs.
    pub fn recompute(&mut self) {
        self.metrics = SimulatedMetrics::compute(&self.inputs);
    }

    /// Adjust the control under the cursor. Sliders step within their
    /// bounds; the mode selectors cycle with wraparound.
    pub fn adjust(&mut self, direction: i32) {
        match self.cursor {
            Control::Users => {
                let users = self.inputs.users as i64 + direction as i64 * USERS_STEP as i64;
                self.inputs.users = (users.max(0) as u32).clamp(USERS_MIN, USERS_MAX);
            }
            Control::DataTb => {
                let tb = self.inputs.data_tb as i64 + direction as i64;
                self.inputs.data_tb = (tb.max(0) as u32).clamp(DATA_TB_MIN, DATA_TB_MAX);
            }
            Control::Resilience => {
                self.inputs.resilience =
                    cycle(&ResilienceMode::all(), self.inputs.resilience, direction);
            }
            Control::Failure => {
                self.inputs.failure = cycle(&FailureMode::all(), self.inputs.failure, direction);
            }
            Control::DrMode => {
                self.inputs.dr_mode = cycle(&DrMode::all(), self.inputs.dr_mode, direction);
            }
        }
        self.recompute();
    }

    /// Replace the whole input vector with a preset's, atomically.
    pub fn apply_preset(&mut self, preset: ScenarioPreset) {
        self.inputs = preset.inputs();
        self.recompute();
        self.set_status(format!("Applied preset: {}", preset.title()));
    }

    /// Back to the default scenario.
    pub fn reset(&mut self) {
        self.inputs = ScenarioInputs::default();
        self.recompute();
        self.set_status("Reset to default scenario");
    }

    /// Write the artifact bundle for the current scenario, returning the
    /// created directory.
    pub fn export_snapshot(&self) -> anyhow::Result<PathBuf> {
        let report = ScenarioReport::new(self.inputs, None);
        save_artifacts(&report, &self.output_dir)
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set an error status message.
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}

/// Step through a mode list with wraparound.
fn cycle<T: Copy + PartialEq>(all: &[T], current: T, direction: i32) -> T {
    let len = all.len() as i32;
    let idx = all.iter().position(|v| *v == current).unwrap_or(0) as i32;
    all[(idx + direction).rem_euclid(len) as usize]
}
