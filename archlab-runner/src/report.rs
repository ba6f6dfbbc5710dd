//! Scenario report — the serializable record of one model evaluation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use archlab_core::domain::ScenarioInputs;
use archlab_core::fingerprint::scenario_id;
use archlab_core::model::SimulatedMetrics;

/// Bumped whenever the report layout changes incompatibly. Loaders reject
/// reports written by a newer layout.
pub const SCHEMA_VERSION: u32 = 1;

/// One evaluated scenario: inputs, outputs, and identity.
///
/// Everything needed to reproduce the evaluation travels with the report:
/// the input vector is embedded, and `scenario_id` is its content hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioReport {
    pub schema_version: u32,
    pub scenario_id: String,
    /// Optional human label, e.g. the preset title or config file label.
    pub label: Option<String>,
    pub generated_at: NaiveDateTime,
    pub inputs: ScenarioInputs,
    pub metrics: SimulatedMetrics,
}

impl ScenarioReport {
    /// Evaluate `inputs` and wrap the result with identity and timestamp.
    pub fn new(inputs: ScenarioInputs, label: Option<String>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            scenario_id: scenario_id(&inputs),
            label,
            generated_at: chrono::Local::now().naive_local(),
            inputs,
            metrics: SimulatedMetrics::compute(&inputs),
        }
    }

    /// Short id used in artifact directory names and dashboards.
    pub fn short_id(&self) -> &str {
        &self.scenario_id[..self.scenario_id.len().min(12)]
    }
}
