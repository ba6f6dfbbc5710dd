//! Scenario fingerprinting — content-addressed identity for input vectors.
//!
//! Two identical vectors always hash to the same id; changing any field
//! changes the id. The canonical form is the JSON serialization of
//! `ScenarioInputs`, whose field order is fixed by the struct declaration.

use crate::domain::ScenarioInputs;

/// Full blake3 hex digest of the canonical scenario JSON.
pub fn scenario_id(inputs: &ScenarioInputs) -> String {
    let json = serde_json::to_string(inputs).expect("ScenarioInputs must serialize");
    blake3::hash(json.as_bytes()).to_hex().to_string()
}

/// First 12 hex chars — enough to tell scenarios apart on dashboards.
pub fn short_scenario_id(inputs: &ScenarioInputs) -> String {
    let mut id = scenario_id(inputs);
    id.truncate(12);
    id
}
