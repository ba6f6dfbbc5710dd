//! Scenario inputs — the five-knob vector every derivation consumes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::modes::{DrMode, FailureMode, ResilienceMode};

/// Concurrent-user slider bounds and step.
pub const USERS_MIN: u32 = 400;
pub const USERS_MAX: u32 = 12_000;
pub const USERS_STEP: u32 = 100;

/// Stored-data slider bounds (terabytes), step 1.
pub const DATA_TB_MIN: u32 = 2;
pub const DATA_TB_MAX: u32 = 60;

/// One complete scenario: load shape plus the three operating modes.
///
/// Field order is the canonical serialization order; the scenario
/// fingerprint hashes the JSON form of this struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScenarioInputs {
    /// Concurrent users, 400..=12_000.
    pub users: u32,
    /// Stored data in terabytes, 2..=60.
    pub data_tb: u32,
    pub resilience: ResilienceMode,
    pub failure: FailureMode,
    pub dr_mode: DrMode,
}

impl Default for ScenarioInputs {
    /// Mid-range steady state: the dashboard's starting position.
    fn default() -> Self {
        Self {
            users: 3200,
            data_tb: 22,
            resilience: ResilienceMode::Balanced,
            failure: FailureMode::None,
            dr_mode: DrMode::Warm,
        }
    }
}

impl ScenarioInputs {
    /// Clamp the numeric knobs into their slider ranges.
    pub fn clamped(mut self) -> Self {
        self.users = self.users.clamp(USERS_MIN, USERS_MAX);
        self.data_tb = self.data_tb.clamp(DATA_TB_MIN, DATA_TB_MAX);
        self
    }

    /// Reject out-of-range numeric knobs. The mode fields are enums and
    /// cannot be out of range.
    pub fn validate(&self) -> Result<(), InputRangeError> {
        if !(USERS_MIN..=USERS_MAX).contains(&self.users) {
            return Err(InputRangeError::Users(self.users));
        }
        if !(DATA_TB_MIN..=DATA_TB_MAX).contains(&self.data_tb) {
            return Err(InputRangeError::DataTb(self.data_tb));
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputRangeError {
    #[error("users {0} outside {USERS_MIN}..={USERS_MAX}")]
    Users(u32),

    #[error("data_tb {0} outside {DATA_TB_MIN}..={DATA_TB_MAX}")]
    DataTb(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario_is_valid() {
        let inputs = ScenarioInputs::default();
        assert_eq!(inputs.users, 3200);
        assert_eq!(inputs.data_tb, 22);
        assert_eq!(inputs.resilience, ResilienceMode::Balanced);
        assert_eq!(inputs.failure, FailureMode::None);
        assert_eq!(inputs.dr_mode, DrMode::Warm);
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_clamped_pulls_knobs_into_range() {
        let inputs = ScenarioInputs { users: 20_000, data_tb: 1, ..Default::default() };
        let clamped = inputs.clamped();
        assert_eq!(clamped.users, USERS_MAX);
        assert_eq!(clamped.data_tb, DATA_TB_MIN);
        assert!(clamped.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_the_offending_knob() {
        let too_few = ScenarioInputs { users: 100, ..Default::default() };
        assert_eq!(too_few.validate(), Err(InputRangeError::Users(100)));

        let too_much_data = ScenarioInputs { data_tb: 61, ..Default::default() };
        assert_eq!(too_much_data.validate(), Err(InputRangeError::DataTb(61)));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let low = ScenarioInputs { users: USERS_MIN, data_tb: DATA_TB_MIN, ..Default::default() };
        let high = ScenarioInputs { users: USERS_MAX, data_tb: DATA_TB_MAX, ..Default::default() };
        assert!(low.validate().is_ok());
        assert!(high.validate().is_ok());
    }

    #[test]
    fn test_json_field_order_is_stable() {
        // The fingerprint relies on this exact key order.
        let json = serde_json::to_string(&ScenarioInputs::default()).unwrap();
        assert_eq!(
            json,
            r#"{"users":3200,"data_tb":22,"resilience":"balanced","failure":"none","dr_mode":"warm"}"#
        );
    }
}
