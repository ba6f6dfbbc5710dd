//! Domain types for the scenario model

pub mod modes;
pub mod region;
pub mod scenario;

pub use modes::{DrMode, FailureMode, ModeParseError, ResilienceMode};
pub use region::Region;
pub use scenario::{
    InputRangeError, ScenarioInputs, DATA_TB_MAX, DATA_TB_MIN, USERS_MAX, USERS_MIN, USERS_STEP,
};
