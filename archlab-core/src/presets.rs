//! Named presets — fixed input vectors applied as one atomic replacement.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{DrMode, FailureMode, ResilienceMode, ScenarioInputs};

/// The built-in dashboard scenarios.
///
/// Applying a preset replaces the whole input vector at once; there is no
/// partial application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioPreset {
    /// Mid-week steady state on the balanced posture.
    NormalDay,
    /// Launch-day load at roughly 4x the normal user count.
    TrafficSpike,
    /// Primary region lost while running the most defensive posture.
    RegionFailure,
}

impl ScenarioPreset {
    pub fn all() -> [Self; 3] {
        [Self::NormalDay, Self::TrafficSpike, Self::RegionFailure]
    }

    /// The stored input vector this preset applies.
    pub fn inputs(self) -> ScenarioInputs {
        match self {
            Self::NormalDay => ScenarioInputs {
                users: 2200,
                data_tb: 18,
                resilience: ResilienceMode::Balanced,
                failure: FailureMode::None,
                dr_mode: DrMode::Warm,
            },
            Self::TrafficSpike => ScenarioInputs {
                users: 9200,
                data_tb: 36,
                resilience: ResilienceMode::Balanced,
                failure: FailureMode::None,
                dr_mode: DrMode::Warm,
            },
            Self::RegionFailure => ScenarioInputs {
                users: 4800,
                data_tb: 24,
                resilience: ResilienceMode::Maximum,
                failure: FailureMode::Region,
                dr_mode: DrMode::Hot,
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NormalDay => "normal_day",
            Self::TrafficSpike => "traffic_spike",
            Self::RegionFailure => "region_failure",
        }
    }

    /// Display name for UI surfaces.
    pub fn title(self) -> &'static str {
        match self {
            Self::NormalDay => "Normal Day",
            Self::TrafficSpike => "Traffic Spike",
            Self::RegionFailure => "Region Failure",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Self::NormalDay => "steady mid-week load, balanced posture, warm standby",
            Self::TrafficSpike => "launch-day surge, balanced posture, warm standby",
            Self::RegionFailure => "primary region down, max resilience, hot standby",
        }
    }
}

impl fmt::Display for ScenarioPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScenarioPreset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal_day" => Ok(Self::NormalDay),
            "traffic_spike" => Ok(Self::TrafficSpike),
            "region_failure" => Ok(Self::RegionFailure),
            other => Err(UnknownPreset(other.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown preset '{0}' (expected normal_day, traffic_spike, or region_failure)")]
pub struct UnknownPreset(pub String);
