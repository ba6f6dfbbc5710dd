//! Operating modes — the three categorical knobs of a scenario.
//!
//! Each mode bundles the numeric adjustments it feeds into the derivation
//! formulas, so the formulas themselves stay free of mode `match` arms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Redundancy posture: how much headroom the fleet carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResilienceMode {
    /// Lean fleet: fewer replicas, cheaper, slower, riskier.
    Cost,
    /// Default posture with neutral multipliers.
    Balanced,
    /// Over-provisioned fleet with an extra read replica.
    Maximum,
}

impl ResilienceMode {
    pub fn all() -> [Self; 3] {
        [Self::Cost, Self::Balanced, Self::Maximum]
    }

    /// Multiplier applied to the user-driven pod base count.
    pub fn pod_multiplier(self) -> f64 {
        match self {
            Self::Cost => 0.8,
            Self::Balanced => 1.0,
            Self::Maximum => 1.35,
        }
    }

    /// Flat p95 latency penalty (ms) for running lean.
    pub fn latency_penalty_ms(self) -> f64 {
        match self {
            Self::Cost => 16.0,
            Self::Balanced | Self::Maximum => 0.0,
        }
    }

    /// Steady-state availability haircut in percentage points.
    pub fn availability_penalty(self) -> f64 {
        match self {
            Self::Cost => 0.35,
            Self::Balanced => 0.1,
            Self::Maximum => 0.03,
        }
    }

    /// Monthly surcharge (USD) for the redundant capacity.
    pub fn monthly_surcharge(self) -> f64 {
        match self {
            Self::Cost | Self::Balanced => 0.0,
            Self::Maximum => 850.0,
        }
    }

    /// Extra PostgreSQL read replicas held by this posture.
    pub fn extra_pg_readers(self) -> u32 {
        match self {
            Self::Cost | Self::Balanced => 0,
            Self::Maximum => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cost => "cost",
            Self::Balanced => "balanced",
            Self::Maximum => "maximum",
        }
    }

    /// Display name for UI surfaces.
    pub fn title(self) -> &'static str {
        match self {
            Self::Cost => "Cost saver",
            Self::Balanced => "Balanced",
            Self::Maximum => "Max resilience",
        }
    }
}

impl fmt::Display for ResilienceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ResilienceMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cost" => Ok(Self::Cost),
            "balanced" => Ok(Self::Balanced),
            "maximum" => Ok(Self::Maximum),
            other => Err(ModeParseError::Resilience(other.to_string())),
        }
    }
}

/// Injected fault: nothing, one availability zone, or the whole primary region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureMode {
    /// Healthy steady state.
    None,
    /// One availability zone in the primary region is down.
    Az,
    /// The primary region is down; traffic moves to the standby region.
    Region,
}

impl FailureMode {
    pub fn all() -> [Self; 3] {
        [Self::None, Self::Az, Self::Region]
    }

    /// True when any fault is injected (both AZ and region loss).
    pub fn is_injected(self) -> bool {
        !matches!(self, Self::None)
    }

    pub fn is_az_loss(self) -> bool {
        matches!(self, Self::Az)
    }

    pub fn is_region_loss(self) -> bool {
        matches!(self, Self::Region)
    }

    /// CloudWatch alarms firing under this fault.
    pub fn cloudwatch_alarms(self) -> u32 {
        match self {
            Self::None => 3,
            Self::Az => 8,
            Self::Region => 13,
        }
    }

    /// Fraction of offered traffic still served during the fault.
    pub fn flow_factor(self) -> f64 {
        match self {
            Self::None => 1.0,
            Self::Az | Self::Region => 0.76,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Az => "az",
            Self::Region => "region",
        }
    }

    /// Display name for UI surfaces.
    pub fn title(self) -> &'static str {
        match self {
            Self::None => "Healthy",
            Self::Az => "AZ loss",
            Self::Region => "Region loss",
        }
    }
}

impl fmt::Display for FailureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FailureMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "az" => Ok(Self::Az),
            "region" => Ok(Self::Region),
            other => Err(ModeParseError::Failure(other.to_string())),
        }
    }
}

/// Disaster-recovery posture of the standby region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrMode {
    /// Backups only. Cheapest, slowest to recover.
    Cold,
    /// Scaled-down replicas kept warm in the standby region.
    Warm,
    /// Full active-active standby with an extra cache node.
    Hot,
}

impl DrMode {
    pub fn all() -> [Self; 3] {
        [Self::Cold, Self::Warm, Self::Hot]
    }

    /// Multiplier applied to the user-driven pod base count.
    pub fn pod_multiplier(self) -> f64 {
        match self {
            Self::Cold => 0.8,
            Self::Warm => 1.0,
            Self::Hot => 1.22,
        }
    }

    /// Recovery time objective in minutes. Region loss exercises the full
    /// recovery path; otherwise the posture advertises its drill time.
    pub fn rto_minutes(self, region_lost: bool) -> u32 {
        match (self, region_lost) {
            (Self::Cold, true) => 120,
            (Self::Cold, false) => 40,
            (Self::Warm, true) => 22,
            (Self::Warm, false) => 8,
            (Self::Hot, true) => 6,
            (Self::Hot, false) => 2,
        }
    }

    /// Recovery point objective in minutes (replication lag bound).
    pub fn rpo_minutes(self) -> u32 {
        match self {
            Self::Cold => 60,
            Self::Warm => 10,
            Self::Hot => 1,
        }
    }

    /// Latency credit (ms) for hot standby: reads served closer to users.
    pub fn latency_credit_ms(self) -> f64 {
        match self {
            Self::Cold | Self::Warm => 0.0,
            Self::Hot => 6.0,
        }
    }

    /// Monthly surcharge (USD) for keeping the standby region ready.
    pub fn monthly_surcharge(self) -> f64 {
        match self {
            Self::Cold => 0.0,
            Self::Warm => 450.0,
            Self::Hot => 1200.0,
        }
    }

    /// Availability haircut in percentage points when the primary region is lost.
    pub fn region_loss_penalty(self) -> f64 {
        match self {
            Self::Cold | Self::Warm => 0.3,
            Self::Hot => 0.12,
        }
    }

    /// Extra Redis cache nodes held by this posture.
    pub fn extra_redis_nodes(self) -> u32 {
        match self {
            Self::Cold | Self::Warm => 0,
            Self::Hot => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cold => "cold",
            Self::Warm => "warm",
            Self::Hot => "hot",
        }
    }

    /// Display name for UI surfaces.
    pub fn title(self) -> &'static str {
        match self {
            Self::Cold => "Cold standby",
            Self::Warm => "Warm standby",
            Self::Hot => "Hot standby",
        }
    }
}

impl fmt::Display for DrMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DrMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cold" => Ok(Self::Cold),
            "warm" => Ok(Self::Warm),
            "hot" => Ok(Self::Hot),
            other => Err(ModeParseError::Dr(other.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModeParseError {
    #[error("unknown resilience mode '{0}' (expected cost, balanced, or maximum)")]
    Resilience(String),

    #[error("unknown failure mode '{0}' (expected none, az, or region)")]
    Failure(String),

    #[error("unknown DR mode '{0}' (expected cold, warm, or hot)")]
    Dr(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resilience_multipliers_are_ordered() {
        assert!(ResilienceMode::Cost.pod_multiplier() < ResilienceMode::Balanced.pod_multiplier());
        assert!(
            ResilienceMode::Balanced.pod_multiplier() < ResilienceMode::Maximum.pod_multiplier()
        );
        // Better posture, smaller haircut.
        assert!(
            ResilienceMode::Maximum.availability_penalty()
                < ResilienceMode::Balanced.availability_penalty()
        );
        assert!(
            ResilienceMode::Balanced.availability_penalty()
                < ResilienceMode::Cost.availability_penalty()
        );
    }

    #[test]
    fn test_only_cost_mode_pays_latency_penalty() {
        assert_eq!(ResilienceMode::Cost.latency_penalty_ms(), 16.0);
        assert_eq!(ResilienceMode::Balanced.latency_penalty_ms(), 0.0);
        assert_eq!(ResilienceMode::Maximum.latency_penalty_ms(), 0.0);
    }

    #[test]
    fn test_alarm_counts_per_fault() {
        assert_eq!(FailureMode::None.cloudwatch_alarms(), 3);
        assert_eq!(FailureMode::Az.cloudwatch_alarms(), 8);
        assert_eq!(FailureMode::Region.cloudwatch_alarms(), 13);
    }

    #[test]
    fn test_fault_predicates() {
        assert!(!FailureMode::None.is_injected());
        assert!(FailureMode::Az.is_injected());
        assert!(FailureMode::Region.is_injected());
        assert!(FailureMode::Az.is_az_loss());
        assert!(!FailureMode::Az.is_region_loss());
        assert!(FailureMode::Region.is_region_loss());
    }

    #[test]
    fn test_rto_rpo_tighten_with_hotter_standby() {
        for region_lost in [false, true] {
            assert!(
                DrMode::Hot.rto_minutes(region_lost) < DrMode::Warm.rto_minutes(region_lost)
            );
            assert!(
                DrMode::Warm.rto_minutes(region_lost) < DrMode::Cold.rto_minutes(region_lost)
            );
        }
        assert_eq!(DrMode::Cold.rpo_minutes(), 60);
        assert_eq!(DrMode::Warm.rpo_minutes(), 10);
        assert_eq!(DrMode::Hot.rpo_minutes(), 1);
    }

    #[test]
    fn test_region_loss_under_drill_uses_full_rto() {
        // Advertised drill times vs. the real recovery path.
        assert_eq!(DrMode::Warm.rto_minutes(false), 8);
        assert_eq!(DrMode::Warm.rto_minutes(true), 22);
        assert_eq!(DrMode::Hot.rto_minutes(true), 6);
        assert_eq!(DrMode::Cold.rto_minutes(true), 120);
    }

    #[test]
    fn test_labels_roundtrip_through_from_str() {
        for mode in ResilienceMode::all() {
            assert_eq!(mode.label().parse::<ResilienceMode>().unwrap(), mode);
        }
        for mode in FailureMode::all() {
            assert_eq!(mode.label().parse::<FailureMode>().unwrap(), mode);
        }
        for mode in DrMode::all() {
            assert_eq!(mode.label().parse::<DrMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_unknown_tokens_are_rejected() {
        assert_eq!(
            "extreme".parse::<ResilienceMode>(),
            Err(ModeParseError::Resilience("extreme".to_string()))
        );
        assert_eq!(
            "outage".parse::<FailureMode>(),
            Err(ModeParseError::Failure("outage".to_string()))
        );
        assert_eq!(
            "tepid".parse::<DrMode>(),
            Err(ModeParseError::Dr("tepid".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_lowercase_tokens() {
        assert_eq!(
            serde_json::to_string(&ResilienceMode::Balanced).unwrap(),
            "\"balanced\""
        );
        assert_eq!(serde_json::to_string(&FailureMode::Az).unwrap(), "\"az\"");
        assert_eq!(serde_json::to_string(&DrMode::Hot).unwrap(), "\"hot\"");
        let mode: DrMode = serde_json::from_str("\"cold\"").unwrap();
        assert_eq!(mode, DrMode::Cold);
    }
}
