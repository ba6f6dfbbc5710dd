//! Derived-metrics model — pure functions from a scenario to its simulated
//! fleet shape and service levels.
//!
//! Every derivation is a pure function: input vector in, scalar out. No I/O,
//! no shared state, no memory of prior calls. `SimulatedMetrics::compute`
//! re-derives the full output vector on every invocation, so identical
//! inputs always produce identical outputs.

use serde::{Deserialize, Serialize};

use crate::domain::{Region, ScenarioInputs};

/// Pod count clamp, inclusive on both ends.
pub const POD_MIN: u32 = 2;
pub const POD_MAX: u32 = 24;

/// Simulated p95 latency never drops below this floor (ms).
pub const LATENCY_FLOOR_MS: u32 = 22;

/// Availability clamp, inclusive on both ends (percent).
pub const AVAILABILITY_MIN: f64 = 95.8;
pub const AVAILABILITY_MAX: f64 = 99.99;

/// The full output vector for one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulatedMetrics {
    /// Scaled compute replica count.
    pub pod_count: u32,
    /// Worker-instance count backing the pods.
    pub ec2_count: u32,
    pub pg_readers: u32,
    pub mongo_shards: u32,
    pub redis_nodes: u32,
    /// Simulated p95 response time (ms).
    pub latency_ms: u32,
    /// Simulated infrastructure spend (USD/month).
    pub monthly_cost: u32,
    /// Simulated rolling 30-day availability (percent).
    pub availability_pct: f64,
    /// Region currently serving traffic.
    pub active_region: Region,
    /// True while any fault is injected.
    pub failover: bool,
    /// True while an availability zone is lost.
    pub degraded: bool,
    /// Traffic-load percentage on the public path.
    pub public_intensity: u32,
    /// Traffic-load percentage on the private path.
    pub private_intensity: u32,
    /// Requests/minute reaching the active path.
    pub request_flow: u32,
    pub rto_minutes: u32,
    pub rpo_minutes: u32,
    pub cloudwatch_alarms: u32,
    /// Monitoring datapoints/minute emitted by the fleet.
    pub cloudwatch_signals: u32,
}

impl SimulatedMetrics {
    /// Derive the full output vector from one scenario.
    pub fn compute(inputs: &ScenarioInputs) -> Self {
        Self {
            pod_count: pod_count(inputs),
            ec2_count: ec2_count(inputs),
            pg_readers: pg_readers(inputs),
            mongo_shards: mongo_shards(inputs),
            redis_nodes: redis_nodes(inputs),
            latency_ms: latency_ms(inputs),
            monthly_cost: monthly_cost(inputs),
            availability_pct: availability_pct(inputs),
            active_region: active_region(inputs),
            failover: inputs.failure.is_injected(),
            degraded: inputs.failure.is_az_loss(),
            public_intensity: public_intensity(inputs),
            private_intensity: private_intensity(inputs),
            request_flow: request_flow(inputs),
            rto_minutes: rto_minutes(inputs),
            rpo_minutes: inputs.dr_mode.rpo_minutes(),
            cloudwatch_alarms: inputs.failure.cloudwatch_alarms(),
            cloudwatch_signals: cloudwatch_signals(inputs),
        }
    }
}

// ─── Individual derivation functions ─────────────────────────────────

/// Compute replicas: ceil(users-per-thousand × 1.5), stretched by the
/// resilience and DR multipliers, clamped to [POD_MIN, POD_MAX].
pub fn pod_count(inputs: &ScenarioInputs) -> u32 {
    let base = (inputs.users as f64 / 1000.0 * 1.5).ceil();
    let scaled = base
        * inputs.resilience.pod_multiplier()
        * inputs.dr_mode.pod_multiplier();
    (scaled.round() as u32).clamp(POD_MIN, POD_MAX)
}

/// Worker instances: half the pod fleet, never fewer than 2.
pub fn ec2_count(inputs: &ScenarioInputs) -> u32 {
    let workers = (pod_count(inputs) as f64 / 2.0).round() as u32;
    workers.max(2)
}

/// PostgreSQL read replicas: one per 2600 users, plus the max-resilience
/// extra, floor of 2.
pub fn pg_readers(inputs: &ScenarioInputs) -> u32 {
    let readers = (inputs.users as f64 / 2600.0).round() as u32
        + inputs.resilience.extra_pg_readers();
    readers.max(2)
}

/// MongoDB shards: one per 10 TB stored, floor of 2.
pub fn mongo_shards(inputs: &ScenarioInputs) -> u32 {
    let shards = (inputs.data_tb as f64 / 10.0).round() as u32;
    shards.max(2)
}

/// Redis cache nodes: one per 3200 users, plus the hot-standby extra,
/// floor of 2.
pub fn redis_nodes(inputs: &ScenarioInputs) -> u32 {
    let nodes = (inputs.users as f64 / 3200.0).round() as u32
        + inputs.dr_mode.extra_redis_nodes();
    nodes.max(2)
}

/// Simulated p95 latency in ms.
///
/// Base 30ms, plus load and storage terms, plus the lean-fleet and fault
/// penalties. Region loss adds a quarter of the recovery time; a hot
/// standby earns a 6ms credit. Floored at LATENCY_FLOOR_MS.
pub fn latency_ms(inputs: &ScenarioInputs) -> u32 {
    let mut ms = 30.0
        + inputs.users as f64 / 280.0
        + inputs.data_tb as f64 * 0.85
        + inputs.resilience.latency_penalty_ms();
    if inputs.failure.is_az_loss() {
        ms += 12.0;
    }
    if inputs.failure.is_region_loss() {
        ms += rto_minutes(inputs) as f64 / 4.0;
    }
    ms -= inputs.dr_mode.latency_credit_ms();
    (ms.round() as u32).max(LATENCY_FLOOR_MS)
}

/// Simulated monthly spend in USD.
///
/// Flat platform fee plus per-user, per-TB, and per-pod terms, plus the
/// posture surcharges.
pub fn monthly_cost(inputs: &ScenarioInputs) -> u32 {
    let usd = 1800.0
        + inputs.users as f64 * 0.28
        + inputs.data_tb as f64 * 26.0
        + pod_count(inputs) as f64 * 18.0
        + inputs.resilience.monthly_surcharge()
        + inputs.dr_mode.monthly_surcharge();
    usd.round() as u32
}

/// Simulated rolling availability percentage.
///
/// 99.95 baseline minus the resilience haircut, the AZ-loss hit, and the
/// region-loss hit (softened by a hot standby). Clamped to
/// [AVAILABILITY_MIN, AVAILABILITY_MAX].
pub fn availability_pct(inputs: &ScenarioInputs) -> f64 {
    let mut pct = 99.95 - inputs.resilience.availability_penalty();
    if inputs.failure.is_az_loss() {
        pct -= 1.1;
    }
    if inputs.failure.is_region_loss() {
        pct -= inputs.dr_mode.region_loss_penalty();
    }
    pct.clamp(AVAILABILITY_MIN, AVAILABILITY_MAX)
}

/// Traffic serves from the standby region only during region loss.
pub fn active_region(inputs: &ScenarioInputs) -> Region {
    if inputs.failure.is_region_loss() {
        Region::Secondary
    } else {
        Region::Primary
    }
}

/// Public-path load percentage: users as a share of the 12k ceiling,
/// clamped to [18, 100] so the path never looks idle.
pub fn public_intensity(inputs: &ScenarioInputs) -> u32 {
    let pct = (inputs.users as f64 / 12_000.0 * 100.0).round() as u32;
    pct.clamp(18, 100)
}

/// Private-path load percentage: 70% of the public path, clamped to
/// [14, 100].
pub fn private_intensity(inputs: &ScenarioInputs) -> u32 {
    let pct = (public_intensity(inputs) as f64 * 0.7).round() as u32;
    pct.clamp(14, 100)
}

/// Requests/minute reaching the active path. Any injected fault sheds
/// 24% of offered traffic.
pub fn request_flow(inputs: &ScenarioInputs) -> u32 {
    (inputs.users as f64 * inputs.failure.flow_factor()).round() as u32
}

/// Recovery time objective: the DR posture's table, keyed on whether the
/// region is actually lost.
pub fn rto_minutes(inputs: &ScenarioInputs) -> u32 {
    inputs.dr_mode.rto_minutes(inputs.failure.is_region_loss())
}

/// Monitoring datapoints/minute: 1.8 signals per user.
pub fn cloudwatch_signals(inputs: &ScenarioInputs) -> u32 {
    (inputs.users as f64 * 1.8).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DrMode, FailureMode, ResilienceMode};

    fn scenario(
        users: u32,
        data_tb: u32,
        resilience: ResilienceMode,
        failure: FailureMode,
        dr_mode: DrMode,
    ) -> ScenarioInputs {
        ScenarioInputs { users, data_tb, resilience, failure, dr_mode }
    }

    #[test]
    fn test_pod_count_default_scenario() {
        // ceil(3.2 * 1.5) = 5, neutral multipliers.
        assert_eq!(pod_count(&ScenarioInputs::default()), 5);
    }

    #[test]
    fn test_pod_count_multipliers() {
        let base = scenario(4800, 24, ResilienceMode::Balanced, FailureMode::None, DrMode::Warm);
        // ceil(4.8 * 1.5) = 8.
        assert_eq!(pod_count(&base), 8);

        let max = ScenarioInputs { resilience: ResilienceMode::Maximum, ..base };
        // 8 * 1.35 = 10.8 -> 11.
        assert_eq!(pod_count(&max), 11);

        let max_hot = ScenarioInputs { dr_mode: DrMode::Hot, ..max };
        // 8 * 1.35 * 1.22 = 13.176 -> 13.
        assert_eq!(pod_count(&max_hot), 13);

        let lean = ScenarioInputs {
            resilience: ResilienceMode::Cost,
            dr_mode: DrMode::Cold,
            ..base
        };
        // 8 * 0.8 * 0.8 = 5.12 -> 5.
        assert_eq!(pod_count(&lean), 5);
    }

    #[test]
    fn test_pod_count_clamps_at_both_ends() {
        let heavy =
            scenario(12_000, 60, ResilienceMode::Maximum, FailureMode::None, DrMode::Hot);
        // ceil(12 * 1.5) = 18; 18 * 1.35 * 1.22 = 29.646 -> clamp 24.
        assert_eq!(pod_count(&heavy), POD_MAX);

        let light = scenario(400, 2, ResilienceMode::Cost, FailureMode::None, DrMode::Cold);
        // ceil(0.4 * 1.5) = 1; 1 * 0.8 * 0.8 = 0.64 -> 1 -> clamp 2.
        assert_eq!(pod_count(&light), POD_MIN);
    }

    #[test]
    fn test_ec2_count_is_half_the_pods_with_floor() {
        let inputs = ScenarioInputs::default();
        // pods 5 -> round(2.5) = 3 (half rounds away from zero).
        assert_eq!(ec2_count(&inputs), 3);

        let light = scenario(400, 2, ResilienceMode::Cost, FailureMode::None, DrMode::Cold);
        // pods 2 -> round(1.0) = 1 -> floor 2.
        assert_eq!(ec2_count(&light), 2);
    }

    #[test]
    fn test_data_tier_counts() {
        let inputs = ScenarioInputs::default();
        // round(3200/2600) = 1 -> floor 2.
        assert_eq!(pg_readers(&inputs), 2);
        // round(22/10) = 2.
        assert_eq!(mongo_shards(&inputs), 2);
        // round(3200/3200) = 1 -> floor 2.
        assert_eq!(redis_nodes(&inputs), 2);

        let big = scenario(9200, 36, ResilienceMode::Balanced, FailureMode::None, DrMode::Warm);
        // round(9200/2600) = round(3.538) = 4.
        assert_eq!(pg_readers(&big), 4);
        // round(3.6) = 4.
        assert_eq!(mongo_shards(&big), 4);
        // round(2.875) = 3.
        assert_eq!(redis_nodes(&big), 3);
    }

    #[test]
    fn test_posture_extras_reach_the_data_tier() {
        let max = scenario(4800, 24, ResilienceMode::Maximum, FailureMode::None, DrMode::Warm);
        // round(4800/2600) = 2, +1 for max resilience.
        assert_eq!(pg_readers(&max), 3);

        let hot = scenario(4800, 24, ResilienceMode::Balanced, FailureMode::None, DrMode::Hot);
        // round(4800/3200) = round(1.5) = 2, +1 for hot standby.
        assert_eq!(redis_nodes(&hot), 3);
    }

    #[test]
    fn test_latency_default_scenario() {
        // 30 + 3200/280 + 22*0.85 = 30 + 11.43 + 18.7 = 60.13 -> 60.
        assert_eq!(latency_ms(&ScenarioInputs::default()), 60);
    }

    #[test]
    fn test_latency_penalties_stack() {
        let lean = scenario(3200, 22, ResilienceMode::Cost, FailureMode::None, DrMode::Warm);
        assert_eq!(latency_ms(&lean), 76); // 60.13 + 16 -> 76

        let az = scenario(3200, 22, ResilienceMode::Balanced, FailureMode::Az, DrMode::Warm);
        assert_eq!(latency_ms(&az), 72); // 60.13 + 12 -> 72

        let region =
            scenario(3200, 22, ResilienceMode::Balanced, FailureMode::Region, DrMode::Warm);
        // +rto/4 = 22/4 = 5.5 -> 65.63 -> 66.
        assert_eq!(latency_ms(&region), 66);

        let hot = scenario(3200, 22, ResilienceMode::Balanced, FailureMode::None, DrMode::Hot);
        assert_eq!(latency_ms(&hot), 54); // 60.13 - 6 -> 54
    }

    #[test]
    fn test_latency_region_loss_scales_with_rto() {
        let cold =
            scenario(3200, 22, ResilienceMode::Balanced, FailureMode::Region, DrMode::Cold);
        // 60.13 + 120/4 = 90.13 -> 90.
        assert_eq!(latency_ms(&cold), 90);

        let hot = scenario(3200, 22, ResilienceMode::Balanced, FailureMode::Region, DrMode::Hot);
        // 60.13 + 6/4 - 6 = 55.63 -> 56.
        assert_eq!(latency_ms(&hot), 56);
    }

    #[test]
    fn test_monthly_cost_default_scenario() {
        // 1800 + 3200*0.28 + 22*26 + 5*18 + 450 = 1800+896+572+90+450 = 3808.
        assert_eq!(monthly_cost(&ScenarioInputs::default()), 3808);
    }

    #[test]
    fn test_monthly_cost_surcharges() {
        let cold = scenario(3200, 22, ResilienceMode::Balanced, FailureMode::None, DrMode::Cold);
        // pods drop to round(5*0.8)=4: 1800+896+572+72 = 3340, no DR surcharge.
        assert_eq!(monthly_cost(&cold), 3340);

        let max_hot = scenario(3200, 22, ResilienceMode::Maximum, FailureMode::None, DrMode::Hot);
        // pods: 5*1.35*1.22 = 8.235 -> 8; 1800+896+572+144+850+1200 = 5462.
        assert_eq!(monthly_cost(&max_hot), 5462);
    }

    #[test]
    fn test_availability_haircuts() {
        let m = availability_pct(&ScenarioInputs::default());
        assert!((m - 99.85).abs() < 1e-9); // 99.95 - 0.1

        let az = scenario(3200, 22, ResilienceMode::Balanced, FailureMode::Az, DrMode::Warm);
        assert!((availability_pct(&az) - 98.75).abs() < 1e-9); // -1.1 more

        let region =
            scenario(3200, 22, ResilienceMode::Maximum, FailureMode::Region, DrMode::Hot);
        assert!((availability_pct(&region) - 99.80).abs() < 1e-9); // 99.95-0.03-0.12

        let region_warm =
            scenario(3200, 22, ResilienceMode::Maximum, FailureMode::Region, DrMode::Warm);
        assert!((availability_pct(&region_warm) - 99.62).abs() < 1e-9); // 99.95-0.03-0.3
    }

    #[test]
    fn test_intensity_floors() {
        let quiet = scenario(400, 2, ResilienceMode::Balanced, FailureMode::None, DrMode::Warm);
        // round(400/12000*100) = 3 -> floor 18; round(18*0.7) = 13 -> floor 14.
        assert_eq!(public_intensity(&quiet), 18);
        assert_eq!(private_intensity(&quiet), 14);

        let full = scenario(12_000, 2, ResilienceMode::Balanced, FailureMode::None, DrMode::Warm);
        assert_eq!(public_intensity(&full), 100);
        assert_eq!(private_intensity(&full), 70);
    }

    #[test]
    fn test_request_flow_sheds_under_any_fault() {
        let healthy = ScenarioInputs::default();
        assert_eq!(request_flow(&healthy), 3200);

        let az = ScenarioInputs { failure: FailureMode::Az, ..healthy };
        // 3200 * 0.76 = 2432.
        assert_eq!(request_flow(&az), 2432);

        let region = ScenarioInputs { failure: FailureMode::Region, ..healthy };
        assert_eq!(request_flow(&region), 2432);
    }

    #[test]
    fn test_fault_flags_and_region() {
        let m = SimulatedMetrics::compute(&ScenarioInputs::default());
        assert!(!m.failover);
        assert!(!m.degraded);
        assert_eq!(m.active_region, Region::Primary);

        let az = scenario(3200, 22, ResilienceMode::Balanced, FailureMode::Az, DrMode::Warm);
        let m = SimulatedMetrics::compute(&az);
        assert!(m.failover);
        assert!(m.degraded);
        assert_eq!(m.active_region, Region::Primary);

        let region =
            scenario(3200, 22, ResilienceMode::Balanced, FailureMode::Region, DrMode::Warm);
        let m = SimulatedMetrics::compute(&region);
        assert!(m.failover);
        assert!(!m.degraded);
        assert_eq!(m.active_region, Region::Secondary);
    }

    #[test]
    fn test_recovery_objectives_follow_the_fault() {
        let drill = scenario(3200, 22, ResilienceMode::Balanced, FailureMode::None, DrMode::Warm);
        assert_eq!(rto_minutes(&drill), 8);

        let az = ScenarioInputs { failure: FailureMode::Az, ..drill };
        // AZ loss does not exercise the cross-region path.
        assert_eq!(rto_minutes(&az), 8);

        let region = ScenarioInputs { failure: FailureMode::Region, ..drill };
        assert_eq!(rto_minutes(&region), 22);
    }

    #[test]
    fn test_monitoring_volume() {
        assert_eq!(cloudwatch_signals(&ScenarioInputs::default()), 5760); // 3200 * 1.8
        let quiet = scenario(400, 2, ResilienceMode::Balanced, FailureMode::None, DrMode::Warm);
        assert_eq!(cloudwatch_signals(&quiet), 720);
    }

    #[test]
    fn test_compute_populates_every_field_from_the_same_inputs() {
        let inputs = scenario(4800, 24, ResilienceMode::Maximum, FailureMode::Region, DrMode::Hot);
        let m = SimulatedMetrics::compute(&inputs);
        assert_eq!(m.pod_count, pod_count(&inputs));
        assert_eq!(m.ec2_count, ec2_count(&inputs));
        assert_eq!(m.pg_readers, pg_readers(&inputs));
        assert_eq!(m.mongo_shards, mongo_shards(&inputs));
        assert_eq!(m.redis_nodes, redis_nodes(&inputs));
        assert_eq!(m.latency_ms, latency_ms(&inputs));
        assert_eq!(m.monthly_cost, monthly_cost(&inputs));
        assert_eq!(m.availability_pct, availability_pct(&inputs));
        assert_eq!(m.active_region, active_region(&inputs));
        assert_eq!(m.rto_minutes, rto_minutes(&inputs));
        assert_eq!(m.rpo_minutes, inputs.dr_mode.rpo_minutes());
        assert_eq!(m.cloudwatch_alarms, inputs.failure.cloudwatch_alarms());
        assert_eq!(m.cloudwatch_signals, cloudwatch_signals(&inputs));
    }
}
