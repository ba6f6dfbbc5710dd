//! Scenario sweeps — grid and seeded-random exploration of the input space.
//!
//! A sweep evaluates the model over many scenarios at once (the model is
//! constant-time, so even the full coarse grid finishes instantly) and
//! ranks the rows: cheapest first, optionally under an availability floor.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use archlab_core::domain::{
    DrMode, FailureMode, ResilienceMode, ScenarioInputs, DATA_TB_MAX, DATA_TB_MIN, USERS_MAX,
    USERS_MIN, USERS_STEP,
};
use archlab_core::fingerprint::scenario_id;
use archlab_core::model::SimulatedMetrics;

/// Grid specification: the cartesian product of the listed knob values.
#[derive(Debug, Clone)]
pub struct SweepGrid {
    pub users: Vec<u32>,
    pub data_tb: Vec<u32>,
    pub resilience: Vec<ResilienceMode>,
    pub failure: Vec<FailureMode>,
    pub dr_mode: Vec<DrMode>,
}

impl SweepGrid {
    /// Coarse default grid: six load points, five storage points, every
    /// mode combination. 810 scenarios.
    pub fn coarse() -> Self {
        Self {
            users: vec![400, 1200, 2400, 4800, 9600, 12_000],
            data_tb: vec![2, 10, 20, 40, 60],
            resilience: ResilienceMode::all().to_vec(),
            failure: FailureMode::all().to_vec(),
            dr_mode: DrMode::all().to_vec(),
        }
    }

    /// Total number of scenarios in this grid.
    pub fn size(&self) -> usize {
        self.users.len()
            * self.data_tb.len()
            * self.resilience.len()
            * self.failure.len()
            * self.dr_mode.len()
    }

    /// Generate every scenario in the grid, in a fixed deterministic order.
    pub fn generate(&self) -> Vec<ScenarioInputs> {
        let mut scenarios = Vec::with_capacity(self.size());
        for &users in &self.users {
            for &data_tb in &self.data_tb {
                for &resilience in &self.resilience {
                    for &failure in &self.failure {
                        for &dr_mode in &self.dr_mode {
                            scenarios.push(ScenarioInputs {
                                users,
                                data_tb,
                                resilience,
                                failure,
                                dr_mode,
                            });
                        }
                    }
                }
            }
        }
        scenarios
    }
}

/// Draw `count` scenarios uniformly from the input space, seeded.
///
/// Users land on the 100-step slider lattice, so sampled scenarios are
/// always reachable from the dashboard.
pub fn sample(count: usize, seed: u64) -> Vec<ScenarioInputs> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| ScenarioInputs {
            users: rng.gen_range(USERS_MIN / USERS_STEP..=USERS_MAX / USERS_STEP) * USERS_STEP,
            data_tb: rng.gen_range(DATA_TB_MIN..=DATA_TB_MAX),
            resilience: ResilienceMode::all()[rng.gen_range(0..3)],
            failure: FailureMode::all()[rng.gen_range(0..3)],
            dr_mode: DrMode::all()[rng.gen_range(0..3)],
        })
        .collect()
}

/// One evaluated sweep row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepRow {
    pub scenario_id: String,
    pub inputs: ScenarioInputs,
    pub metrics: SimulatedMetrics,
}

/// Evaluate all scenarios in parallel. Row order matches input order.
pub fn run_sweep(scenarios: &[ScenarioInputs]) -> SweepResults {
    let rows = scenarios
        .par_iter()
        .map(|inputs| SweepRow {
            scenario_id: scenario_id(inputs),
            inputs: *inputs,
            metrics: SimulatedMetrics::compute(inputs),
        })
        .collect();
    SweepResults { rows }
}

/// Results from a sweep, with ranking helpers.
#[derive(Debug, Clone)]
pub struct SweepResults {
    rows: Vec<SweepRow>,
}

impl SweepResults {
    /// All rows, in input order.
    pub fn all(&self) -> &[SweepRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows sorted by monthly cost, cheapest first. Ties keep input order.
    pub fn sorted_by_cost(&self) -> Vec<&SweepRow> {
        let mut sorted: Vec<_> = self.rows.iter().collect();
        sorted.sort_by_key(|row| row.metrics.monthly_cost);
        sorted
    }

    /// Rows meeting an availability floor, in input order.
    pub fn with_min_availability(&self, floor_pct: f64) -> Vec<&SweepRow> {
        self.rows
            .iter()
            .filter(|row| row.metrics.availability_pct >= floor_pct)
            .collect()
    }

    /// The cheapest N rows.
    pub fn top_n(&self, n: usize) -> Vec<&SweepRow> {
        self.sorted_by_cost().into_iter().take(n).collect()
    }

    /// The cheapest row meeting an availability floor, if any does.
    pub fn cheapest_meeting(&self, floor_pct: f64) -> Option<&SweepRow> {
        self.rows
            .iter()
            .filter(|row| row.metrics.availability_pct >= floor_pct)
            .min_by_key(|row| row.metrics.monthly_cost)
    }
}
