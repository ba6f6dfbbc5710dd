//! Criterion benchmarks for the derived-metrics hot path.
//!
//! Benchmarks:
//! 1. Single scenario compute (the per-keystroke cost in the dashboard)
//! 2. Full coarse-grid evaluation (the sweep inner loop, serial)
//! 3. Scenario fingerprinting (JSON canonicalization + blake3)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use archlab_core::domain::{DrMode, FailureMode, ResilienceMode, ScenarioInputs};
use archlab_core::fingerprint::scenario_id;
use archlab_core::model::SimulatedMetrics;
use archlab_core::presets::ScenarioPreset;

// ── Helpers ──────────────────────────────────────────────────────────

fn make_grid() -> Vec<ScenarioInputs> {
    let mut scenarios = Vec::new();
    for users in [400, 1200, 2400, 4800, 9600, 12_000] {
        for data_tb in [2, 10, 20, 40, 60] {
            for resilience in ResilienceMode::all() {
                for failure in FailureMode::all() {
                    for dr_mode in DrMode::all() {
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

// ── Benchmarks ───────────────────────────────────────────────────────

fn bench_single_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");

    group.bench_function("default_scenario", |b| {
        let inputs = ScenarioInputs::default();
        b.iter(|| SimulatedMetrics::compute(black_box(&inputs)))
    });

    for preset in ScenarioPreset::all() {
        group.bench_with_input(
            BenchmarkId::new("preset", preset.label()),
            &preset.inputs(),
            |b, inputs| b.iter(|| SimulatedMetrics::compute(black_box(inputs))),
        );
    }

    group.finish();
}

fn bench_coarse_grid(c: &mut Criterion) {
    let scenarios = make_grid();
    c.bench_function("compute_coarse_grid_810", |b| {
        b.iter(|| {
            scenarios
                .iter()
                .map(|inputs| SimulatedMetrics::compute(black_box(inputs)))
                .collect::<Vec<_>>()
        })
    });
}

fn bench_fingerprint(c: &mut Criterion) {
    let inputs = ScenarioInputs::default();
    c.bench_function("scenario_id", |b| b.iter(|| scenario_id(black_box(&inputs))));
}

criterion_group!(
    benches,
    bench_single_compute,
    bench_coarse_grid,
    bench_fingerprint
);
criterion_main!(benches);
