//! ArchLab Runner — scenario orchestration on top of `archlab-core`.
//!
//! This crate builds on the core model to provide:
//! - Scenario config files (TOML) with range validation
//! - Evaluated scenario reports with schema versioning
//! - Grid and seeded-random sweeps over the input space
//! - Cost/availability ranking of sweep results
//! - JSON, CSV, and Markdown export plus artifact bundles

pub mod config;
pub mod export;
pub mod report;
pub mod sweep;

pub use config::{ConfigError, ScenarioConfig};
pub use export::{
    export_json, export_metrics_csv, export_sweep_csv, generate_comparison, generate_report,
    import_json, load_artifacts, save_artifacts,
};
pub use report::{ScenarioReport, SCHEMA_VERSION};
pub use sweep::{run_sweep, sample, SweepGrid, SweepResults, SweepRow};

#[cfg(test)]
mod send_sync_checks {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn scenario_config_is_send_sync() {
        assert_send::<ScenarioConfig>();
        assert_sync::<ScenarioConfig>();
    }

    #[test]
    fn scenario_report_is_send_sync() {
        assert_send::<ScenarioReport>();
        assert_sync::<ScenarioReport>();
    }

    #[test]
    fn sweep_types_are_send_sync() {
        assert_send::<SweepGrid>();
        assert_sync::<SweepGrid>();
        assert_send::<SweepRow>();
        assert_sync::<SweepRow>();
        assert_send::<SweepResults>();
        assert_sync::<SweepResults>();
    }
}
