//! Reporting and export — JSON, CSV, and Markdown artifact generation.
//!
//! Provides three export formats for evaluated scenarios:
//! - **JSON**: full round-trip serialization with schema versioning
//! - **CSV**: single-scenario metric tables and wide sweep tables
//! - **Markdown**: human-readable reports and side-by-side comparisons
//!
//! All persisted artifacts include a `schema_version` field. Unknown versions
//! are rejected on load.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::report::{ScenarioReport, SCHEMA_VERSION};
use crate::sweep::SweepRow;

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize a `ScenarioReport` to pretty JSON.
pub fn export_json(report: &ScenarioReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialize ScenarioReport to JSON")
}

/// Deserialize a `ScenarioReport` from JSON, rejecting unknown schema versions.
pub fn import_json(json: &str) -> Result<ScenarioReport> {
    let report: ScenarioReport =
        serde_json::from_str(json).context("failed to deserialize ScenarioReport from JSON")?;
    if report.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            report.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(report)
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Export one report as a two-column `field,value` CSV.
pub fn export_metrics_csv(report: &ScenarioReport) -> Result<String> {
    let m = &report.metrics;
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["field", "value"])?;

    let rows = [
        ("pod_count", m.pod_count.to_string()),
        ("ec2_count", m.ec2_count.to_string()),
        ("pg_readers", m.pg_readers.to_string()),
        ("mongo_shards", m.mongo_shards.to_string()),
        ("redis_nodes", m.redis_nodes.to_string()),
        ("latency_ms", m.latency_ms.to_string()),
        ("monthly_cost", m.monthly_cost.to_string()),
        ("availability_pct", format!("{:.2}", m.availability_pct)),
        ("active_region", m.active_region.to_string()),
        ("failover", m.failover.to_string()),
        ("degraded", m.degraded.to_string()),
        ("public_intensity", m.public_intensity.to_string()),
        ("private_intensity", m.private_intensity.to_string()),
        ("request_flow", m.request_flow.to_string()),
        ("rto_minutes", m.rto_minutes.to_string()),
        ("rpo_minutes", m.rpo_minutes.to_string()),
        ("cloudwatch_alarms", m.cloudwatch_alarms.to_string()),
        ("cloudwatch_signals", m.cloudwatch_signals.to_string()),
    ];
    for (field, value) in rows {
        wtr.write_record([field, value.as_str()])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Export sweep rows as a wide CSV, one scenario per row.
///
/// Columns: scenario_id, the five input knobs, then every derived metric.
pub fn export_sweep_csv(rows: &[SweepRow]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "scenario_id",
        "users",
        "data_tb",
        "resilience",
        "failure",
        "dr_mode",
        "pod_count",
        "ec2_count",
        "pg_readers",
        "mongo_shards",
        "redis_nodes",
        "latency_ms",
        "monthly_cost",
        "availability_pct",
        "active_region",
        "failover",
        "degraded",
        "public_intensity",
        "private_intensity",
        "request_flow",
        "rto_minutes",
        "rpo_minutes",
        "cloudwatch_alarms",
        "cloudwatch_signals",
    ])?;

    for row in rows {
        let i = &row.inputs;
        let m = &row.metrics;
        wtr.write_record([
            row.scenario_id.clone(),
            i.users.to_string(),
            i.data_tb.to_string(),
            i.resilience.to_string(),
            i.failure.to_string(),
            i.dr_mode.to_string(),
            m.pod_count.to_string(),
            m.ec2_count.to_string(),
            m.pg_readers.to_string(),
            m.mongo_shards.to_string(),
            m.redis_nodes.to_string(),
            m.latency_ms.to_string(),
            m.monthly_cost.to_string(),
            format!("{:.2}", m.availability_pct),
            m.active_region.to_string(),
            m.failover.to_string(),
            m.degraded.to_string(),
            m.public_intensity.to_string(),
            m.private_intensity.to_string(),
            m.request_flow.to_string(),
            m.rto_minutes.to_string(),
            m.rpo_minutes.to_string(),
            m.cloudwatch_alarms.to_string(),
            m.cloudwatch_signals.to_string(),
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

// ─── Artifact bundle ────────────────────────────────────────────────

/// Save the full artifact set for one evaluated scenario.
///
/// Creates a directory named `{short_id}_{timestamp}/` under `output_dir`
/// containing:
/// - `manifest.json` — the full `ScenarioReport`
/// - `metrics.csv` — the derived metrics as field,value rows
/// - `report.md` — the Markdown report
///
/// Returns the path to the created directory.
pub fn save_artifacts(report: &ScenarioReport, output_dir: &Path) -> Result<PathBuf> {
    let dirname = format!(
        "{}_{}",
        report.short_id(),
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    let run_dir = output_dir.join(dirname);
    std::fs::create_dir_all(&run_dir)
        .with_context(|| format!("failed to create artifact dir: {}", run_dir.display()))?;

    let json = export_json(report)?;
    std::fs::write(run_dir.join("manifest.json"), &json)?;

    let metrics_csv = export_metrics_csv(report)?;
    std::fs::write(run_dir.join("metrics.csv"), &metrics_csv)?;

    let md = generate_report(report);
    std::fs::write(run_dir.join("report.md"), &md)?;

    Ok(run_dir)
}

/// Load a `ScenarioReport` from an artifact directory's manifest.json.
///
/// Rejects unknown schema versions.
pub fn load_artifacts(dir: &Path) -> Result<ScenarioReport> {
    let manifest_path = dir.join("manifest.json");
    let json = std::fs::read_to_string(&manifest_path)
        .with_context(|| format!("failed to read {}", manifest_path.display()))?;
    import_json(&json)
}

// ─── Markdown reports ───────────────────────────────────────────────

/// Generate a Markdown report for a single evaluated scenario.
pub fn generate_report(report: &ScenarioReport) -> String {
    let i = &report.inputs;
    let m = &report.metrics;
    let mut md = String::with_capacity(2048);

    md.push_str("# Scenario Report\n\n");

    md.push_str("## Scenario\n\n");
    md.push_str("| Field | Value |\n");
    md.push_str("| --- | --- |\n");
    if let Some(ref label) = report.label {
        md.push_str(&format!("| Label | {label} |\n"));
    }
    md.push_str(&format!("| Scenario Id | `{}` |\n", report.scenario_id));
    md.push_str(&format!("| Generated | {} |\n", report.generated_at));
    md.push_str(&format!("| Concurrent Users | {} |\n", i.users));
    md.push_str(&format!("| Data Volume | {} TB |\n", i.data_tb));
    md.push_str(&format!("| Resilience | {} |\n", i.resilience.title()));
    md.push_str(&format!("| Failure | {} |\n", i.failure.title()));
    md.push_str(&format!("| DR Posture | {} |\n", i.dr_mode.title()));
    md.push('\n');

    md.push_str("## Fleet\n\n");
    md.push_str("| Tier | Count |\n");
    md.push_str("| --- | ---: |\n");
    md.push_str(&format!("| EKS pods | {} |\n", m.pod_count));
    md.push_str(&format!("| EC2 workers | {} |\n", m.ec2_count));
    md.push_str(&format!("| PostgreSQL readers | {} |\n", m.pg_readers));
    md.push_str(&format!("| MongoDB shards | {} |\n", m.mongo_shards));
    md.push_str(&format!("| Redis nodes | {} |\n", m.redis_nodes));
    md.push('\n');

    md.push_str("## Service Levels\n\n");
    md.push_str("| Metric | Value |\n");
    md.push_str("| --- | ---: |\n");
    md.push_str(&format!("| Latency (p95) | {} ms |\n", m.latency_ms));
    md.push_str(&format!("| Monthly Cost | ${} |\n", m.monthly_cost));
    md.push_str(&format!(
        "| Availability (30-day) | {:.2}% |\n",
        m.availability_pct
    ));
    md.push_str(&format!("| Request Flow | {}/min |\n", m.request_flow));
    md.push_str(&format!(
        "| Path Load (public/private) | {}% / {}% |\n",
        m.public_intensity, m.private_intensity
    ));
    md.push_str(&format!(
        "| CloudWatch | {} alarms, {} signals/min |\n",
        m.cloudwatch_alarms, m.cloudwatch_signals
    ));
    md.push('\n');

    md.push_str("## Failover Posture\n\n");
    md.push_str("| Field | Value |\n");
    md.push_str("| --- | --- |\n");
    md.push_str(&format!(
        "| Active Region | {} ({}) |\n",
        m.active_region.name(),
        m.active_region
    ));
    md.push_str(&format!("| Failover | {} |\n", yes_no(m.failover)));
    md.push_str(&format!("| Degraded | {} |\n", yes_no(m.degraded)));
    md.push_str(&format!("| RTO | {} min |\n", m.rto_minutes));
    md.push_str(&format!("| RPO | {} min |\n", m.rpo_minutes));
    md.push('\n');

    md
}

/// Generate a Markdown comparison report for two evaluated scenarios.
pub fn generate_comparison(a: &ScenarioReport, b: &ScenarioReport) -> String {
    let mut md = String::with_capacity(2048);

    md.push_str("# Scenario Comparison\n\n");

    md.push_str("## Inputs\n\n");
    md.push_str("| Knob | Scenario A | Scenario B |\n");
    md.push_str("| --- | --- | --- |\n");
    md.push_str(&format!(
        "| Label | {} | {} |\n",
        a.label.as_deref().unwrap_or("-"),
        b.label.as_deref().unwrap_or("-")
    ));
    md.push_str(&format!(
        "| Users | {} | {} |\n",
        a.inputs.users, b.inputs.users
    ));
    md.push_str(&format!(
        "| Data (TB) | {} | {} |\n",
        a.inputs.data_tb, b.inputs.data_tb
    ));
    md.push_str(&format!(
        "| Resilience | {} | {} |\n",
        a.inputs.resilience, b.inputs.resilience
    ));
    md.push_str(&format!(
        "| Failure | {} | {} |\n",
        a.inputs.failure, b.inputs.failure
    ));
    md.push_str(&format!(
        "| DR Mode | {} | {} |\n",
        a.inputs.dr_mode, b.inputs.dr_mode
    ));
    md.push('\n');

    md.push_str("## Metrics Comparison\n\n");
    md.push_str("| Metric | Scenario A | Scenario B | Delta |\n");
    md.push_str("| --- | ---: | ---: | ---: |\n");

    fn delta_u32(a: u32, b: u32) -> String {
        let d = b as i64 - a as i64;
        if d >= 0 {
            format!("+{d}")
        } else {
            format!("{d}")
        }
    }
    fn delta_pct(a: f64, b: f64) -> String {
        let d = b - a;
        if d >= 0.0 {
            format!("+{d:.2}")
        } else {
            format!("{d:.2}")
        }
    }

    let ma = &a.metrics;
    let mb = &b.metrics;

    md.push_str(&format!(
        "| Pods | {} | {} | {} |\n",
        ma.pod_count,
        mb.pod_count,
        delta_u32(ma.pod_count, mb.pod_count)
    ));
    md.push_str(&format!(
        "| Latency (ms) | {} | {} | {} |\n",
        ma.latency_ms,
        mb.latency_ms,
        delta_u32(ma.latency_ms, mb.latency_ms)
    ));
    md.push_str(&format!(
        "| Monthly Cost ($) | {} | {} | {} |\n",
        ma.monthly_cost,
        mb.monthly_cost,
        delta_u32(ma.monthly_cost, mb.monthly_cost)
    ));
    md.push_str(&format!(
        "| Availability (%) | {:.2} | {:.2} | {} |\n",
        ma.availability_pct,
        mb.availability_pct,
        delta_pct(ma.availability_pct, mb.availability_pct)
    ));
    md.push_str(&format!(
        "| RTO (min) | {} | {} | {} |\n",
        ma.rto_minutes,
        mb.rto_minutes,
        delta_u32(ma.rto_minutes, mb.rto_minutes)
    ));
    md.push_str(&format!(
        "| RPO (min) | {} | {} | {} |\n",
        ma.rpo_minutes,
        mb.rpo_minutes,
        delta_u32(ma.rpo_minutes, mb.rpo_minutes)
    ));
    md.push_str(&format!(
        "| Alarms | {} | {} | {} |\n",
        ma.cloudwatch_alarms,
        mb.cloudwatch_alarms,
        delta_u32(ma.cloudwatch_alarms, mb.cloudwatch_alarms)
    ));
    md.push('\n');

    md
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
