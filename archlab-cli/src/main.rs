//! ArchLab CLI — headless scenario evaluation and sweeps.
//!
//! Commands:
//! - `eval` — evaluate one scenario from a preset, a TOML file, or field flags
//! - `sweep` — explore the input space (coarse grid or seeded sampling)
//! - `presets` — list the named presets and their input vectors

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use archlab_core::domain::ScenarioInputs;
use archlab_core::presets::ScenarioPreset;
use archlab_runner::{
    export_json, export_sweep_csv, run_sweep, sample, save_artifacts, ScenarioConfig,
    ScenarioReport, SweepGrid, SweepRow,
};

#[derive(Parser)]
#[command(
    name = "archlab",
    about = "ArchLab CLI — cloud-architecture scenario simulator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one scenario and print its derived metrics.
    Eval {
        /// Named preset: normal_day, traffic_spike, region_failure.
        #[arg(long)]
        preset: Option<String>,

        /// Path to a TOML scenario file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Concurrent users (400..=12000). Defaults to 3200.
        #[arg(long)]
        users: Option<u32>,

        /// Stored data in TB (2..=60). Defaults to 22.
        #[arg(long)]
        data_tb: Option<u32>,

        /// Resilience posture: cost, balanced, maximum.
        #[arg(long)]
        resilience: Option<String>,

        /// Injected fault: none, az, region.
        #[arg(long)]
        failure: Option<String>,

        /// DR posture: cold, warm, hot.
        #[arg(long)]
        dr_mode: Option<String>,

        /// Print the full report as JSON instead of the text summary.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Save the artifact bundle (manifest.json, metrics.csv, report.md) under this directory.
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Sweep the input space and rank scenarios by monthly cost.
    Sweep {
        /// Draw N random scenarios instead of the full coarse grid.
        #[arg(long)]
        samples: Option<usize>,

        /// Seed for random sampling.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Only rank scenarios at or above this availability (percent).
        #[arg(long)]
        min_availability: Option<f64>,

        /// How many of the cheapest scenarios to print.
        #[arg(long, default_value_t = 10)]
        top: usize,

        /// Write every evaluated scenario to this CSV file.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List the named presets and their input vectors.
    Presets,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Eval {
            preset,
            config,
            users,
            data_tb,
            resilience,
            failure,
            dr_mode,
            json,
            save,
        } => run_eval(
            preset, config, users, data_tb, resilience, failure, dr_mode, json, save,
        ),
        Commands::Sweep {
            samples,
            seed,
            min_availability,
            top,
            out,
        } => run_sweep_cmd(samples, seed, min_availability, top, out),
        Commands::Presets => run_presets(),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_eval(
    preset_name: Option<String>,
    config_path: Option<PathBuf>,
    users: Option<u32>,
    data_tb: Option<u32>,
    resilience: Option<String>,
    failure: Option<String>,
    dr_mode: Option<String>,
    json: bool,
    save: Option<PathBuf>,
) -> Result<()> {
    // Validate mutually exclusive options
    if config_path.is_some() && preset_name.is_some() {
        bail!("--config and --preset are mutually exclusive");
    }
    let field_flags_used = users.is_some()
        || data_tb.is_some()
        || resilience.is_some()
        || failure.is_some()
        || dr_mode.is_some();
    if field_flags_used && (config_path.is_some() || preset_name.is_some()) {
        bail!("field flags cannot be combined with --preset or --config");
    }

    let (inputs, label) = if let Some(name) = preset_name {
        let preset: ScenarioPreset = match name.parse() {
            Ok(p) => p,
            Err(_) => bail!(
                "unknown preset '{name}'. Valid: normal_day, traffic_spike, region_failure"
            ),
        };
        (preset.inputs(), Some(preset.title().to_string()))
    } else if let Some(path) = config_path {
        let config = ScenarioConfig::from_file(&path)?;
        (config.scenario, config.label)
    } else {
        let mut inputs = ScenarioInputs::default();
        if let Some(n) = users {
            inputs.users = n;
        }
        if let Some(tb) = data_tb {
            inputs.data_tb = tb;
        }
        if let Some(token) = resilience {
            inputs.resilience = token.parse()?;
        }
        if let Some(token) = failure {
            inputs.failure = token.parse()?;
        }
        if let Some(token) = dr_mode {
            inputs.dr_mode = token.parse()?;
        }
        inputs.validate()?;
        (inputs, None)
    };

    let report = ScenarioReport::new(inputs, label);

    if json {
        println!("{}", export_json(&report)?);
    } else {
        print_summary(&report);
    }

    if let Some(output_dir) = save {
        let run_dir = save_artifacts(&report, &output_dir)?;
        println!("Artifacts saved to: {}", run_dir.display());
    }

    Ok(())
}

fn run_sweep_cmd(
    samples: Option<usize>,
    seed: u64,
    min_availability: Option<f64>,
    top: usize,
    out: Option<PathBuf>,
) -> Result<()> {
    let scenarios = match samples {
        Some(n) => {
            println!("Sampling {n} scenarios (seed {seed})...");
            sample(n, seed)
        }
        None => {
            let grid = SweepGrid::coarse();
            println!("Evaluating the coarse grid ({} scenarios)...", grid.size());
            grid.generate()
        }
    };

    let results = run_sweep(&scenarios);

    let ranked: Vec<&SweepRow> = match min_availability {
        Some(floor) => {
            let meeting = results.with_min_availability(floor);
            println!(
                "{} of {} scenarios meet availability >= {floor:.2}%",
                meeting.len(),
                results.len()
            );
            if meeting.is_empty() {
                bail!("no scenario meets availability >= {floor:.2}%");
            }
            let mut ranked = meeting;
            ranked.sort_by_key(|row| row.metrics.monthly_cost);
            ranked.into_iter().take(top).collect()
        }
        None => results.top_n(top),
    };

    println!();
    println!(
        "{:<14} {:>6} {:>5} {:<9} {:<7} {:<5} {:>6} {:>7} {:>6} {:>6}",
        "scenario", "users", "tb", "resil", "failure", "dr", "pods", "cost", "p95", "avail"
    );
    println!("{}", "-".repeat(82));
    for row in &ranked {
        let i = &row.inputs;
        let m = &row.metrics;
        println!(
            "{:<14} {:>6} {:>5} {:<9} {:<7} {:<5} {:>6} {:>6}$ {:>4}ms {:>5.2}%",
            &row.scenario_id[..12],
            i.users,
            i.data_tb,
            i.resilience,
            i.failure,
            i.dr_mode,
            m.pod_count,
            m.monthly_cost,
            m.latency_ms,
            m.availability_pct,
        );
    }

    if let Some(path) = out {
        let csv = export_sweep_csv(results.all())?;
        std::fs::write(&path, csv)?;
        println!();
        println!("Wrote {} rows to {}", results.len(), path.display());
    }

    Ok(())
}

fn run_presets() -> Result<()> {
    for preset in ScenarioPreset::all() {
        let i = preset.inputs();
        println!("{} ({})", preset.label(), preset.title());
        println!("  {}", preset.describe());
        println!(
            "  users={} data_tb={} resilience={} failure={} dr_mode={}",
            i.users, i.data_tb, i.resilience, i.failure, i.dr_mode
        );
        println!();
    }
    Ok(())
}

fn print_summary(report: &ScenarioReport) {
    let i = &report.inputs;
    let m = &report.metrics;

    println!();
    println!("=== Scenario ===");
    if let Some(ref label) = report.label {
        println!("Label:          {label}");
    }
    println!("Scenario Id:    {}", report.short_id());
    println!("Users:          {}", i.users);
    println!("Data:           {} TB", i.data_tb);
    println!("Resilience:     {}", i.resilience.title());
    println!("Failure:        {}", i.failure.title());
    println!("DR Posture:     {}", i.dr_mode.title());
    println!();
    println!("--- Fleet ---");
    println!("EKS Pods:       {}", m.pod_count);
    println!("EC2 Workers:    {}", m.ec2_count);
    println!("PG Readers:     {}", m.pg_readers);
    println!("Mongo Shards:   {}", m.mongo_shards);
    println!("Redis Nodes:    {}", m.redis_nodes);
    println!();
    println!("--- Service Levels ---");
    println!("Latency (p95):  {} ms", m.latency_ms);
    println!("Monthly Cost:   ${}", m.monthly_cost);
    println!("Availability:   {:.2}%", m.availability_pct);
    println!("Request Flow:   {}/min", m.request_flow);
    println!(
        "Path Load:      {}% public / {}% private",
        m.public_intensity, m.private_intensity
    );
    println!(
        "CloudWatch:     {} alarms, {} signals/min",
        m.cloudwatch_alarms, m.cloudwatch_signals
    );
    println!();
    println!("--- Failover ---");
    println!(
        "Active Region:  {} ({})",
        m.active_region.name(),
        m.active_region
    );
    println!("Failover:       {}", if m.failover { "yes" } else { "no" });
    println!("Degraded:       {}", if m.degraded { "yes" } else { "no" });
    println!("RTO:            {} min", m.rto_minutes);
    println!("RPO:            {} min", m.rpo_minutes);
    println!();
}
