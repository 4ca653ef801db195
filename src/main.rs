use anyhow::{Context, Result};
use firebase_stats::{DeviceCatalog, DeviceNameResolver, Reader, Report, ReportConfig, Wrapper};
use std::{env, path::PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    // stdout carries the report, so logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) arguments & config ───────────────────────────────────────
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        let program = args.first().map(String::as_str).unwrap_or("firebase-stats");
        eprintln!("Usage: {program} <export.csv> [config.yaml]");
        std::process::exit(1);
    }
    let export_path = PathBuf::from(&args[1]);
    let config = match args.get(2) {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    };
    info!(platform = %config.platform, "startup");

    // ─── 3) parse the export ─────────────────────────────────────────
    let mut reader = Reader::new();
    reader
        .parse_file(&export_path)
        .with_context(|| format!("parsing {}", export_path.display()))?;

    // ─── 4) optional device catalog ──────────────────────────────────
    let catalog = match &config.device_catalog {
        Some(path) => Some(
            DeviceCatalog::from_path(path)
                .with_context(|| format!("loading device catalog {}", path.display()))?,
        ),
        None => None,
    };

    // ─── 5) build & print the report ─────────────────────────────────
    let mut wrapper = Wrapper::new(&reader, config.platform);
    if let Some(catalog) = &catalog {
        wrapper = wrapper.with_resolver(catalog as &dyn DeviceNameResolver);
    }
    let report = Report::build(&wrapper, &config).context("building report")?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    info!(sections = report.sections.len(), "done");
    Ok(())
}
