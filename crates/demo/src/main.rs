// File: crates/demo/src/main.rs
// Summary: Demo loads a series (CSV or chart-options JSON) and writes line/column/pie charts as SVG.

mod svg;

use anyhow::{bail, Context, Result};
use pulse_core::{load_options, load_series_csv_path, ChartKind, ChartOptions, SeriesItem};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Args {
    input: Option<PathBuf>,
    kind: Option<ChartKind>,
    title: Option<String>,
    out_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let out_dir = args.out_dir.clone().unwrap_or_else(|| PathBuf::from("target/out"));
    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let charts = match &args.input {
        Some(path) => vec![(file_stem(path), load_input(path, &args)?)],
        None => {
            info!("no input given; rendering built-in presets");
            presets(&args)
        }
    };

    for (stem, opts) in charts {
        if opts.is_empty() {
            warn!(title = %opts.title, "series is empty; chart will show a placeholder");
        }
        let out = out_dir.join(format!("chart_{}_{}.svg", stem, opts.kind));
        std::fs::write(&out, svg::render_svg(&opts)).with_context(|| format!("writing {}", out.display()))?;
        info!(kind = %opts.kind, items = opts.series.len(), "Wrote {}", out.display());
    }
    Ok(())
}

/// `[INPUT] [--kind line|column|pie] [--title TEXT] [--out DIR]`
fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--kind" | "-k" => {
                let v = it.next().context("--kind needs a value")?;
                args.kind = Some(v.parse()?);
            }
            "--title" | "-t" => args.title = Some(it.next().context("--title needs a value")?),
            "--out" | "-o" => args.out_dir = Some(PathBuf::from(it.next().context("--out needs a value")?)),
            flag if flag.starts_with('-') => bail!("unknown flag {flag}"),
            path => {
                if args.input.is_some() {
                    bail!("only one input file is supported");
                }
                args.input = Some(PathBuf::from(path));
            }
        }
    }
    Ok(args)
}

/// Load chart options from JSON, or a bare series from CSV. CLI flags win
/// over whatever the file says.
fn load_input(path: &Path, args: &Args) -> Result<ChartOptions> {
    if !path.exists() {
        bail!("file not found: {}", path.display());
    }
    info!("Using input file: {}", path.display());

    let is_json = path.extension().is_some_and(|e| e.eq_ignore_ascii_case("json"));
    let mut opts = if is_json {
        load_options(path).with_context(|| format!("failed to load options '{}'", path.display()))?
    } else {
        let series = load_series_csv_path(path)
            .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
        ChartOptions::new(ChartKind::default(), file_stem(path), series)
    };
    info!("Loaded {} items", opts.series.len());

    if let Some(kind) = args.kind {
        opts.kind = kind;
    }
    if let Some(title) = &args.title {
        opts.title = title.clone();
    }
    Ok(opts)
}

fn presets(args: &Args) -> Vec<(String, ChartOptions)> {
    let item = |name: &str, value: f64, color: &str| SeriesItem::new(name, value, color);
    let orange = "#f97316";
    let mut charts = vec![
        ChartOptions::new(
            ChartKind::Line,
            "Monthly Revenue",
            vec![
                item("Jan", 42.0, orange),
                item("Feb", 58.0, orange),
                item("Mar", 35.0, orange),
                item("Apr", 78.0, orange),
                item("May", 65.0, orange),
                item("Jun", 90.0, orange),
            ],
        ),
        ChartOptions::new(
            ChartKind::Column,
            "Sales by Region",
            vec![
                item("North", 120.0, "#6366f1"),
                item("South", 85.0, "#ec4899"),
                item("East", 145.0, "#14b8a6"),
                item("West", 70.0, "#f59e0b"),
            ],
        ),
        ChartOptions::new(
            ChartKind::Pie,
            "Market Share",
            vec![
                item("Offline", 30.0, orange),
                item("Online", 45.0, "#6366f1"),
                item("Retail", 15.0, "#14b8a6"),
                item("Wholesale", 10.0, "#ec4899"),
            ],
        ),
    ];
    if let Some(kind) = args.kind {
        charts.retain(|c| c.kind == kind);
    }
    charts.into_iter().map(|c| ("preset".to_string(), c)).collect()
}

fn file_stem(path: &Path) -> String {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(v: &[&str]) -> Result<Args> {
        parse_args(v.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_input_and_flags() {
        let args = parse(&["data.csv", "--kind", "pie", "-t", "Share", "--out", "out"]).expect("valid args");
        assert_eq!(args.input, Some(PathBuf::from("data.csv")));
        assert_eq!(args.kind, Some(ChartKind::Pie));
        assert_eq!(args.title.as_deref(), Some("Share"));
        assert_eq!(args.out_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse(&["--kind", "radar"]).is_err());
        assert!(parse(&["--kind"]).is_err());
        assert!(parse(&["--verbose"]).is_err());
        assert!(parse(&["a.csv", "b.csv"]).is_err());
    }

    #[test]
    fn presets_filter_by_kind() {
        assert_eq!(presets(&Args::default()).len(), 3);
        let only_pie = presets(&Args { kind: Some(ChartKind::Pie), ..Args::default() });
        assert_eq!(only_pie.len(), 1);
        assert_eq!(only_pie[0].1.title, "Market Share");
    }
}
