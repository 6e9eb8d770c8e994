// File: crates/pulse-core/src/config.rs
// Summary: Loading chart options from JSON and series from CSV.
// Notes:
// - Items without a colour get the palette colour for their position.
// - Missing or unparseable values load as 0 rather than failing the file.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::chart::{palette_color, ChartKind, ChartOptions};
use crate::error::{ChartError, ChartResult};
use crate::series::SeriesItem;
use crate::types::Dimensions;

#[derive(Deserialize)]
struct RawOptions {
    #[serde(rename = "type", default)]
    kind: ChartKind,
    #[serde(default)]
    title: String,
    #[serde(default)]
    series: Vec<RawItem>,
    #[serde(default)]
    dimensions: Option<Dimensions>,
}

#[derive(Deserialize)]
struct RawItem {
    #[serde(default)]
    name: String,
    #[serde(default)]
    value: Option<f64>,
    #[serde(default)]
    color: Option<String>,
}

fn finish_items(raw: Vec<RawItem>) -> Vec<SeriesItem> {
    raw.into_iter()
        .enumerate()
        .map(|(i, r)| {
            let color = r.color.filter(|c| !c.trim().is_empty()).unwrap_or_else(|| palette_color(i).to_string());
            SeriesItem::new(r.name, r.value.unwrap_or(0.0), color)
        })
        .collect()
}

impl ChartOptions {
    /// Parse options shaped like `{"type": "pie", "title": "...", "series": [...]}`.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let raw: RawOptions = serde_json::from_str(input)?;
        Ok(Self {
            kind: raw.kind,
            title: raw.title,
            series: finish_items(raw.series),
            dimensions: raw.dimensions,
        })
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Read chart options from a JSON file.
pub fn load_options(path: impl AsRef<Path>) -> ChartResult<ChartOptions> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|source| ChartError::Io { path: path.to_path_buf(), source })?;
    let opts = ChartOptions::from_json_str(&text)?;
    debug!(path = %path.display(), kind = %opts.kind, items = opts.series.len(), "loaded chart options");
    Ok(opts)
}

/// Read `name,value[,color]` rows (with a header line) into a series.
pub fn load_series_csv<R: Read>(reader: R) -> ChartResult<Vec<SeriesItem>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_name = idx(&["name", "label", "category"]).unwrap_or(0);
    let i_value = idx(&["value", "amount", "y"]).unwrap_or(1);
    let i_color = idx(&["color", "colour"]);

    let mut raw = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        raw.push(RawItem {
            name: rec.get(i_name).unwrap_or_default().to_string(),
            value: rec.get(i_value).and_then(|s| s.parse::<f64>().ok()),
            color: i_color.and_then(|i| rec.get(i)).map(str::to_string),
        });
    }
    debug!(rows = raw.len(), "loaded series csv");
    Ok(finish_items(raw))
}

/// Read a CSV series from a file.
pub fn load_series_csv_path(path: impl AsRef<Path>) -> ChartResult<Vec<SeriesItem>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|source| ChartError::Io { path: path.to_path_buf(), source })?;
    load_series_csv(file)
}
