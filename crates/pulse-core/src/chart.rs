// File: crates/pulse-core/src/chart.rs
// Summary: Chart options model (kind, title, series) and dispatch to the per-kind geometry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::axis::{axis_ticks, DEFAULT_TICK_COUNT};
use crate::column::{column_bars, ComputedBar};
use crate::error::ChartError;
use crate::geometry::Area;
use crate::grid::{grid_lines, GridLine};
use crate::line::{area_path, line_color, line_points, polyline_points, ComputedPoint};
use crate::pie::{ComputedSlice, PieLayout};
use crate::series::{max_value, SeriesItem};
use crate::types::{default_dimensions, pie_dimensions, Dimensions};

/// Default series colours, assigned by position when an item has none.
pub const PALETTE: [&str; 10] = [
    "#f97316", "#6366f1", "#14b8a6", "#ec4899", "#f59e0b",
    "#8b5cf6", "#06b6d4", "#ef4444", "#22c55e", "#a855f7",
];

/// Palette colour for the item at `index`, wrapping around.
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    #[default]
    Column,
    Pie,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Line, ChartKind::Column, ChartKind::Pie];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Column => "column",
            ChartKind::Pie => "pie",
        }
    }

    /// Dimension preset for this kind; pies need no axis padding.
    pub fn dimensions(&self) -> Dimensions {
        match self {
            ChartKind::Pie => pie_dimensions(),
            ChartKind::Line | ChartKind::Column => default_dimensions(),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ChartError::UnknownKind(s.to_string()))
    }
}

/// Everything a caller needs to draw one chart.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(rename = "type", default)]
    pub kind: ChartKind,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub series: Vec<SeriesItem>,
    /// Overrides the kind's preset when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
}

impl ChartOptions {
    pub fn new(kind: ChartKind, title: impl Into<String>, series: Vec<SeriesItem>) -> Self {
        Self { kind, title: title.into(), series, dimensions: None }
    }

    pub fn with_dimensions(mut self, dim: Dimensions) -> Self {
        self.dimensions = Some(dim);
        self
    }

    /// Append an item coloured from [`PALETTE`] by its position.
    pub fn push_item(&mut self, name: impl Into<String>, value: f64) {
        let color = palette_color(self.series.len());
        self.series.push(SeriesItem::new(name, value, color));
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions.unwrap_or_else(|| self.kind.dimensions())
    }

    pub fn is_empty(&self) -> bool { self.series.is_empty() }

    /// Compute the drawable geometry for the configured kind.
    pub fn geometry(&self) -> ChartGeometry {
        let dim = self.dimensions();
        debug!(kind = %self.kind, items = self.series.len(), width = dim.width, height = dim.height, "computing chart geometry");
        if self.is_empty() {
            return ChartGeometry::Empty;
        }

        let area = Area::from_dimensions(&dim);
        match self.kind {
            ChartKind::Line => {
                let points = line_points(&self.series, &dim);
                ChartGeometry::Line {
                    polyline: polyline_points(&points),
                    area_path: area_path(&points, &area),
                    grid: value_grid(&self.series, &area),
                    color: line_color(&self.series).to_string(),
                    points,
                }
            }
            ChartKind::Column => ChartGeometry::Column {
                bars: column_bars(&self.series, &dim),
                grid: value_grid(&self.series, &area),
            },
            ChartKind::Pie => {
                let layout = PieLayout::from_dimensions(&dim);
                let slices = layout.slices(&self.series);
                if slices.is_empty() {
                    debug!("pie total is zero; nothing to draw");
                    ChartGeometry::Empty
                } else {
                    ChartGeometry::Pie { layout, slices }
                }
            }
        }
    }
}

fn value_grid(series: &[SeriesItem], area: &Area) -> Vec<GridLine> {
    grid_lines(&axis_ticks(max_value(series), DEFAULT_TICK_COUNT), area)
}

/// Drawable output of [`ChartOptions::geometry`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChartGeometry {
    /// Nothing to plot; callers show a placeholder.
    Empty,
    Line {
        points: Vec<ComputedPoint>,
        polyline: String,
        area_path: String,
        grid: Vec<GridLine>,
        color: String,
    },
    Column {
        bars: Vec<ComputedBar>,
        grid: Vec<GridLine>,
    },
    Pie {
        layout: PieLayout,
        slices: Vec<ComputedSlice>,
    },
}

impl ChartGeometry {
    pub fn is_empty(&self) -> bool { matches!(self, ChartGeometry::Empty) }
}
