// File: crates/pulse-core/src/lib.rs
// Summary: Core library entry point; exports the chart geometry engine and chart options API.

pub mod axis;
pub mod chart;
pub mod column;
pub mod config;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod line;
pub mod path;
pub mod pie;
pub mod scale;
pub mod series;
pub mod types;

pub use axis::{axis_ticks, scale_max, DEFAULT_TICK_COUNT};
pub use chart::{palette_color, ChartGeometry, ChartKind, ChartOptions, PALETTE};
pub use column::{column_bars, ComputedBar};
pub use config::{load_options, load_series_csv, load_series_csv_path};
pub use error::{ChartError, ChartResult};
pub use format::format_value;
pub use geometry::{area, polar_to_cartesian, Area, Point};
pub use grid::{grid_lines, GridLine};
pub use line::{area_path, line_points, polyline_points, ComputedPoint};
pub use pie::{describe_arc, full_circle_path, pie_slices, ComputedSlice, PieLayout};
pub use series::{max_value, SeriesItem};
pub use types::{default_dimensions, pie_dimensions, Dimensions, Padding};
