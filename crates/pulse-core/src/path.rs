// File: crates/pulse-core/src/path.rs
// Summary: Builder for SVG path data strings (move/line/arc/close commands).

use std::fmt::Write as _;

use crate::geometry::Point;

/// Incrementally built SVG path data, e.g. `M 10 10 L 20 20 Z`.
///
/// Numbers are written in their shortest round-trip decimal form, so a path
/// built from the same inputs is byte-identical across runs.
#[derive(Clone, Debug, Default)]
pub struct PathData {
    buf: String,
}

impl PathData {
    pub fn new() -> Self { Self::default() }

    pub fn move_to(mut self, p: Point) -> Self {
        self.command("M");
        self.pair(p);
        self
    }

    pub fn line_to(mut self, p: Point) -> Self {
        self.command("L");
        self.pair(p);
        self
    }

    /// Elliptical arc with equal radii and no rotation.
    pub fn arc_to(mut self, r: f64, large_arc: bool, sweep: bool, p: Point) -> Self {
        self.command("A");
        self.num(r);
        self.num(r);
        self.buf.push_str(" 0");
        self.buf.push_str(if large_arc { " 1" } else { " 0" });
        self.buf.push_str(if sweep { " 1" } else { " 0" });
        self.pair(p);
        self
    }

    pub fn close(mut self) -> Self {
        self.command("Z");
        self
    }

    pub fn build(self) -> String { self.buf }

    fn command(&mut self, c: &str) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        self.buf.push_str(c);
    }

    fn pair(&mut self, p: Point) {
        self.num(p.x);
        self.num(p.y);
    }

    fn num(&mut self, v: f64) {
        let _ = write!(self.buf, " {}", fmt_num(v));
    }
}

/// Format a coordinate for path data. Negative zero prints as `0`.
pub fn fmt_num(v: f64) -> String {
    if v == 0.0 { "0".to_string() } else { v.to_string() }
}
