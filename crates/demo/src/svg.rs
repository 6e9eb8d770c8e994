// File: crates/demo/src/svg.rs
// Summary: Minimal SVG writer drawing the geometry computed by pulse-core.

use std::fmt::Write as _;

use pulse_core::path::fmt_num as n;
use pulse_core::{Area, ChartGeometry, ChartOptions, GridLine};

const AXIS_TEXT: &str = "#6b7280";
const GRID_STROKE: &str = "#e5e7eb";

/// Render a complete standalone SVG document for `opts`.
pub fn render_svg(opts: &ChartOptions) -> String {
    let dim = opts.dimensions();
    let area = Area::from_dimensions(&dim);
    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}" width="{}" height="{}" font-family="sans-serif" font-size="11">"#,
        dim.view_box(),
        n(dim.width),
        n(dim.height)
    );
    let _ = writeln!(out, "  <title>{}</title>", escape(&opts.title));
    if !opts.title.is_empty() {
        let _ = writeln!(
            out,
            r#"  <text x="{}" y="16" text-anchor="middle" font-size="14" font-weight="bold">{}</text>"#,
            n(dim.width / 2.0),
            escape(&opts.title)
        );
    }

    match opts.geometry() {
        ChartGeometry::Empty => {
            let _ = writeln!(
                out,
                r#"  <text x="{}" y="{}" text-anchor="middle" fill="{AXIS_TEXT}">No data</text>"#,
                n(dim.width / 2.0),
                n(dim.height / 2.0)
            );
        }
        ChartGeometry::Line { points, polyline, area_path, grid, color } => {
            write_grid(&mut out, &grid, &area);
            let _ = writeln!(out, r#"  <path d="{area_path}" fill="{}" fill-opacity="0.15"/>"#, escape(&color));
            let _ = writeln!(
                out,
                r#"  <polyline points="{polyline}" fill="none" stroke="{}" stroke-width="2"/>"#,
                escape(&color)
            );
            for p in &points {
                let _ = writeln!(
                    out,
                    r#"  <circle cx="{}" cy="{}" r="4" fill="{}"><title>{}: {}</title></circle>"#,
                    n(p.x),
                    n(p.y),
                    escape(&p.item.color),
                    escape(&p.item.name),
                    n(p.item.value)
                );
                write_category(&mut out, p.x, &area, &p.item.name);
            }
        }
        ChartGeometry::Column { bars, grid } => {
            write_grid(&mut out, &grid, &area);
            for b in &bars {
                let _ = writeln!(
                    out,
                    r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="3" fill="{}"><title>{}: {}</title></rect>"#,
                    n(b.x),
                    n(b.y),
                    n(b.width),
                    n(b.height),
                    escape(&b.item.color),
                    escape(&b.item.name),
                    n(b.item.value)
                );
                write_category(&mut out, b.center_x(), &area, &b.item.name);
            }
        }
        ChartGeometry::Pie { slices, .. } => {
            for s in &slices {
                let _ = writeln!(
                    out,
                    r##"  <path d="{}" fill="{}" stroke="#ffffff" stroke-width="2"><title>{}: {}%</title></path>"##,
                    s.path,
                    escape(&s.item.color),
                    escape(&s.item.name),
                    s.percentage
                );
            }
            // labels last so no wedge covers them
            for s in slices.iter().filter(|s| s.percentage > 0) {
                let _ = writeln!(
                    out,
                    r##"  <text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" fill="#ffffff">{}%</text>"##,
                    n(s.label_x),
                    n(s.label_y),
                    s.percentage
                );
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn write_grid(out: &mut String, grid: &[GridLine], area: &Area) {
    for g in grid {
        let _ = writeln!(
            out,
            r#"  <line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="{GRID_STROKE}"/>"#,
            n(area.x),
            n(area.right()),
            y = n(g.y)
        );
        let _ = writeln!(
            out,
            r#"  <text x="{}" y="{}" text-anchor="end" dominant-baseline="middle" fill="{AXIS_TEXT}">{}</text>"#,
            n(area.x - 8.0),
            n(g.y),
            escape(&g.label)
        );
    }
}

fn write_category(out: &mut String, x: f64, area: &Area, name: &str) {
    let _ = writeln!(
        out,
        r#"  <text x="{}" y="{}" text-anchor="middle" fill="{AXIS_TEXT}">{}</text>"#,
        n(x),
        n(area.bottom() + 20.0),
        escape(name)
    );
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
