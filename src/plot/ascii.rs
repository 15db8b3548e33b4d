//! ASCII/Unicode plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - model curve: `-` line
//! - Greenland measurements (75 MHz reference): `o`

use crate::app::pipeline::RunOutput;
use crate::domain::{IceModel, ProfileFile};
use crate::models::greenland;

/// Render a plot for an in-memory profile run.
pub fn render_profile_plot(run: &RunOutput, model: IceModel, width: usize, height: usize) -> String {
    let curve: Vec<(f64, f64)> = run.points.iter().map(|p| (p.depth_m, p.length_m)).collect();
    let (x_min, x_max) = x_range(&curve).unwrap_or((-3000.0, 0.0));
    let points = measurement_overlay(model, x_min, x_max);
    render_plot(&curve, &points, width, height)
}

/// Render a plot from a saved profile JSON file.
pub fn render_profile_plot_from_file(file: &ProfileFile, width: usize, height: usize) -> String {
    let curve: Vec<(f64, f64)> = file
        .grid
        .depth_m
        .iter()
        .zip(file.grid.length_m.iter())
        .map(|(&z, &l)| (z, l))
        .collect();
    let (x_min, x_max) = x_range(&curve).unwrap_or((-3000.0, 0.0));
    let points = measurement_overlay(file.model, x_min, x_max);
    render_plot(&curve, &points, width, height)
}

/// Measurement points to overlay, when the model has any.
///
/// The dielectric model is a pure fit with no underlying point data; the
/// Greenland model's 75 MHz measurement table is worth seeing against the
/// (frequency-corrected) curve.
fn measurement_overlay(model: IceModel, x_min: f64, x_max: f64) -> Vec<(f64, f64)> {
    match model {
        IceModel::Dielectric => Vec::new(),
        IceModel::Greenland => greenland::DEPTH_M
            .iter()
            .zip(greenland::ATT_LENGTH_75MHZ_M.iter())
            .filter(|&(&z, _)| x_min <= z && z <= x_max)
            .map(|(&z, &l)| (z, l))
            .collect(),
    }
}

fn render_plot(curve: &[(f64, f64)], points: &[(f64, f64)], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (x_min, x_max) = x_range(curve).unwrap_or((-3000.0, 0.0));
    let (y_min, y_max) = y_range(curve, points).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw the curve first so measurement points can overlay.
    draw_curve(&mut grid, curve, x_min, x_max, y_min, y_max);

    for &(z, l) in points {
        let x = map_x(z, x_min, x_max, width);
        let y = map_y(l, y_min, y_max, height);
        grid[y][x] = 'o';
    }

    // Build final string. We include a small header with ranges.
    let mut out = String::new();
    out.push_str(&format!(
        "Plot: depth=[{x_min:.1}, {x_max:.1}] m | L=[{y_min:.2}, {y_max:.2}] m\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn x_range(curve: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    for &(x, _) in curve {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
    }
    if min_x.is_finite() && max_x.is_finite() && max_x > min_x {
        Some((min_x, max_x))
    } else {
        None
    }
}

fn y_range(curve: &[(f64, f64)], points: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for &(_, y) in curve.iter().chain(points.iter()) {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], x_min: f64, x_max: f64, y_min: f64, y_max: f64) {
    if curve.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve {
        let cx = map_x(x, x_min, x_max, width);
        let cy = map_y(y, y_min, y_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, cx, cy, '-');
        } else {
            grid[cy][cx] = '-';
        }
        prev = Some((cx, cy));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_golden_snapshot_small() {
        let curve = vec![(0.0, 0.0), (1.0, 1.0)];
        let txt = render_plot(&curve, &[], 10, 5);
        let expected = concat!(
            "Plot: depth=[0.0, 1.0] m | L=[-0.05, 1.05] m\n",
            "        --\n",
            "      --  \n",
            "    --    \n",
            "  --      \n",
            "--        \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn greenland_overlay_is_clipped_to_range() {
        let points = measurement_overlay(IceModel::Greenland, -1000.0, 0.0);
        assert!(!points.is_empty());
        assert!(points.iter().all(|&(z, _)| (-1000.0..=0.0).contains(&z)));
        assert!(measurement_overlay(IceModel::Dielectric, -1000.0, 0.0).is_empty());
    }
}
