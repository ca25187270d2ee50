use std::f64::consts::{FRAC_PI_2, TAU};

use plotters::prelude::*;

use super::frame::{self, centred, Canvas};
use super::{ChartError, Datum, Svg};

const FALLBACK_COLOR: RGBColor = RGBColor(0x7f, 0x7f, 0x7f);
// Arc resolution, in points per full turn.
const ARC_STEPS: f64 = 180.0;

/// Slices start at twelve o'clock and run counter-clockwise, each labelled with its share.
pub fn pie_chart(slices: &[Datum], title: &str, colors: &[RGBColor]) -> Result<Svg, ChartError> {
    let total: f64 = slices.iter().map(|slice| slice.value.max(0.0)).sum();
    frame::render(title, |area| {
        if total <= 0.0 {
            return frame::placeholder(area);
        }
        draw_slices(area, slices, total, colors)
    })
}

fn draw_slices(
    area: &Canvas<'_>,
    slices: &[Datum],
    total: f64,
    colors: &[RGBColor],
) -> Result<(), ChartError> {
    let (width, height) = area.dim_in_pixel();
    let centre = (width as i32 / 2, height as i32 / 2);
    let radius = (f64::from(width.min(height)) / 2.0 - 40.0).max(10.0);
    let mut start = FRAC_PI_2;

    for (index, slice) in slices.iter().enumerate() {
        let value = slice.value.max(0.0);
        if value == 0.0 {
            continue;
        }
        let fraction = value / total;
        let sweep = fraction * TAU;
        let color = colors
            .get(index % colors.len().max(1))
            .copied()
            .unwrap_or(FALLBACK_COLOR);

        area.draw(&Polygon::new(wedge(centre, radius, start, sweep), color.filled()))?;

        let middle = start + sweep / 2.0;
        area.draw(&Text::new(
            format!("{:.1}%", fraction * 100.0),
            polar(centre, radius * 0.6, middle),
            centred(13),
        ))?;
        area.draw(&Text::new(
            slice.label.clone(),
            polar(centre, radius * 1.15, middle),
            centred(13),
        ))?;

        start += sweep;
    }
    Ok(())
}

fn wedge(centre: (i32, i32), radius: f64, start: f64, sweep: f64) -> Vec<(i32, i32)> {
    let steps = ((sweep / TAU) * ARC_STEPS).ceil().max(2.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push(centre);
    points.extend((0..=steps).map(|step| {
        let angle = start + sweep * step as f64 / steps as f64;
        polar(centre, radius, angle)
    }));
    points
}

// Pixel y grows downwards, so counter-clockwise angles subtract from y.
fn polar(centre: (i32, i32), radius: f64, angle: f64) -> (i32, i32) {
    (
        centre.0 + (radius * angle.cos()).round() as i32,
        centre.1 - (radius * angle.sin()).round() as i32,
    )
}
