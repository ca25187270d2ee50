use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{ChartError, Svg, CHART_HEIGHT, CHART_WIDTH, PLACEHOLDER_MESSAGE};

pub(crate) type Canvas<'a> = DrawingArea<SVGBackend<'a>, Shift>;

pub(crate) const FONT: &str = "sans-serif";
pub(crate) const LABEL_SIZE: i32 = 12;
pub(crate) const DESC_SIZE: i32 = 14;
const TITLE_SIZE: i32 = 20;
const MUTED: RGBColor = RGBColor(0x77, 0x77, 0x77);
const BORDER: RGBColor = RGBColor(0xe5, 0xe5, 0xe5);

/// Draws into a fresh white canvas under `title` and returns the finished document.
pub(crate) fn render<F>(title: &str, draw: F) -> Result<Svg, ChartError>
where
    F: for<'a> FnOnce(&Canvas<'a>) -> Result<(), ChartError>,
{
    let mut markup = String::with_capacity(16 * 1024);
    {
        let root = SVGBackend::with_string(&mut markup, (CHART_WIDTH, CHART_HEIGHT))
            .into_drawing_area();
        root.fill(&WHITE)?;
        let body = root.titled(title, (FONT, TITLE_SIZE))?;
        draw(&body)?;
        root.present()?;
    }
    Ok(Svg(markup))
}

pub(crate) fn placeholder(area: &Canvas<'_>) -> Result<(), ChartError> {
    let (width, height) = area.dim_in_pixel();
    let (width, height) = (width as i32, height as i32);
    area.draw(&Rectangle::new(
        [(24, 8), (width - 24, height - 24)],
        BORDER.stroke_width(1),
    ))?;
    area.draw(&Text::new(
        PLACEHOLDER_MESSAGE,
        (width / 2, height / 2),
        centred(14).color(&MUTED),
    ))?;
    Ok(())
}

pub(crate) fn centred(size: i32) -> TextStyle<'static> {
    TextStyle::from((FONT, size).into_font()).pos(Pos::new(HPos::Center, VPos::Center))
}

/// Category name for a segment centre; boundaries stay unlabelled.
pub(crate) fn category_label(labels: &[String], value: &SegmentValue<i32>) -> String {
    match value {
        SegmentValue::CenterOf(index) => usize::try_from(*index)
            .ok()
            .and_then(|index| labels.get(index))
            .cloned()
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Upper bound of a value axis, leaving room for annotations above the tallest mark.
pub(crate) fn headroom(max: f64) -> f64 {
    if max.is_finite() && max > 0.0 {
        max * 1.15
    } else {
        1.0
    }
}

pub(crate) fn value_label(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.1}")
    }
}
