//! Static SVG chart rendering on top of `plotters`.
//!
//! Renderers only see aggregated values, never table rows. Empty input draws a placeholder so a
//! statistic without data still occupies its panel.

mod bar;
mod frame;
mod histogram;
mod line;
mod pie;
mod scatter;

pub use bar::{horizontal_bar_chart, vertical_bar_chart};
pub use histogram::histogram_chart;
pub use line::{line_chart, Marker};
pub use pie::pie_chart;
pub use scatter::scatter_chart;

use plotters::drawing::DrawingAreaErrorKind;
use plotters::style::RGBColor;
use serde::Serialize;
use std::fmt;

pub const CHART_WIDTH: u32 = 640;
pub const CHART_HEIGHT: u32 = 400;
pub const PLACEHOLDER_MESSAGE: &str = "No data available";

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("failed to draw chart: {0}")]
    Drawing(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for ChartError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Self::Drawing(err.to_string())
    }
}

/// Rendered `image/svg+xml` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Svg(String);

impl Svg {
    pub const CONTENT_TYPE: &'static str = "image/svg+xml";

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Svg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fixed visual encoding of one chart.
#[derive(Debug, Clone, Copy)]
pub struct ChartStyle {
    pub title: &'static str,
    pub x_label: Option<&'static str>,
    pub y_label: Option<&'static str>,
    pub color: RGBColor,
}

/// One labelled value: a bar, a line point or a pie slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Datum {
    pub label: String,
    pub value: f64,
}

impl Datum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

fn max_value(data: &[Datum]) -> f64 {
    data.iter().map(|datum| datum.value).fold(0.0, f64::max)
}

/// Trimmed contents of every `<text>` node, in document order.
#[cfg(test)]
pub(crate) fn text_content(svg: &Svg) -> Vec<String> {
    svg.as_str()
        .split("<text")
        .skip(1)
        .filter_map(|chunk| {
            let body = &chunk[chunk.find('>')? + 1..];
            Some(body[..body.find("</text>")?].trim().to_string())
        })
        .collect()
}
