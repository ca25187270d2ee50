use plotters::prelude::*;

use super::frame::{self, category_label, Canvas, DESC_SIZE, FONT, LABEL_SIZE};
use super::{ChartError, ChartStyle, Svg};
use crate::stats::HistogramBin;

/// Equal-width bins, each column labelled with its lower edge.
pub fn histogram_chart(bins: &[HistogramBin], style: &ChartStyle) -> Result<Svg, ChartError> {
    frame::render(style.title, |area| {
        if bins.is_empty() {
            return frame::placeholder(area);
        }
        draw_bins(area, bins, style)
    })
}

fn draw_bins(area: &Canvas<'_>, bins: &[HistogramBin], style: &ChartStyle) -> Result<(), ChartError> {
    let labels: Vec<String> = bins.iter().map(|bin| format!("{:.0}", bin.lower)).collect();
    let tallest = bins.iter().map(|bin| bin.count).max().unwrap_or(0) as u32;

    let mut chart = ChartBuilder::on(area)
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d(
            (0..bins.len() as i32).into_segmented(),
            0u32..tallest + tallest / 10 + 1,
        )?;

    {
        let formatter = |value: &SegmentValue<i32>| category_label(&labels, value);
        let mut mesh = chart.configure_mesh();
        mesh.disable_x_mesh()
            .x_labels(bins.len() / 2 + 1)
            .x_label_formatter(&formatter)
            .label_style((FONT, LABEL_SIZE))
            .axis_desc_style((FONT, DESC_SIZE));
        if let Some(desc) = style.x_label {
            mesh.x_desc(desc);
        }
        if let Some(desc) = style.y_label {
            mesh.y_desc(desc);
        }
        mesh.draw()?;
    }

    // Empty bins keep their slot on the axis but draw nothing.
    chart.draw_series(
        Histogram::vertical(&chart)
            .style(style.color.mix(0.7).filled())
            .margin(0)
            .data(
                bins.iter()
                    .enumerate()
                    .filter(|(_, bin)| bin.count > 0)
                    .map(|(index, bin)| (index as i32, bin.count as u32)),
            ),
    )?;
    Ok(())
}
