use plotters::prelude::*;
use plotters::style::FontTransform;

use super::frame::{self, category_label, headroom, value_label, Canvas, DESC_SIZE, FONT, LABEL_SIZE};
use super::{max_value, ChartError, ChartStyle, Datum, Svg};

/// Ranked bars with the leader on top, each annotated with its value.
pub fn horizontal_bar_chart(bars: &[Datum], style: &ChartStyle) -> Result<Svg, ChartError> {
    frame::render(style.title, |area| {
        if bars.is_empty() {
            return frame::placeholder(area);
        }
        draw_horizontal(area, bars, style)
    })
}

/// Ranked columns left to right with rotated category labels and values on top.
pub fn vertical_bar_chart(bars: &[Datum], style: &ChartStyle) -> Result<Svg, ChartError> {
    frame::render(style.title, |area| {
        if bars.is_empty() {
            return frame::placeholder(area);
        }
        draw_vertical(area, bars, style)
    })
}

fn draw_horizontal(area: &Canvas<'_>, bars: &[Datum], style: &ChartStyle) -> Result<(), ChartError> {
    let count = bars.len() as i32;
    // Segment 0 sits at the bottom, so rank 0 maps to the last segment.
    let slot = |rank: usize| count - 1 - rank as i32;
    let labels: Vec<String> = bars.iter().rev().map(|bar| bar.label.clone()).collect();

    let mut chart = ChartBuilder::on(area)
        .margin(12)
        .x_label_area_size(44)
        .y_label_area_size(190)
        .build_cartesian_2d(0f64..headroom(max_value(bars)), (0..count).into_segmented())?;

    {
        let formatter = |value: &SegmentValue<i32>| category_label(&labels, value);
        let mut mesh = chart.configure_mesh();
        mesh.disable_y_mesh()
            .y_labels(bars.len() + 1)
            .y_label_formatter(&formatter)
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

    chart.draw_series(
        Histogram::horizontal(&chart)
            .style(style.color.filled())
            .margin(6)
            .data(bars.iter().enumerate().map(|(rank, bar)| (slot(rank), bar.value))),
    )?;
    chart.draw_series(bars.iter().enumerate().map(|(rank, bar)| {
        EmptyElement::at((bar.value, SegmentValue::CenterOf(slot(rank))))
            + Text::new(value_label(bar.value), (4, -6), (FONT, LABEL_SIZE))
    }))?;
    Ok(())
}

fn draw_vertical(area: &Canvas<'_>, bars: &[Datum], style: &ChartStyle) -> Result<(), ChartError> {
    let count = bars.len() as i32;
    let labels: Vec<String> = bars.iter().map(|bar| bar.label.clone()).collect();

    let mut chart = ChartBuilder::on(area)
        .margin(12)
        .x_label_area_size(150)
        .y_label_area_size(56)
        .build_cartesian_2d((0..count).into_segmented(), 0f64..headroom(max_value(bars)))?;

    {
        let formatter = |value: &SegmentValue<i32>| category_label(&labels, value);
        let mut mesh = chart.configure_mesh();
        mesh.disable_x_mesh()
            .x_labels(bars.len() + 1)
            .x_label_formatter(&formatter)
            .x_label_style((FONT, LABEL_SIZE - 1).into_font().transform(FontTransform::Rotate90))
            .y_label_style((FONT, LABEL_SIZE))
            .axis_desc_style((FONT, DESC_SIZE));
        if let Some(desc) = style.x_label {
            mesh.x_desc(desc);
        }
        if let Some(desc) = style.y_label {
            mesh.y_desc(desc);
        }
        mesh.draw()?;
    }

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(style.color.filled())
            .margin(8)
            .data(bars.iter().enumerate().map(|(rank, bar)| (rank as i32, bar.value))),
    )?;
    chart.draw_series(bars.iter().enumerate().map(|(rank, bar)| {
        EmptyElement::at((SegmentValue::CenterOf(rank as i32), bar.value))
            + Text::new(value_label(bar.value), (-6, -16), (FONT, LABEL_SIZE))
    }))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{text_content, PLACEHOLDER_MESSAGE};

    const WINS: ChartStyle = ChartStyle {
        title: "Top 10 Teams by Total Wins",
        x_label: Some("Number of Wins"),
        y_label: None,
        color: RGBColor(0x2c, 0xa0, 0x2c),
    };

    fn bars() -> Vec<Datum> {
        vec![
            Datum::new("Mumbai Indians", 109.0),
            Datum::new("Chennai Super Kings", 100.0),
            Datum::new("Kolkata Knight Riders", 92.0),
        ]
    }

    #[test]
    fn horizontal_bars_carry_value_labels() {
        let svg = horizontal_bar_chart(&bars(), &WINS).expect("renders");
        let markup = svg.as_str().to_lowercase();
        assert_eq!(markup.matches("fill=\"#2ca02c\"").count(), 3);

        let texts = text_content(&svg);
        assert!(texts.iter().any(|text| text == "109"));
        assert!(texts.iter().any(|text| text == "Kolkata Knight Riders"));
        assert!(texts.iter().any(|text| text == "Number of Wins"));
    }

    #[test]
    fn vertical_bars_label_every_category() {
        let svg = vertical_bar_chart(&bars(), &WINS).expect("renders");
        let texts = text_content(&svg);
        for bar in bars() {
            assert!(texts.contains(&bar.label), "missing {}", bar.label);
        }
        assert!(texts.iter().any(|text| text == "100"));
    }

    #[test]
    fn empty_rankings_render_placeholder() {
        for svg in [
            horizontal_bar_chart(&[], &WINS).expect("renders"),
            vertical_bar_chart(&[], &WINS).expect("renders"),
        ] {
            assert!(svg.as_str().contains(PLACEHOLDER_MESSAGE));
            assert!(!svg.as_str().to_lowercase().contains("#2ca02c"));
        }
    }
}
