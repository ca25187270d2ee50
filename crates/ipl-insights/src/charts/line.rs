use plotters::prelude::*;
use plotters::style::FontTransform;

use super::frame::{self, category_label, headroom, Canvas, DESC_SIZE, FONT, LABEL_SIZE};
use super::{max_value, ChartError, ChartStyle, Datum, Svg};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
}

/// Evenly spaced categorical line with a translucent area fill underneath.
pub fn line_chart(points: &[Datum], style: &ChartStyle, marker: Marker) -> Result<Svg, ChartError> {
    frame::render(style.title, |area| {
        if points.is_empty() {
            return frame::placeholder(area);
        }
        draw_line(area, points, style, marker)
    })
}

fn draw_line(
    area: &Canvas<'_>,
    points: &[Datum],
    style: &ChartStyle,
    marker: Marker,
) -> Result<(), ChartError> {
    let labels: Vec<String> = points.iter().map(|point| point.label.clone()).collect();
    let series: Vec<(SegmentValue<i32>, f64)> = points
        .iter()
        .enumerate()
        .map(|(index, point)| (SegmentValue::CenterOf(index as i32), point.value))
        .collect();

    let mut chart = ChartBuilder::on(area)
        .margin(12)
        .x_label_area_size(72)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (0..points.len() as i32).into_segmented(),
            0f64..headroom(max_value(points)),
        )?;

    {
        let formatter = |value: &SegmentValue<i32>| category_label(&labels, value);
        let mut mesh = chart.configure_mesh();
        mesh.disable_x_mesh()
            .x_labels(points.len() + 1)
            .x_label_formatter(&formatter)
            .x_label_style((FONT, LABEL_SIZE).into_font().transform(FontTransform::Rotate90))
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

    chart.draw_series(AreaSeries::new(
        series.iter().cloned(),
        0.0,
        style.color.mix(0.3).filled(),
    ))?;
    chart.draw_series(LineSeries::new(
        series.iter().cloned(),
        style.color.stroke_width(2),
    ))?;

    let color = style.color;
    match marker {
        Marker::Circle => {
            chart.draw_series(
                series
                    .iter()
                    .map(|point| Circle::new(point.clone(), 4, color.filled())),
            )?;
        }
        Marker::Square => {
            chart.draw_series(series.iter().map(|point| {
                EmptyElement::at(point.clone()) + Rectangle::new([(-4, -4), (4, 4)], color.filled())
            }))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{text_content, PLACEHOLDER_MESSAGE};

    const STYLE: ChartStyle = ChartStyle {
        title: "IPL Matches Per Season Trend",
        x_label: Some("Season"),
        y_label: Some("Number of Matches"),
        color: RGBColor(0x1f, 0x77, 0xb4),
    };

    #[test]
    fn draws_one_marker_per_point() {
        let points = vec![
            Datum::new("2008", 58.0),
            Datum::new("2009", 57.0),
            Datum::new("2010", 60.0),
        ];
        let svg = line_chart(&points, &STYLE, Marker::Circle).expect("renders");
        assert_eq!(svg.as_str().matches("<circle").count(), 3);
        assert!(svg.as_str().contains("<polygon"));

        let texts = text_content(&svg);
        assert!(texts.iter().any(|text| text == "Number of Matches"));
        assert!(texts.iter().any(|text| text == "2009"));
    }

    #[test]
    fn square_markers_for_averages() {
        let points = vec![Datum::new("2008", 17.4), Datum::new("2009", 14.2)];
        let svg = line_chart(&points, &STYLE, Marker::Square).expect("renders");
        assert_eq!(svg.as_str().matches("<circle").count(), 0);
        assert!(svg.as_str().matches("<rect").count() > points.len());
    }

    #[test]
    fn empty_series_renders_placeholder() {
        let svg = line_chart(&[], &STYLE, Marker::Circle).expect("renders");
        assert!(svg.as_str().contains(PLACEHOLDER_MESSAGE));
        assert!(svg.as_str().trim_end().ends_with("</svg>"));
    }
}
