use plotters::prelude::*;

use super::frame::{self, headroom, DESC_SIZE, FONT, LABEL_SIZE};
use super::{ChartError, ChartStyle, Svg};

pub fn scatter_chart(points: &[(f64, f64)], style: &ChartStyle) -> Result<Svg, ChartError> {
    frame::render(style.title, |area| {
        if points.is_empty() {
            return frame::placeholder(area);
        }

        let max_x = points.iter().map(|point| point.0).fold(0.0, f64::max);
        let max_y = points.iter().map(|point| point.1).fold(0.0, f64::max);
        let mut chart = ChartBuilder::on(area)
            .margin(12)
            .x_label_area_size(48)
            .y_label_area_size(60)
            .build_cartesian_2d(0f64..headroom(max_x), 0f64..headroom(max_y))?;

        {
            let mut mesh = chart.configure_mesh();
            mesh.label_style((FONT, LABEL_SIZE))
                .axis_desc_style((FONT, DESC_SIZE));
            if let Some(desc) = style.x_label {
                mesh.x_desc(desc);
            }
            if let Some(desc) = style.y_label {
                mesh.y_desc(desc);
            }
            mesh.draw()?;
        }

        let color = style.color;
        chart.draw_series(
            points
                .iter()
                .map(|&point| Circle::new(point, 6, color.mix(0.6).filled())),
        )?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{text_content, PLACEHOLDER_MESSAGE};

    const STYLE: ChartStyle = ChartStyle {
        title: "Match Outcomes: Runs vs Wickets",
        x_label: Some("Win by Runs"),
        y_label: Some("Win by Wickets"),
        color: RGBColor(0xd6, 0x27, 0x28),
    };

    #[test]
    fn one_circle_per_row() {
        let points = [(35.0, 0.0), (0.0, 7.0), (0.0, 0.0), (146.0, 0.0)];
        let svg = scatter_chart(&points, &STYLE).expect("renders");
        assert_eq!(svg.as_str().matches("<circle").count(), points.len());
        assert!(text_content(&svg).iter().any(|text| text == "Win by Wickets"));
    }

    #[test]
    fn empty_points_render_placeholder() {
        let svg = scatter_chart(&[], &STYLE).expect("renders");
        assert!(svg.as_str().contains(PLACEHOLDER_MESSAGE));
        assert_eq!(svg.as_str().matches("<circle").count(), 0);
    }
}
