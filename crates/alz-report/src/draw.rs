//! plotters drawing for each chart kind.

use std::ops::Range;

use alz_model::{BarChart, DensityChart, PointChart, Rgb};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::{
    AreaSeries, BLACK, ChartBuilder, Circle, Color, DrawingArea, ErrorBar, IntoFont,
    IntoSegmentedCoord, RGBColor, Rectangle, SVGBackend, SegmentValue, SeriesLabelPosition, WHITE,
};
use plotters::style::FontStyle;

pub(crate) type DrawResult = Result<(), DrawingAreaErrorKind<std::io::Error>>;
type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;

const FONT: &str = "sans-serif";

fn color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

/// Draws the bold title and returns the area below it.
fn titled<'a>(
    root: &Area<'a>,
    title: &str,
) -> Result<Area<'a>, DrawingAreaErrorKind<std::io::Error>> {
    root.titled(title, (FONT, 22).into_font().style(FontStyle::Bold))
}

/// Axis range over the finite values, padded by 10% of the span.
///
/// With a `floor` the range starts exactly there unless a value lies below it.
pub(crate) fn axis_range(values: impl IntoIterator<Item = f64>, floor: Option<f64>) -> Range<f64> {
    let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
    for value in values.into_iter().filter(|v| v.is_finite()) {
        lo = lo.min(value);
        hi = hi.max(value);
    }
    if let Some(floor) = floor {
        lo = lo.min(floor);
        hi = hi.max(floor);
    }
    if !lo.is_finite() {
        return 0.0..1.0;
    }
    let span = if hi > lo { hi - lo } else { hi.abs().max(1.0) };
    let pad = span * 0.1;
    let start = match floor {
        Some(floor) if lo >= floor => floor,
        _ => lo - pad,
    };
    start..hi + pad
}

fn category_label(labels: &[String], value: &SegmentValue<i32>) -> String {
    match value {
        SegmentValue::CenterOf(idx) => usize::try_from(*idx)
            .ok()
            .and_then(|idx| labels.get(idx))
            .cloned()
            .unwrap_or_default(),
        _ => String::new(),
    }
}

fn segments(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

pub(crate) fn draw_bar_chart(root: &Area<'_>, chart: &BarChart) -> DrawResult {
    let area = titled(root, &chart.title)?;
    let labels: Vec<String> = chart.bars.iter().map(|bar| bar.label.clone()).collect();
    let y_range = axis_range(chart.bars.iter().map(|bar| bar.value), Some(0.0));

    let mut ctx = ChartBuilder::on(&area)
        .caption(&chart.subtitle, (FONT, 16))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d((0..segments(chart.bars.len())).into_segmented(), y_range)?;

    ctx.configure_mesh()
        .disable_x_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .x_label_formatter(&|value| category_label(&labels, value))
        .draw()?;

    ctx.draw_series(
        chart
            .bars
            .iter()
            .enumerate()
            .filter(|(_, bar)| bar.value.is_finite())
            .map(|(idx, bar)| {
                let idx = segments(idx);
                let mut rect = Rectangle::new(
                    [
                        (SegmentValue::Exact(idx), 0.0),
                        (SegmentValue::Exact(idx + 1), bar.value),
                    ],
                    color(bar.color).filled(),
                );
                rect.set_margin(0, 0, 25, 25);
                rect
            }),
    )?;
    Ok(())
}

/// Means as dots with 95% interval whiskers.
pub(crate) fn draw_point_chart(root: &Area<'_>, chart: &PointChart) -> DrawResult {
    let area = titled(root, &chart.title)?;
    let labels: Vec<String> = chart.points.iter().map(|p| p.label.clone()).collect();
    let y_range = axis_range(
        chart
            .points
            .iter()
            .flat_map(|p| [p.lower, p.mean, p.upper]),
        None,
    );

    let mut ctx = ChartBuilder::on(&area)
        .caption(&chart.subtitle, (FONT, 16))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d((0..segments(chart.points.len())).into_segmented(), y_range)?;

    ctx.configure_mesh()
        .disable_x_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .x_label_formatter(&|value| category_label(&labels, value))
        .draw()?;

    let drawable: Vec<_> = chart
        .points
        .iter()
        .enumerate()
        .filter(|(_, p)| p.mean.is_finite())
        .map(|(idx, p)| (SegmentValue::CenterOf(segments(idx)), p))
        .collect();

    ctx.draw_series(drawable.iter().map(|(x, p)| {
        ErrorBar::new_vertical(
            x.clone(),
            p.lower,
            p.mean,
            p.upper,
            color(p.color).stroke_width(2),
            12,
        )
    }))?;
    ctx.draw_series(
        drawable
            .iter()
            .map(|(x, p)| Circle::new((x.clone(), p.mean), 6, color(p.color).filled())),
    )?;
    Ok(())
}

/// Filled density curves with a legend keyed by group label.
pub(crate) fn draw_density_chart(root: &Area<'_>, chart: &DensityChart) -> DrawResult {
    let area = titled(root, &chart.title)?;
    let points = || chart.series.iter().flat_map(|s| s.points.iter().copied());
    let x_range = axis_range(points().map(|(x, _)| x), None);
    let y_range = axis_range(points().map(|(_, y)| y), Some(0.0));

    let mut ctx = ChartBuilder::on(&area)
        .caption(&chart.subtitle, (FONT, 16))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    ctx.configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .draw()?;

    for series in &chart.series {
        let stroke = color(series.color);
        ctx.draw_series(
            AreaSeries::new(series.points.iter().copied(), 0.0, stroke.mix(0.3))
                .border_style(stroke),
        )?
        .label(series.label.as_str())
        .legend(move |(x, y)| {
            Rectangle::new([(x, y - 5), (x + 15, y + 5)], stroke.mix(0.3).filled())
        });
    }

    ctx.configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_pins_the_range_start() {
        let range = axis_range([0.2, 0.6], Some(0.0));
        assert_eq!(range.start, 0.0);
        assert!((range.end - 0.66).abs() < 1e-12);
    }

    #[test]
    fn range_pads_both_sides_without_floor() {
        let range = axis_range([10.0, 20.0, f64::NAN], None);
        assert_eq!(range, 9.0..21.0);
    }

    #[test]
    fn degenerate_ranges_stay_drawable() {
        assert_eq!(axis_range([], None), 0.0..1.0);
        let flat = axis_range([5.0, 5.0], None);
        assert!(flat.start < 5.0 && flat.end > 5.0);
    }

    #[test]
    fn category_labels_only_at_segment_centres() {
        let labels = vec!["Healthy".to_string(), "Alzheimer".to_string()];
        assert_eq!(category_label(&labels, &SegmentValue::CenterOf(1)), "Alzheimer");
        assert_eq!(category_label(&labels, &SegmentValue::Exact(1)), "");
        assert_eq!(category_label(&labels, &SegmentValue::CenterOf(5)), "");
    }
}
