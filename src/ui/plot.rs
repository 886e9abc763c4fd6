use eframe::egui::{Align2, Color32, RichText, Stroke, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, GridMark, Legend, Line, Plot, PlotPoint,
    PlotPoints, Points, Text,
};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Seasonal charts
// ---------------------------------------------------------------------------

/// Distribution of daily rentals per season, one box per selected season.
/// Whiskers sit at the observed minimum and maximum.
pub fn season_box_plot(ui: &mut Ui, state: &AppState) {
    let spreads = &state.seasonal.spreads;
    let labels: Vec<String> = spreads.iter().map(|(s, _)| s.label().to_owned()).collect();

    let boxes: Vec<BoxElem> = spreads
        .iter()
        .enumerate()
        .map(|(i, (season, five))| {
            let color = state.season_colors.color_for(*season);
            BoxElem::new(
                i as f64,
                BoxSpread::new(five.min, five.q1, five.median, five.q3, five.max),
            )
            .name(season.label())
            .fill(color.gamma_multiply(0.4))
            .stroke(Stroke::new(1.5, color))
        })
        .collect();

    Plot::new("season_box_plot")
        .height(300.0)
        .legend(Legend::default())
        .x_axis_label("Season")
        .y_axis_label("Rentals per day")
        .x_axis_formatter(move |mark, _range| category_label(&labels, mark))
        .show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new(boxes));
        });
}

/// Total rentals per season, one bar per selected season with the total
/// printed above it.
pub fn season_totals_bar(ui: &mut Ui, state: &AppState) {
    let totals = &state.seasonal.totals;
    let labels: Vec<String> = totals.iter().map(|(s, _)| s.label().to_owned()).collect();
    let tallest = totals.iter().map(|&(_, t)| t).max().unwrap_or(0) as f64;

    Plot::new("season_totals_bar")
        .height(300.0)
        .legend(Legend::default())
        .x_axis_label("Season")
        .y_axis_label("Total rentals")
        .x_axis_formatter(move |mark, _range| category_label(&labels, mark))
        .include_y(tallest * 1.1)
        .show(ui, |plot_ui| {
            for (i, (season, total)) in totals.iter().enumerate() {
                let color = state.season_colors.color_for(*season);
                let bar = Bar::new(i as f64, *total as f64)
                    .name(season.label())
                    .fill(color)
                    .width(0.6);
                plot_ui.bar_chart(BarChart::new(vec![bar]).name(season.label()).color(color));

                let label = Text::new(
                    PlotPoint::new(i as f64, *total as f64 + tallest * 0.05),
                    RichText::new(format_count(*total)).strong(),
                )
                .anchor(Align2::CENTER_BOTTOM);
                plot_ui.text(label);
            }
        });
}

// ---------------------------------------------------------------------------
// Hourly charts
// ---------------------------------------------------------------------------

/// Total rentals per hour across the selected working-day hours, drawn as a
/// line with a marker on every hour.
pub fn hourly_trend_line(ui: &mut Ui, state: &AppState) {
    let totals = &state.weekday.totals;
    let range = state.weekday.range;
    let series: PlotPoints = totals
        .iter()
        .map(|&(hour, total)| [f64::from(hour), total as f64])
        .collect();
    let markers: PlotPoints = totals
        .iter()
        .map(|&(hour, total)| [f64::from(hour), total as f64])
        .collect();

    Plot::new("hourly_trend_line")
        .height(300.0)
        .legend(Legend::default())
        .x_axis_label("Hour of day")
        .y_axis_label("Total rentals")
        .x_axis_formatter(hour_label)
        // Keep the axis spanning the whole selected range even when some
        // hours have no records.
        .include_x(f64::from(range.min))
        .include_x(f64::from(range.max))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(series)
                    .name("Total rentals")
                    .color(Color32::LIGHT_BLUE)
                    .width(1.5),
            );
            plot_ui.points(
                Points::new(markers)
                    .name("Total rentals")
                    .color(Color32::LIGHT_BLUE)
                    .radius(3.0),
            );
        });
}

/// Total rentals per hour as bars, one hue per hour of day.
pub fn hourly_totals_bar(ui: &mut Ui, state: &AppState) {
    let totals = &state.weekday.totals;
    let bars: Vec<Bar> = totals
        .iter()
        .map(|&(hour, total)| {
            Bar::new(f64::from(hour), total as f64)
                .name(format!("{hour:02}:00"))
                .fill(state.hour_colors.color_for(hour))
                .width(0.7)
        })
        .collect();

    Plot::new("hourly_totals_bar")
        .height(300.0)
        .x_axis_label("Hour of day")
        .y_axis_label("Total rentals")
        .x_axis_formatter(hour_label)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Axis helpers
// ---------------------------------------------------------------------------

/// Label integer grid marks with the category at that position; fractional
/// marks get no text so the axis stays readable when zoomed.
fn category_label(labels: &[String], mark: GridMark) -> String {
    let rounded = mark.value.round();
    if (mark.value - rounded).abs() > 0.05 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

fn hour_label(mark: GridMark, _range: &std::ops::RangeInclusive<f64>) -> String {
    let rounded = mark.value.round();
    if (mark.value - rounded).abs() > 0.05 || !(0.0..24.0).contains(&rounded) {
        return String::new();
    }
    format!("{:02}:00", rounded as u8)
}

/// Render a count with thousands separators, e.g. 1234567 -> "1,234,567".
fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
