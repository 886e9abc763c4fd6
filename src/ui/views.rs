use eframe::egui::{RichText, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{plot, table};

// ---------------------------------------------------------------------------
// Tab bodies
// ---------------------------------------------------------------------------

/// Seasonal rentals tab: distribution, totals and statistics of daily
/// rentals by season.
pub fn seasonal(ui: &mut Ui, state: &AppState) {
    if state.seasonal.indices.is_empty() {
        empty_view(ui);
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Rentals by season");
            ui.label(
                "Spread of daily rentals within each season, whiskers at the \
                 observed extremes.",
            );
            plot::season_box_plot(ui, state);
            ui.add_space(8.0);

            ui.heading("Season totals");
            plot::season_totals_bar(ui, state);
            ui.add_space(8.0);

            ui.heading("Summary statistics");
            table::season_stats_table(ui, state);
            ui.add_space(8.0);

            insight(
                ui,
                "Fall carries the heaviest rental traffic and the widest \
                 day-to-day spread, while Spring stays well below the other \
                 seasons in both volume and variability.",
            );
        });
}

/// Working-day hours tab: hourly trend, totals and statistics across the
/// selected hour range.
pub fn weekday(ui: &mut Ui, state: &AppState) {
    if state.weekday.indices.is_empty() {
        empty_view(ui);
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Rentals through the working day");
            plot::hourly_trend_line(ui, state);
            ui.add_space(8.0);

            ui.heading("Hour totals");
            plot::hourly_totals_bar(ui, state);
            ui.add_space(8.0);

            ui.heading("Summary statistics");
            table::hour_stats_table(ui, state);
            ui.add_space(8.0);

            insight(
                ui,
                "Rentals on working days peak twice, around 8:00 and again \
                 between 17:00 and 18:00, the shape of commute traffic rather \
                 than leisure riding.",
            );
        });
}

/// Findings tab: the written answers to the two dashboard questions.
pub fn findings(ui: &mut Ui) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Findings");
            ui.add_space(4.0);

            ui.strong("Seasonality");
            ui.label(
                "Demand is strongly seasonal. Fall is the busiest season by both \
                 total and typical daily rentals, Spring the quietest, with Summer \
                 and Winter in between. Clear-weather days dominate every season, \
                 so the gap is not explained by weather mix alone.",
            );
            ui.add_space(8.0);

            ui.strong("Working-day rhythm");
            ui.label(
                "On working days rentals follow the commute: a sharp morning peak \
                 around 8:00, a quieter midday plateau, and the day's maximum \
                 between 17:00 and 18:00. Early-morning hours barely register.",
            );
            ui.add_space(8.0);

            ui.strong("What to do with this");
            ui.label(
                "Fleet rebalancing and maintenance windows should avoid the two \
                 commute peaks, and seasonal capacity planning should treat Fall \
                 as the high-water mark rather than Summer.",
            );
        });
}

/// Shown when the current filters match nothing.
fn empty_view(ui: &mut Ui) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading("No data for this selection.");
    });
}

fn insight(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).italics());
}
