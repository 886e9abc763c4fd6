use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::aggregate::SummaryStats;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Summary statistics tables
// ---------------------------------------------------------------------------

/// Daily rental statistics per selected season.
pub fn season_stats_table(ui: &mut Ui, state: &AppState) {
    let rows: Vec<(String, SummaryStats)> = state
        .seasonal
        .stats
        .iter()
        .map(|(season, stats)| (season.label().to_owned(), stats.clone()))
        .collect();
    stats_table(ui, "season_stats", "Season", &rows);
}

/// Hourly rental statistics per selected working-day hour.
pub fn hour_stats_table(ui: &mut Ui, state: &AppState) {
    let rows: Vec<(String, SummaryStats)> = state
        .weekday
        .stats
        .iter()
        .map(|(hour, stats)| (format!("{hour:02}:00"), stats.clone()))
        .collect();
    stats_table(ui, "hour_stats", "Hour", &rows);
}

/// One row per group: mean and median to two decimals, min and max as the
/// integers they are.
fn stats_table(ui: &mut Ui, id: &str, group_header: &str, rows: &[(String, SummaryStats)]) {
    TableBuilder::new(ui)
        .id_salt(id)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(80.0))
        .columns(Column::remainder(), 4)
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong(group_header);
            });
            header.col(|ui| {
                ui.strong("Mean");
            });
            header.col(|ui| {
                ui.strong("Median");
            });
            header.col(|ui| {
                ui.strong("Min");
            });
            header.col(|ui| {
                ui.strong("Max");
            });
        })
        .body(|mut body| {
            for (label, stats) in rows {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(label);
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.2}", stats.mean));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.2}", stats.median));
                    });
                    row.col(|ui| {
                        ui.label(stats.min.to_string());
                    });
                    row.col(|ui| {
                        ui.label(stats.max.to_string());
                    });
                });
            }
        });
}
