use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::filter::SeasonSelection;
use crate::data::model::Season;
use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            egui::CollapsingHeader::new(RichText::new("Seasonal rentals").strong())
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        ui.label("Season");
                        if let Some(picked) =
                            season_selector(ui, "seasonal_season", state.seasonal.selection)
                        {
                            state.set_season(picked);
                        }
                    });
                    weather_mix_readout(ui, state);
                });
            ui.separator();

            egui::CollapsingHeader::new(RichText::new("Weekday hours").strong())
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        ui.label("Season");
                        if let Some(picked) =
                            season_selector(ui, "weekday_season", state.weekday.selection)
                        {
                            state.set_weekday_season(picked);
                        }
                    });
                    hour_range_sliders(ui, state);
                });
            ui.separator();

            egui::CollapsingHeader::new(RichText::new("About the data").strong())
                .default_open(false)
                .show(ui, |ui: &mut Ui| about_section(ui));
        });
}

/// Season combo box shared by both analysis views. Returns the new selection
/// when the user picks a different entry.
fn season_selector(ui: &mut Ui, id: &str, current: SeasonSelection) -> Option<SeasonSelection> {
    let mut picked = None;
    egui::ComboBox::from_id_salt(id)
        .selected_text(current.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current == SeasonSelection::All, "All")
                .clicked()
            {
                picked = Some(SeasonSelection::All);
            }
            for season in Season::CANONICAL_ORDER {
                let candidate = SeasonSelection::Only(season);
                if ui
                    .selectable_label(current == candidate, season.label())
                    .clicked()
                {
                    picked = Some(candidate);
                }
            }
        });
    picked
}

/// Weather composition of the current seasonal selection.
fn weather_mix_readout(ui: &mut Ui, state: &AppState) {
    if state.seasonal.weather_mix.is_empty() {
        return;
    }
    ui.add_space(4.0);
    ui.label("Weather in selection:");
    for (weather, days) in &state.seasonal.weather_mix {
        ui.label(format!("    {weather}: {days} days"));
    }
}

/// Two sliders spanning the hours actually observed on working days.
fn hour_range_sliders(ui: &mut Ui, state: &mut AppState) {
    let Some((lo, hi)) = state.weekday.hour_bounds else {
        ui.label("No working-day hours in the dataset.");
        return;
    };

    let mut range = state.weekday.range;
    let from = ui.add(egui::Slider::new(&mut range.min, lo..=hi).text("From hour"));
    let to = ui.add(egui::Slider::new(&mut range.max, lo..=hi).text("To hour"));

    // Dragging one end past the other drags the other end along with it.
    if from.changed() && range.min > range.max {
        range.max = range.min;
    }
    if to.changed() && range.max < range.min {
        range.min = range.max;
    }
    if from.changed() || to.changed() {
        state.set_hour_range(range);
    }
}

fn about_section(ui: &mut Ui) {
    ui.label(
        "Two years of bike-sharing rentals, one row per day and one row per hour, \
         with the season, weather situation and working-day flag recorded alongside \
         each rental count.",
    );
    ui.add_space(4.0);
    ui.label(RichText::new("Questions this dashboard answers:").italics());
    ui.label("• How do rental volumes differ across the four seasons?");
    ui.label("• Which working-day hours see the heaviest rental traffic?");
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar: dataset sizes plus the record count of the view
/// the active tab is looking at.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Bikeshare Rentals");
        ui.separator();
        ui.label(format!(
            "{} daily / {} hourly records",
            state.data.daily.len(),
            state.data.hourly.len()
        ));
        ui.separator();

        match state.tab {
            Tab::Seasons => {
                ui.label(format!("{} days in view", state.seasonal.indices.len()));
            }
            Tab::WeekdayHours => {
                ui.label(format!("{} hours in view", state.weekday.indices.len()));
            }
            Tab::Findings => {}
        }
    });
}
