use eframe::egui;

use crate::data::model::BikeData;
use crate::state::{AppState, Tab};
use crate::ui::{panels, views};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BikeshareApp {
    pub state: AppState,
}

impl BikeshareApp {
    pub fn new(data: BikeData) -> Self {
        Self {
            state: AppState::new(data),
        }
    }
}

impl eframe::App for BikeshareApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: dataset readout ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: tabbed analysis views ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.state.tab, Tab::Seasons, "Seasonal rentals");
                ui.selectable_value(&mut self.state.tab, Tab::WeekdayHours, "Weekday hours");
                ui.selectable_value(&mut self.state.tab, Tab::Findings, "Findings");
            });
            ui.separator();

            match self.state.tab {
                Tab::Seasons => views::seasonal(ui, &self.state),
                Tab::WeekdayHours => views::weekday(ui, &self.state),
                Tab::Findings => views::findings(ui),
            }
        });
    }
}
