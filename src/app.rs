use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RenewablesApp {
    pub state: AppState,
}

impl RenewablesApp {
    /// Start with the given files already loaded, in order.
    pub fn with_files(paths: &[std::path::PathBuf]) -> Self {
        let mut app = Self::default();
        for path in paths {
            app.state.load_file(path);
        }
        app
    }
}

impl eframe::App for RenewablesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: threshold + summary ----
        egui::SidePanel::left("summary_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: records table ----
        egui::TopBottomPanel::bottom("records_panel")
            .default_height(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                table::records_table(ui, &mut self.state);
            });

        // ---- Central panel: bar chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::renewable_chart(ui, &self.state);
        });
    }
}
