use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use renewables::StateRenewable;

use crate::color::percent_color;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – threshold and summary
// ---------------------------------------------------------------------------

/// Render the left summary panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Threshold");
    ui.separator();

    let mut threshold = state.threshold;
    let slider = egui::Slider::new(&mut threshold, 0.0..=100.0)
        .suffix(" %")
        .text("renewable");
    if ui.add(slider).changed() {
        state.set_threshold(threshold);
    }

    ui.add_space(8.0);
    ui.heading("Summary");
    ui.separator();

    if state.analyzer.is_empty() {
        ui.label("No data loaded.");
        return;
    }

    let report = state.analyzer.summary_report_at(state.threshold);

    egui::Grid::new("summary_grid")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            ui.label("States");
            ui.label(report.records.len().to_string());
            ui.end_row();

            extremum_row(ui, "Highest %", report.highest_percent, |s| {
                format!("{:.1} %", s.percent_renewable())
            });
            extremum_row(ui, "Lowest %", report.lowest_percent, |s| {
                format!("{:.1} %", s.percent_renewable())
            });

            ui.label("Average %");
            ui.label(format!("{:.2} %", report.average_percent));
            ui.end_row();

            ui.label("Total renewable");
            ui.label(format!("{:.1} TWh", report.total_renewable_twh));
            ui.end_row();

            extremum_row(ui, "Most renewable TWh", report.highest_generation, |s| {
                format!("{:.1} TWh", s.renewable_gen_twh())
            });
        });

    ui.add_space(8.0);
    ui.strong(format!(
        "At or above {:.1} %  ({}/{})",
        report.threshold,
        report.above.len(),
        report.records.len()
    ));

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for s in &report.above {
                let text = format!("{}  {:.1} %", s.name(), s.percent_renewable());
                ui.label(RichText::new(text).color(percent_color(s.percent_renewable())));
            }
        });
}

fn extremum_row(
    ui: &mut Ui,
    label: &str,
    state: Option<&StateRenewable>,
    value: impl Fn(&StateRenewable) -> String,
) {
    ui.label(label);
    match state {
        Some(s) => ui.label(format!("{} ({})", s.name(), value(s))),
        None => ui.label("none"),
    };
    ui.end_row();
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if !state.analyzer.is_empty() {
            ui.label(format!(
                "{} states from {} file(s), {} at or above threshold",
                state.analyzer.count(),
                state.loaded_files.len(),
                state.above_indices.len()
            ));
        }

        ui.separator();

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Pick one or more CSV files and append them in the order chosen.
pub fn open_file_dialog(state: &mut AppState) {
    let files = rfd::FileDialog::new()
        .set_title("Open state renewable data")
        .add_filter("CSV", &["csv"])
        .add_filter("All files", &["*"])
        .pick_files();

    for path in files.unwrap_or_default() {
        state.load_file(&path);
    }
}
