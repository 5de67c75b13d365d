use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, HLine, Legend, Plot};

use crate::color::{dimmed, percent_color};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Renewable share bar chart (central panel)
// ---------------------------------------------------------------------------

/// One bar per state, in file order, with the threshold as a horizontal line.
pub fn renewable_chart(ui: &mut Ui, state: &AppState) {
    let records = state.analyzer.records();
    if records.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a CSV file to view states  (File → Open…)");
        });
        return;
    }

    let bars: Vec<Bar> = records
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let color = percent_color(s.percent_renewable());
            let fill = if state.is_above(i) { color } else { dimmed(color) };
            Bar::new(i as f64, s.percent_renewable())
                .name(s.name())
                .fill(fill)
                .width(0.8)
        })
        .collect();

    let names: Vec<String> = records.iter().map(|s| s.name().to_string()).collect();

    Plot::new("renewable_chart")
        .legend(Legend::default())
        .y_axis_label("% renewable")
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                return String::new();
            }
            names.get(idx as usize).cloned().unwrap_or_default()
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("% renewable"));
            plot_ui.hline(
                HLine::new(state.threshold)
                    .name(format!("threshold {:.1} %", state.threshold))
                    .color(Color32::LIGHT_GRAY)
                    .width(1.5),
            );
        });
}
