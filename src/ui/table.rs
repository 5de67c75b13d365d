use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use renewables::data::filter::SortKey;

use crate::color::{dimmed, percent_color};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Records table (bottom panel)
// ---------------------------------------------------------------------------

const HEADERS: [&str; 6] = [
    "State",
    "Total TWh",
    "% renewable",
    "Renewable TWh",
    "% of US renewable",
    "Mt CO2/TWh",
];

/// Every loaded row; rows below the threshold are dimmed.
pub fn records_table(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Records");
        ui.separator();
        ui.label("Sort by");
        egui::ComboBox::from_id_salt("sort_by")
            .selected_text(state.sort_key.label())
            .show_ui(ui, |ui: &mut Ui| {
                for key in SortKey::ALL {
                    ui.selectable_value(&mut state.sort_key, key, key.label());
                }
            });
    });
    ui.separator();

    let order = state.table_order();
    let records = state.analyzer.records();

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(140.0))
        .columns(Column::auto().at_least(90.0), HEADERS.len() - 1)
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, order.len(), |mut row| {
                let idx = order[row.index()];
                let s = &records[idx];
                let above = state.is_above(idx);
                let tint = |text: String| {
                    let color = percent_color(s.percent_renewable());
                    RichText::new(text).color(if above { color } else { dimmed(color) })
                };

                row.col(|ui| {
                    ui.label(tint(s.name().to_string()));
                });
                for value in [
                    s.total_gen_twh(),
                    s.percent_renewable(),
                    s.renewable_gen_twh(),
                    s.percent_of_us_renewable(),
                    s.co2_per_twh(),
                ] {
                    row.col(|ui| {
                        ui.label(tint(format!("{value:.2}")));
                    });
                }
            });
        });
}
