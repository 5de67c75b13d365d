use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// StateRenewable – one row of the source table
// ---------------------------------------------------------------------------

/// Renewable electricity statistics for one state (one data row).
///
/// Values are fixed at construction; there are no setters. Serialized field
/// names match the CSV header so the same type can be written back out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateRenewable {
    #[serde(rename = "Location")]
    name: String,
    #[serde(rename = "TotalGenTWh")]
    total_gen_twh: f64,
    #[serde(rename = "PercentRenewable")]
    percent_renewable: f64,
    #[serde(rename = "RenewableGenTWh")]
    renewable_gen_twh: f64,
    #[serde(rename = "PercentOfUSRenewable")]
    percent_of_us_renewable: f64,
    #[serde(rename = "CO2MtPerTWh")]
    co2_per_twh: f64,
}

impl StateRenewable {
    pub fn new(
        name: impl Into<String>,
        total_gen_twh: f64,
        percent_renewable: f64,
        renewable_gen_twh: f64,
        percent_of_us_renewable: f64,
        co2_per_twh: f64,
    ) -> Self {
        Self {
            name: name.into(),
            total_gen_twh,
            percent_renewable,
            renewable_gen_twh,
            percent_of_us_renewable,
            co2_per_twh,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total electricity generation (TWh).
    pub fn total_gen_twh(&self) -> f64 {
        self.total_gen_twh
    }

    /// Share of generation from renewable sources, nominally 0–100.
    pub fn percent_renewable(&self) -> f64 {
        self.percent_renewable
    }

    /// Renewable generation (TWh).
    pub fn renewable_gen_twh(&self) -> f64 {
        self.renewable_gen_twh
    }

    /// This state's share of national renewable generation.
    pub fn percent_of_us_renewable(&self) -> f64 {
        self.percent_of_us_renewable
    }

    /// Emissions intensity (Mt CO2 per TWh).
    pub fn co2_per_twh(&self) -> f64 {
        self.co2_per_twh
    }

    /// `true` when the renewable share is at or above `threshold`.
    pub fn is_above_renewable_threshold(&self, threshold: f64) -> bool {
        self.percent_renewable >= threshold
    }
}

impl fmt::Display for StateRenewable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: total {:.2} TWh, {:.2}% renewable, {:.2} TWh renewable, \
             {:.2}% of US renewable, {:.2} Mt CO2/TWh",
            self.name,
            self.total_gen_twh,
            self.percent_renewable,
            self.renewable_gen_twh,
            self.percent_of_us_renewable,
            self.co2_per_twh
        )
    }
}
