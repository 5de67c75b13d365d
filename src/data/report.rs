use std::fmt;

use serde::Serialize;

use super::analyzer::RenewableAnalyzer;
use super::model::StateRenewable;

/// Every aggregate of a [`RenewableAnalyzer`] gathered in one place, in the
/// order they are displayed.
///
/// Borrowed from the analyzer; it holds query results only and computes
/// nothing itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport<'a> {
    pub records: &'a [StateRenewable],
    pub threshold: f64,
    pub above: Vec<&'a StateRenewable>,
    pub highest_percent: Option<&'a StateRenewable>,
    pub lowest_percent: Option<&'a StateRenewable>,
    pub average_percent: f64,
    pub total_renewable_twh: f64,
    pub highest_generation: Option<&'a StateRenewable>,
}

impl<'a> SummaryReport<'a> {
    pub(crate) fn compose(analyzer: &'a RenewableAnalyzer, threshold: f64) -> Self {
        Self {
            records: analyzer.records(),
            threshold,
            above: analyzer.above(threshold),
            highest_percent: analyzer.highest_percent_renewable(),
            lowest_percent: analyzer.lowest_percent_renewable(),
            average_percent: analyzer.average_percent_renewable(),
            total_renewable_twh: analyzer.total_renewable_gen_twh(),
            highest_generation: analyzer.highest_renewable_gen(),
        }
    }
}

struct OrNone<'a>(Option<&'a StateRenewable>);

impl fmt::Display for OrNone<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(state) => write!(f, "{state}"),
            None => write!(f, "none"),
        }
    }
}

impl fmt::Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "All states ({}):", self.records.len())?;
        for state in self.records {
            writeln!(f, "  {state}")?;
        }

        writeln!(
            f,
            "States at or above {}% renewable ({}):",
            self.threshold,
            self.above.len()
        )?;
        for state in &self.above {
            writeln!(f, "  {state}")?;
        }

        writeln!(f, "Highest % renewable: {}", OrNone(self.highest_percent))?;
        writeln!(f, "Lowest % renewable: {}", OrNone(self.lowest_percent))?;
        writeln!(f, "Average % renewable: {:.2}", self.average_percent)?;
        writeln!(f, "Total renewable generation: {:.2} TWh", self.total_renewable_twh)?;
        write!(f, "Highest renewable generation: {}", OrNone(self.highest_generation))
    }
}

#[cfg(test)]
mod tests {
    use crate::data::analyzer::{RenewableAnalyzer, SUMMARY_THRESHOLD};

    const SAMPLE: &str = "\
Location,TotalGenTWh,PercentRenewable,RenewableGenTWh,PercentOfUSRenewable,CO2MtPerTWh
California,280,45,126,10,150
Texas,500,20,100,8,400
Ohio,120,3,4,1,550
";

    fn analyzer() -> RenewableAnalyzer {
        let mut a = RenewableAnalyzer::new();
        a.load_reader(SAMPLE.as_bytes()).unwrap();
        a
    }

    #[test]
    fn matches_individual_queries() {
        let a = analyzer();
        let report = a.summary_report();

        assert_eq!(report.records, a.records());
        assert_eq!(report.threshold, SUMMARY_THRESHOLD);
        assert_eq!(report.above, a.above(15.0));
        assert_eq!(report.highest_percent, a.highest_percent_renewable());
        assert_eq!(report.lowest_percent, a.lowest_percent_renewable());
        assert_eq!(report.average_percent, a.average_percent_renewable());
        assert_eq!(report.total_renewable_twh, a.total_renewable_gen_twh());
        assert_eq!(report.highest_generation, a.highest_renewable_gen());
    }

    #[test]
    fn fixed_threshold_is_fifteen() {
        let a = analyzer();
        let names: Vec<&str> = a.summary_report().above.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["California", "Texas"]);
    }

    #[test]
    fn display_sections_in_order() {
        let a = analyzer();
        let text = a.summary_report().to_string();

        let headings = [
            "All states (3):",
            "States at or above 15% renewable (2):",
            "Highest % renewable: California",
            "Lowest % renewable: Ohio",
            "Average % renewable: 22.67",
            "Total renewable generation: 230.00 TWh",
            "Highest renewable generation: California",
        ];
        let mut cursor = 0;
        for heading in headings {
            let pos = text[cursor..]
                .find(heading)
                .unwrap_or_else(|| panic!("missing or out of order: {heading}\n{text}"));
            cursor += pos + heading.len();
        }
    }

    #[test]
    fn empty_report_uses_none_and_zero() {
        let a = RenewableAnalyzer::new();
        let text = a.summary_report().to_string();
        assert!(text.contains("All states (0):"));
        assert!(text.contains("Highest % renewable: none"));
        assert!(text.contains("Lowest % renewable: none"));
        assert!(text.contains("Average % renewable: 0.00"));
        assert!(text.contains("Total renewable generation: 0.00 TWh"));
        assert!(text.ends_with("Highest renewable generation: none"));
    }

    #[test]
    fn serializes_to_json() {
        let a = analyzer();
        let json = serde_json::to_value(a.summary_report_at(30.0)).unwrap();
        assert_eq!(json["threshold"], 30.0);
        assert_eq!(json["records"].as_array().unwrap().len(), 3);
        assert_eq!(json["above"][0]["Location"], "California");
        assert_eq!(json["highest_generation"]["Location"], "California");
        assert_eq!(json["total_renewable_twh"], 230.0);
    }
}
