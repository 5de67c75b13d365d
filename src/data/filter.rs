use super::model::StateRenewable;

// ---------------------------------------------------------------------------
// Threshold selection
// ---------------------------------------------------------------------------

/// Return indices of rows at or above `threshold` percent renewable, in
/// their original order.
pub fn above_threshold_indices(records: &[StateRenewable], threshold: f64) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.is_above_renewable_threshold(threshold))
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Display ordering
// ---------------------------------------------------------------------------

/// Column the viewer table is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// File order.
    #[default]
    Input,
    Name,
    PercentRenewable,
    RenewableGen,
    Co2Intensity,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Input,
        SortKey::Name,
        SortKey::PercentRenewable,
        SortKey::RenewableGen,
        SortKey::Co2Intensity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Input => "File order",
            SortKey::Name => "Name",
            SortKey::PercentRenewable => "% renewable",
            SortKey::RenewableGen => "Renewable TWh",
            SortKey::Co2Intensity => "CO2 intensity",
        }
    }
}

/// Order `indices` into `records` by `key`.
///
/// Numeric keys sort descending, names ascending. The sort is stable, so
/// equal keys stay in file order.
pub fn sorted_indices(records: &[StateRenewable], indices: &[usize], key: SortKey) -> Vec<usize> {
    let mut out = indices.to_vec();
    let numeric_desc = move |f: fn(&StateRenewable) -> f64| {
        move |a: &usize, b: &usize| f(&records[*b]).total_cmp(&f(&records[*a]))
    };
    match key {
        SortKey::Input => {}
        SortKey::Name => out.sort_by(|a, b| records[*a].name().cmp(records[*b].name())),
        SortKey::PercentRenewable => out.sort_by(numeric_desc(StateRenewable::percent_renewable)),
        SortKey::RenewableGen => out.sort_by(numeric_desc(StateRenewable::renewable_gen_twh)),
        SortKey::Co2Intensity => out.sort_by(numeric_desc(StateRenewable::co2_per_twh)),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<StateRenewable> {
        vec![
            StateRenewable::new("Texas", 500.0, 20.0, 100.0, 8.0, 400.0),
            StateRenewable::new("California", 280.0, 45.0, 126.0, 10.0, 150.0),
            StateRenewable::new("Ohio", 120.0, 3.0, 4.0, 1.0, 550.0),
            StateRenewable::new("Iowa", 60.0, 45.0, 27.0, 3.0, 300.0),
        ]
    }

    #[test]
    fn indices_keep_file_order() {
        assert_eq!(above_threshold_indices(&rows(), 20.0), vec![0, 1, 3]);
        assert_eq!(above_threshold_indices(&rows(), 50.0), Vec::<usize>::new());
        assert!(above_threshold_indices(&[], 0.0).is_empty());
    }

    #[test]
    fn sorts_only_the_given_indices() {
        let records = rows();
        let visible = above_threshold_indices(&records, 20.0);
        assert_eq!(sorted_indices(&records, &visible, SortKey::Input), vec![0, 1, 3]);
        assert_eq!(sorted_indices(&records, &visible, SortKey::Name), vec![1, 3, 0]);
        assert_eq!(
            sorted_indices(&records, &visible, SortKey::RenewableGen),
            vec![1, 0, 3]
        );
    }

    #[test]
    fn equal_keys_stay_in_file_order() {
        let records = rows();
        let all: Vec<usize> = (0..records.len()).collect();
        assert_eq!(
            sorted_indices(&records, &all, SortKey::PercentRenewable),
            vec![1, 3, 0, 2]
        );
        assert_eq!(
            sorted_indices(&records, &all, SortKey::Co2Intensity),
            vec![2, 0, 3, 1]
        );
    }
}
