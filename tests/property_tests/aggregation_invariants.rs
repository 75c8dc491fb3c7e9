use crate::generators::{disease, disease_metric, table, year_pair};
use measles_rubella_dashboard::domain::{CaseCount, DashboardContext, Metric, RawTable, Year};
use proptest::prelude::*;

fn raw_sum(table: &RawTable, metric: Metric, keep: impl Fn(Year) -> bool) -> CaseCount {
    table
        .records()
        .iter()
        .filter(|record| keep(record.keys.year))
        .filter_map(|record| record.metric(metric))
        .sum()
}

proptest! {
    #[test]
    fn region_view_preserves_total_mass(table in table(), (kind, metric) in disease_metric()) {
        let context = DashboardContext::build(&table).unwrap();
        let mut state = context.new_selection();
        state.set_disease(kind);
        state.set_metric(metric).unwrap();

        let resolved: CaseCount = context
            .resolve_region_view(&state)
            .into_iter()
            .map(|(_, value)| value)
            .sum();

        prop_assert_eq!(resolved, raw_sum(&table, metric, |_| true));
    }

    #[test]
    fn year_view_is_sorted_and_within_range(
        table in table(),
        (kind, metric) in disease_metric(),
        (from, to) in year_pair(),
    ) {
        let context = DashboardContext::build(&table).unwrap();
        let mut state = context.new_selection();
        state.set_disease(kind);
        state.set_metric(metric).unwrap();
        state.set_year_range(from, to);

        let range = state.year_range();
        let bounds = context.year_bounds();
        prop_assert!(range.start() <= range.end());
        prop_assert!(bounds.min() <= range.start() && range.end() <= bounds.max());

        let view = context.resolve_year_view(&state);
        prop_assert!(view.windows(2).all(|pair| pair[0].0 < pair[1].0));
        prop_assert!(view.iter().all(|(year, _)| range.contains(*year)));

        let resolved: CaseCount = view.into_iter().map(|(_, value)| value).sum();
        prop_assert_eq!(resolved, raw_sum(&table, metric, |year| range.contains(year)));
    }

    #[test]
    fn single_year_range_matches_raw_sum(table in table(), (kind, metric) in disease_metric()) {
        let context = DashboardContext::build(&table).unwrap();
        let year = table.records()[0].keys.year;
        let mut state = context.new_selection();
        state.set_disease(kind);
        state.set_metric(metric).unwrap();
        state.set_year_range(*year.as_ref(), *year.as_ref());

        let view = context.resolve_year_view(&state);
        prop_assert!(view.len() <= 1);
        let expected = raw_sum(&table, metric, |y| y == year);
        let resolved = view.first().map(|(_, value)| *value).unwrap_or(CaseCount::zero());
        prop_assert_eq!(resolved, expected);
    }

    #[test]
    fn disease_switch_keeps_metric_in_disease(table in table(), kinds in prop::collection::vec(disease(), 1..10)) {
        let context = DashboardContext::build(&table).unwrap();
        let mut state = context.new_selection();
        for kind in kinds {
            state.set_disease(kind);
            prop_assert_eq!(state.disease(), kind);
            prop_assert!(state.metric().is_some_and(|metric| kind.contains(metric)));
        }
    }
}
