//! End-to-end tests of the load → project → aggregate → resolve pipeline

use measles_rubella_dashboard::domain::{
    project, CaseCount, CaseRecord, CountryName, DashboardContext, DiseaseKind,
    InvalidSelectionError, Iso3Code, Metric, Month, RawTable, RecordKeys, RegionName, Year,
};
use measles_rubella_dashboard::infrastructure::load_dataset;
use rstest::{fixture, rstest};

const SAMPLE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/cases_month_sample.csv"
);

#[fixture]
fn sample_table() -> RawTable {
    load_dataset(SAMPLE).unwrap()
}

#[fixture]
fn sample_context(sample_table: RawTable) -> DashboardContext {
    DashboardContext::build(&sample_table).unwrap()
}

fn record(region: &str, year: i32, metric: Metric, value: u64) -> CaseRecord {
    let keys = RecordKeys {
        region: RegionName::try_new(region.to_string()).unwrap(),
        country: CountryName::try_new("Somewhere".to_string()).unwrap(),
        iso3: Iso3Code::try_new("ABC".to_string()).unwrap(),
        year: Year::new(year),
        month: Month::try_new(1).unwrap(),
    };
    CaseRecord::new(keys).with_metric(metric, CaseCount::new(value))
}

fn region(name: &str) -> RegionName {
    RegionName::try_new(name.to_string()).unwrap()
}

#[test]
fn test_example_scenario() {
    let table = RawTable::new(
        Metric::ALL,
        vec![
            record("AFR", 2020, Metric::MeaslesTotal, 10),
            record("AFR", 2021, Metric::MeaslesTotal, 5),
            record("EUR", 2020, Metric::MeaslesTotal, 3),
        ],
    );
    let context = DashboardContext::build(&table).unwrap();
    let mut state = context.new_selection();
    state.set_metric(Metric::MeaslesTotal).unwrap();

    assert_eq!(
        context.resolve_region_view(&state),
        vec![
            (region("AFR"), CaseCount::new(15)),
            (region("EUR"), CaseCount::new(3))
        ]
    );
    assert_eq!(
        context.resolve_year_view(&state),
        vec![
            (Year::new(2020), CaseCount::new(13)),
            (Year::new(2021), CaseCount::new(5))
        ]
    );

    let before = state.clone();
    assert!(matches!(
        state.set_metric(Metric::RubellaTotal),
        Err(InvalidSelectionError::MetricNotInDisease { .. })
    ));
    assert_eq!(state, before);
}

#[rstest]
fn test_sample_dataset_bounds(sample_context: DashboardContext) {
    assert_eq!(sample_context.record_count(), 10);
    assert_eq!(sample_context.year_bounds().min(), Year::new(2012));
    assert_eq!(sample_context.year_bounds().max(), Year::new(2025));
}

#[rstest]
fn test_aggregation_preserves_total_mass(sample_table: RawTable, sample_context: DashboardContext) {
    for kind in DiseaseKind::ALL {
        let view = project(&sample_table, kind).unwrap();
        let mut state = sample_context.new_selection();
        state.set_disease(kind);

        for &metric in kind.metrics() {
            let raw: CaseCount = view.column(metric).unwrap().flatten().sum();
            state.set_metric(metric).unwrap();
            let by_region: CaseCount = sample_context
                .resolve_region_view(&state)
                .into_iter()
                .map(|(_, value)| value)
                .sum();
            let by_year: CaseCount = sample_context
                .resolve_year_view(&state)
                .into_iter()
                .map(|(_, value)| value)
                .sum();

            assert_eq!(by_region, raw, "region mass for {metric}");
            assert_eq!(by_year, raw, "year mass for {metric}");
        }
    }
}

#[rstest]
fn test_missing_values_are_skipped(sample_context: DashboardContext) {
    let mut state = sample_context.new_selection();
    state.set_disease(DiseaseKind::Rubella);
    state.set_metric(Metric::RubellaTotal).unwrap();

    let afr = sample_context
        .resolve_region_view(&state)
        .into_iter()
        .find(|(name, _)| name == &region("AFR"))
        .map(|(_, value)| value);
    assert_eq!(afr, Some(CaseCount::new(11)));
}

#[rstest]
#[case(2019, 2019, vec![(2019, 633)])]
#[case(2018, 2020, vec![(2018, 140), (2019, 633), (2020, 12)])]
#[case(1990, 2013, vec![(2012, 100), (2013, 15)])]
#[case(2030, 2024, vec![(2025, 50)])]
fn test_year_range_filtering(
    sample_context: DashboardContext,
    #[case] from: i32,
    #[case] to: i32,
    #[case] expected: Vec<(i32, u64)>,
) {
    let mut state = sample_context.new_selection();
    state.set_metric(Metric::MeaslesTotal).unwrap();
    state.set_year_range(from, to);

    let expected: Vec<_> = expected
        .into_iter()
        .map(|(year, value)| (Year::new(year), CaseCount::new(value)))
        .collect();
    assert_eq!(sample_context.resolve_year_view(&state), expected);
}

#[rstest]
fn test_disease_switch_round_trip_keeps_metric_valid(sample_context: DashboardContext) {
    let mut state = sample_context.new_selection();

    state.set_disease(DiseaseKind::Rubella);
    assert!(DiseaseKind::Rubella.contains(state.metric().unwrap()));

    state.set_disease(DiseaseKind::Measles);
    assert_eq!(state.metric(), Some(Metric::MeaslesSuspect));

    let view = sample_context.snapshot(&state);
    assert_eq!(view.title, "Measles cases analysis");
    assert_eq!(view.explanations.len(), 5);
}
