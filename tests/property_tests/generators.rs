//! Generators for random case tables and selections

use measles_rubella_dashboard::domain::{
    CaseCount, CaseRecord, CountryName, DiseaseKind, Iso3Code, Metric, Month, RawTable,
    RecordKeys, RegionName, Year,
};
use proptest::collection::vec;
use proptest::prelude::*;

pub const REGIONS: [&str; 6] = ["AFR", "AMR", "EMR", "EUR", "SEAR", "WPR"];
pub const FIRST_YEAR: i32 = 2012;
pub const LAST_YEAR: i32 = 2025;

pub fn disease() -> impl Strategy<Value = DiseaseKind> {
    prop::sample::select(DiseaseKind::ALL.to_vec())
}

/// A metric together with the disease it belongs to
pub fn disease_metric() -> impl Strategy<Value = (DiseaseKind, Metric)> {
    disease().prop_flat_map(|kind| (Just(kind), prop::sample::select(kind.metrics().to_vec())))
}

/// One row with every metric either present or missing
pub fn record() -> impl Strategy<Value = CaseRecord> {
    (
        prop::sample::select(REGIONS.to_vec()),
        FIRST_YEAR..=LAST_YEAR,
        1u8..=12,
        vec(prop::option::of(0u64..10_000), Metric::ALL.len()),
    )
        .prop_map(|(region, year, month, values)| {
            let keys = RecordKeys {
                region: RegionName::try_new(region.to_string()).unwrap(),
                country: CountryName::try_new(format!("{region} country")).unwrap(),
                iso3: Iso3Code::try_new(region[..3].to_string()).unwrap(),
                year: Year::new(year),
                month: Month::try_new(month).unwrap(),
            };
            Metric::ALL
                .into_iter()
                .zip(values)
                .fold(CaseRecord::new(keys), |record, (metric, value)| match value {
                    Some(value) => record.with_metric(metric, CaseCount::new(value)),
                    None => record,
                })
        })
}

/// A non-empty table carrying every metric column
pub fn table() -> impl Strategy<Value = RawTable> {
    vec(record(), 1..80).prop_map(|records| RawTable::new(Metric::ALL, records))
}

/// Arbitrary year pair, possibly reversed or outside the data
pub fn year_pair() -> impl Strategy<Value = (i32, i32)> {
    (FIRST_YEAR - 10..=LAST_YEAR + 10, FIRST_YEAR - 10..=LAST_YEAR + 10)
}
