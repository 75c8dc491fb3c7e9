//! Newtypes for the shared key columns and case counts
//!
//! These wrap the raw CSV values so that validation happens once at the
//! loader boundary and the rest of the pipeline works with typed values.

use nutype::nutype;
#[allow(unused_imports)] // These are used by nutype derive macros
use serde::{Deserialize, Serialize};

/// WHO region code, e.g. "AFR" or "EUR"
///
/// Limited to 64 characters; region codes in the source data are short
/// abbreviations.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 64),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct RegionName(String);

/// Country or territory name as reported in the source data
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 200),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct CountryName(String);

/// ISO 3166-1 alpha-3 country code
#[nutype(
    sanitize(trim, uppercase),
    validate(predicate = |code: &str| code.len() == 3 && code.chars().all(|c| c.is_ascii_alphanumeric())),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct Iso3Code(String);

/// Calendar year of a report
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRef,
    Display,
    From
))]
pub struct Year(i32);

/// Calendar month of a report (1-12)
#[nutype(
    validate(greater_or_equal = 1, less_or_equal = 12),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct Month(u8);

/// Non-negative number of reported cases
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRef,
    Display,
    From
))]
pub struct CaseCount(u64);

impl CaseCount {
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Adds two counts, saturating at `u64::MAX`
    pub fn saturating_add(self, other: CaseCount) -> Self {
        Self::new(self.into_inner().saturating_add(other.into_inner()))
    }
}

impl std::iter::Sum for CaseCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(CaseCount::zero(), CaseCount::saturating_add)
    }
}
