use crate::errors::QueryError;
use crate::models::category::{Categorical, ProtectionLevel};
use crate::models::institution::InstitutionRecord;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

const ALL: &str = "all";

/// Protection level dropdown state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ProtectionFilter {
    #[default]
    All,
    Only(ProtectionLevel),
}

impl ProtectionFilter {
    pub fn accepts(&self, record: &InstitutionRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(level) => record.protection_level.is(*level),
        }
    }
}

impl FromStr for ProtectionFilter {
    type Err = QueryError;

    /// Accepts `all`, the dataset label, the variant name, or the short keys
    /// `basica` / `especial`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(ALL) {
            return Ok(Self::All);
        }
        if let Some(level) = ProtectionLevel::from_label(s) {
            return Ok(Self::Only(level));
        }

        match s.to_lowercase().as_str() {
            "basic" | "basica" | "básica" => Ok(Self::Only(ProtectionLevel::Basic)),
            "special" | "especial" => Ok(Self::Only(ProtectionLevel::Special)),
            _ => Err(QueryError::UnknownProtectionLevel(s.to_string())),
        }
    }
}

impl fmt::Display for ProtectionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "{}", ALL),
            Self::Only(level) => write!(f, "{}", level.label()),
        }
    }
}

/// District dropdown state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum DistrictFilter {
    #[default]
    All,
    Only(String),
}

impl DistrictFilter {
    pub fn accepts(&self, record: &InstitutionRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(district) => record.district == *district,
        }
    }
}

impl FromStr for DistrictFilter {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(ALL) {
            Ok(Self::All)
        } else {
            Ok(Self::Only(s.to_string()))
        }
    }
}

impl fmt::Display for DistrictFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "{}", ALL),
            Self::Only(district) => write!(f, "{}", district),
        }
    }
}

/// Search and filter state owned by the presentation shell
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableQuery {
    pub search_text: String,
    pub protection_level: ProtectionFilter,
    pub district: DistrictFilter,
}

impl TableQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search<S: Into<String>>(mut self, search_text: S) -> Self {
        self.search_text = search_text.into();
        self
    }

    pub fn with_protection_level(mut self, filter: ProtectionFilter) -> Self {
        self.protection_level = filter;
        self
    }

    pub fn with_district(mut self, filter: DistrictFilter) -> Self {
        self.district = filter;
        self
    }

    pub fn is_identity(&self) -> bool {
        self.search_text.is_empty()
            && self.protection_level == ProtectionFilter::All
            && self.district == DistrictFilter::All
    }
}

/// Positions (in the loaded sequence) of the records passing `query`
pub fn matching_positions(records: &[InstitutionRecord], query: &TableQuery) -> Vec<usize> {
    let needle = query.search_text.to_lowercase();

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            record.matches_search(&needle)
                && query.protection_level.accepts(record)
                && query.district.accepts(record)
        })
        .map(|(position, _)| position)
        .collect()
}

/// Stable filter: the result keeps the relative order of `records`.
pub fn filter_institutions<'a>(
    records: &'a [InstitutionRecord],
    query: &TableQuery,
) -> Vec<&'a InstitutionRecord> {
    matching_positions(records, query)
        .into_iter()
        .map(|position| &records[position])
        .collect()
}

/// Distinct district names, ascending, for the district dropdown
pub fn distinct_districts(records: &[InstitutionRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.district.as_str())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
