use crate::models::category::{Categorical, Category, Complexity, ProtectionLevel, TargetPublic};
use crate::models::institution::InstitutionRecord;
use serde::Serialize;

/// One bar or slice of a categorical chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount<T: Categorical> {
    pub category: T,
    pub name: &'static str,
    pub value: usize,
}

/// Counts over a fixed category set, in `T::ALL` order.
///
/// Empty buckets are kept so charts always receive the full category set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryCounts<T: Categorical> {
    entries: Vec<CategoryCount<T>>,
}

impl<T: Categorical> CategoryCounts<T> {
    fn tally<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a Category<T>>,
    {
        let mut entries: Vec<CategoryCount<T>> = T::ALL
            .iter()
            .map(|&category| CategoryCount {
                category,
                name: category.label(),
                value: 0,
            })
            .collect();

        for value in values {
            if let Some(known) = value.known() {
                if let Some(entry) = entries.iter_mut().find(|e| e.category == known) {
                    entry.value += 1;
                }
            }
        }

        Self { entries }
    }

    pub fn get(&self, category: T) -> usize {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.value)
            .unwrap_or(0)
    }

    pub fn entries(&self) -> &[CategoryCount<T>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum over all buckets; excludes records with unrecognized values
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.value).sum()
    }

    pub fn max_value(&self) -> usize {
        self.entries.iter().map(|e| e.value).max().unwrap_or(0)
    }
}

/// Capacity and institution count accumulated for one district
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistrictCapacity {
    pub district: String,
    pub total_capacity: u64,
    pub institution_count: usize,
}

pub fn by_protection_level(records: &[InstitutionRecord]) -> CategoryCounts<ProtectionLevel> {
    CategoryCounts::tally(records.iter().map(|r| &r.protection_level))
}

pub fn by_complexity(records: &[InstitutionRecord]) -> CategoryCounts<Complexity> {
    CategoryCounts::tally(records.iter().map(|r| &r.complexity))
}

pub fn by_target_public(records: &[InstitutionRecord]) -> CategoryCounts<TargetPublic> {
    CategoryCounts::tally(records.iter().map(|r| &r.target_public))
}

/// Groups capacity by district in first-encounter order.
pub fn capacity_by_district(records: &[InstitutionRecord]) -> Vec<DistrictCapacity> {
    let mut acc: Vec<DistrictCapacity> = Vec::new();

    for record in records {
        match acc.iter_mut().find(|d| d.district == record.district) {
            Some(existing) => {
                existing.total_capacity = existing.total_capacity.saturating_add(record.service_capacity);
                existing.institution_count += 1;
            }
            None => acc.push(DistrictCapacity {
                district: record.district.clone(),
                total_capacity: record.service_capacity,
                institution_count: 1,
            }),
        }
    }

    acc
}
