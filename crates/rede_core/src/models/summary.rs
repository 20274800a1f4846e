use crate::models::category::ProtectionLevel;
use crate::models::institution::InstitutionRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Headline figures for the executive summary cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_institutions: usize,
    pub total_capacity: u64,
    pub special_protection_count: usize,
    pub basic_protection_count: usize,
    pub district_count: usize,
}

impl Summary {
    /// Records whose protection level fell into neither known bucket
    pub fn unclassified_protection_count(&self) -> usize {
        self.total_institutions
            .saturating_sub(self.special_protection_count + self.basic_protection_count)
    }
}

pub fn compute_summary(records: &[InstitutionRecord]) -> Summary {
    let mut summary = Summary {
        total_institutions: records.len(),
        ..Summary::default()
    };
    let mut districts: HashSet<&str> = HashSet::new();

    for record in records {
        summary.total_capacity = summary.total_capacity.saturating_add(record.service_capacity);
        match record.protection_level.known() {
            Some(ProtectionLevel::Special) => summary.special_protection_count += 1,
            Some(ProtectionLevel::Basic) => summary.basic_protection_count += 1,
            None => {}
        }
        districts.insert(record.district.as_str());
    }

    summary.district_count = districts.len();
    summary
}
