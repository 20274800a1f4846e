use crate::models::category::{Complexity, ProtectionLevel, TargetPublic};
use crate::models::charts::{
    CategoryCounts, DistrictCapacity, by_complexity, by_protection_level, by_target_public,
    capacity_by_district,
};
use crate::models::dataset::Dataset;
use crate::models::filter::{TableQuery, matching_positions};
use crate::models::institution::InstitutionRecord;
use crate::models::summary::{Summary, compute_summary};
use serde::Serialize;

pub const NO_RESULTS_MESSAGE: &str = "Nenhuma instituição encontrada com os filtros selecionados.";

/// A table row; `position` is the record's index in the loaded dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableRow<'a> {
    pub position: usize,
    pub record: &'a InstitutionRecord,
}

/// Every chart series rendered by the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSet {
    pub protection_level: CategoryCounts<ProtectionLevel>,
    pub complexity: CategoryCounts<Complexity>,
    pub target_public: CategoryCounts<TargetPublic>,
    pub capacity_by_district: Vec<DistrictCapacity>,
}

impl ChartSet {
    pub fn compute(records: &[InstitutionRecord]) -> Self {
        Self {
            protection_level: by_protection_level(records),
            complexity: by_complexity(records),
            target_public: by_target_public(records),
            capacity_by_district: capacity_by_district(records),
        }
    }
}

/// All derived values for one render, computed from a single dataset
/// snapshot and a single query.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView<'a> {
    pub summary: Summary,
    pub charts: ChartSet,
    pub district_options: &'a [String],
    pub query: TableQuery,
    pub rows: Vec<TableRow<'a>>,
}

impl DashboardView<'_> {
    pub fn is_empty_result(&self) -> bool {
        self.rows.is_empty()
    }
}

pub struct Dashboard;

impl Dashboard {
    /// Statistics and charts cover the whole dataset; only the table rows
    /// depend on `query`.
    pub fn compute<'a>(dataset: &'a Dataset, query: &TableQuery) -> DashboardView<'a> {
        let records = dataset.records();

        let rows: Vec<TableRow<'a>> = matching_positions(records, query)
            .into_iter()
            .map(|position| TableRow {
                position,
                record: &records[position],
            })
            .collect();

        let view = DashboardView {
            summary: compute_summary(records),
            charts: ChartSet::compute(records),
            district_options: dataset.districts(),
            query: query.clone(),
            rows,
        };

        log::debug!(
            "Computed dashboard: {} institutions, {} districts, {} rows for {:?}",
            view.summary.total_institutions,
            view.charts.capacity_by_district.len(),
            view.rows.len(),
            query
        );
        view
    }
}
