pub mod category;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod filter;
pub mod format;
pub mod institution;
pub mod loader;
pub mod summary;


pub use category::{Categorical, Category, Complexity, ProtectionLevel, TargetPublic};
pub use charts::{
    CategoryCount, CategoryCounts, DistrictCapacity, by_complexity, by_protection_level,
    by_target_public, capacity_by_district,
};
pub use config::{DataSource, LoaderConfig};
pub use dashboard::{ChartSet, Dashboard, DashboardView, NO_RESULTS_MESSAGE, TableRow};
pub use dataset::{Dataset, RejectedRecord};
pub use filter::{
    DistrictFilter, ProtectionFilter, TableQuery, distinct_districts, filter_institutions,
    matching_positions,
};
pub use format::{format_institution_count, format_thousands};
pub use institution::InstitutionRecord;
pub use loader::{DatasetLoader, FileSource, HttpSource, LoadState, SourceStrategy};
pub use summary::{Summary, compute_summary};
