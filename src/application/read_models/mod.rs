/// Read models - presentation-ready views of a fetched bundle
pub mod credit_view;
pub mod report_view;
pub mod space_table_view;

pub use credit_view::{BreakdownRow, CreditView};
pub use report_view::{ReportView, RunInfoView};
pub use space_table_view::SpaceTableView;
