/// Report generation - Core domain logic
///
/// Pure business logic for LEED Option II result bundles: run references,
/// recipe compatibility rules, bundle layout, summaries and the display
/// configuration for the merged visualization. No I/O happens here.
pub mod domain;
pub mod policies;
pub mod services;
