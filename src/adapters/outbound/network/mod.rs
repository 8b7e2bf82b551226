/// Network adapters - Pollination API client
pub mod pollination_client;

pub use pollination_client::PollinationRunService;
