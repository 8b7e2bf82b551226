/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports describe everything the application core needs from the
/// outside world: the Pollination query service, the local bundle store,
/// the model merge, progress reporting and report output.
pub mod outbound;
