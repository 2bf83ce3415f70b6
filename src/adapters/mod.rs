// Adapters layer: concrete implementations of the domain ports for external
// systems (contact file, SMS provider, wall clock).

pub mod clock;
pub mod csv_source;
pub mod twilio;
