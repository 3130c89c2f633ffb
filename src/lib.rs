// Library surface for the CLI binary and integration tests.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod errors;
pub mod packet;
pub mod report;
pub mod workout;
