//! Admissions dataset: record types, CSV loading and synthetic generation

mod loader;
mod record;
mod simulate;

pub use loader::{load_csv, write_csv, REQUIRED_COLUMNS};
pub use record::{AdmissionRecord, Dataset, Gender};
pub use simulate::{simulate, simulate_with, SimulationParams};
