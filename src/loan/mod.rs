//! Loan parameters and parameter loading

mod data;
pub mod loader;

pub use data::{LoanParameters, RepaymentType, MAX_TERM_YEARS};
pub use loader::{load_parameters_csv, load_parameters_from_reader, load_parameters_json};
