pub mod aggregate;

pub use aggregate::{EmployeeLoan, EmployeeLoanForm, EmployeeLoanId, LoanStatus};
