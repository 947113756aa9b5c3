pub mod a001_payment;
pub mod a002_employee_loan;
pub mod a003_hpp_derivative;
pub mod a004_training_request;
pub mod a005_purchase_request;
