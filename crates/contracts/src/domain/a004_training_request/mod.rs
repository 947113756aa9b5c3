pub mod aggregate;

pub use aggregate::{TrainingRequest, TrainingRequestForm, TrainingRequestId, TrainingStatus};
