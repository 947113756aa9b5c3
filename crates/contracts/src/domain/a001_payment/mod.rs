pub mod aggregate;

pub use aggregate::{Payment, PaymentForm, PaymentNo, PaymentStatus};
