pub mod aggregate;

pub use aggregate::{
    PurchaseRequest, PurchaseRequestForm, PurchaseRequestId, PurchaseRequestStatus,
};
