pub mod aggregate;

pub use aggregate::{HppCategory, HppDerivative, HppDerivativeForm, HppNo};
