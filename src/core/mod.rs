pub mod spark;

pub use spark::*;
