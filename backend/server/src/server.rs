pub mod demo;
pub mod payments;
