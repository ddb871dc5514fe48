pub mod catalog;
pub mod payments;
pub mod webhooks;

pub use payments::*;
