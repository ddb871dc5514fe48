pub mod catalog;
pub mod health;
pub mod interactions;
pub mod payments;
pub mod webhooks;
