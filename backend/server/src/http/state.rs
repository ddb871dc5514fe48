use std::sync::Arc;

use crate::{configs::Config, server::payments::Payments};

#[derive(Clone)]
pub struct AppState {
    pub payments_service: Payments,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            payments_service: Payments::new(config),
        }
    }
}
