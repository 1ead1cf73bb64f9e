use std::sync::Arc;

use crate::application::Logger;

#[derive(Clone)]
pub struct AppState {
    pub logger: Arc<Logger>,
}

impl AppState {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }
}
