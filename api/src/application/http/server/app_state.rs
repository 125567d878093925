use std::sync::Arc;

use brewdex_core::application::BrewdexService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: BrewdexService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: BrewdexService) -> Self {
        Self { args, service }
    }
}
