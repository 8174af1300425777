use std::sync::Arc;

use campdir_core::application::CampdirService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: CampdirService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CampdirService) -> Self {
        Self { args, service }
    }
}
