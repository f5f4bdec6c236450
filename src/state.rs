use std::sync::Arc;

use crate::application::services::BreedService;
use crate::infrastructure::upstream::HttpBreedRepository;

#[derive(Clone)]
pub struct AppState {
    pub breed_service: Arc<BreedService<HttpBreedRepository>>,
}

impl AppState {
    pub fn new(breed_service: Arc<BreedService<HttpBreedRepository>>) -> Self {
        Self { breed_service }
    }
}
