//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::SocialLinkService;

/// Immutable per-process state. Requests share it read-only; nothing in it is
/// mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub social_link_service: Arc<SocialLinkService>,
}

impl AppState {
    pub fn new(social_link_service: Arc<SocialLinkService>) -> Self {
        Self {
            social_link_service,
        }
    }
}
