// Route exports
pub mod matching;
pub mod users;

use crate::core::Matcher;
use crate::services::{CacheManager, MatchStore, SupabaseClient};
use actix_web::web;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub supabase: Arc<SupabaseClient>,
    pub matches: Arc<MatchStore>,
    pub cache: Arc<CacheManager>,
    pub matcher: Matcher,
    pub default_limit: usize,
    pub max_limit: usize,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(matching::health_check))
        .service(
            web::scope("/api")
                .configure(users::configure)
                .configure(matching::configure),
        );
}
