use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{Profile, ProfileResponse, ProfileUpdate};
use crate::routes::AppState;
use crate::services::{CacheKey, SupabaseError};

/// Configure profile routes under /api
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("/{user_id}", web::get().to(get_profile))
            .route("/{user_id}", web::put().to(update_profile)),
    );
}

/// Fetch profile endpoint
///
/// GET /api/users/{id}
async fn get_profile(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();

    let cache_key = CacheKey::profile(&user_id);
    match state.cache.get::<Profile>(&cache_key).await {
        Ok(Some(profile)) => {
            return HttpResponse::Ok().json(ProfileResponse::ok(profile));
        }
        Ok(None) => {}
        Err(e) => tracing::warn!("Cache read failed for {}: {}", cache_key, e),
    }

    match state.supabase.get_profile(&user_id).await {
        Ok(profile) => {
            if let Err(e) = state.cache.set(&cache_key, &profile).await {
                tracing::warn!("Cache write failed for {}: {}", cache_key, e);
            }
            HttpResponse::Ok().json(ProfileResponse::ok(profile))
        }
        Err(SupabaseError::NotFound(_)) => HttpResponse::NotFound()
            .json(ProfileResponse::err(format!("user {} not found", user_id))),
        Err(e) => {
            tracing::error!("Failed to fetch profile for {}: {}", user_id, e);
            HttpResponse::BadGateway().json(ProfileResponse::err("failed to load profile"))
        }
    }
}

/// Replace profile endpoint
///
/// PUT /api/users/{id}
///
/// Replaces name, bio, both skill lists, and the soft-match attributes
/// wholesale, then returns the stored profile.
async fn update_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<ProfileUpdate>,
) -> impl Responder {
    let user_id = path.into_inner();

    if let Err(errors) = body.validate() {
        tracing::info!("Validation failed for profile update {}: {:?}", user_id, errors);
        return HttpResponse::BadRequest().json(ProfileResponse::err(errors.to_string()));
    }

    if body.has_blank_skill_names() {
        return HttpResponse::BadRequest()
            .json(ProfileResponse::err("every skill needs a non-empty name"));
    }

    let profile = body.into_inner().into_profile(&user_id);

    match state.supabase.upsert_profile(&profile).await {
        Ok(stored) => {
            if let Err(e) = state.cache.invalidate_user(&user_id).await {
                tracing::warn!("Failed to invalidate cache for {}: {}", user_id, e);
            }

            tracing::info!(
                "Updated profile for {} ({} teach / {} learn skills)",
                user_id,
                stored.teach_skills.len(),
                stored.learn_skills.len()
            );

            HttpResponse::Ok().json(ProfileResponse::ok(stored))
        }
        Err(e) => {
            tracing::error!("Failed to save profile for {}: {}", user_id, e);
            HttpResponse::BadGateway().json(ProfileResponse::err("failed to save profile"))
        }
    }
}
