use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    CreateMatchRequest, CreateMatchResponse, FindMatchesQuery, FindMatchesResponse,
    HealthResponse, MatchWithUsers, UserMatchesResponse, UserSummary,
};
use crate::routes::AppState;
use crate::services::{CacheKey, MatchStoreError, SupabaseError};

/// Configure matching routes under /api
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/matching")
            .route("/find/{user_id}", web::get().to(find_matches))
            .route("/user/{user_id}", web::get().to(user_matches))
            .route("/create", web::post().to(create_match)),
    );
}

/// Health check endpoint
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.matches.health_check().await.unwrap_or(false);

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// GET /api/matching/find/{userId}?limit=N
///
/// Ranks every other profile against the requesting user and returns the
/// top `limit` (default 20, capped at the configured maximum).
async fn find_matches(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<FindMatchesQuery>,
) -> impl Responder {
    let user_id = path.into_inner();

    let limit = match query.limit {
        None => state.default_limit,
        Some(n) if n <= 0 => {
            tracing::info!("Rejected find_matches for {}: limit={}", user_id, n);
            return HttpResponse::BadRequest()
                .json(FindMatchesResponse::err("limit must be a positive integer"));
        }
        Some(n) => (n as usize).min(state.max_limit),
    };

    tracing::info!("Finding matches for user: {}, limit: {}", user_id, limit);

    // Note: finder reads bypass the profile cache so fresh skill edits are
    // reflected immediately in scoring
    let profile = match state.supabase.get_profile(&user_id).await {
        Ok(profile) => profile,
        Err(SupabaseError::NotFound(_)) => {
            return HttpResponse::NotFound()
                .json(FindMatchesResponse::err(format!("user {} not found", user_id)));
        }
        Err(e) => {
            tracing::error!("Failed to fetch profile for {}: {}", user_id, e);
            return HttpResponse::BadGateway()
                .json(FindMatchesResponse::err("failed to load user profile"));
        }
    };

    let candidates = match state.supabase.list_candidates(&user_id).await {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::error!("Failed to list candidates for {}: {}", user_id, e);
            return HttpResponse::BadGateway()
                .json(FindMatchesResponse::err("failed to load candidate pool"));
        }
    };

    tracing::debug!("Scoring {} candidates for {}", candidates.len(), user_id);

    let result = state.matcher.rank_candidates(&profile, candidates, limit);

    tracing::info!(
        "Returning {} matches for user {} (from {} candidates)",
        result.matches.len(),
        user_id,
        result.total_candidates
    );

    HttpResponse::Ok().json(FindMatchesResponse::ok(result.matches))
}

/// Existing matches endpoint
///
/// GET /api/matching/user/{userId}
///
/// Returns the user's persisted matches, newest first, each hydrated with
/// both participants' profile summaries.
async fn user_matches(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();

    let cache_key = CacheKey::user_matches(&user_id);
    match state.cache.get::<Vec<MatchWithUsers>>(&cache_key).await {
        Ok(Some(cached)) => {
            return HttpResponse::Ok().json(UserMatchesResponse::ok(cached));
        }
        Ok(None) => {}
        Err(e) => tracing::warn!("Cache read failed for {}: {}", cache_key, e),
    }

    let records = match state.matches.matches_for_user(&user_id).await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Failed to load matches for {}: {}", user_id, e);
            return HttpResponse::BadGateway()
                .json(UserMatchesResponse::err("failed to load matches"));
        }
    };

    let mut matches = Vec::with_capacity(records.len());
    for record in records {
        let user_a = match state.supabase.get_profile(&record.user_a_id).await {
            Ok(profile) => UserSummary::from(&profile),
            Err(SupabaseError::NotFound(_)) => {
                // Participant account deleted since the match was created
                tracing::warn!("Match {} references missing user {}", record.id, record.user_a_id);
                continue;
            }
            Err(e) => {
                tracing::error!("Failed to hydrate match {}: {}", record.id, e);
                return HttpResponse::BadGateway()
                    .json(UserMatchesResponse::err("failed to load match participants"));
            }
        };
        let user_b = match state.supabase.get_profile(&record.user_b_id).await {
            Ok(profile) => UserSummary::from(&profile),
            Err(SupabaseError::NotFound(_)) => {
                tracing::warn!("Match {} references missing user {}", record.id, record.user_b_id);
                continue;
            }
            Err(e) => {
                tracing::error!("Failed to hydrate match {}: {}", record.id, e);
                return HttpResponse::BadGateway()
                    .json(UserMatchesResponse::err("failed to load match participants"));
            }
        };

        matches.push(MatchWithUsers { record, user_a, user_b });
    }

    if let Err(e) = state.cache.set(&cache_key, &matches).await {
        tracing::warn!("Cache write failed for {}: {}", cache_key, e);
    }

    HttpResponse::Ok().json(UserMatchesResponse::ok(matches))
}

/// Create match endpoint
///
/// POST /api/matching/create
///
/// Request body:
/// ```json
/// {
///   "userAId": "string",
///   "userBId": "string",
///   "score": 0.8,
///   "mutualSkills": [{"skill": "react", "direction": "a_to_b"}]
/// }
/// ```
async fn create_match(
    state: web::Data<AppState>,
    req: web::Json<CreateMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_match request: {:?}", errors);
        return HttpResponse::BadRequest().json(CreateMatchResponse::err(errors.to_string()));
    }

    if req.user_a_id == req.user_b_id {
        return HttpResponse::BadRequest()
            .json(CreateMatchResponse::err("cannot match a user with themselves"));
    }

    // Both participants must exist before anything is written
    for user_id in [&req.user_a_id, &req.user_b_id] {
        match state.supabase.get_profile(user_id).await {
            Ok(_) => {}
            Err(SupabaseError::NotFound(_)) => {
                return HttpResponse::NotFound()
                    .json(CreateMatchResponse::err(format!("user {} not found", user_id)));
            }
            Err(e) => {
                tracing::error!("Failed to verify user {}: {}", user_id, e);
                return HttpResponse::BadGateway()
                    .json(CreateMatchResponse::err("failed to verify users"));
            }
        }
    }

    // Friendly-path duplicate check; the pair unique index catches races
    match state.matches.find_by_pair(&req.user_a_id, &req.user_b_id).await {
        Ok(Some(_)) => {
            return HttpResponse::Conflict()
                .json(CreateMatchResponse::err("a match already exists for these users"));
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Duplicate check failed: {}", e);
            return HttpResponse::BadGateway()
                .json(CreateMatchResponse::err("failed to check existing matches"));
        }
    }

    match state
        .matches
        .create_match(&req.user_a_id, &req.user_b_id, req.score, &req.mutual_skills)
        .await
    {
        Ok(record) => {
            tracing::info!(
                "Created match {}: {} <-> {} (score {:.2})",
                record.id,
                record.user_a_id,
                record.user_b_id,
                record.score
            );

            for user_id in [&record.user_a_id, &record.user_b_id] {
                if let Err(e) = state.cache.invalidate_user(user_id).await {
                    tracing::warn!("Failed to invalidate cache for {}: {}", user_id, e);
                }
            }

            HttpResponse::Ok().json(CreateMatchResponse::ok())
        }
        Err(MatchStoreError::Conflict(_)) => HttpResponse::Conflict()
            .json(CreateMatchResponse::err("a match already exists for these users")),
        Err(MatchStoreError::InvalidInput(message)) => {
            HttpResponse::BadRequest().json(CreateMatchResponse::err(message))
        }
        Err(e) => {
            tracing::error!("Failed to create match: {}", e);
            HttpResponse::BadGateway().json(CreateMatchResponse::err("failed to create match"))
        }
    }
}
