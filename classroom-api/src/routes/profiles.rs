/// Profile endpoints
///
/// # Endpoints
///
/// - `POST /profiles` - Create a batch of profiles with fresh identifiers
/// - `GET /profiles/:id` - Fetch one profile
/// - `PUT /profiles/:id/personalInfo` - Replace the personal info block
/// - `PUT /profiles/:id/address` - Replace the address block
/// - `PUT /profiles/:id/preferences` - Replace the preferences block
///
/// Each update replaces exactly one sub-object and returns the whole profile.
/// An unknown id yields `404 "Profil non trouvé"` and changes nothing.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::{ApiJson, ApiPath},
};
use axum::{extract::State, Json};
use classroom_shared::{
    models::profile::{Address, CreateProfile, PersonalInfo, Preferences, UserProfile},
    store::Mutation,
};
use validator::Validate;

/// Message returned when no profile carries the requested identifier
pub const PROFILE_NOT_FOUND: &str = "Profil non trouvé";

/// Creates profiles, one fresh identifier each
///
/// # Endpoint
///
/// ```text
/// POST /profiles
/// Content-Type: application/json
///
/// [{
///   "personalInfo": { "firstName": "Hery", "lastName": "Rakoto",
///                     "birthdate": "1998-04-12", "email": "hery@example.com" },
///   "address": { "street": "Lot II A 12", "city": "Antananarivo",
///                "country": "Madagascar", "postalCode": "101" },
///   "preferences": { "needsNewsletter": true, "language": "mg" }
/// }]
/// ```
///
/// # Errors
///
/// - `422 Unprocessable Entity`: invalid email or language in any item;
///   nothing is stored in that case
pub async fn create_profiles(
    State(state): State<AppState>,
    ApiJson(payloads): ApiJson<Vec<CreateProfile>>,
) -> ApiResult<Json<Vec<UserProfile>>> {
    let errors: Vec<_> = payloads
        .iter()
        .enumerate()
        .filter_map(|(index, payload)| {
            payload
                .personal_info
                .validate()
                .err()
                .map(|e| ApiError::validation_details(&format!("[{}].personalInfo", index), &e))
        })
        .flatten()
        .collect();

    if !errors.is_empty() {
        return Err(ApiError::ValidationError(errors));
    }

    let profiles = payloads.into_iter().map(UserProfile::create).collect();
    let created = state.profiles.insert_many(profiles).await;
    tracing::info!(count = created.len(), "created profiles");

    Ok(Json(created))
}

/// Fetches one profile
///
/// # Errors
///
/// - `404 Not Found`: "Profil non trouvé"
pub async fn get_profile(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<Json<UserProfile>> {
    state
        .profiles
        .find(&id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(PROFILE_NOT_FOUND.to_string()))
}

/// Replaces the personal info block
///
/// # Errors
///
/// - `404 Not Found`: "Profil non trouvé"
/// - `422 Unprocessable Entity`: invalid email
pub async fn update_personal_info(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(personal_info): ApiJson<PersonalInfo>,
) -> ApiResult<Json<UserProfile>> {
    personal_info.validate().map_err(|e| {
        ApiError::ValidationError(ApiError::validation_details("personalInfo", &e))
    })?;

    replace(&state, id, "personalInfo", Box::new(move |profile: &mut UserProfile| {
        profile.personal_info = personal_info;
    }))
    .await
}

/// Replaces the address block
///
/// # Errors
///
/// - `404 Not Found`: "Profil non trouvé"
pub async fn update_address(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(address): ApiJson<Address>,
) -> ApiResult<Json<UserProfile>> {
    replace(&state, id, "address", Box::new(move |profile: &mut UserProfile| {
        profile.address = address;
    }))
    .await
}

/// Replaces the preferences block
///
/// # Errors
///
/// - `404 Not Found`: "Profil non trouvé"
/// - `422 Unprocessable Entity`: unknown language code
pub async fn update_preferences(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(preferences): ApiJson<Preferences>,
) -> ApiResult<Json<UserProfile>> {
    replace(&state, id, "preferences", Box::new(move |profile: &mut UserProfile| {
        profile.preferences = preferences;
    }))
    .await
}

async fn replace(
    state: &AppState,
    id: String,
    section: &'static str,
    mutation: Mutation<UserProfile>,
) -> ApiResult<Json<UserProfile>> {
    let updated = state
        .profiles
        .modify(&id, mutation)
        .await
        .ok_or_else(|| ApiError::NotFound(PROFILE_NOT_FOUND.to_string()))?;
    tracing::info!(profile_id = %id, section, "updated profile");

    Ok(Json(updated))
}
