use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::domain::preferences::{CATEGORY_OPTIONS, GENDER_OPTIONS, SIZE_OPTIONS};
use crate::domain::{Decimal, PreferenceSet};
use crate::engine::SessionStatus;
use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesDto {
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub genders: Vec<String>,
    /// Decimal string; absent means no ceiling.
    #[serde(default)]
    pub max_price: Option<String>,
}

impl From<&PreferenceSet> for PreferencesDto {
    fn from(p: &PreferenceSet) -> Self {
        Self {
            sizes: p.sizes.clone(),
            categories: p.categories.clone(),
            genders: p.genders.clone(),
            max_price: p.max_price.map(|d| d.to_canonical_string()),
        }
    }
}

impl TryFrom<PreferencesDto> for PreferenceSet {
    type Error = AppError;

    fn try_from(dto: PreferencesDto) -> Result<Self, Self::Error> {
        let max_price = match dto.max_price {
            None => None,
            Some(raw) => {
                let price = Decimal::from_str_canonical(&raw)
                    .map_err(|_| AppError::BadRequest(format!("Invalid maxPrice: {}", raw)))?;
                if price.is_negative() {
                    return Err(AppError::BadRequest(
                        "maxPrice must not be negative".to_string(),
                    ));
                }
                Some(price)
            }
        };
        Ok(PreferenceSet::unconstrained()
            .with_sizes(&dto.sizes)
            .with_categories(&dto.categories)
            .with_genders(&dto.genders)
            .with_max_price(max_price))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsDto {
    pub sizes: Vec<&'static str>,
    pub categories: Vec<&'static str>,
    pub genders: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesResponse {
    pub preferences: PreferencesDto,
    pub options: OptionsDto,
    pub status: SessionStatus,
}

fn response(prefs: &PreferenceSet, status: SessionStatus) -> PreferencesResponse {
    PreferencesResponse {
        preferences: PreferencesDto::from(prefs),
        options: OptionsDto {
            sizes: SIZE_OPTIONS.to_vec(),
            categories: CATEGORY_OPTIONS.to_vec(),
            genders: GENDER_OPTIONS.to_vec(),
        },
        status,
    }
}

pub async fn get_preferences(State(state): State<AppState>) -> Json<PreferencesResponse> {
    let shop = state.storefront.lock().await;
    Json(response(shop.preferences(), shop.status()))
}

/// Replace the stored preferences and re-deal the deck from the top.
pub async fn put_preferences(
    State(state): State<AppState>,
    Json(body): Json<PreferencesDto>,
) -> Result<Json<PreferencesResponse>, AppError> {
    let prefs = PreferenceSet::try_from(body)?;
    let mut shop = state.storefront.lock().await;
    let status = shop.save_preferences(prefs).await?;
    Ok(Json(response(shop.preferences(), status)))
}
