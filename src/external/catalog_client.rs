// ABOUTME: Remote recipe catalog client for recipe details, listings and videos
// ABOUTME: Generic JSON GET with API key injection, status checks and wire-to-domain conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe Catalog API Client
//!
//! Client for a Spoonacular-compatible recipe catalog. Every request is a
//! `GET` carrying the `apiKey` query parameter; responses are decoded into
//! private wire structs and converted into the `recipe-core` models.
//!
//! # Example
//! ```rust,no_run
//! use recipe_session::config::CatalogApiConfig;
//! use recipe_session::external::{RecipeCatalog, SpoonacularClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CatalogApiConfig {
//!     api_key: Some("your_api_key".to_owned()),
//!     ..CatalogApiConfig::default()
//! };
//!
//! let client = SpoonacularClient::new(&config)?;
//! let recipe = client.recipe_information(716_429).await?;
//! println!("{} has {} steps", recipe.title, recipe.first_group_steps().len());
//! # Ok(())
//! # }
//! ```

use crate::config::CatalogApiConfig;
use crate::constants::catalog::{endpoints, API_KEY_PARAM};
use crate::errors::{ApiError, AppResult};
use crate::http_client::shared_client;
use crate::models::{
    Ingredient, InstructionGroup, Nutrient, Nutrition, RecipeDetail, RecipeSummary, Step,
    VideoRef,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

/// Which listing to ask the catalog for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFilter {
    /// No filter: whatever the catalog ranks first
    Trending,
    /// Free-text name search
    Name(String),
    /// Cuisine listing, e.g. "Italian"
    Cuisine(String),
    /// Name search restricted to one cuisine
    NameInCuisine {
        /// Free-text name
        name: String,
        /// Cuisine the results must belong to
        cuisine: String,
    },
}

/// Listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Filter to apply
    pub filter: SearchFilter,
    /// Number of results requested
    pub number: u32,
}

impl SearchQuery {
    /// Query parameters for the complex search endpoint
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("number", self.number.to_string()),
            ("addRecipeInformation", "true".to_owned()),
        ];
        match &self.filter {
            SearchFilter::Trending => {}
            SearchFilter::Name(name) => params.push(("query", name.clone())),
            SearchFilter::Cuisine(cuisine) => params.push(("cuisine", cuisine.clone())),
            SearchFilter::NameInCuisine { name, cuisine } => {
                params.push(("query", name.clone()));
                params.push(("cuisine", cuisine.clone()));
            }
        }
        params
    }
}

/// Remote recipe catalog.
///
/// The seam the orchestrator and browser depend on; the HTTP implementation
/// is `SpoonacularClient`, tests provide scripted doubles.
#[async_trait]
pub trait RecipeCatalog: Send + Sync {
    /// Full recipe information including nutrition
    async fn recipe_information(&self, id: u64) -> Result<RecipeDetail, ApiError>;

    /// Search or list recipes
    async fn search_recipes(&self, query: &SearchQuery) -> Result<Vec<RecipeSummary>, ApiError>;

    /// Several recipes by id in one call
    async fn recipes_by_ids(&self, ids: &[u64]) -> Result<Vec<RecipeDetail>, ApiError>;

    /// Videos matching a free-text query (zero results is not an error)
    async fn search_videos(&self, query: &str, number: u32) -> Result<Vec<VideoRef>, ApiError>;
}

/// HTTP client for a Spoonacular-compatible catalog
pub struct SpoonacularClient {
    api_key: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl SpoonacularClient {
    /// Create a client using the shared connection pool
    ///
    /// # Errors
    ///
    /// Returns a config error when no API key is configured
    pub fn new(config: &CatalogApiConfig) -> AppResult<Self> {
        Ok(Self::with_http_client(
            config,
            config.require_api_key()?,
            shared_client().clone(),
        ))
    }

    /// Create a client with an explicit key and HTTP client
    #[must_use]
    pub fn with_http_client(
        config: &CatalogApiConfig,
        api_key: &str,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            api_key: api_key.to_owned(),
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            http_client,
        }
    }

    /// Build the full request URL, API key included
    fn endpoint_url(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&format!("{}{endpoint}", self.base_url))
            .map_err(|e| ApiError::bad_endpoint(endpoint, e.to_string()))?;

        if url.cannot_be_a_base() {
            return Err(ApiError::bad_endpoint(endpoint, "base URL cannot carry a path"));
        }

        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())))
            .append_pair(API_KEY_PARAM, &self.api_key);
        Ok(url)
    }

    /// Issue a GET and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint_url(endpoint, params)?;
        debug!(endpoint, "Catalog request");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(endpoint, status = status.as_u16(), "Catalog returned error status");
            return Err(ApiError::status(status.as_u16(), body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::transport(e.without_url().to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(endpoint, error = %e, "Catalog payload did not decode");
            ApiError::decode(e.to_string())
        })
    }
}

#[async_trait]
impl RecipeCatalog for SpoonacularClient {
    async fn recipe_information(&self, id: u64) -> Result<RecipeDetail, ApiError> {
        let response: RecipeInformationResponse = self
            .get_json(
                &endpoints::recipe_information(id),
                &[("includeNutrition", "true".to_owned())],
            )
            .await?;
        Ok(response.into())
    }

    async fn search_recipes(&self, query: &SearchQuery) -> Result<Vec<RecipeSummary>, ApiError> {
        let response: SearchResponse = self
            .get_json(endpoints::COMPLEX_SEARCH, &query.params())
            .await?;
        Ok(response.results.into_iter().map(Into::into).collect())
    }

    async fn recipes_by_ids(&self, ids: &[u64]) -> Result<Vec<RecipeDetail>, ApiError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let joined = ids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let response: Vec<RecipeInformationResponse> = self
            .get_json(endpoints::INFORMATION_BULK, &[("ids", joined)])
            .await?;
        Ok(response.into_iter().map(Into::into).collect())
    }

    async fn search_videos(&self, query: &str, number: u32) -> Result<Vec<VideoRef>, ApiError> {
        let response: VideoSearchResponse = self
            .get_json(
                endpoints::VIDEO_SEARCH,
                &[("query", query.to_owned()), ("number", number.to_string())],
            )
            .await?;
        Ok(response.videos.into_iter().map(Into::into).collect())
    }
}

/// Catalog recipe information response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeInformationResponse {
    id: u64,
    title: String,
    #[serde(default)]
    image: Option<String>,
    ready_in_minutes: u32,
    servings: u32,
    #[serde(default)]
    extended_ingredients: Vec<IngredientResponse>,
    #[serde(default)]
    analyzed_instructions: Vec<AnalyzedInstructionResponse>,
    #[serde(default)]
    nutrition: Option<NutritionResponse>,
}

#[derive(Debug, Deserialize)]
struct IngredientResponse {
    #[serde(default)]
    id: Option<u64>,
    original: String,
}

#[derive(Debug, Deserialize)]
struct AnalyzedInstructionResponse {
    #[serde(default)]
    name: String,
    #[serde(default)]
    steps: Vec<StepResponse>,
}

#[derive(Debug, Deserialize)]
struct StepResponse {
    number: u32,
    step: String,
}

#[derive(Debug, Deserialize)]
struct NutritionResponse {
    #[serde(default)]
    nutrients: Vec<NutrientResponse>,
}

#[derive(Debug, Deserialize)]
struct NutrientResponse {
    name: String,
    amount: f64,
    unit: String,
}

/// Complex search response; pagination fields are not exposed
#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SummaryResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryResponse {
    id: u64,
    title: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    ready_in_minutes: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct VideoSearchResponse {
    #[serde(default)]
    videos: Vec<VideoResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoResponse {
    title: String,
    you_tube_id: String,
}

impl From<RecipeInformationResponse> for RecipeDetail {
    fn from(response: RecipeInformationResponse) -> Self {
        Self {
            id: response.id,
            title: response.title,
            image_url: response.image.unwrap_or_default(),
            ready_minutes: response.ready_in_minutes,
            servings: response.servings,
            ingredients: response
                .extended_ingredients
                .into_iter()
                .map(|i| Ingredient {
                    id: i.id.unwrap_or_default(),
                    original: i.original,
                })
                .collect(),
            instruction_groups: response
                .analyzed_instructions
                .into_iter()
                .map(|group| InstructionGroup {
                    name: group.name,
                    steps: group
                        .steps
                        .into_iter()
                        .map(|s| Step::new(s.number, s.step))
                        .collect(),
                })
                .collect(),
            nutrition: response.nutrition.map(|n| Nutrition {
                nutrients: n
                    .nutrients
                    .into_iter()
                    .map(|r| Nutrient {
                        name: r.name,
                        amount: r.amount,
                        unit: r.unit,
                    })
                    .collect(),
            }),
        }
    }
}

impl From<SummaryResponse> for RecipeSummary {
    fn from(response: SummaryResponse) -> Self {
        Self::new(
            response.id,
            response.title,
            response.image.unwrap_or_default(),
            response.ready_in_minutes,
        )
    }
}

impl From<VideoResponse> for VideoRef {
    fn from(response: VideoResponse) -> Self {
        Self {
            title: response.title,
            external_id: response.you_tube_id,
        }
    }
}
