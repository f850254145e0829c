// List algorithm routes. Authentication already happened in the middleware;
// each handler validates its payload against a `ListPolicy` and runs one algorithm.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::algorithms::{self, ListPolicy, Median, SearchResult};
use crate::api::ValidJson;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct NumbersPayload {
    pub numbers: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SearchPayload {
    pub numbers: Vec<i64>,
    pub target: i64,
}

#[derive(Debug, Serialize)]
pub struct SortedResponse {
    pub sorted_numbers: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct EvenResponse {
    pub even_numbers: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct SumResponse {
    pub sum: i64,
}

#[derive(Debug, Serialize)]
pub struct MaxResponse {
    pub max_value: i64,
}

#[derive(Debug, Serialize)]
pub struct MinResponse {
    pub min_value: i64,
}

#[derive(Debug, Serialize)]
pub struct AverageResponse {
    pub average: f64,
}

#[derive(Debug, Serialize)]
pub struct MedianResponse {
    pub median: Median,
}

/// POST /bubble_sort
pub async fn bubble_sort(ValidJson(payload): ValidJson<NumbersPayload>) -> Result<Json<SortedResponse>, ApiError> {
    ListPolicy::sorting().check(&payload.numbers)?;
    Ok(Json(SortedResponse {
        sorted_numbers: algorithms::bubble_sort(&payload.numbers),
    }))
}

/// POST /binary_search
pub async fn binary_search(ValidJson(payload): ValidJson<SearchPayload>) -> Result<Json<SearchResult>, ApiError> {
    ListPolicy::searching().check(&payload.numbers)?;
    Ok(Json(algorithms::binary_search(&payload.numbers, payload.target)))
}

/// POST /filter_even
pub async fn filter_even(ValidJson(payload): ValidJson<NumbersPayload>) -> Result<Json<EvenResponse>, ApiError> {
    ListPolicy::aggregate().check(&payload.numbers)?;
    Ok(Json(EvenResponse {
        even_numbers: algorithms::filter_even(&payload.numbers),
    }))
}

/// POST /sum_elements
pub async fn sum_elements(ValidJson(payload): ValidJson<NumbersPayload>) -> Result<Json<SumResponse>, ApiError> {
    ListPolicy::aggregate().check(&payload.numbers)?;
    Ok(Json(SumResponse {
        sum: algorithms::sum(&payload.numbers)?,
    }))
}

/// POST /max_value
pub async fn max_value(ValidJson(payload): ValidJson<NumbersPayload>) -> Result<Json<MaxResponse>, ApiError> {
    ListPolicy::aggregate().check(&payload.numbers)?;
    Ok(Json(MaxResponse {
        max_value: algorithms::max_value(&payload.numbers)?,
    }))
}

/// POST /min_value
pub async fn min_value(ValidJson(payload): ValidJson<NumbersPayload>) -> Result<Json<MinResponse>, ApiError> {
    ListPolicy::aggregate().check(&payload.numbers)?;
    Ok(Json(MinResponse {
        min_value: algorithms::min_value(&payload.numbers)?,
    }))
}

/// POST /average
pub async fn average(ValidJson(payload): ValidJson<NumbersPayload>) -> Result<Json<AverageResponse>, ApiError> {
    ListPolicy::aggregate().check(&payload.numbers)?;
    Ok(Json(AverageResponse {
        average: algorithms::average(&payload.numbers)?,
    }))
}

/// POST /median
pub async fn median(ValidJson(payload): ValidJson<NumbersPayload>) -> Result<Json<MedianResponse>, ApiError> {
    ListPolicy::aggregate().check(&payload.numbers)?;
    Ok(Json(MedianResponse {
        median: algorithms::median(&payload.numbers)?,
    }))
}
