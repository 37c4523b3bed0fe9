//! Read-only point lookups against the hosted document store.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::{Author, Recipe};

/// Relative so the app works wherever the site is mounted.
pub const API_BASE: &str = "./api";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document not found")]
    NotFound,
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("could not decode document: {0}")]
    Decode(String),
}

pub fn doc_url(collection: &str, id: &str) -> String {
    format!("{}/{}/{}", API_BASE.trim_end_matches('/'), collection, id)
}

/// Fetch one document by collection and identifier.
pub async fn point_get<T: DeserializeOwned>(collection: &str, id: &str) -> Result<T, StoreError> {
    let resp = Request::get(&doc_url(collection, id))
        .send()
        .await
        .map_err(|e| StoreError::Fetch(e.to_string()))?;
    if resp.status() == 404 {
        return Err(StoreError::NotFound);
    }
    if !resp.ok() {
        return Err(StoreError::Fetch(format!("HTTP {}", resp.status())));
    }
    resp.json::<T>()
        .await
        .map_err(|e| StoreError::Decode(e.to_string()))
}

pub async fn load_recipe(id: &str) -> Result<Recipe, StoreError> {
    point_get("recipes", id).await
}

pub async fn load_author(id: &str) -> Result<Author, StoreError> {
    point_get("users", id).await
}
