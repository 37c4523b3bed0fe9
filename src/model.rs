//! Document types fetched from the recipe store.

use serde::Deserialize;

/// A recipe document from the `recipes` collection.
///
/// Field names follow the stored documents: `imageUrls` is camel-cased,
/// the rest are snake_case.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub author_id: String,
    pub name: String,
    pub teaser: String,
    #[serde(rename = "imageUrls", default)]
    pub image_urls: Vec<String>,
    pub prep_time: String,
    pub cook_time: String,
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub directions: Vec<String>,
}

/// An author document from the `users` collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub id: String,
    pub avatar: String,
    pub name: String,
}
