// src/integrations/cleveland/records.rs
//
// Cleveland Museum of Art Open Access API wire format

use serde::Deserialize;
use serde_json::Value;

use crate::integrations::lenient;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClevelandSearchResponse {
    pub data: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClevelandRecord {
    #[serde(deserialize_with = "lenient::id")]
    pub id: Option<String>,

    #[serde(deserialize_with = "lenient::string")]
    pub title: Option<String>,

    #[serde(deserialize_with = "lenient::string")]
    pub creation_date: Option<String>,

    #[serde(deserialize_with = "lenient::shape")]
    pub creators: Option<Vec<ClevelandCreator>>,

    #[serde(deserialize_with = "lenient::shape")]
    pub images: Option<ClevelandImages>,

    #[serde(deserialize_with = "lenient::string")]
    pub url: Option<String>,

    #[serde(deserialize_with = "lenient::string")]
    pub wall_description: Option<String>,

    #[serde(deserialize_with = "lenient::string")]
    pub description: Option<String>,

    #[serde(deserialize_with = "lenient::string")]
    pub technique: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClevelandCreator {
    #[serde(deserialize_with = "lenient::string")]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClevelandImages {
    #[serde(deserialize_with = "lenient::shape")]
    pub web: Option<ClevelandImage>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClevelandImage {
    #[serde(deserialize_with = "lenient::string")]
    pub url: Option<String>,
}
