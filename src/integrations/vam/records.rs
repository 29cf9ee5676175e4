// src/integrations/vam/records.rs
//
// V&A Collections API v2 wire format (only the fields the curator reads).

use serde::Deserialize;
use serde_json::Value;

use crate::integrations::lenient;

/// `GET objects/search`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VamSearchResponse {
    /// Kept raw so each record can be passed through untouched
    pub records: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VamRecord {
    #[serde(rename = "systemNumber", deserialize_with = "lenient::id")]
    pub system_number: Option<String>,

    #[serde(rename = "_primaryTitle", deserialize_with = "lenient::string")]
    pub primary_title: Option<String>,

    #[serde(rename = "_primaryMaker", deserialize_with = "lenient::shape")]
    pub primary_maker: Option<VamMaker>,

    #[serde(rename = "_primaryDate", deserialize_with = "lenient::string")]
    pub primary_date: Option<String>,

    #[serde(rename = "_images", deserialize_with = "lenient::shape")]
    pub images: Option<VamImages>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VamMaker {
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VamImages {
    #[serde(rename = "_primary_thumbnail", deserialize_with = "lenient::string")]
    pub primary_thumbnail: Option<String>,
}

/// `GET object/{systemNumber}`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VamObjectResponse {
    #[serde(deserialize_with = "lenient::shape")]
    pub record: Option<VamObjectRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VamObjectRecord {
    #[serde(rename = "summaryDescription", deserialize_with = "lenient::string")]
    pub summary_description: Option<String>,

    #[serde(rename = "materialsAndTechniques", deserialize_with = "lenient::string")]
    pub materials_and_techniques: Option<String>,
}
