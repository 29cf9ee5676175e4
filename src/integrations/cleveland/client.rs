// src/integrations/cleveland/client.rs
//
// Cleveland Museum of Art Open Access API client
//
// ARCHITECTURE:
// - Search: GET {base}?q=&has_image=1&limit=&skip=
// - Offset pagination; page numbers are translated to `skip`

use async_trait::async_trait;
use reqwest::{Client, Url};

use super::normalize::normalize_cleveland_records;
use super::records::ClevelandSearchResponse;
use crate::config::SourceConfig;
use crate::domain::SourceKind;
use crate::error::{AppError, AppResult};
use crate::integrations::http::{get_json, parse_base_url};
use crate::integrations::source::{MuseumSource, SourcePage};

pub struct ClevelandClient {
    base_url: String,
    page_size: u32,
    http_client: Client,
}

impl ClevelandClient {
    pub fn new(config: &SourceConfig, http_client: Client) -> Self {
        Self {
            base_url: config.base_url.clone(),
            page_size: config.page_size,
            http_client,
        }
    }

    /// Records to skip before a 1-based page
    fn offset(&self, page: u32) -> u64 {
        u64::from(page.saturating_sub(1)) * u64::from(self.page_size)
    }
}

#[async_trait]
impl MuseumSource for ClevelandClient {
    fn kind(&self) -> SourceKind {
        SourceKind::Cleveland
    }

    fn page_size(&self) -> u32 {
        self.page_size
    }

    fn search_url(&self, term: &str, page: u32) -> AppResult<Url> {
        if page == 0 {
            return Err(AppError::InvalidRequest("pages are numbered from 1".to_string()));
        }

        let mut url = parse_base_url(&self.base_url, SourceKind::Cleveland)?;
        url.query_pairs_mut()
            .append_pair("q", term)
            .append_pair("has_image", "1")
            .append_pair("limit", &self.page_size.to_string())
            .append_pair("skip", &self.offset(page).to_string());

        Ok(url)
    }

    async fn fetch_page(&self, url: Url) -> AppResult<SourcePage> {
        let response: ClevelandSearchResponse =
            get_json(&self.http_client, url, SourceKind::Cleveland).await?;

        let record_count = response.data.len();
        let artworks = normalize_cleveland_records(response.data);

        log::debug!(
            "Cleveland returned {} records, {} usable",
            record_count,
            artworks.len()
        );

        Ok(SourcePage {
            artworks,
            record_count,
        })
    }
}
