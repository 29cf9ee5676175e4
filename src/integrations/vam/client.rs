// src/integrations/vam/client.rs
//
// Victoria and Albert Museum API client
//
// ARCHITECTURE:
// - Search: GET {base}objects/search?q=&images_exist=1&page_size=&page=
// - Detail: GET {base}object/{systemNumber}
// - Search records carry no description; detail is fetched on demand
//
// RULES:
// - Returns canonical Artwork values only
// - Never mutates results or collections; services own that

use async_trait::async_trait;
use reqwest::{Client, Url};

use super::normalize::{detail_from_record, normalize_vam_records};
use super::records::{VamObjectResponse, VamSearchResponse};
use crate::config::SourceConfig;
use crate::domain::{Artwork, ArtworkDetail, SourceKind};
use crate::error::{AppError, AppResult};
use crate::integrations::http::{get_json, parse_base_url};
use crate::integrations::source::{ArtworkDetailFetcher, MuseumSource, SourcePage};

/// V&A Collections API client
pub struct VamClient {
    base_url: String,
    page_size: u32,
    http_client: Client,
}

impl VamClient {
    pub fn new(config: &SourceConfig, http_client: Client) -> Self {
        Self {
            base_url: config.base_url.clone(),
            page_size: config.page_size,
            http_client,
        }
    }

    /// Detail URL for a V&A system number
    pub fn detail_url(&self, system_number: &str) -> AppResult<Url> {
        if system_number.trim().is_empty() {
            return Err(AppError::InvalidRequest(
                "V&A detail request needs a system number".to_string(),
            ));
        }

        parse_base_url(&self.base_url, SourceKind::Vam)?
            .join(&format!("object/{}", system_number))
            .map_err(|e| AppError::InvalidRequest(format!("V&A detail URL: {}", e)))
    }
}

#[async_trait]
impl MuseumSource for VamClient {
    fn kind(&self) -> SourceKind {
        SourceKind::Vam
    }

    fn page_size(&self) -> u32 {
        self.page_size
    }

    fn search_url(&self, term: &str, page: u32) -> AppResult<Url> {
        if page == 0 {
            return Err(AppError::InvalidRequest("pages are numbered from 1".to_string()));
        }

        let mut url = parse_base_url(&self.base_url, SourceKind::Vam)?
            .join("objects/search")
            .map_err(|e| AppError::InvalidRequest(format!("V&A search URL: {}", e)))?;

        url.query_pairs_mut()
            .append_pair("q", term)
            .append_pair("images_exist", "1")
            .append_pair("page_size", &self.page_size.to_string())
            .append_pair("page", &page.to_string());

        Ok(url)
    }

    async fn fetch_page(&self, url: Url) -> AppResult<SourcePage> {
        let response: VamSearchResponse = get_json(&self.http_client, url, SourceKind::Vam).await?;

        let record_count = response.records.len();
        let artworks = normalize_vam_records(response.records);

        log::debug!(
            "V&A returned {} records, {} usable",
            record_count,
            artworks.len()
        );

        Ok(SourcePage {
            artworks,
            record_count,
        })
    }
}

#[async_trait]
impl ArtworkDetailFetcher for VamClient {
    async fn fetch_detail(&self, artwork: &Artwork) -> AppResult<ArtworkDetail> {
        if artwork.source != SourceKind::Vam {
            return Err(AppError::InvalidRequest(format!(
                "V&A cannot describe artwork '{}'",
                artwork.id
            )));
        }

        let url = self.detail_url(artwork.native_id())?;
        let response: VamObjectResponse = get_json(&self.http_client, url, SourceKind::Vam).await?;

        Ok(response.record.map(detail_from_record).unwrap_or_default())
    }
}
