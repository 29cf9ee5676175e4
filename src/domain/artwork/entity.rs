use serde::{Deserialize, Serialize};

use crate::domain::historical_date::parse_historical_date;

/// Placeholder used when a source supplies no title
pub const UNTITLED: &str = "Untitled";

/// Placeholder used when a source supplies no usable creator name
pub const UNKNOWN_CREATOR: &str = "Unknown";

/// The upstream museum an artwork was fetched from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Victoria & Albert Museum (page-number pagination, lazy detail)
    Vam,
    /// Cleveland Museum of Art (offset/limit pagination, eager detail)
    Cleveland,
}

impl SourceKind {
    pub const ALL: [SourceKind; 2] = [SourceKind::Vam, SourceKind::Cleveland];

    /// Namespace prepended to the native identifier
    pub fn id_prefix(&self) -> &'static str {
        match self {
            SourceKind::Vam => "vam",
            SourceKind::Cleveland => "cleveland",
        }
    }

    /// Human-readable institution name
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Vam => "Victoria & Albert Museum",
            SourceKind::Cleveland => "Cleveland Museum of Art",
        }
    }

    /// Whether description/materials are omitted at search time and must be
    /// fetched from the detail endpoint.
    pub fn defers_detail(&self) -> bool {
        matches!(self, SourceKind::Vam)
    }

    /// Build the globally unique artwork id for a native identifier
    pub fn artwork_id(&self, native_id: &str) -> String {
        format!("{}-{}", self.id_prefix(), native_id)
    }

    /// Split a namespaced artwork id into its source and native id
    pub fn split_artwork_id(id: &str) -> Option<(SourceKind, &str)> {
        Self::ALL.into_iter().find_map(|kind| {
            id.strip_prefix(kind.id_prefix())
                .and_then(|rest| rest.strip_prefix('-'))
                .filter(|native| !native.is_empty())
                .map(|native| (kind, native))
        })
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Canonical, source-independent artwork record.
///
/// Produced once per search page by a source normalizer. Only the
/// enrichment fields (`description`, `materials`) change afterwards, and
/// only from `None` to a concrete value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    /// Source namespace + native id; the only lookup/dedup key
    pub id: String,

    pub title: String,

    pub source: SourceKind,

    /// Full-size image URL
    pub image: Option<String>,

    pub creator: String,

    /// Date text exactly as supplied by the source
    pub date: String,

    /// Sort key derived from `date`
    pub parsed_date: f64,

    /// Deep link to the institution's object page
    pub url: Option<String>,

    pub description: Option<String>,

    pub materials: Option<String>,

    /// Untouched source record
    pub raw_data: serde_json::Value,
}

/// Detail fields fetched lazily for sources that defer them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtworkDetail {
    pub description: Option<String>,
    pub materials: Option<String>,
}

impl Artwork {
    /// Create an artwork with the mandatory fields; the sort key is computed
    /// from `date` here and nowhere else.
    pub fn new(
        source: SourceKind,
        native_id: &str,
        title: Option<String>,
        creator: Option<String>,
        date: Option<String>,
    ) -> Self {
        let date = date.unwrap_or_default();
        let parsed_date = parse_historical_date(&date);

        Self {
            id: source.artwork_id(native_id),
            title: non_blank(title).unwrap_or_else(|| UNTITLED.to_string()),
            source,
            image: None,
            creator: non_blank(creator).unwrap_or_else(|| UNKNOWN_CREATOR.to_string()),
            date,
            parsed_date,
            url: None,
            description: None,
            materials: None,
            raw_data: serde_json::Value::Null,
        }
    }

    /// Native identifier without the source namespace
    pub fn native_id(&self) -> &str {
        SourceKind::split_artwork_id(&self.id)
            .map(|(_, native)| native)
            .unwrap_or(&self.id)
    }

    /// True while the detail fields for a deferring source are still missing
    pub fn needs_enrichment(&self) -> bool {
        self.source.defers_detail() && self.description.is_none()
    }

    pub fn detail(&self) -> ArtworkDetail {
        ArtworkDetail {
            description: self.description.clone(),
            materials: self.materials.clone(),
        }
    }

    /// Return a copy carrying the fetched detail fields.
    /// Fields that are already present are kept.
    pub fn enriched_with(&self, detail: ArtworkDetail) -> Artwork {
        let mut enriched = self.clone();
        if enriched.description.is_none() {
            enriched.description = detail.description;
        }
        if enriched.materials.is_none() {
            enriched.materials = detail.materials;
        }
        enriched
    }
}

impl std::fmt::Display for Artwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.id)
    }
}

/// Trimmed string, or `None` when blank
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_placeholders() {
        let artwork = Artwork::new(SourceKind::Vam, "O1", None, Some("  ".to_string()), None);

        assert_eq!(artwork.id, "vam-O1");
        assert_eq!(artwork.title, UNTITLED);
        assert_eq!(artwork.creator, UNKNOWN_CREATOR);
        assert_eq!(artwork.date, "");
        assert_eq!(artwork.parsed_date, 0.0);
    }

    #[test]
    fn test_parsed_date_computed_from_date() {
        let artwork = Artwork::new(
            SourceKind::Cleveland,
            "42",
            Some("Vase".to_string()),
            None,
            Some("19th century".to_string()),
        );
        assert_eq!(artwork.parsed_date, 1850.5);
    }

    #[test]
    fn test_split_artwork_id() {
        assert_eq!(
            SourceKind::split_artwork_id("cleveland-12345"),
            Some((SourceKind::Cleveland, "12345"))
        );
        assert_eq!(
            SourceKind::split_artwork_id("vam-O78901"),
            Some((SourceKind::Vam, "O78901"))
        );
        assert_eq!(SourceKind::split_artwork_id("vam-"), None);
        assert_eq!(SourceKind::split_artwork_id("louvre-1"), None);
    }

    #[test]
    fn test_native_id() {
        let artwork = Artwork::new(SourceKind::Vam, "O78901", None, None, None);
        assert_eq!(artwork.native_id(), "O78901");
    }

    #[test]
    fn test_needs_enrichment_only_for_deferring_source() {
        let vam = Artwork::new(SourceKind::Vam, "O1", None, None, None);
        let cleveland = Artwork::new(SourceKind::Cleveland, "1", None, None, None);

        assert!(vam.needs_enrichment());
        assert!(!cleveland.needs_enrichment());
    }

    #[test]
    fn test_enriched_with_keeps_existing_fields() {
        let mut artwork = Artwork::new(SourceKind::Vam, "O1", None, None, None);
        artwork.materials = Some("Bronze".to_string());

        let enriched = artwork.enriched_with(ArtworkDetail {
            description: Some("A bust".to_string()),
            materials: Some("Marble".to_string()),
        });

        assert_eq!(enriched.description.as_deref(), Some("A bust"));
        assert_eq!(enriched.materials.as_deref(), Some("Bronze"));
        assert!(!enriched.needs_enrichment());
    }
}
