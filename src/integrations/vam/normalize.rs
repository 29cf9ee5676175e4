// src/integrations/vam/normalize.rs
//
// V&A record -> Artwork.
// Description and materials stay empty here; they come from the detail
// endpoint on demand.

use serde_json::Value;

use super::records::{VamObjectRecord, VamRecord};
use crate::domain::{validate_artwork, Artwork, ArtworkDetail, SourceKind};

const THUMBNAIL_SEGMENT: &str = "/!100,100/";
const FULL_SIZE_SEGMENT: &str = "/full/";

/// Rewrite an IIIF thumbnail URL to the full-size asset
pub fn full_image_url(thumbnail: &str) -> String {
    thumbnail.replace(THUMBNAIL_SEGMENT, FULL_SIZE_SEGMENT)
}

/// Public object page for a system number
pub fn object_page_url(system_number: &str) -> String {
    format!("https://collections.vam.ac.uk/item/{}/", system_number)
}

pub fn normalize_vam_records(records: Vec<Value>) -> Vec<Artwork> {
    records.into_iter().filter_map(normalize_vam_record).collect()
}

/// `None` when the record is not an object or has no system number
pub fn normalize_vam_record(raw: Value) -> Option<Artwork> {
    let record: VamRecord = match serde_json::from_value(raw.clone()) {
        Ok(record) => record,
        Err(err) => {
            log::warn!("Skipping undecodable V&A record: {}", err);
            return None;
        }
    };

    let Some(system_number) = record.system_number else {
        log::warn!("Skipping V&A record without systemNumber");
        return None;
    };

    let mut artwork = Artwork::new(
        SourceKind::Vam,
        &system_number,
        record.primary_title,
        record.primary_maker.and_then(|maker| maker.name),
        record.primary_date,
    );
    artwork.image = record
        .images
        .and_then(|images| images.primary_thumbnail)
        .map(|thumbnail| full_image_url(&thumbnail));
    artwork.url = Some(object_page_url(&system_number));
    artwork.raw_data = raw;

    if let Err(err) = validate_artwork(&artwork) {
        log::warn!("Skipping invalid V&A record: {}", err);
        return None;
    }
    Some(artwork)
}

pub fn detail_from_record(record: VamObjectRecord) -> ArtworkDetail {
    ArtworkDetail {
        description: record.summary_description,
        materials: record.materials_and_techniques,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{UNKNOWN_CREATOR, UNTITLED};
    use serde_json::json;

    #[test]
    fn test_normalize_full_record() {
        let raw = json!({
            "systemNumber": "O78901",
            "_primaryTitle": "Teapot",
            "_primaryMaker": { "name": "Wedgwood", "association": "maker" },
            "_primaryDate": "ca. 1780",
            "_images": {
                "_primary_thumbnail": "https://framemark.vam.ac.uk/collections/2006AM6764/full/!100,100/0/default.jpg"
            }
        });

        let artwork = normalize_vam_record(raw.clone()).unwrap();

        assert_eq!(artwork.id, "vam-O78901");
        assert_eq!(artwork.title, "Teapot");
        assert_eq!(artwork.source, SourceKind::Vam);
        assert_eq!(artwork.creator, "Wedgwood");
        assert_eq!(artwork.date, "ca. 1780");
        assert_eq!(artwork.parsed_date, 1780.0);
        assert_eq!(
            artwork.image.as_deref(),
            Some("https://framemark.vam.ac.uk/collections/2006AM6764/full/full/0/default.jpg")
        );
        assert_eq!(
            artwork.url.as_deref(),
            Some("https://collections.vam.ac.uk/item/O78901/")
        );
        assert_eq!(artwork.description, None);
        assert_eq!(artwork.materials, None);
        assert_eq!(artwork.raw_data, raw);
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let artwork = normalize_vam_record(json!({
            "systemNumber": "O1",
            "_primaryMaker": { "name": { "text": "not a string" } },
            "_images": []
        }))
        .unwrap();

        assert_eq!(artwork.title, UNTITLED);
        assert_eq!(artwork.creator, UNKNOWN_CREATOR);
        assert_eq!(artwork.date, "");
        assert_eq!(artwork.parsed_date, 0.0);
        assert_eq!(artwork.image, None);
    }

    #[test]
    fn test_records_without_id_are_skipped() {
        let artworks = normalize_vam_records(vec![
            json!({ "_primaryTitle": "Orphan" }),
            json!("not an object"),
            json!({ "systemNumber": "O2", "_primaryTitle": "Kept" }),
        ]);

        assert_eq!(artworks.len(), 1);
        assert_eq!(artworks[0].id, "vam-O2");
    }

    #[test]
    fn test_detail_from_record() {
        let record = VamObjectRecord {
            summary_description: Some("A lead-glazed teapot".to_string()),
            materials_and_techniques: None,
        };
        let detail = detail_from_record(record);
        assert_eq!(detail.description.as_deref(), Some("A lead-glazed teapot"));
        assert_eq!(detail.materials, None);
    }
}
