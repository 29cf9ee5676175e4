// src/integrations/cleveland/normalize.rs
//
// Cleveland record -> Artwork. Search records already carry the
// descriptive fields, so nothing is deferred.

use serde_json::Value;

use super::records::ClevelandRecord;
use crate::domain::{validate_artwork, Artwork, SourceKind};

pub fn normalize_cleveland_records(records: Vec<Value>) -> Vec<Artwork> {
    records
        .into_iter()
        .filter_map(normalize_cleveland_record)
        .collect()
}

/// `None` when the record is not an object or has no id
pub fn normalize_cleveland_record(raw: Value) -> Option<Artwork> {
    let record: ClevelandRecord = match serde_json::from_value(raw.clone()) {
        Ok(record) => record,
        Err(err) => {
            log::warn!("Skipping undecodable Cleveland record: {}", err);
            return None;
        }
    };

    let Some(id) = record.id else {
        log::warn!("Skipping Cleveland record without id");
        return None;
    };

    // First listed creator is the primary one
    let creator = record
        .creators
        .and_then(|creators| creators.into_iter().next())
        .and_then(|creator| creator.description);

    let mut artwork = Artwork::new(
        SourceKind::Cleveland,
        &id,
        record.title,
        creator,
        record.creation_date,
    );
    artwork.image = record.images.and_then(|images| images.web).and_then(|web| web.url);
    artwork.url = record.url;
    artwork.description = record.wall_description.or(record.description);
    artwork.materials = record.technique;
    artwork.raw_data = raw;

    if let Err(err) = validate_artwork(&artwork) {
        log::warn!("Skipping invalid Cleveland record: {}", err);
        return None;
    }
    Some(artwork)
}
