use super::entity::{Artwork, SourceKind};
use crate::domain::{DomainError, DomainResult};

/// Validates all Artwork invariants
pub fn validate_artwork(artwork: &Artwork) -> DomainResult<()> {
    validate_id(artwork)?;
    validate_title(&artwork.title)?;
    validate_parsed_date(artwork.parsed_date)?;
    Ok(())
}

/// Id must carry the namespace of the artwork's own source
fn validate_id(artwork: &Artwork) -> DomainResult<()> {
    match SourceKind::split_artwork_id(&artwork.id) {
        Some((kind, _)) if kind == artwork.source => Ok(()),
        Some((kind, _)) => Err(DomainError::InvariantViolation(format!(
            "Artwork id '{}' is namespaced for {} but source is {}",
            artwork.id, kind, artwork.source
        ))),
        None => Err(DomainError::InvariantViolation(format!(
            "Artwork id '{}' has no source namespace",
            artwork.id
        ))),
    }
}

fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Artwork title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Sorting must stay total
fn validate_parsed_date(parsed_date: f64) -> DomainResult<()> {
    if !parsed_date.is_finite() {
        return Err(DomainError::InvariantViolation(format!(
            "Parsed date {} is not a finite number",
            parsed_date
        )));
    }
    Ok(())
}

/// Invariants that must hold true for the Artwork domain:
///
/// 1. Id = source namespace + native id, stable across fetches
/// 2. Id is the only dedup and lookup key
/// 3. Title is never empty (placeholder applied at construction)
/// 4. `date` is never reformatted
/// 5. `parsed_date` is always a finite number (0 when unparseable)
/// 6. description/materials only move from None to Some
