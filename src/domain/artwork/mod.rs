pub mod entity;
pub mod invariants;

pub use entity::{non_blank, Artwork, ArtworkDetail, SourceKind, UNKNOWN_CREATOR, UNTITLED};
pub use invariants::validate_artwork;
