// src/integrations/vam/mod.rs
//
// Victoria and Albert Museum integration

pub mod client;
pub mod normalize;
pub mod records;

pub use client::VamClient;
pub use normalize::{normalize_vam_record, normalize_vam_records};
