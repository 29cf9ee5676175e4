// src/integrations/cleveland/mod.rs
//
// Cleveland Museum of Art integration

pub mod client;
pub mod normalize;
pub mod records;

pub use client::ClevelandClient;
pub use normalize::{normalize_cleveland_record, normalize_cleveland_records};
