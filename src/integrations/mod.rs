// src/integrations/mod.rs
//
// Museum API integrations
//
// Each source maps its own wire format into canonical Artwork values.
// Services only see the MuseumSource / ArtworkDetailFetcher seams.

pub mod cleveland;
pub mod http;
pub mod lenient;
pub mod source;
pub mod vam;

pub use cleveland::ClevelandClient;
pub use http::build_http_client;
pub use source::{ArtworkDetailFetcher, MuseumSource, SourcePage};
pub use vam::VamClient;

#[cfg(test)]
pub use source::MockArtworkDetailFetcher;
