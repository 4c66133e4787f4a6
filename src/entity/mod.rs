//! Persisted entity models.
//!
//! Serde field names follow the historical wire format (`birthcountry`,
//! `assetid`, ...) so REST payloads stay compatible with existing clients.

pub mod asset_type;
pub mod audience;
pub mod chart;
pub mod insight;
pub mod user_star;

pub use asset_type::AssetType;
