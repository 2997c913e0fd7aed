//! ZEDO ad-server wire format.
//! Outbound placements are sent as `g=<json>`; the server answers with a
//! list of ads per slot, each carrying creatives.

use serde::{Deserialize, Serialize};

use crate::lenient;

/// Outbound payload. Field order is part of the server contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacementRequest {
    pub placements: Vec<Placement>,
}

/// One slot in the outbound payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub network: u64,
    pub channel: u64,
    pub width: u32,
    pub height: u32,
    pub dimension: u64,
    pub version: String,
    pub keyword: String,
    pub transaction_id: String,
    pub renderers: Vec<Renderer>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Renderer {
    pub name: String,
}

/// Ad-server response body. Entries stay raw until decoded one by one, so a
/// malformed ad only costs that ad.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdResponse {
    #[serde(default, deserialize_with = "lenient::entries")]
    pub ad: Vec<serde_json::Value>,
}

impl AdResponse {
    pub fn ads(&self) -> impl Iterator<Item = Result<Ad, serde_json::Error>> + '_ {
        self.ad.iter().map(Ad::deserialize)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub slot_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub network: Option<String>,
    #[serde(default, deserialize_with = "lenient::entries")]
    pub creatives: Vec<serde_json::Value>,
}

impl Ad {
    pub fn creatives(&self) -> impl Iterator<Item = Result<Creative, serde_json::Error>> + '_ {
        self.creatives.iter().map(Creative::deserialize)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creative {
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub ad_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub height: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub width: Option<String>,
    /// Free-of-charge house creative. Carried through, not used for filtering.
    #[serde(default, deserialize_with = "lenient::bool_or_string")]
    pub is_foc: Option<bool>,
    #[serde(default)]
    pub creative_details: Option<CreativeDetails>,
    /// Raw price, in millionths of the currency unit.
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub cpm: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativeDetails {
    #[serde(rename = "type", default, deserialize_with = "lenient::string_or_number")]
    pub creative_type: Option<String>,
    /// Markup string for renderable creatives; structured object for wrappers.
    #[serde(default)]
    pub ad_content: Option<serde_json::Value>,
}

impl CreativeDetails {
    pub const VAST: &'static str = "VAST";

    /// Directly usable markup, if the content is a non-empty string.
    pub fn markup(&self) -> Option<&str> {
        self.ad_content
            .as_ref()
            .and_then(|content| content.as_str())
            .filter(|markup| !markup.trim().is_empty())
    }

    pub fn is_vast(&self) -> bool {
        self.creative_type.as_deref() == Some(Self::VAST)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
