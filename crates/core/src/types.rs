//! Host-side auction types exchanged with the header-bidding framework.
//! Field names follow the framework's camelCase JSON.

use serde::{Deserialize, Serialize};

use crate::lenient;

/// Media types the adapter can bid on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Banner,
    Video,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Banner => "banner",
            MediaType::Video => "video",
        }
    }
}

/// Video placement context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoContext {
    Instream,
    Outstream,
    Unspecified,
}

impl VideoContext {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("instream") => VideoContext::Instream,
            Some("outstream") => VideoContext::Outstream,
            _ => VideoContext::Unspecified,
        }
    }
}

/// The media shape a bid request resolves to. Decides how sizes are read
/// and which ZEDO renderer serves the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Banner,
    Video(VideoContext),
}

impl MediaKind {
    pub fn renderer_name(&self) -> &'static str {
        match self {
            MediaKind::Banner => "display",
            MediaKind::Video(_) => "Pre/Mid/Post roll",
        }
    }

    pub fn media_type(&self) -> MediaType {
        match self {
            MediaKind::Banner => MediaType::Banner,
            MediaKind::Video(_) => MediaType::Video,
        }
    }
}

/// One `[width, height]` pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Size(pub u32, pub u32);

impl Size {
    pub fn width(&self) -> u32 {
        self.0
    }

    pub fn height(&self) -> u32 {
        self.1
    }
}

/// Requested sizes: a bare pair (video players) or a list of pairs (banners).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Sizes {
    Single(Size),
    List(Vec<Size>),
}

impl Default for Sizes {
    fn default() -> Self {
        Sizes::List(Vec::new())
    }
}

impl Sizes {
    /// The size a placement is built from: the bare pair, or the first entry.
    pub fn primary(&self) -> Option<Size> {
        match self {
            Sizes::Single(size) => Some(*size),
            Sizes::List(list) => list.first().copied(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.primary().is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaTypes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<BannerMediaType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoMediaType>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BannerMediaType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Sizes>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMediaType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_size: Option<Sizes>,
}

/// Channel code packing a network id and a channel id as
/// `network * 1_000_000 + channel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelCode(pub u64);

impl ChannelCode {
    pub const BASE: u64 = 1_000_000;

    pub fn network(&self) -> u64 {
        self.0 / Self::BASE
    }

    pub fn channel(&self) -> u64 {
        self.0 % Self::BASE
    }
}

/// ZEDO-specific bid parameters from the publisher's ad unit config.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ZedoParams {
    #[serde(
        default,
        deserialize_with = "lenient::u64_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub channel_code: Option<u64>,
    #[serde(
        default,
        deserialize_with = "lenient::u64_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub dim_id: Option<u64>,
}

impl ZedoParams {
    pub fn channel(&self) -> Option<ChannelCode> {
        self.channel_code.map(ChannelCode)
    }
}

/// One ad slot offered to this adapter by the auction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidRequest {
    #[serde(default)]
    pub bidder: String,
    #[serde(default)]
    pub ad_unit_code: String,
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub bid_id: String,
    #[serde(default)]
    pub sizes: Sizes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_types: Option<MediaTypes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<ZedoParams>,
}

impl BidRequest {
    pub fn media_kind(&self) -> MediaKind {
        match self.media_types.as_ref().and_then(|m| m.video.as_ref()) {
            Some(video) => MediaKind::Video(VideoContext::parse(video.context.as_deref())),
            None => MediaKind::Banner,
        }
    }

    /// Size used for the placement. Falls back to the media-type sizes
    /// (`playerSize` for video, `sizes` for banner) when the top-level
    /// list is empty.
    pub fn primary_size(&self) -> Option<Size> {
        if let Some(size) = self.sizes.primary() {
            return Some(size);
        }
        let media = self.media_types.as_ref()?;
        let fallback = match self.media_kind() {
            MediaKind::Video(_) => media.video.as_ref()?.player_size.as_ref(),
            MediaKind::Banner => media.banner.as_ref()?.sizes.as_ref(),
        };
        fallback.and_then(Sizes::primary)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GdprConsent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consent_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gdpr_applies: Option<bool>,
}

/// Auction-wide context shared by every bid request in a batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidderRequest {
    /// Auction timeout in milliseconds. Enforced by the host.
    #[serde(default)]
    pub timeout: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidder_request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gdpr_consent: Option<GdprConsent>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// Outbound request description handed back to the host, which performs
/// the HTTP call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerRequest {
    pub method: HttpMethod,
    pub url: String,
    pub data: String,
    /// The bid requests this call was built from.
    pub bid_requests: Vec<BidRequest>,
}

/// Raw ad-server response as delivered by the host transport.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

impl ServerResponse {
    pub fn from_body(body: serde_json::Value) -> Self {
        Self { body: Some(body) }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

/// Normalized bid handed back to the auction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BidResult {
    pub request_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creative_id: Option<String>,
    pub cpm: f64,
    pub width: String,
    pub height: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vast_xml: Option<String>,
    pub media_type: MediaType,
    pub currency: String,
    pub net_revenue: bool,
    pub ttl: u32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncOptions {
    #[serde(default)]
    pub iframe_enabled: bool,
    #[serde(default)]
    pub pixel_enabled: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SyncType {
    Iframe,
    Image,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSync {
    #[serde(rename = "type")]
    pub sync_type: SyncType,
    pub url: String,
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_code_decomposition() {
        let code = ChannelCode(20_000_000);
        assert_eq!(code.network(), 20);
        assert_eq!(code.channel(), 0);

        let code = ChannelCode(2_000_123);
        assert_eq!(code.network(), 2);
        assert_eq!(code.channel(), 123);
    }

    #[test]
    fn test_sizes_shapes() {
        let single: Sizes = serde_json::from_str("[640, 480]").unwrap();
        assert_eq!(single, Sizes::Single(Size(640, 480)));
        assert_eq!(single.primary(), Some(Size(640, 480)));

        let list: Sizes = serde_json::from_str("[[300, 250], [728, 90]]").unwrap();
        assert_eq!(list.primary(), Some(Size(300, 250)));

        let empty: Sizes = serde_json::from_str("[]").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_media_kind_from_media_types() {
        let banner: BidRequest =
            serde_json::from_str(r#"{"bidder": "zedo", "sizes": [[300, 250]]}"#).unwrap();
        assert_eq!(banner.media_kind(), MediaKind::Banner);
        assert_eq!(banner.media_kind().renderer_name(), "display");

        let video: BidRequest = serde_json::from_str(
            r#"{"sizes": [640, 480], "mediaTypes": {"video": {"context": "instream"}}}"#,
        )
        .unwrap();
        assert_eq!(video.media_kind(), MediaKind::Video(VideoContext::Instream));
        assert_eq!(video.media_kind().renderer_name(), "Pre/Mid/Post roll");
        assert_eq!(video.media_kind().media_type(), MediaType::Video);
    }

    #[test]
    fn test_primary_size_falls_back_to_player_size() {
        let video: BidRequest = serde_json::from_str(
            r#"{"mediaTypes": {"video": {"context": "outstream", "playerSize": [[640, 360]]}}}"#,
        )
        .unwrap();
        assert_eq!(video.primary_size(), Some(Size(640, 360)));

        let bare: BidRequest = serde_json::from_str(r#"{"bidder": "zedo"}"#).unwrap();
        assert_eq!(bare.primary_size(), None);
    }

    #[test]
    fn test_params_accept_numeric_strings() {
        let bid: BidRequest = serde_json::from_str(
            r#"{"params": {"channelCode": "20000000", "dimId": 9}}"#,
        )
        .unwrap();
        let params = bid.params.unwrap();
        assert_eq!(params.channel(), Some(ChannelCode(20_000_000)));
        assert_eq!(params.dim_id, Some(9));
    }

    #[test]
    fn test_bid_result_serializes_camel_case() {
        let result = BidResult {
            request_id: "ad1d762".to_string(),
            creative_id: Some("12345".to_string()),
            cpm: 0.84,
            width: "160".to_string(),
            height: "600".to_string(),
            ad: Some("<a></a>".to_string()),
            vast_xml: None,
            media_type: MediaType::Banner,
            currency: "USD".to_string(),
            net_revenue: true,
            ttl: 300,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["requestId"], "ad1d762");
        assert_eq!(json["mediaType"], "banner");
        assert_eq!(json["netRevenue"], true);
        assert!(json.get("vastXml").is_none());
    }

    #[test]
    fn test_user_sync_type_field() {
        let sync = UserSync {
            sync_type: SyncType::Iframe,
            url: "//d3.zedo.com/rs/us/fcs.html".to_string(),
        };
        let json = serde_json::to_string(&sync).unwrap();
        assert!(json.contains(r#""type":"iframe""#));
    }
}
