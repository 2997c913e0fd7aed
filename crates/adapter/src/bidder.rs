//! Bidder registration surface. The host auction framework drives every
//! adapter through these entry points.

use tracing::info;
use zedo_core::config::AdapterConfig;
use zedo_core::error::AdapterResult;
use zedo_core::types::*;

use crate::{builder, interpreter, sync, validator};

/// Trait implemented by every bid adapter the host can register.
pub trait BidderSpec: Send + Sync {
    fn code(&self) -> &'static str;
    fn supported_media_types(&self) -> &'static [MediaType];
    fn is_bid_request_valid(&self, bid: &BidRequest) -> bool;
    fn build_requests(&self, bids: &[BidRequest], bidder_request: &BidderRequest) -> ServerRequest;
    fn interpret_response(&self, response: &ServerResponse, request: &ServerRequest)
        -> Vec<BidResult>;
    fn get_user_syncs(
        &self,
        options: &SyncOptions,
        responses: &[ServerResponse],
        gdpr: Option<&GdprConsent>,
    ) -> Vec<UserSync>;
}

// ─── ZEDO ───────────────────────────────────────────────────────────────────

pub const BIDDER_CODE: &str = "zedo";

const SUPPORTED_MEDIA_TYPES: &[MediaType] = &[MediaType::Banner, MediaType::Video];

#[derive(Default)]
pub struct ZedoBidAdapter {
    config: AdapterConfig,
}

impl ZedoBidAdapter {
    pub fn new(config: AdapterConfig) -> AdapterResult<Self> {
        config.validate()?;
        info!(
            endpoint = %config.endpoint,
            version = %config.adapter_version,
            revenue_share = config.revenue_share,
            "ZEDO adapter initialized"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }
}

impl BidderSpec for ZedoBidAdapter {
    fn code(&self) -> &'static str {
        BIDDER_CODE
    }

    fn supported_media_types(&self) -> &'static [MediaType] {
        SUPPORTED_MEDIA_TYPES
    }

    fn is_bid_request_valid(&self, bid: &BidRequest) -> bool {
        validator::is_bid_request_valid(bid)
    }

    fn build_requests(&self, bids: &[BidRequest], bidder_request: &BidderRequest) -> ServerRequest {
        builder::build_requests(bids, bidder_request, &self.config)
    }

    fn interpret_response(
        &self,
        response: &ServerResponse,
        request: &ServerRequest,
    ) -> Vec<BidResult> {
        interpreter::interpret_response(response, request, &self.config)
    }

    fn get_user_syncs(
        &self,
        options: &SyncOptions,
        responses: &[ServerResponse],
        gdpr: Option<&GdprConsent>,
    ) -> Vec<UserSync> {
        sync::get_user_syncs(options, responses, gdpr, &self.config)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
