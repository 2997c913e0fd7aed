//! Request builder: batches every bid request into a single `g=<json>` GET
//! against the ZEDO placement endpoint.

use tracing::{debug, warn};
use zedo_core::config::AdapterConfig;
use zedo_core::error::{AdapterError, AdapterResult};
use zedo_core::types::{BidRequest, BidderRequest, HttpMethod, ServerRequest};
use zedo_core::wire::{Placement, PlacementRequest, Renderer};

const PAYLOAD_PARAM: &str = "g=";

/// Map one bid request to its placement entry.
pub fn build_placement(bid: &BidRequest, config: &AdapterConfig) -> AdapterResult<Placement> {
    let params = bid
        .params
        .as_ref()
        .ok_or_else(|| AdapterError::MissingParams(bid.bid_id.clone()))?;
    let channel = params
        .channel()
        .ok_or_else(|| AdapterError::MissingParams(format!("{}: channelCode", bid.bid_id)))?;
    let dimension = params
        .dim_id
        .ok_or_else(|| AdapterError::MissingParams(format!("{}: dimId", bid.bid_id)))?;

    let kind = bid.media_kind();
    let size = bid.primary_size().ok_or_else(|| AdapterError::MissingSize {
        bid_id: bid.bid_id.clone(),
        media: kind.media_type().as_str(),
    })?;

    Ok(Placement {
        network: channel.network(),
        channel: channel.channel(),
        width: size.width(),
        height: size.height(),
        dimension,
        version: config.adapter_version.clone(),
        keyword: String::new(),
        transaction_id: bid.transaction_id.clone(),
        renderers: vec![Renderer {
            name: kind.renderer_name().to_string(),
        }],
    })
}

/// Encode placements as the `g=<json>` query payload.
pub fn encode_payload(payload: &PlacementRequest) -> AdapterResult<String> {
    let json = serde_json::to_string(payload)?;
    Ok(format!("{PAYLOAD_PARAM}{json}"))
}

/// Build the outbound request for a batch of validated bid requests.
///
/// Requests that cannot be mapped are left out of the payload and logged;
/// they stay in `bid_requests` so the host can still account for them.
pub fn build_requests(
    bids: &[BidRequest],
    bidder_request: &BidderRequest,
    config: &AdapterConfig,
) -> ServerRequest {
    let mut placements = Vec::with_capacity(bids.len());

    for bid in bids {
        match build_placement(bid, config) {
            Ok(placement) => placements.push(placement),
            Err(e) => {
                warn!(
                    bid_id = %bid.bid_id,
                    ad_unit = %bid.ad_unit_code,
                    error = %e,
                    "Skipping ZEDO placement"
                );
                metrics::counter!("zedo.placements_skipped", "reason" => e.reason()).increment(1);
            }
        }
    }

    let data = match encode_payload(&PlacementRequest { placements }) {
        Ok(data) => data,
        Err(e) => {
            warn!(error = %e, "Failed to serialize ZEDO placements");
            metrics::counter!("zedo.placements_skipped", "reason" => e.reason()).increment(1);
            format!("{PAYLOAD_PARAM}{{\"placements\":[]}}")
        }
    };

    debug!(
        bids = bids.len(),
        timeout_ms = bidder_request.timeout,
        auction_id = bidder_request.auction_id.as_deref().unwrap_or_default(),
        "Built ZEDO request"
    );
    metrics::counter!("zedo.requests_built").increment(1);

    ServerRequest {
        method: HttpMethod::Get,
        url: config.endpoint.clone(),
        data,
        bid_requests: bids.to_vec(),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
