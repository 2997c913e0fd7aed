//! Response interpreter: turns a ZEDO ad-server body into normalized bids.
//!
//! Anything unusable in the body degrades to "no bid" for that entry; no
//! error ever reaches the auction.

use serde::Deserialize;
use tracing::{debug, warn};
use zedo_core::config::AdapterConfig;
use zedo_core::error::{AdapterError, AdapterResult};
use zedo_core::types::{BidResult, MediaType, ServerRequest, ServerResponse};
use zedo_core::wire::{AdResponse, Creative};

/// Raw prices are integer millionths of the currency unit.
const MICROS_PER_UNIT: f64 = 1_000_000.0;

pub fn parse_body(response: &ServerResponse) -> AdapterResult<Option<AdResponse>> {
    match response.body.as_ref() {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(body) => AdResponse::deserialize(body)
            .map(Some)
            .map_err(|e| AdapterError::MalformedResponse(e.to_string())),
    }
}

/// Convert a raw ad-server price into the cpm reported to the auction.
pub fn scale_cpm(raw: &str, config: &AdapterConfig) -> AdapterResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AdapterError::InvalidCpm(raw.to_string()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(AdapterError::InvalidCpm(raw.to_string()));
    }
    Ok(value * config.revenue_share / MICROS_PER_UNIT)
}

/// Map one creative of the ad answering `slot_id` to a bid.
pub fn creative_to_bid(
    slot_id: &str,
    creative: &Creative,
    config: &AdapterConfig,
) -> AdapterResult<BidResult> {
    let ad_id = creative.ad_id.as_deref().unwrap_or("unknown");

    let raw_cpm = creative
        .cpm
        .as_deref()
        .ok_or_else(|| AdapterError::InvalidCpm(format!("{ad_id}: missing")))?;
    let cpm = scale_cpm(raw_cpm, config)?;
    if cpm == 0.0 {
        return Err(AdapterError::NoFill(ad_id.to_string()));
    }

    let details = creative.creative_details.as_ref().ok_or_else(|| {
        AdapterError::UnsupportedCreative(format!("{ad_id}: no creative details"))
    })?;
    let creative_type = details.creative_type.as_deref().unwrap_or_default();
    if !config.is_renderable(creative_type) {
        return Err(AdapterError::UnsupportedCreative(format!(
            "{ad_id}: type {creative_type:?} not renderable"
        )));
    }
    let markup = details.markup().ok_or_else(|| {
        AdapterError::UnsupportedCreative(format!("{ad_id}: {creative_type} without markup"))
    })?;

    let (media_type, ad, vast_xml) = if details.is_vast() {
        (MediaType::Video, None, Some(markup.to_string()))
    } else {
        (MediaType::Banner, Some(markup.to_string()), None)
    };

    Ok(BidResult {
        request_id: slot_id.to_string(),
        creative_id: creative.ad_id.clone(),
        cpm,
        width: creative.width.clone().unwrap_or_default(),
        height: creative.height.clone().unwrap_or_default(),
        ad,
        vast_xml,
        media_type,
        currency: config.currency.clone(),
        net_revenue: config.net_revenue,
        ttl: config.ttl_secs,
    })
}

fn drop_malformed(entry: &'static str, e: &serde_json::Error) {
    let e = AdapterError::MalformedResponse(e.to_string());
    debug!(entry, error = %e, "Dropped malformed ZEDO entry");
    metrics::counter!("zedo.creatives_dropped", "reason" => e.reason()).increment(1);
}

/// Interpret the ad-server response for `request`. Bids come back in
/// ad/creative order; unusable creatives are dropped.
pub fn interpret_response(
    response: &ServerResponse,
    request: &ServerRequest,
    config: &AdapterConfig,
) -> Vec<BidResult> {
    let parsed = match parse_body(response) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            debug!(requested = request.bid_requests.len(), "Empty ZEDO response");
            return Vec::new();
        }
        Err(e) => {
            warn!(error = %e, "Discarding ZEDO response");
            metrics::counter!("zedo.creatives_dropped", "reason" => e.reason()).increment(1);
            return Vec::new();
        }
    };

    let mut bids = Vec::new();
    for ad in parsed.ads() {
        let ad = match ad {
            Ok(ad) => ad,
            Err(e) => {
                drop_malformed("ad", &e);
                continue;
            }
        };
        let Some(slot_id) = ad.slot_id.as_deref() else {
            debug!(creatives = ad.creatives.len(), "ZEDO ad without slot id");
            metrics::counter!("zedo.creatives_dropped", "reason" => "missing_slot")
                .increment(ad.creatives.len() as u64);
            continue;
        };

        for creative in ad.creatives() {
            let result = creative
                .map_err(|e| AdapterError::MalformedResponse(e.to_string()))
                .and_then(|creative| creative_to_bid(slot_id, &creative, config));
            match result {
                Ok(bid) => {
                    metrics::counter!("zedo.bids", "media_type" => bid.media_type.as_str())
                        .increment(1);
                    bids.push(bid);
                }
                Err(e) => {
                    debug!(slot_id, error = %e, "Dropped ZEDO creative");
                    metrics::counter!("zedo.creatives_dropped", "reason" => e.reason())
                        .increment(1);
                }
            }
        }
    }

    debug!(
        requested = request.bid_requests.len(),
        answered = parsed.ad.len(),
        bids = bids.len(),
        "Interpreted ZEDO response"
    );
    bids
}

// ─── Tests ───────────────────────────────────────────────────────────
