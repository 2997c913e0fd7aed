//! Bid request validation.

use tracing::debug;
use zedo_core::types::BidRequest;

/// A bid can be sent only when its params carry both a channel code and a
/// dimension id. A present zero counts as present.
pub fn is_bid_request_valid(bid: &BidRequest) -> bool {
    let valid = bid
        .params
        .as_ref()
        .is_some_and(|p| p.channel_code.is_some() && p.dim_id.is_some());

    if !valid {
        debug!(
            bid_id = %bid.bid_id,
            ad_unit = %bid.ad_unit_code,
            has_params = bid.params.is_some(),
            "Rejected ZEDO bid request"
        );
    }
    valid
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use zedo_core::types::ZedoParams;

    fn bid_with(params: Option<ZedoParams>) -> BidRequest {
        BidRequest {
            bidder: "zedo".to_string(),
            params,
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_params_is_invalid() {
        assert!(!is_bid_request_valid(&bid_with(None)));
    }

    #[test]
    fn test_channel_code_and_dim_id_is_valid() {
        let bid = bid_with(Some(ZedoParams {
            channel_code: Some(20_000_000),
            dim_id: Some(9),
        }));
        assert!(is_bid_request_valid(&bid));
    }

    #[test]
    fn test_missing_either_field_is_invalid() {
        let no_dim = bid_with(Some(ZedoParams {
            channel_code: Some(20_000_000),
            dim_id: None,
        }));
        assert!(!is_bid_request_valid(&no_dim));

        let no_channel = bid_with(Some(ZedoParams {
            channel_code: None,
            dim_id: Some(9),
        }));
        assert!(!is_bid_request_valid(&no_channel));
    }

    #[test]
    fn test_zero_values_count_as_present() {
        let bid = bid_with(Some(ZedoParams {
            channel_code: Some(0),
            dim_id: Some(0),
        }));
        assert!(is_bid_request_valid(&bid));
    }

    #[test]
    fn test_malformed_param_values_are_invalid() {
        let bid: BidRequest = serde_json::from_str(
            r#"{"bidder": "zedo", "params": {"channelCode": "not-a-number", "dimId": 9}}"#,
        )
        .unwrap();
        assert!(!is_bid_request_valid(&bid));
    }
}
