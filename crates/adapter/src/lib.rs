//! ZEDO bid adapter — validates bids, batches them into one ad-server call
//! and normalizes the creatives that come back.

pub mod bidder;
pub mod builder;
pub mod interpreter;
pub mod sync;
pub mod validator;

pub use bidder::{BidderSpec, ZedoBidAdapter, BIDDER_CODE};
