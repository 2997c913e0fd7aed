//! User-sync descriptors. ZEDO only offers an iframe sync.

use tracing::debug;
use url::form_urlencoded;
use zedo_core::config::AdapterConfig;
use zedo_core::types::{GdprConsent, ServerResponse, SyncOptions, SyncType, UserSync};

/// Sync URL with GDPR parameters appended when consent data is known.
pub fn sync_url(base: &str, gdpr: Option<&GdprConsent>) -> String {
    let Some(consent) = gdpr else {
        return base.to_string();
    };

    let mut query = form_urlencoded::Serializer::new(String::new());
    if let Some(applies) = consent.gdpr_applies {
        query.append_pair("gdpr", if applies { "1" } else { "0" });
    }
    if let Some(consent_string) = consent.consent_string.as_deref() {
        query.append_pair("gdpr_consent", consent_string);
    }
    let query = query.finish();

    if query.is_empty() {
        base.to_string()
    } else {
        format!("{base}?{query}")
    }
}

/// One iframe sync per auction, whatever the responses held. `responses`
/// only feeds the debug log.
pub fn get_user_syncs(
    options: &SyncOptions,
    responses: &[ServerResponse],
    gdpr: Option<&GdprConsent>,
    config: &AdapterConfig,
) -> Vec<UserSync> {
    if !options.iframe_enabled {
        debug!(pixel_enabled = options.pixel_enabled, "ZEDO iframe sync disabled");
        return Vec::new();
    }
    debug!(
        responses = responses.len(),
        gdpr = gdpr.is_some(),
        "Building ZEDO user sync"
    );

    vec![UserSync {
        sync_type: SyncType::Iframe,
        url: sync_url(&config.user_sync_url, gdpr),
    }]
}

// ─── Tests ───────────────────────────────────────────────────────────
