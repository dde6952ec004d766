use crate::{api, config::Config};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub type ApiLimiterConfig = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-IP limiter for the JSON API. `None` if the rate can't be expressed.
pub fn api_rate_limiter(requests_per_min: u32) -> Option<ApiLimiterConfig> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = (60_000 / requests_per_min as u64).max(1);
    GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, limiter: &ApiLimiterConfig) {
    // Public pages
    cfg.configure(api::configure_pages);

    // JSON API, rate limited
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(Governor::new(limiter))
            .configure(api::configure_api),
    );
}
