//! Centralized constants for default endpoints and UA.

/// Default User-Agent sent with every request.
pub(crate) const USER_AGENT: &str = concat!("vsme-rs/", env!("CARGO_PKG_VERSION"));

/// Default reporting API base (endpoints are joined onto it).
pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

/// Environment variable that overrides the API base in [`super::VsmeClientBuilder::from_env`].
pub(crate) const BASE_URL_ENV: &str = "VSME_API_URL";

/// Country sent with activity-based calculation requests unless overridden.
pub(crate) const DEFAULT_COUNTRY: &str = "UK";
