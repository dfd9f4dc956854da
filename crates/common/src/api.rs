//! Paths shared by the server router and the browser client.

/// Prefix every JSON endpoint is nested under.
pub const API_PREFIX: &str = "/api";

/// Route of the F5 configuration document, relative to [`API_PREFIX`].
pub const F5_CONFIG_ROUTE: &str = "/f5Config";

/// Full path the viewer requests, relative to the document origin.
pub const F5_CONFIG_PATH: &str = "/api/f5Config";

pub const HEALTH_PATH: &str = "/health";
