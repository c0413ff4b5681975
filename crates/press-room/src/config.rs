use std::net::SocketAddr;

use press_common::contentful::ContentfulConfig;

use crate::error::AppError;

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub listen_addr: SocketAddr,
    /// `max-age` sent with successful pages.
    pub max_age_secs: u64,
    pub contentful: ContentfulConfig,
}

impl Config {
    /// Optional:
    /// - `PRESS_ROOM_LISTEN_ADDR` (default: "0.0.0.0:3000")
    /// - `PRESS_ROOM_MAX_AGE_SECS` (default: 300)
    /// - the `CONTENTFUL_*` variables read by [`ContentfulConfig::from_env`]
    ///
    /// Missing Contentful credentials are not an error here; pages report them.
    pub fn from_env() -> Result<Self, AppError> {
        let listen_addr = std::env::var("PRESS_ROOM_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let listen_addr = listen_addr.parse::<SocketAddr>().map_err(|e| {
            AppError::Config(format!("PRESS_ROOM_LISTEN_ADDR={listen_addr} is not a socket address: {e}"))
        })?;

        let max_age_secs = match std::env::var("PRESS_ROOM_MAX_AGE_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|e| {
                AppError::Config(format!("PRESS_ROOM_MAX_AGE_SECS={raw} is not a number: {e}"))
            })?,
            Err(_) => 300,
        };

        Ok(Self {
            listen_addr,
            max_age_secs,
            contentful: ContentfulConfig::from_env(),
        })
    }
}
