use std::env;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const BIND_ADDRESS: &str = "BIND_ADDRESS";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 8080;
    pub const BIND_ADDRESS: &str = "0.0.0.0";
}

/// Get the HTTP port, falling back to the default when unset or unparsable
pub fn port() -> u16 {
    env::var(env_vars::PORT)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(defaults::PORT)
}

/// Get the bind address for the HTTP server
pub fn bind_address() -> String {
    env::var(env_vars::BIND_ADDRESS).unwrap_or_else(|_| defaults::BIND_ADDRESS.to_string())
}
