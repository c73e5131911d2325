//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_NAME, DEFAULT_AUTH_PORTAL_URL, DEFAULT_CORS_ORIGINS,
    DEFAULT_DATABASE_URL, DEFAULT_FRONTEND_URL, DEFAULT_IDENTITY_PROVIDER_TIMEOUT_SECS,
    DEFAULT_IDENTITY_PROVIDER_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    /// Reserved email of the bootstrap administrator
    pub admin_email: String,
    pub admin_name: String,
    pub auth_portal_url: String,
    pub frontend_url: String,
    pub identity_provider_url: String,
    pub identity_provider_timeout_secs: u64,
    /// Allowed CORS origins; `["*"]` means any
    pub cors_origins: Vec<String>,
    pub cookie_secure: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("admin_email", &self.admin_email)
            .field("auth_portal_url", &self.auth_portal_url)
            .field("frontend_url", &self.frontend_url)
            .field("identity_provider_url", &self.identity_provider_url)
            .field("cors_origins", &self.cors_origins)
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let string_or = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        Self {
            database_url: string_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            server_host: string_or("SERVER_HOST", DEFAULT_SERVER_HOST),
            server_port: var("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            admin_email: string_or("ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL),
            admin_name: string_or("ADMIN_NAME", DEFAULT_ADMIN_NAME),
            auth_portal_url: string_or("AUTH_PORTAL_URL", DEFAULT_AUTH_PORTAL_URL),
            frontend_url: string_or("FRONTEND_URL", DEFAULT_FRONTEND_URL),
            identity_provider_url: string_or("IDENTITY_PROVIDER_URL", DEFAULT_IDENTITY_PROVIDER_URL),
            identity_provider_timeout_secs: var("IDENTITY_PROVIDER_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_IDENTITY_PROVIDER_TIMEOUT_SECS),
            cors_origins: parse_origins(&string_or("CORS_ORIGINS", DEFAULT_CORS_ORIGINS)),
            cookie_secure: var("COOKIE_SECURE")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// URL of the hosted login page, redirecting back to the frontend.
    pub fn login_url(&self) -> String {
        format!("{}?redirect={}", self.auth_portal_url, self.frontend_url)
    }

    /// Whether any origin is allowed.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}
