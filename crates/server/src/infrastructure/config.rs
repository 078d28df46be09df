//! Process configuration read from the environment.

use std::path::PathBuf;

use tower_http::cors::{AllowOrigin, Any, CorsLayer};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub seed_super_powers: bool,
    /// Raw `CORS_ALLOWED_ORIGINS`; `None` disables the CORS layer.
    pub cors_allowed_origins: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("SERVER_HOST")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup("SERVER_PORT")
            .or_else(|| lookup("PORT"))
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let database_url = lookup("DATABASE_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let seed_super_powers = lookup("SEED_SUPER_POWERS")
            .map(|value| parse_flag(&value))
            .unwrap_or(true);
        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        Self {
            host,
            port,
            database_url,
            seed_super_powers,
            cors_allowed_origins,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Build the CORS layer, if any origins are configured.
    pub fn cors_layer(&self) -> Option<CorsLayer> {
        let raw = self.cors_allowed_origins.as_deref()?;

        if raw == "*" {
            return Some(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );
        }

        let origins = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|origin| origin.parse().ok())
            .collect::<Vec<_>>();

        if origins.is_empty() {
            tracing::warn!(value = %raw, "CORS_ALLOWED_ORIGINS had no valid origins; CORS disabled");
            return None;
        }

        Some(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any),
        )
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

/// Load `.env.local` then `.env` from the repository root, if present.
///
/// Values already in the environment win; a missing file is not an error.
pub fn load_dotenv_from_repo_root() {
    let repo_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .canonicalize();

    let Ok(repo_root) = repo_root else {
        return;
    };

    for name in [".env.local", ".env"] {
        let path = repo_root.join(name);
        if path.is_file() {
            let _ = dotenvy::from_path(&path);
        }
    }
}
