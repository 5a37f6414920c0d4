//! Server assembly for the RSVP service: configuration, CORS and request
//! tracing wrapped around [`rsvp_api::router`].

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use axum::{
  Router,
  http::{HeaderValue, Method, header},
};
use rsvp_api::AppState;
use rsvp_core::store::RsvpStore;
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `RSVP_*` environment variables.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:           String,
  #[serde(default = "default_port")]
  pub port:           u16,
  pub database_path:  PathBuf,
  pub invite_code:    String,
  /// The one browser origin allowed to call the API. `None` disables CORS.
  #[serde(default)]
  pub allowed_origin: Option<String>,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 3000 }

impl ServerConfig {
  /// Read `path` (if it exists), then overlay `RSVP_*` environment variables.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("RSVP"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Build the full application: API routes, request tracing, and CORS when an
/// origin is configured.
pub fn app<S>(config: &ServerConfig, store: S) -> anyhow::Result<Router>
where
  S: RsvpStore + 'static,
{
  let state = AppState::new(store, config.invite_code.as_str());
  let mut app = rsvp_api::router(state).layer(TraceLayer::new_for_http());

  if let Some(origin) = &config.allowed_origin {
    let origin: HeaderValue = origin
      .parse()
      .with_context(|| format!("invalid allowed_origin {origin:?}"))?;
    app = app.layer(
      CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]),
    );
  }

  Ok(app)
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use rsvp_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  fn config(allowed_origin: Option<&str>) -> ServerConfig {
    ServerConfig {
      host:           "127.0.0.1".to_string(),
      port:           3000,
      database_path:  PathBuf::from(":memory:"),
      invite_code:    "password".to_string(),
      allowed_origin: allowed_origin.map(str::to_owned),
    }
  }

  fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir()
      .join(format!("rsvp-server-{}-{name}.toml", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
  }

  fn preflight() -> Request<Body> {
    Request::builder()
      .method("OPTIONS")
      .uri("/rsvp")
      .header(header::ORIGIN, "https://example.wedding")
      .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
      .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
      .body(Body::empty())
      .unwrap()
  }

  #[test]
  fn load_reads_toml_and_applies_defaults() {
    let path = temp_config(
      "defaults",
      "database_path = \"/tmp/rsvp.sqlite3\"\ninvite_code = \"password\"\n",
    );
    let cfg = ServerConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.invite_code, "password");
    assert_eq!(cfg.database_path, PathBuf::from("/tmp/rsvp.sqlite3"));
    assert!(cfg.allowed_origin.is_none());
    assert_eq!(cfg.address(), "127.0.0.1:3000");
  }

  #[test]
  fn load_reads_every_key() {
    let path = temp_config(
      "full",
      "host = \"0.0.0.0\"\nport = 8081\ndatabase_path = \"rsvp.db\"\n\
       invite_code = \"Secret\"\nallowed_origin = \"https://example.wedding\"\n",
    );
    let cfg = ServerConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(cfg.address(), "0.0.0.0:8081");
    assert_eq!(cfg.invite_code, "Secret");
    assert_eq!(cfg.allowed_origin.as_deref(), Some("https://example.wedding"));
  }

  #[test]
  fn load_fails_without_invite_code() {
    let path = temp_config("missing", "database_path = \"rsvp.db\"\n");
    let result = ServerConfig::load(&path);
    std::fs::remove_file(&path).ok();
    assert!(result.is_err());
  }

  #[test]
  fn expand_tilde_leaves_plain_paths_alone() {
    let p = PathBuf::from("/var/lib/rsvp.sqlite3");
    assert_eq!(expand_tilde(&p), p);
  }

  #[tokio::test]
  async fn cors_preflight_allows_configured_origin() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let app = app(&config(Some("https://example.wedding")), store).unwrap();

    let resp = app.oneshot(preflight()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
      resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
      "https://example.wedding"
    );
  }

  #[tokio::test]
  async fn no_cors_headers_without_an_origin() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let app = app(&config(None), store).unwrap();

    let req = Request::builder()
      .uri("/_health")
      .header(header::ORIGIN, "https://example.wedding")
      .body(Body::empty())
      .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(!resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
  }

  #[tokio::test]
  async fn invalid_origin_is_a_startup_error() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    assert!(app(&config(Some("bad\norigin")), store).is_err());
  }
}
