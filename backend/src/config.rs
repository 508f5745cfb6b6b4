//! Runtime configuration read from the environment (and an optional `.env`).
//!
//! | Variable | Default |
//! |---|---|
//! | `VERITY_HOST` | `127.0.0.1` |
//! | `VERITY_PORT` | `8080` |
//! | `VERITY_DATABASE` | `verity.sqlite` |
//! | `VERITY_DATA_DIR` | `data` |
//! | `APP_ORIGIN` | `http://localhost:5173` |
//! | `BOT_USERNAME` | empty (share links point at `APP_ORIGIN`) |
//! | `VERITY_STRICT_ANSWER_KEYS` | `true` |
//! | `ALLOWED_ORIGINS` | `*` (comma-separated list of browser origins) |

use log::warn;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    /// Root of the flat-file store (`sessions/` and `responses/` live below it).
    pub data_dir: PathBuf,
    pub app_origin: String,
    pub bot_username: String,
    /// Reject submissions carrying answer keys that match no step of the session.
    pub strict_answer_keys: bool,
    /// CORS origins; `*` allows any.
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_path: PathBuf::from("verity.sqlite"),
            data_dir: PathBuf::from("data"),
            app_origin: "http://localhost:5173".to_string(),
            bot_username: String::new(),
            strict_answer_keys: true,
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup. Unparseable values
    /// keep their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text = |name: &str, default: String| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        Self {
            host: text("VERITY_HOST", defaults.host),
            port: parsed(&lookup, "VERITY_PORT", defaults.port),
            database_path: PathBuf::from(text(
                "VERITY_DATABASE",
                defaults.database_path.to_string_lossy().into_owned(),
            )),
            data_dir: PathBuf::from(text(
                "VERITY_DATA_DIR",
                defaults.data_dir.to_string_lossy().into_owned(),
            )),
            app_origin: text("APP_ORIGIN", defaults.app_origin)
                .trim_end_matches('/')
                .to_string(),
            bot_username: lookup("BOT_USERNAME")
                .map(|v| v.trim().trim_start_matches('@').to_string())
                .unwrap_or_default(),
            strict_answer_keys: parsed(
                &lookup,
                "VERITY_STRICT_ANSWER_KEYS",
                defaults.strict_answer_keys,
            ),
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .map(|v| origin_list(&v))
                .filter(|origins| !origins.is_empty())
                .unwrap_or(defaults.allowed_origins),
        }
    }

    /// Link testers open to answer a session.
    pub fn share_link(&self, session_id: &str) -> String {
        if self.bot_username.is_empty() {
            self.respond_link(session_id)
        } else {
            format!(
                "https://t.me/{}?startapp=sid_{}",
                self.bot_username, session_id
            )
        }
    }

    /// Direct web link to the respondent page, independent of the bot.
    pub fn respond_link(&self, session_id: &str) -> String {
        format!("{}/respond?sid={}", self.app_origin, session_id)
    }
}

fn origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

fn parsed<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                warn!("Ignoring invalid value {:?} for {}", raw, name);
                default
            }
        },
        None => default,
    }
}
