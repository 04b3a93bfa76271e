//! Persisted configuration values.
//!
//! Values are stored one file per form id under a configuration directory:
//! `{dir}/{id}.json`, or `{dir}/{id}.toml` with [`ConfigFormat::Toml`].
//! Loading always starts from the schema defaults, so a missing file or a
//! file written for an older version of the schema still yields a complete
//! value map.

use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
};

use chrono::Local;
use log::{debug, info, warn};
use serde_json::{Map, Value};
use tokio::fs;

use crate::{
    error::{Error, Result},
    schema::Schema,
};

static TMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// On-disk encoding of persisted values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigFormat {
    #[default]
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            ConfigFormat::Toml => "toml",
        }
    }

    fn encode(self, values: &Map<String, Value>) -> Result<String> {
        Ok(match self {
            ConfigFormat::Json => serde_json::to_string_pretty(values)?,
            ConfigFormat::Toml => toml::to_string_pretty(values)?,
        })
    }

    fn decode(self, content: &str) -> Result<Value> {
        Ok(match self {
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Toml => {
                let v: toml::Value = toml::from_str(content)?;
                serde_json::to_value(v)?
            }
        })
    }
}

/// File-backed value store keyed by form id.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
    format: ConfigFormat,
    keep_backups: bool,
}

impl ConfigStore {
    /// JSON store rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            format: ConfigFormat::Json,
            keep_backups: false,
        }
    }

    pub fn with_format(mut self, format: ConfigFormat) -> Self {
        self.format = format;
        self
    }

    /// Copy the previous file to a timestamped backup before overwriting it.
    pub fn with_backups(mut self, keep: bool) -> Self {
        self.keep_backups = keep;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn format(&self) -> ConfigFormat {
        self.format
    }

    /// File holding the values of `id`.
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.{}", self.format.extension()))
    }

    /// Raw persisted map, `None` when nothing was saved yet.
    pub async fn load_raw(&self, id: &str) -> Result<Option<Map<String, Value>>> {
        let path = self.path_for(id);
        let content = match fs::read_to_string(&path).await {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::io(&path, e)),
        };
        if content.trim().is_empty() {
            return Ok(None);
        }
        match self.format.decode(&content)? {
            Value::Object(map) => Ok(Some(map)),
            other => Err(Error::Malformed {
                path: path.display().to_string(),
                reason: format!("expected an object, found {other}"),
            }),
        }
    }

    /// Schema defaults overlaid with the persisted values of `id`.
    ///
    /// Persisted keys that the schema no longer knows, or values that no
    /// longer satisfy their field, are dropped with a warning.
    pub async fn load(&self, id: &str, schema: &Schema) -> Result<Map<String, Value>> {
        let mut values = schema.defaults();
        let Some(saved) = self.load_raw(id).await? else {
            debug!("no saved values for `{id}`, using defaults");
            return Ok(values);
        };
        for (key, value) in saved {
            let Some(field) = schema.get_field(&key) else {
                warn!("dropping unknown key `{key}` from saved `{id}`");
                continue;
            };
            match field.check(&value) {
                Ok(v) => {
                    values.insert(key, v);
                }
                Err(e) => warn!("dropping saved value for `{id}`: {e}"),
            }
        }
        // restore field order after overlaying
        let ordered = schema
            .fields
            .iter()
            .filter_map(|f| values.remove(&f.key).map(|v| (f.key.clone(), v)))
            .collect();
        debug!("loaded `{id}` from {}", self.path_for(id).display());
        Ok(ordered)
    }

    /// Validate `values` against `schema` and persist them under `id`.
    ///
    /// Returns the complete stored map (missing keys filled with defaults).
    pub async fn save(
        &self,
        id: &str,
        schema: &Schema,
        values: &Map<String, Value>,
    ) -> Result<Map<String, Value>> {
        let values = schema.check_values(values)?;
        let content = self.format.encode(&values)?;

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| Error::io(&self.dir, e))?;

        let path = self.path_for(id);
        if self.keep_backups && fs::try_exists(&path).await.unwrap_or(false) {
            let backup = path.with_extension(format!(
                "bk-{}.{}",
                Local::now().format("%Y%m%d%H%M%S%3f"),
                self.format.extension()
            ));
            fs::copy(&path, &backup)
                .await
                .map_err(|e| Error::io(&backup, e))?;
            debug!("backed up {} to {}", path.display(), backup.display());
        }

        // readers only ever see the old or the new file
        let tmp = self.dir.join(format!(
            ".{id}.{}.{}.tmp",
            std::process::id(),
            TMP_SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        fs::write(&tmp, content)
            .await
            .map_err(|e| Error::io(&tmp, e))?;
        if let Err(e) = fs::rename(&tmp, &path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(Error::io(&path, e));
        }
        info!("saved `{id}` to {}", path.display());
        Ok(values)
    }

    /// Delete the persisted values of `id`. Returns whether a file existed.
    pub async fn reset(&self, id: &str) -> Result<bool> {
        let path = self.path_for(id);
        match fs::remove_file(&path).await {
            Ok(()) => {
                info!("reset `{id}` to defaults");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::io(&path, e)),
        }
    }
}
