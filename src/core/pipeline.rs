use crate::core::dump::{to_min_json, to_pretty_json, JSON_EXT, MIN_JSON_EXT};
use crate::core::normalize::normalize_maps;
use crate::core::{ConfigProvider, MapRecord, Pipeline, Source, Storage};
use crate::utils::error::{MapsError, Result};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

pub struct MapsPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> MapsPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    /// Writes the `<name>.json` / `<name>.min.json` pair for one value.
    /// `dir` is relative to the storage root; empty means the root itself.
    async fn dump_pair<T: Serialize>(&self, dir: &str, name: &str, value: &T) -> Result<()> {
        let stem = if dir.is_empty() {
            name.to_string()
        } else {
            format!("{dir}/{name}")
        };

        let pretty = to_pretty_json(value)?;
        self.storage
            .write_file(&format!("{stem}{JSON_EXT}"), pretty.as_bytes())
            .await?;

        let min = to_min_json(value)?;
        self.storage
            .write_file(&format!("{stem}{MIN_JSON_EXT}"), min.as_bytes())
            .await?;

        Ok(())
    }
}

/// File stem for the id-keyed per-record dump. Ids are numbers after
/// normalization, but a string id must not pick up JSON quotes.
fn id_file_stem(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for MapsPipeline<S, C> {
    fn sources(&self) -> &[Source] {
        self.config.sources()
    }

    async fn extract(&self, source: &Source) -> Result<Option<Vec<MapRecord>>> {
        let base_url = self.config.base_url();
        if base_url.is_empty() {
            tracing::debug!("No base URL configured, skipping {}", source.endpoint);
            return Ok(None);
        }

        let url = format!("{base_url}{}{JSON_EXT}", source.endpoint);
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(MapsError::HttpStatusError {
                url,
                status: status.as_u16(),
            });
        }

        let maps: Vec<MapRecord> = response.json().await?;
        if maps.is_empty() {
            return Ok(None);
        }
        Ok(Some(maps))
    }

    async fn transform(&self, mut maps: Vec<MapRecord>) -> Result<Vec<MapRecord>> {
        normalize_maps(&mut maps)?;
        Ok(maps)
    }

    async fn load(&self, source: &Source, maps: &[MapRecord]) -> Result<String> {
        // Full collection dump at the output root.
        self.dump_pair("", source.label, &maps).await?;

        // Per-record dumps under the label directory, keyed by name and id.
        for map in maps {
            self.dump_pair(source.label, &map.name, map).await?;
        }
        for map in maps {
            self.dump_pair(source.label, &id_file_stem(&map.id), map)
                .await?;
        }

        Ok(format!("{}/{}", self.config.output_path(), source.label))
    }
}
