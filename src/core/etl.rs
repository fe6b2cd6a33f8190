use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs every source in order. A source with no data stops the run —
    /// the remaining sources are left for the next refresh. Returns the
    /// output paths of the collections that were dumped.
    pub async fn run(&self) -> Result<Vec<String>> {
        let mut outputs = Vec::new();

        for source in self.pipeline.sources() {
            tracing::info!("Fetching source: {}", source.endpoint);
            let Some(maps) = self.pipeline.extract(source).await? else {
                tracing::warn!(
                    "No data for source {}, stopping this run",
                    source.endpoint
                );
                break;
            };
            tracing::info!("Fetched {} maps", maps.len());

            let maps = self.pipeline.transform(maps).await?;
            tracing::info!("Normalized {} maps", maps.len());

            let output = self.pipeline.load(source, &maps).await?;
            tracing::info!("Output saved to: {}", output);
            outputs.push(output);
        }

        Ok(outputs)
    }
}
