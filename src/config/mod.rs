pub mod cli;

use crate::domain::model::Source;
use crate::domain::ports::ConfigProvider;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;

pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/zer0k-z/kz-map-info/master/";

/// The four remote collections, in processing order.
pub const SOURCES: [Source; 4] = [
    Source { endpoint: "MapsWithMappers", label: "maps" },
    Source { endpoint: "MapsWithMappers_Global", label: "global" },
    Source { endpoint: "MapsWithMappers_NonGlobal", label: "non-global" },
    Source { endpoint: "IncompletedMaps", label: "uncompleted" },
];

#[derive(Debug, Clone, Parser)]
#[command(name = "maps-info")]
#[command(about = "Mirrors KZ map metadata as normalized pretty + minified JSON dumps")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn sources(&self) -> &[Source] {
        &SOURCES
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}
