pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{etl::EtlEngine, pipeline::MapsPipeline};
pub use domain::model::{MapRecord, MapperCredit, Source};
pub use utils::error::{MapsError, Result};
