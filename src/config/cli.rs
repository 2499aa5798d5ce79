use crate::domain::ports::ConfigProvider;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "sample-domain")]
#[command(about = "Sample domain records, lookup services and dataset export")]
pub struct CliConfig {
    /// TOML file describing the sample records
    #[arg(long)]
    pub dataset: Option<String>,

    #[arg(long, value_delimiter = ',')]
    pub seed_files: Vec<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', default_value = "csv,tsv,json")]
    pub formats: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn dataset_path(&self) -> Option<&str> {
        self.dataset.as_deref()
    }

    fn seed_files(&self) -> &[String] {
        &self.seed_files
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        if let Some(dataset) = &self.dataset {
            validation::validate_path("dataset", dataset)?;
        }
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_seed_files("seed_files", &self.seed_files)?;
        validation::validate_output_formats("formats", &self.formats)?;
        Ok(())
    }
}
