use crate::core::{Exporter, Result};

pub struct ExportEngine<E: Exporter> {
    exporter: E,
}

impl<E: Exporter> ExportEngine<E> {
    pub fn new(exporter: E) -> Self {
        Self { exporter }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Collecting sample records...");
        let set = self.exporter.collect().await?;
        tracing::info!(
            "Collected {} persons, {} measurements",
            set.persons.len(),
            set.measurements.len()
        );

        tracing::info!("Deriving record queries...");
        let result = self.exporter.derive(set).await?;
        tracing::info!(
            "Derived {} rows ({} invalid measurements)",
            result.rows.len(),
            result.invalid_measurements.len()
        );

        tracing::info!("Writing outputs...");
        let output_path = self.exporter.write(result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
