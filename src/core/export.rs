use crate::config::dataset::DatasetConfig;
use crate::core::text;
use crate::core::{ConfigProvider, ExportResult, Exporter, Result, SampleSet, Storage};
use crate::domain::model::{Measurement, Person, PersonRow};
use crate::utils::validation::Validate;

pub struct DatasetExporter<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> DatasetExporter<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Exporter for DatasetExporter<S, C> {
    async fn collect(&self) -> Result<SampleSet> {
        let mut set = SampleSet::default();

        // 讀取 TOML 資料集
        if let Some(path) = self.config.dataset_path() {
            tracing::debug!("Loading dataset from: {}", path);
            let dataset = DatasetConfig::from_file(path)?;
            dataset.validate()?;
            set = dataset.to_sample_set();
        }

        // 合併 CSV 種子檔
        for seed in self.config.seed_files() {
            tracing::debug!("Reading person seed file: {}", seed);
            set.persons.extend(read_person_seeds(seed)?);
        }

        // 沒有任何資料時退回內建樣本
        if set.is_empty() {
            tracing::warn!("No dataset configured, generating sample data");
            set = builtin_sample_set();
        }

        Ok(set)
    }

    async fn derive(&self, set: SampleSet) -> Result<ExportResult> {
        let mut rows = Vec::with_capacity(set.persons.len());
        let header = [
            "name",
            "age",
            "life_stage",
            "adult",
            "can_vote",
            "can_retire",
            "years_to_retirement",
        ];
        let mut csv_lines = vec![header.join(",")];
        let mut tsv_lines = vec![header.join("\t")];

        for person in &set.persons {
            let row = PersonRow::from(person);
            let cells = [
                row.name.clone(),
                row.age.to_string(),
                row.life_stage.to_string(),
                row.adult.to_string(),
                row.can_vote.to_string(),
                row.can_retire.to_string(),
                row.years_to_retirement.to_string(),
            ];
            csv_lines.push(cells.join(","));
            tsv_lines.push(cells.join("\t"));
            rows.push(row);
        }

        let invalid_measurements: Vec<Measurement> = set
            .measurements
            .iter()
            .filter(|m| !m.is_valid())
            .cloned()
            .collect();

        if !invalid_measurements.is_empty() {
            tracing::debug!(
                "{} of {} measurements failed the validity check",
                invalid_measurements.len(),
                set.measurements.len()
            );
        }

        Ok(ExportResult {
            rows,
            csv_output: csv_lines.join("\n"),
            tsv_output: tsv_lines.join("\n"),
            invalid_measurements,
        })
    }

    async fn write(&self, result: ExportResult) -> Result<String> {
        let formats = self.config.output_formats();

        if formats.iter().any(|f| f == "csv") {
            self.storage
                .write_file("persons.csv", result.csv_output.as_bytes())
                .await?;
        }

        if formats.iter().any(|f| f == "tsv") {
            self.storage
                .write_file("persons.tsv", result.tsv_output.as_bytes())
                .await?;
        }

        if formats.iter().any(|f| f == "json") {
            let json_data = serde_json::to_string_pretty(&result.rows)?;
            self.storage
                .write_file("persons.json", json_data.as_bytes())
                .await?;
        }

        // 無效的量測另外輸出
        if !result.invalid_measurements.is_empty() {
            let json_data = serde_json::to_string_pretty(&result.invalid_measurements)?;
            self.storage
                .write_file("invalid_measurements.json", json_data.as_bytes())
                .await?;
        }

        Ok(self.config.output_path().to_string())
    }
}

fn read_person_seeds(path: &str) -> Result<Vec<Person>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut persons = Vec::new();
    for record in reader.deserialize::<Person>() {
        persons.push(record?);
    }
    Ok(persons)
}

fn builtin_sample_set() -> SampleSet {
    SampleSet {
        persons: vec![
            Person::new("Alice", 17),
            Person::new("Bob", 34),
            Person::new("老王", 70),
        ],
        measurements: vec![
            Measurement::new(Some("pressure".to_string()), 42),
            Measurement::new(Some(text::mixed_script_sample()), 7),
            Measurement::new(None, 5),
            Measurement::new(Some("drift".to_string()), -3),
        ],
    }
}
