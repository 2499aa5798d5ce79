use sample_domain::{CliConfig, DatasetExporter, ExportEngine, LocalStorage};
use tempfile::TempDir;

fn config_for(output_path: &std::path::Path) -> CliConfig {
    CliConfig {
        dataset: None,
        seed_files: vec![],
        output_path: output_path.to_str().unwrap().to_string(),
        formats: vec!["csv".to_string(), "tsv".to_string(), "json".to_string()],
        verbose: false,
    }
}

fn run_engine(config: CliConfig) -> ExportEngine<DatasetExporter<LocalStorage, CliConfig>> {
    let storage = LocalStorage::new(config.output_path.clone());
    ExportEngine::new(DatasetExporter::new(storage, config))
}

#[tokio::test]
async fn test_end_to_end_export_from_toml_dataset() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out");

    let dataset_path = temp_dir.path().join("dataset.toml");
    std::fs::write(
        &dataset_path,
        r#"
[dataset]
name = "people"
description = "Integration test dataset"
version = "1.0.0"

[[persons]]
name = "Alice"
age = 17

[[persons]]
name = "老王"
age = 70

[[measurements]]
name = "pressure"
value = 42

[[measurements]]
value = 5
"#,
    )
    .unwrap();

    let mut config = config_for(&output_path);
    config.dataset = Some(dataset_path.to_str().unwrap().to_string());

    let result = run_engine(config).run().await;
    assert!(result.is_ok());

    // CSV carries the derived columns per person
    let csv = std::fs::read_to_string(output_path.join("persons.csv")).unwrap();
    assert!(csv.starts_with("name,age,life_stage,adult,can_vote,can_retire,years_to_retirement"));
    assert!(csv.contains("Alice,17,Teenager,false,false,false,48"));
    assert!(csv.contains("老王,70,Senior,true,true,true,0"));

    // TSV mirrors the CSV
    let tsv = std::fs::read_to_string(output_path.join("persons.tsv")).unwrap();
    assert!(tsv.contains("Alice\t17\tTeenager"));

    // JSON rows parse back and keep the stage labels
    let json = std::fs::read_to_string(output_path.join("persons.json")).unwrap();
    let rows: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["life_stage"], "Teenager");
    assert_eq!(rows[1]["name"], "老王");

    // The nameless measurement lands in the invalid report
    let invalid = std::fs::read_to_string(output_path.join("invalid_measurements.json")).unwrap();
    let entries: Vec<serde_json::Value> = serde_json::from_str(&invalid).unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0]["name"].is_null());
}

#[tokio::test]
async fn test_export_falls_back_to_builtin_samples() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out");

    let result = run_engine(config_for(&output_path)).run().await;
    assert!(result.is_ok());

    let csv = std::fs::read_to_string(output_path.join("persons.csv")).unwrap();
    assert!(csv.contains("Alice"));
    assert!(csv.contains("老王"));

    // Builtin samples include invalid measurements as well
    assert!(output_path.join("invalid_measurements.json").exists());
}

#[tokio::test]
async fn test_export_merges_csv_seed_files() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out");

    let seed_path = temp_dir.path().join("extra_persons.csv");
    std::fs::write(&seed_path, "name,age\nCarol,64\n佐藤,12\n").unwrap();

    let dataset_path = temp_dir.path().join("dataset.toml");
    std::fs::write(
        &dataset_path,
        r#"
[dataset]
name = "seeded"
description = "Dataset plus seed file"
version = "1.0.0"

[[persons]]
name = "Alice"
age = 17
"#,
    )
    .unwrap();

    let mut config = config_for(&output_path);
    config.dataset = Some(dataset_path.to_str().unwrap().to_string());
    config.seed_files = vec![seed_path.to_str().unwrap().to_string()];

    let result = run_engine(config).run().await;
    assert!(result.is_ok());

    let csv = std::fs::read_to_string(output_path.join("persons.csv")).unwrap();
    assert!(csv.contains("Alice,17,Teenager"));
    assert!(csv.contains("Carol,64,Adult,true,true,false,1"));
    assert!(csv.contains("佐藤,12,Child"));
}

#[tokio::test]
async fn test_formats_limit_written_files() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out");

    let mut config = config_for(&output_path);
    config.formats = vec!["csv".to_string()];

    let result = run_engine(config).run().await;
    assert!(result.is_ok());

    assert!(output_path.join("persons.csv").exists());
    assert!(!output_path.join("persons.tsv").exists());
    assert!(!output_path.join("persons.json").exists());
}

#[tokio::test]
async fn test_missing_dataset_file_fails_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out");

    let mut config = config_for(&output_path);
    config.dataset = Some(
        temp_dir
            .path()
            .join("no-such-dataset.toml")
            .to_str()
            .unwrap()
            .to_string(),
    );

    let result = run_engine(config).run().await;
    assert!(result.is_err());
    assert!(!output_path.join("persons.csv").exists());
}
