use crate::domain::model::{Measurement, Person, SampleSet};
use crate::utils::error::{Result, SampleError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const MAX_AGE: u8 = 130;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub dataset: DatasetInfo,
    #[serde(default)]
    pub persons: Vec<PersonEntry>,
    #[serde(default)]
    pub measurements: Vec<MeasurementEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonEntry {
    pub name: String,
    pub age: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementEntry {
    pub name: Option<String>,
    pub value: i64,
}

impl DatasetConfig {
    /// 從 TOML 檔案載入資料集
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SampleError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析資料集
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SampleError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATASET_NAME})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證資料集的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("dataset.name", &self.dataset.name)?;

        for person in &self.persons {
            validation::validate_non_empty_string("persons.name", &person.name)?;
            validation::validate_age("persons.age", person.age, MAX_AGE)?;
        }

        // 量測不在此驗證：name/value 不合法是資料本身的狀態
        Ok(())
    }

    pub fn to_sample_set(&self) -> SampleSet {
        SampleSet {
            persons: self
                .persons
                .iter()
                .map(|p| Person::new(p.name.clone(), p.age))
                .collect(),
            measurements: self
                .measurements
                .iter()
                .map(|m| Measurement::new(m.name.clone(), m.value))
                .collect(),
        }
    }
}

impl Validate for DatasetConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_dataset() {
        let toml_content = r#"
[dataset]
name = "people"
description = "Sample people"
version = "1.0.0"

[[persons]]
name = "Alice"
age = 17

[[measurements]]
name = "pressure"
value = 42

[[measurements]]
value = 5
"#;

        let config = DatasetConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.dataset.name, "people");
        assert_eq!(config.persons.len(), 1);
        assert_eq!(config.measurements.len(), 2);
        assert!(config.measurements[1].name.is_none());

        let set = config.to_sample_set();
        assert_eq!(set.persons[0], Person::new("Alice", 17));
        assert!(!set.measurements[1].is_valid());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_DATASET_NAME", "from-env");

        let toml_content = r#"
[dataset]
name = "${TEST_DATASET_NAME}"
description = "test"
version = "1.0"
"#;

        let config = DatasetConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.dataset.name, "from-env");

        std::env::remove_var("TEST_DATASET_NAME");
    }

    #[test]
    fn test_unset_env_var_is_left_as_is() {
        let toml_content = r#"
[dataset]
name = "${SAMPLE_DOMAIN_UNSET_VAR}"
description = "test"
version = "1.0"
"#;

        let config = DatasetConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.dataset.name, "${SAMPLE_DOMAIN_UNSET_VAR}");
    }

    #[test]
    fn test_validation_rejects_blank_person_name() {
        let toml_content = r#"
[dataset]
name = "people"
description = "test"
version = "1.0"

[[persons]]
name = "  "
age = 30
"#;

        let config = DatasetConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_implausible_age() {
        let toml_content = r#"
[dataset]
name = "people"
description = "test"
version = "1.0"

[[persons]]
name = "Methuselah"
age = 200
"#;

        let config = DatasetConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_dataset_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[dataset]
name = "file-test"
description = "File test"
version = "1.0"

[[persons]]
name = "Bob"
age = 34
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = DatasetConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.dataset.name, "file-test");
        assert_eq!(config.persons[0].age, 34);
    }

    #[test]
    fn test_malformed_toml_reports_parse_field() {
        let err = DatasetConfig::from_toml_str("not [ valid toml").unwrap_err();
        assert!(matches!(
            err,
            SampleError::ConfigValidationError { ref field, .. } if field == "toml_parsing"
        ));
    }
}
