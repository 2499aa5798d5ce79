use crate::utils::error::{Result, SampleError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SampleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SampleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SampleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_age(field_name: &str, age: u8, max_age: u8) -> Result<()> {
    if age > max_age {
        return Err(SampleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: age.to_string(),
            reason: format!("Age must be at most {}", max_age),
        });
    }
    Ok(())
}

pub fn validate_seed_files(field_name: &str, files: &[String]) -> Result<()> {
    for file in files {
        let extension = std::path::Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str());
        if extension != Some("csv") {
            return Err(SampleError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: file.clone(),
                reason: "Seed files must use the .csv extension".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_output_formats(field_name: &str, formats: &[String]) -> Result<()> {
    let valid_formats = ["csv", "tsv", "json"];
    for format in formats {
        if !valid_formats.contains(&format.as_str()) {
            return Err(SampleError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    valid_formats.join(", ")
                ),
            });
        }
    }
    Ok(())
}
