//! # Registry Loading
//!
//! File-to-memory pipeline for a registry data file: read, parse by
//! extension, validate every record, reject the whole batch on any
//! violation, then normalize into an immutable canonical collection.
//!
//! ## Whole-Batch Rejection
//!
//! A registry file is an editorial unit. Partial loads would let a typo
//! in one record silently shrink the catalog, so validation walks ALL
//! records, collects every violation with its position and best-effort
//! id, and either returns the complete set of canonical models or a
//! [`RegistryError::ValidationFailed`] listing everything wrong.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use aireg_core::ModelId;

use crate::canonical::CanonicalModel;
use crate::error::{RecordViolation, RecordViolations, RegistryError};
use crate::normalize::normalize_records;
use crate::raw::RawModelRecord;

/// An immutable, fully normalized model registry.
///
/// Construction goes through [`ModelRegistry::load`]; once built, the
/// collection never changes. Source order is preserved exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRegistry {
    models: Vec<CanonicalModel>,
}

impl ModelRegistry {
    /// Load and normalize a registry data file.
    ///
    /// The format is chosen by extension: `.json` parses as JSON,
    /// `.yaml` / `.yml` as YAML. Any other extension is rejected before
    /// the file is read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let display_path = path.display().to_string();

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let format = match extension.as_deref() {
            Some("json") => RegistryFormat::Json,
            Some("yaml") | Some("yml") => RegistryFormat::Yaml,
            _ => {
                return Err(RegistryError::UnsupportedFormat { path: display_path });
            }
        };

        let contents = fs::read_to_string(path).map_err(|e| RegistryError::DocumentLoad {
            path: display_path.clone(),
            reason: e.to_string(),
        })?;

        let document: serde_json::Value = match format {
            RegistryFormat::Json => {
                serde_json::from_str(&contents).map_err(|e| RegistryError::DocumentLoad {
                    path: display_path.clone(),
                    reason: e.to_string(),
                })?
            }
            RegistryFormat::Yaml => {
                serde_yaml::from_str(&contents).map_err(|e| RegistryError::DocumentLoad {
                    path: display_path.clone(),
                    reason: e.to_string(),
                })?
            }
        };

        let records = match document {
            serde_json::Value::Array(entries) => entries,
            _ => {
                return Err(RegistryError::DocumentLoad {
                    path: display_path,
                    reason: "registry document root must be an array of records".to_string(),
                });
            }
        };

        tracing::debug!(path = %display_path, records = records.len(), "parsing registry records");

        let parsed = validate_records(records, &display_path)?;
        let models = normalize_records(&parsed);

        tracing::debug!(path = %display_path, models = models.len(), "registry loaded");

        Ok(Self { models })
    }

    /// All canonical models, in source order.
    pub fn models(&self) -> &[CanonicalModel] {
        &self.models
    }

    /// Number of models in the registry.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// True when the registry holds no models.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Look up a model by id.
    pub fn get(&self, id: &ModelId) -> Option<&CanonicalModel> {
        self.models.iter().find(|model| &model.id == id)
    }

    /// Iterate over the models in source order.
    pub fn iter(&self) -> impl Iterator<Item = &CanonicalModel> {
        self.models.iter()
    }
}

enum RegistryFormat {
    Json,
    Yaml,
}

/// Parse every raw value, collecting ALL violations before deciding.
///
/// Each record is parsed independently so a failure at index 2 still
/// reports the duplicate id at index 7. The best-effort id comes from
/// the raw object's `id` key so an otherwise-broken record is still
/// nameable in the error output.
fn validate_records(
    records: Vec<serde_json::Value>,
    path: &str,
) -> Result<Vec<RawModelRecord>, RegistryError> {
    let mut parsed = Vec::with_capacity(records.len());
    let mut violations = Vec::new();
    let mut seen_ids: HashMap<String, usize> = HashMap::new();

    for (index, value) in records.into_iter().enumerate() {
        let best_effort_id = value
            .get("id")
            .and_then(|v| v.as_str())
            .map(str::to_string);

        match RawModelRecord::deserialize(value) {
            Ok(record) => {
                let id = record.id().as_str().to_string();
                match seen_ids.get(&id) {
                    Some(first_index) => violations.push(RecordViolation {
                        index,
                        id: Some(id),
                        message: format!("duplicate model id (first seen at index {first_index})"),
                    }),
                    None => {
                        seen_ids.insert(id, index);
                        parsed.push(record);
                    }
                }
            }
            Err(e) => violations.push(RecordViolation {
                index,
                id: best_effort_id,
                message: e.to_string(),
            }),
        }
    }

    if violations.is_empty() {
        Ok(parsed)
    } else {
        Err(RegistryError::ValidationFailed {
            path: path.to_string(),
            violations: RecordViolations::new(violations),
        })
    }
}
