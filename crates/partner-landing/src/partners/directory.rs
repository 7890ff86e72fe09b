use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::domain::{PartnerCode, PartnerRecord};

#[derive(Debug, thiserror::Error)]
pub enum PartnerDatasetError {
    #[error("failed to read partner dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid partner dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("partner entry '{key}' carries mismatched partner_code '{code}'")]
    CodeMismatch { key: String, code: String },
}

/// On-disk shape of the generated dataset: `{"partners": {code: record}}`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PartnerDataset {
    pub partners: BTreeMap<String, PartnerRecord>,
}

/// Immutable lookup table from partner code to branding record.
#[derive(Debug, Clone, Default)]
pub struct PartnerDirectory {
    records: HashMap<PartnerCode, PartnerRecord>,
}

impl PartnerDirectory {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PartnerDatasetError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, PartnerDatasetError> {
        let dataset: PartnerDataset = serde_json::from_reader(reader)?;
        Self::from_dataset(dataset)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, PartnerDatasetError> {
        let dataset: PartnerDataset = serde_json::from_str(raw)?;
        Self::from_dataset(dataset)
    }

    pub fn from_dataset(dataset: PartnerDataset) -> Result<Self, PartnerDatasetError> {
        let mut records = HashMap::with_capacity(dataset.partners.len());
        for (key, record) in dataset.partners {
            if record.code.as_str() != key {
                return Err(PartnerDatasetError::CodeMismatch {
                    key,
                    code: record.code.0,
                });
            }
            records.insert(record.code.clone(), record);
        }

        Ok(Self { records })
    }

    /// Builds a directory from records keyed by their own codes.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = PartnerRecord>,
    {
        let records = records
            .into_iter()
            .map(|record| (record.code.clone(), record))
            .collect();
        Self { records }
    }

    pub fn get(&self, code: &str) -> Option<&PartnerRecord> {
        self.records.get(code)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.records.values().filter(|record| record.is_active()).count()
    }

    /// Records ordered by code.
    pub fn iter(&self) -> impl Iterator<Item = &PartnerRecord> {
        let mut records: Vec<&PartnerRecord> = self.records.values().collect();
        records.sort_by(|left, right| left.code.cmp(&right.code));
        records.into_iter()
    }
}
