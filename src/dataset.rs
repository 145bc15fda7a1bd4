// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dataset source: an ordered, read-only collection of fatwa records.
//!
//! Loaded once, validated once. Order is the order of the JSON array and is
//! the tie-break order for ranking, so it is never rearranged.

use crate::error::DatasetError;
use crate::types::Fatwa;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

/// Sample records compiled into the binary.
const BUILTIN_JSON: &str = include_str!("../data/fatwas.json");

/// What the remote fallback gets to see of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgeEntry {
    pub id: String,
    /// The record's `medical_context`.
    pub keywords: String,
    pub question: String,
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Fatwa>,
    positions: HashMap<String, usize>,
}

impl Dataset {
    /// Validate and wrap records. Ids must be non-empty and unique.
    pub fn new(records: Vec<Fatwa>) -> Result<Self, DatasetError> {
        let mut positions = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if record.id.trim().is_empty() {
                return Err(DatasetError::EmptyId { index });
            }
            if let Some(&first) = positions.get(&record.id) {
                return Err(DatasetError::DuplicateId {
                    id: record.id.clone(),
                    first,
                    second: index,
                });
            }
            positions.insert(record.id.clone(), index);
        }
        Ok(Dataset { records, positions })
    }

    /// Parse a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let records: Vec<Fatwa> = serde_json::from_str(json).map_err(DatasetError::Parse)?;
        Self::new(records)
    }

    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), records = dataset.len(), "loaded dataset");
        Ok(dataset)
    }

    /// The bundled sample dataset.
    pub fn builtin() -> Result<Self, DatasetError> {
        Self::from_json_str(BUILTIN_JSON)
    }

    pub fn as_slice(&self) -> &[Fatwa] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fatwa> {
        self.records.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Fatwa> {
        self.positions.get(id).map(|&i| &self.records[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Look up ids in the order given. Unknown ids are skipped.
    pub fn resolve<S: AsRef<str>>(&self, ids: &[S]) -> Vec<&Fatwa> {
        ids.iter().filter_map(|id| self.get(id.as_ref())).collect()
    }

    /// The compact view sent to the remote fallback, in dataset order.
    pub fn knowledge_map(&self) -> Vec<KnowledgeEntry> {
        self.records
            .iter()
            .map(|f| KnowledgeEntry {
                id: f.id.clone(),
                keywords: f.medical_context.clone(),
                question: f.question.clone(),
                title: f.title.clone(),
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Fatwa;
    type IntoIter = std::slice::Iter<'a, Fatwa>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
