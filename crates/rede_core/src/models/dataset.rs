use crate::errors::CoreResult;
use crate::models::filter::distinct_districts;
use crate::models::institution::InstitutionRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// A dataset element that could not be read as an institution record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRecord {
    /// Index of the element in the raw JSON array
    pub index: usize,
    pub reason: String,
}

/// Immutable snapshot of one dataset load.
///
/// A record's position in `records()` is its identity for the lifetime of
/// the snapshot. District options are derived once here, since they only
/// change when the dataset does.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[InstitutionRecord]>,
    districts: Vec<String>,
    rejected: Vec<RejectedRecord>,
    loaded_at: DateTime<Utc>,
}

impl Dataset {
    pub fn new(records: Vec<InstitutionRecord>) -> Self {
        Self::with_rejected(records, Vec::new())
    }

    pub fn with_rejected(records: Vec<InstitutionRecord>, rejected: Vec<RejectedRecord>) -> Self {
        let districts = distinct_districts(&records);
        Self {
            records: records.into(),
            districts,
            rejected,
            loaded_at: Utc::now(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Parse a JSON array body, reading each element on its own so that one
    /// malformed element does not discard the rest.
    pub fn from_json(body: &str) -> CoreResult<Self> {
        let values: Vec<serde_json::Value> = serde_json::from_str(body)?;
        let mut records = Vec::with_capacity(values.len());
        let mut rejected = Vec::new();

        for (index, value) in values.into_iter().enumerate() {
            match serde_json::from_value::<InstitutionRecord>(value) {
                Ok(record) => records.push(record),
                Err(e) => {
                    log::warn!("Skipping dataset element {}: {}", index, e);
                    rejected.push(RejectedRecord {
                        index,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(Self::with_rejected(records, rejected))
    }

    pub fn records(&self) -> &[InstitutionRecord] {
        &self.records
    }

    /// Record at `position`, for the detail view
    pub fn get(&self, position: usize) -> Option<&InstitutionRecord> {
        self.records.get(position)
    }

    pub fn districts(&self) -> &[String] {
        &self.districts
    }

    pub fn rejected(&self) -> &[RejectedRecord] {
        &self.rejected
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<InstitutionRecord>> for Dataset {
    fn from(records: Vec<InstitutionRecord>) -> Self {
        Self::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LoadError;

    fn element(name: &str, district: &str, capacity: i64) -> String {
        format!(
            r#"{{
                "instituicao": "{name}",
                "servicosPrestados": "Convivência",
                "nivelProtecao": "Proteção Social",
                "complexidade": "Básica",
                "tipificacao": "SCFV",
                "enderecoCompleto": "Rua A, 1",
                "cep": 25950000,
                "bairro": "Centro",
                "distrito": "{district}",
                "tipoAtendimento": "Contínuo",
                "capacidadeAtendimento": {capacity},
                "publico": "Famílias"
            }}"#
        )
    }

    #[test]
    fn test_from_json_keeps_order() {
        let body = format!(
            "[{}, {}, {}]",
            element("CRAS Norte", "Norte", 100),
            element("CRAS Centro", "Centro", 80),
            element("CRAS Sul", "Sul", 60)
        );
        let dataset = Dataset::from_json(&body).unwrap();
        let names: Vec<&str> = dataset.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["CRAS Norte", "CRAS Centro", "CRAS Sul"]);
        assert_eq!(dataset.districts(), ["Centro", "Norte", "Sul"]);
        assert!(dataset.rejected().is_empty());
        assert_eq!(dataset.get(1).map(|r| r.name.as_str()), Some("CRAS Centro"));
        assert!(dataset.get(3).is_none());
    }

    #[test]
    fn test_from_json_flags_malformed_elements() {
        let body = format!(
            "[{}, {}, {{\"instituicao\": \"Sem campos\"}}, {}]",
            element("A", "Norte", 10),
            element("B", "Norte", -1),
            element("C", "Sul", 5)
        );
        let dataset = Dataset::from_json(&body).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[1].name, "C");

        let indices: Vec<usize> = dataset.rejected().iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 2]);
        assert!(dataset.rejected()[1].reason.contains("missing field"));
    }

    #[test]
    fn test_from_json_requires_array() {
        let result = Dataset::from_json(&element("A", "Norte", 1));
        assert!(matches!(result, Err(LoadError::Malformed(_))));

        let result = Dataset::from_json("not json");
        assert!(matches!(result, Err(LoadError::Malformed(_))));
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::empty();
        assert!(dataset.is_empty());
        assert!(dataset.districts().is_empty());
        assert!(Dataset::from_json("[]").unwrap().is_empty());
    }
}
