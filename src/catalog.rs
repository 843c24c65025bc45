use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

const BUILTIN_INITIATIVES: &str = include_str!("../assets/initiatives.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse initiative catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("initiative catalog is empty")]
    Empty,
    #[error("initiative id {0} appears more than once")]
    DuplicateId(u32),
    #[error("initiative {0} has a zero reduction weight")]
    ZeroWeight(u32),
}

/// One sustainability action and the tons of CO₂ it removes when active.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Initiative {
    pub id: u32,
    pub name: String,
    pub emoji: String,
    #[serde(rename = "reduction")]
    pub weight: u32,
    pub description: String,
    pub target: String,
}

/// The fixed, ordered list of initiatives shown on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    initiatives: Vec<Initiative>,
    initial_total: u32,
}

impl Catalog {
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let initiatives: Vec<Initiative> = serde_json::from_str(raw)?;
        Self::new(initiatives)
    }

    pub fn new(initiatives: Vec<Initiative>) -> Result<Self, CatalogError> {
        if initiatives.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for initiative in &initiatives {
            if !seen.insert(initiative.id) {
                return Err(CatalogError::DuplicateId(initiative.id));
            }
            if initiative.weight == 0 {
                return Err(CatalogError::ZeroWeight(initiative.id));
            }
        }

        let initial_total = initiatives.iter().map(|i| i.weight).sum();
        Ok(Self {
            initiatives,
            initial_total,
        })
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_INITIATIVES)
    }

    /// Sum of every weight; the tracker starts here.
    pub fn initial_total(&self) -> u32 {
        self.initial_total
    }

    pub fn get(&self, id: u32) -> Option<&Initiative> {
        self.initiatives.iter().find(|i| i.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Initiative> {
        self.initiatives.iter()
    }

    pub fn len(&self) -> usize {
        self.initiatives.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_eight_items_totalling_153() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.initial_total(), 153);

        let weights: Vec<u32> = catalog.iter().map(|i| i.weight).collect();
        assert_eq!(weights, vec![20, 25, 30, 15, 18, 25, 12, 8]);
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::builtin().unwrap();
        let reforestation = catalog.get(3).unwrap();
        assert_eq!(reforestation.name, "Company Reforestation");
        assert_eq!(reforestation.weight, 30);
        assert!(catalog.get(42).is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let raw = r#"[
            {"id": 1, "name": "a", "emoji": "x", "reduction": 5, "description": "", "target": ""},
            {"id": 1, "name": "b", "emoji": "y", "reduction": 6, "description": "", "target": ""}
        ]"#;
        assert!(matches!(
            Catalog::from_json(raw),
            Err(CatalogError::DuplicateId(1))
        ));
    }

    #[test]
    fn rejects_zero_weight() {
        let raw = r#"[
            {"id": 7, "name": "a", "emoji": "x", "reduction": 0, "description": "", "target": ""}
        ]"#;
        assert!(matches!(
            Catalog::from_json(raw),
            Err(CatalogError::ZeroWeight(7))
        ));
    }

    #[test]
    fn rejects_empty_and_malformed_input() {
        assert!(matches!(Catalog::from_json("[]"), Err(CatalogError::Empty)));
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
