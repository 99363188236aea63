//! The concept catalog registry.
//!
//! This module provides [`ConceptCatalog`], a read-only index over concept
//! definitions. The built-in catalog is constructed once per process and
//! shared by reference.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use super::table::builtin_definitions;
use super::types::{ConceptCode, ConceptDefinition};
use crate::error::{EngineError, EngineResult};
use crate::models::{ConceptType, normalize_key};

static GLOBAL_CATALOG: Lazy<ConceptCatalog> =
    Lazy::new(|| ConceptCatalog::index(builtin_definitions()));

/// Read-only registry of concept definitions.
///
/// Definitions are indexed by [`ConceptCode`] and by their key name compared
/// case-insensitively.
///
/// # Example
///
/// ```
/// use finance_engine::catalog::{ConceptCatalog, ConceptCode};
///
/// let catalog = ConceptCatalog::global();
/// let layoff = catalog.lookup("CESANTÍAS").unwrap();
/// assert_eq!(layoff.code, ConceptCode::Layoff);
/// ```
#[derive(Debug, Clone)]
pub struct ConceptCatalog {
    definitions: Vec<ConceptDefinition>,
    by_key: HashMap<String, usize>,
    by_code: HashMap<ConceptCode, usize>,
}

impl ConceptCatalog {
    /// Returns the built-in catalog.
    pub fn global() -> &'static ConceptCatalog {
        &GLOBAL_CATALOG
    }

    /// Builds a catalog from custom definitions.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateDefinition` if two definitions share a code or a
    /// key name (case-insensitively).
    pub fn new(definitions: Vec<ConceptDefinition>) -> EngineResult<Self> {
        let mut seen_keys = HashSet::new();
        let mut seen_codes = HashSet::new();

        for definition in &definitions {
            if !seen_keys.insert(normalize_key(&definition.key_name))
                || !seen_codes.insert(definition.code)
            {
                return Err(EngineError::DuplicateDefinition {
                    key_name: definition.key_name.clone(),
                });
            }
        }

        Ok(Self::index(definitions))
    }

    fn index(definitions: Vec<ConceptDefinition>) -> Self {
        let by_key = definitions
            .iter()
            .enumerate()
            .map(|(i, d)| (normalize_key(&d.key_name), i))
            .collect();
        let by_code = definitions
            .iter()
            .enumerate()
            .map(|(i, d)| (d.code, i))
            .collect();

        Self {
            definitions,
            by_key,
            by_code,
        }
    }

    /// Finds a definition by key name, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ConceptNotFound` if no definition has that key name.
    pub fn lookup(&self, key_name: &str) -> EngineResult<&ConceptDefinition> {
        self.by_key
            .get(&normalize_key(key_name))
            .map(|&i| &self.definitions[i])
            .ok_or_else(|| EngineError::ConceptNotFound {
                key_name: key_name.to_string(),
            })
    }

    /// Finds a definition by code.
    pub fn get(&self, code: ConceptCode) -> Option<&ConceptDefinition> {
        self.by_code.get(&code).map(|&i| &self.definitions[i])
    }

    /// All definitions of the given type, in catalog order.
    pub fn by_type(&self, concept_type: ConceptType) -> impl Iterator<Item = &ConceptDefinition> {
        self.definitions
            .iter()
            .filter(move |d| d.concept_type == concept_type)
    }

    /// All definitions marked as required, in catalog order.
    pub fn required(&self) -> impl Iterator<Item = &ConceptDefinition> {
        self.definitions.iter().filter(|d| d.required)
    }

    /// The transport subsidy definition, if the catalog has one.
    pub fn transport_subsidy(&self) -> Option<&ConceptDefinition> {
        self.get(ConceptCode::TransportSubsidy)
    }

    /// All definitions, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ConceptDefinition> {
        self.definitions.iter()
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if the catalog has no definitions.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
