//! Registry of enum definitions keyed by `(owner, field)`.
//!
//! Hosts that declare enums at startup (rather than through the derive) bind
//! each definition to its owning type here. Re-declaring a field or rebinding
//! a constant name is an error instead of a silent no-op, so two live
//! definitions for one field cannot drift apart unnoticed.
//!
//! # Design
//!
//! - Owners in a `BTreeMap` for deterministic iteration
//! - Fields per owner in an `IndexMap` (declaration order)
//! - Definitions behind `Arc` so accessors can outlive a registry borrow

use std::collections::BTreeMap;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::{RwLock, RwLockReadGuard};
use rustc_hash::FxHashMap;

use crate::store::AttributeStore;
use crate::validation::ValidationErrors;
use crate::{EnumDefinition, EnumOptions, EnumValues, RegistryError};

/// Enum fields declared on one owner.
#[derive(Clone, Debug, Default)]
struct OwnerEnums {
    fields: IndexMap<String, Arc<EnumDefinition>>,
    /// Constant name → field it was bound for.
    constants: FxHashMap<String, String>,
}

/// Definitions for every owner, populated once at startup.
#[derive(Clone, Debug, Default)]
pub struct EnumRegistry {
    owners: BTreeMap<String, OwnerEnums>,
}

impl EnumRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define and register in one step.
    pub fn declare(
        &mut self,
        owner: &str,
        field: &str,
        values: impl Into<EnumValues>,
        options: EnumOptions,
    ) -> Result<Arc<EnumDefinition>, RegistryError> {
        let definition = EnumDefinition::define(field, values, options)?;
        self.register(owner, definition)
    }

    /// Bind an already-built definition to `owner`.
    ///
    /// Fails if the field is already declared on `owner` or if the
    /// definition's constant name is already bound there. Either way the
    /// existing binding is left as it was.
    #[tracing::instrument(level = "debug", skip_all, fields(owner = %owner, field = %definition.field()))]
    pub fn register(
        &mut self,
        owner: &str,
        definition: EnumDefinition,
    ) -> Result<Arc<EnumDefinition>, RegistryError> {
        let entry = self.owners.entry(owner.to_owned()).or_default();

        if entry.fields.contains_key(definition.field()) {
            return Err(RegistryError::DuplicateField {
                owner: owner.to_owned(),
                field: definition.field().to_owned(),
            });
        }
        if let Some(existing) = entry.constants.get(definition.constant_name()) {
            return Err(RegistryError::DuplicateConstant {
                owner: owner.to_owned(),
                constant: definition.constant_name().to_owned(),
                existing: existing.clone(),
            });
        }

        let definition = Arc::new(definition);
        entry.constants.insert(
            definition.constant_name().to_owned(),
            definition.field().to_owned(),
        );
        entry
            .fields
            .insert(definition.field().to_owned(), Arc::clone(&definition));
        tracing::debug!("enum registered");
        Ok(definition)
    }

    pub fn get(&self, owner: &str, field: &str) -> Option<&Arc<EnumDefinition>> {
        self.owners.get(owner)?.fields.get(field)
    }

    /// Whether `field` is declared as an enum on `owner`.
    pub fn is_enum(&self, owner: &str, field: &str) -> bool {
        self.get(owner, field).is_some()
    }

    /// The definition a constant name is bound to.
    pub fn by_constant(&self, owner: &str, constant: &str) -> Option<&Arc<EnumDefinition>> {
        let entry = self.owners.get(owner)?;
        let field = entry.constants.get(constant)?;
        entry.fields.get(field)
    }

    /// Canonical values exposed under `owner::constant`.
    pub fn constant(&self, owner: &str, constant: &str) -> Option<Vec<&str>> {
        self.by_constant(owner, constant)
            .map(|def| def.values().collect())
    }

    /// Enum fields of `owner`, in declaration order.
    pub fn fields<'a>(&'a self, owner: &str) -> impl Iterator<Item = &'a str> {
        self.owners
            .get(owner)
            .into_iter()
            .flat_map(|entry| entry.fields.keys().map(String::as_str))
    }

    pub fn definitions<'a>(&'a self, owner: &str) -> impl Iterator<Item = &'a Arc<EnumDefinition>> {
        self.owners
            .get(owner)
            .into_iter()
            .flat_map(|entry| entry.fields.values())
    }

    /// Owners with at least one enum, sorted.
    pub fn owners(&self) -> impl Iterator<Item = &str> {
        self.owners.keys().map(String::as_str)
    }

    /// Total number of registered definitions.
    pub fn len(&self) -> usize {
        self.owners.values().map(|entry| entry.fields.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run every inclusion constraint of `owner` against `store`.
    pub fn validate_store<S: AttributeStore + ?Sized>(
        &self,
        owner: &str,
        store: &S,
    ) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for definition in self.definitions(owner) {
            let stored = definition.attr().load(store);
            definition.inclusion().validate(stored, &mut errors);
        }
        errors
    }
}

/// Thread-safe registry handle.
///
/// Registration takes the write lock, so the duplicate checks hold even when
/// several setup paths declare concurrently. Lookups hand out `Arc` clones and
/// never hold the lock past the call.
#[derive(Clone, Debug, Default)]
pub struct SharedRegistry(Arc<RwLock<EnumRegistry>>);

impl SharedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(
        &self,
        owner: &str,
        field: &str,
        values: impl Into<EnumValues>,
        options: EnumOptions,
    ) -> Result<Arc<EnumDefinition>, RegistryError> {
        let definition = EnumDefinition::define(field, values, options)?;
        self.0.write().register(owner, definition)
    }

    pub fn register(
        &self,
        owner: &str,
        definition: EnumDefinition,
    ) -> Result<Arc<EnumDefinition>, RegistryError> {
        self.0.write().register(owner, definition)
    }

    pub fn get(&self, owner: &str, field: &str) -> Option<Arc<EnumDefinition>> {
        self.0.read().get(owner, field).cloned()
    }

    pub fn is_enum(&self, owner: &str, field: &str) -> bool {
        self.0.read().is_enum(owner, field)
    }

    pub fn validate_store<S: AttributeStore + ?Sized>(
        &self,
        owner: &str,
        store: &S,
    ) -> ValidationErrors {
        self.0.read().validate_store(owner, store)
    }

    /// Borrow the registry for several lookups under one read lock.
    pub fn read(&self) -> RwLockReadGuard<'_, EnumRegistry> {
        self.0.read()
    }
}
