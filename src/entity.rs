//! Entity capabilities
//!
//! The narrow interface a persistence adapter implements so the casts can
//! read and write attributes and ask how an attribute may be written.
//! [`MemoryEntity`] is an in-memory adapter for tests and tooling.

use std::collections::{BTreeMap, BTreeSet};

use crate::casts::{AttributeCast, CurrencyCast, SetOutcome};
use crate::domain::Value;
use crate::error::CastResult;

/// Capability set of a persisted entity.
pub trait Entity {
    /// Whether the attribute currently holds a value
    fn has_value(&self, key: &str) -> bool;

    /// Read an attribute. Dotted paths traverse related entities.
    ///
    /// # Errors
    /// Whatever the attribute's own cast fails with while materializing it
    fn get_value(&self, path: &str) -> CastResult<Option<Value>>;

    /// Assign an attribute, running the adapter's own casts
    fn set_value(&mut self, key: &str, value: Value) -> CastResult<()>;

    /// Whether the attribute has a declared cast or mutator accepting a currency
    fn is_writable_cast(&self, key: &str) -> bool;

    fn is_public_immutable_field(&self, key: &str) -> bool;

    /// Whether the attribute has a read-only computed form
    fn has_read_derivation(&self, key: &str) -> bool;
}

/// In-memory entity with declarable attribute capabilities.
#[derive(Debug, Clone, Default)]
pub struct MemoryEntity {
    attributes: BTreeMap<String, Value>,
    currency_casts: BTreeMap<String, CurrencyCast>,
    immutable_fields: BTreeMap<String, Value>,
    derived: BTreeMap<String, Value>,
    relations: BTreeMap<String, MemoryEntity>,
}

impl MemoryEntity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw attribute value
    pub fn with_attribute(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    /// Declare a writable attribute cast to a currency
    pub fn with_currency_cast(mut self, key: &str, cast: CurrencyCast) -> Self {
        self.currency_casts.insert(key.to_string(), cast);
        self
    }

    /// Declare a public read-only field with a fixed value
    pub fn with_immutable_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.immutable_fields.insert(key.to_string(), value.into());
        self
    }

    /// Declare a computed attribute without a write path
    pub fn with_read_derivation(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.derived.insert(key.to_string(), value.into());
        self
    }

    /// Attach a related entity reachable through `name.attribute` paths
    pub fn with_relation(mut self, name: &str, related: MemoryEntity) -> Self {
        self.relations.insert(name.to_string(), related);
        self
    }

    /// Raw stored value, bypassing casts
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn attributes(&self) -> &BTreeMap<String, Value> {
        &self.attributes
    }

    pub fn relation(&self, name: &str) -> Option<&MemoryEntity> {
        self.relations.get(name)
    }

    /// Assign a value through a cast and persist whatever it returns.
    pub fn assign(
        &mut self,
        cast: &dyn AttributeCast,
        key: &str,
        value: Option<Value>,
    ) -> CastResult<SetOutcome> {
        let outcome = cast.set(self, key, value)?;
        match &outcome {
            SetOutcome::Absent => {
                self.attributes.remove(key);
            }
            SetOutcome::Value(raw) => {
                self.attributes.insert(key.to_string(), raw.clone());
            }
            SetOutcome::Attributes(values) => {
                for (attribute, raw) in values {
                    self.attributes.insert(attribute.clone(), raw.clone());
                }
            }
            SetOutcome::Skipped => {}
        }
        Ok(outcome)
    }

    /// Materialize an attribute through a cast
    pub fn read(&self, cast: &dyn AttributeCast, key: &str) -> CastResult<Option<Value>> {
        cast.get(self, key, self.attributes.get(key))
    }

    /// Resolve a path to the entity owning it and its uncast value
    fn lookup<'a>(&'a self, path: &'a str) -> Option<(&'a MemoryEntity, &'a str, &'a Value)> {
        if let Some((relation, rest)) = path.split_once('.') {
            return self.relations.get(relation)?.lookup(rest);
        }

        self.immutable_fields
            .get(path)
            .or_else(|| self.derived.get(path))
            .or_else(|| self.attributes.get(path))
            .map(|value| (self, path, value))
    }
}

impl Entity for MemoryEntity {
    fn has_value(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    fn get_value(&self, path: &str) -> CastResult<Option<Value>> {
        let Some((owner, key, raw)) = self.lookup(path) else {
            return Ok(None);
        };

        let cast_applies = owner.attributes.contains_key(key)
            && !owner.immutable_fields.contains_key(key)
            && !owner.derived.contains_key(key);

        match owner.currency_casts.get(key) {
            Some(cast) if cast_applies => cast.get(owner, key, Some(raw)),
            _ => Ok(Some(raw.clone())),
        }
    }

    fn set_value(&mut self, key: &str, value: Value) -> CastResult<()> {
        if let Some((relation, rest)) = key.split_once('.') {
            if let Some(related) = self.relations.get_mut(relation) {
                return related.set_value(rest, value);
            }
        }

        match self.currency_casts.get(key).copied() {
            Some(cast) => self.assign(&cast, key, Some(value)).map(|_| ()),
            None => {
                self.attributes.insert(key.to_string(), value);
                Ok(())
            }
        }
    }

    fn is_writable_cast(&self, key: &str) -> bool {
        self.currency_casts.contains_key(key)
    }

    fn is_public_immutable_field(&self, key: &str) -> bool {
        self.immutable_fields.contains_key(key)
    }

    fn has_read_derivation(&self, key: &str) -> bool {
        self.derived.contains_key(key)
    }
}
