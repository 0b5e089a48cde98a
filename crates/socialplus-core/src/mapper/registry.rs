//! Name-based lookup of composite mappers.

use std::collections::{HashMap, HashSet};

use super::descriptor::CompositeMapper;
use super::error::RegistryError;

/// A closed set of composite mappers, resolved by class name.
#[derive(Debug)]
pub struct Registry {
    mappers: &'static [&'static CompositeMapper],
}

impl Registry {
    /// Create a registry over a static list of mappers.
    #[must_use]
    pub const fn new(mappers: &'static [&'static CompositeMapper]) -> Self {
        Self { mappers }
    }

    /// The registry holding every SocialPlus model.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &crate::models::REGISTRY
    }

    /// Find the mapper for a class name.
    #[must_use]
    pub fn lookup(&self, class_name: &str) -> Option<&'static CompositeMapper> {
        self.mappers
            .iter()
            .find(|mapper| mapper.class_name == class_name)
            .copied()
    }

    /// All registered mappers.
    pub fn iter(&self) -> impl Iterator<Item = &'static CompositeMapper> + '_ {
        self.mappers.iter().copied()
    }

    /// Number of registered mappers.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.mappers.len()
    }

    /// Whether no mapper is registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }

    /// Verify that class names and wire names are unique, every composite
    /// reference resolves and references are acyclic.
    pub fn check(&self) -> Result<(), RegistryError> {
        let mut seen = HashSet::new();
        for mapper in self.mappers {
            if !seen.insert(mapper.class_name) {
                return Err(RegistryError::DuplicateClass {
                    class_name: mapper.class_name,
                });
            }

            let mut wire_names = HashSet::new();
            for field in mapper.fields {
                if !wire_names.insert(field.serialized_name) {
                    return Err(RegistryError::DuplicateWireName {
                        class_name: mapper.class_name,
                        wire_name: field.serialized_name,
                    });
                }
            }

            for (field, target) in mapper.references() {
                if self.lookup(target).is_none() {
                    return Err(RegistryError::UnresolvedReference {
                        class_name: mapper.class_name,
                        field: field.name,
                        target,
                    });
                }
            }
        }

        let mut marks = HashMap::new();
        for mapper in self.mappers {
            let mut stack = Vec::new();
            self.visit(mapper, &mut marks, &mut stack)?;
        }
        Ok(())
    }

    /// Depth-first walk; a class met again while still on the stack closes a cycle.
    fn visit(
        &self,
        mapper: &'static CompositeMapper,
        marks: &mut HashMap<&'static str, Mark>,
        stack: &mut Vec<&'static str>,
    ) -> Result<(), RegistryError> {
        match marks.get(mapper.class_name) {
            Some(Mark::Done) => return Ok(()),
            Some(Mark::Active) => {
                let start = stack
                    .iter()
                    .position(|name| *name == mapper.class_name)
                    .unwrap_or(0);
                let mut path = stack[start..].to_vec();
                path.push(mapper.class_name);
                return Err(RegistryError::Cycle { path });
            }
            None => {}
        }

        marks.insert(mapper.class_name, Mark::Active);
        stack.push(mapper.class_name);
        for (_, target) in mapper.references() {
            if let Some(next) = self.lookup(target) {
                self.visit(next, marks, stack)?;
            }
        }
        stack.pop();
        marks.insert(mapper.class_name, Mark::Done);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Active,
    Done,
}
