//! Child registry: exclusive, ordered ownership of a container's children.
//!
//! Children live in a `SlotMap` arena keyed by [`ChildKey`]; a separate `order`
//! vector gives each child its dense index in `[0, len)`. Keys are weak
//! handles: they stay valid while the child is registered and go stale (never
//! alias) once it is removed.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use slotmap::{new_key_type, SlotMap};
use thiserror::Error;

use crate::widget::traits::Control;

new_key_type! {
    /// Generational handle to a registered child.
    pub struct ChildKey;
}

/// Identity of a registry, used to tag the children it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistryId(u64);

impl RegistryId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        RegistryId(NEXT.fetch_add(1, AtomicOrdering::Relaxed))
    }
}

/// Errors raised by index-based registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("index {index} out of range for {len} children")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Comparator for z-ordering: lower z-index first.
///
/// Equal z-indices compare equal, so a stable sort keeps insertion order.
pub fn z_order(a: &dyn Control, b: &dyn Control) -> Ordering {
    a.core().z_index().cmp(&b.core().z_index())
}

/// Ordered, owning collection of child controls.
pub struct ChildRegistry {
    id: RegistryId,
    nodes: SlotMap<ChildKey, Box<dyn Control>>,
    order: Vec<ChildKey>,
}

impl ChildRegistry {
    /// Create an empty registry with a fresh identity.
    pub fn new() -> Self {
        Self {
            id: RegistryId::next(),
            nodes: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// This registry's identity.
    pub fn id(&self) -> RegistryId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Append a child and return its index.
    pub fn add(&mut self, control: Box<dyn Control>) -> Result<usize, RegistryError> {
        let index = self.order.len();
        self.insert(control, index)?;
        Ok(index)
    }

    /// Insert a child at `index`, shifting later children up by one.
    ///
    /// `index == len` appends.
    pub fn insert(&mut self, mut control: Box<dyn Control>, index: usize) -> Result<(), RegistryError> {
        if index > self.order.len() {
            return Err(RegistryError::IndexOutOfRange { index, len: self.order.len() });
        }
        if control.core().owner.is_some() {
            return Err(RegistryError::InvalidArgument(format!(
                "control {:?} is already owned by another registry",
                control.core().id().unwrap_or("<anonymous>")
            )));
        }
        control.core_mut().owner = Some(self.id);
        let key = self.nodes.insert(control);
        self.order.insert(index, key);
        Ok(())
    }

    /// Remove and return the child at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Box<dyn Control>, RegistryError> {
        if index >= self.order.len() {
            return Err(RegistryError::IndexOutOfRange { index, len: self.order.len() });
        }
        let key = self.order.remove(index);
        self.release(key)
            .ok_or(RegistryError::IndexOutOfRange { index, len: self.order.len() })
    }

    /// Remove the first child whose id is `id`. `None` if there is none.
    pub fn remove_by_id(&mut self, id: &str) -> Option<Box<dyn Control>> {
        let index = self.index_of_id(id)?;
        let key = self.order.remove(index);
        self.release(key)
    }

    /// Remove the child behind `key`. `None` if the key is stale.
    pub fn remove_by_key(&mut self, key: ChildKey) -> Option<Box<dyn Control>> {
        let index = self.index_of(key)?;
        self.order.remove(index);
        self.release(key)
    }

    fn release(&mut self, key: ChildKey) -> Option<Box<dyn Control>> {
        let mut control = self.nodes.remove(key)?;
        control.core_mut().owner = None;
        Some(control)
    }

    /// Stable reorder by ascending z-index.
    pub fn sort_by_z_order(&mut self) {
        let nodes = &self.nodes;
        self.order.sort_by(|a, b| z_order(nodes[*a].as_ref(), nodes[*b].as_ref()));
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// The child at `index`.
    pub fn get(&self, index: usize) -> Result<&dyn Control, RegistryError> {
        let key = self.key_at(index)?;
        Ok(self.nodes[key].as_ref())
    }

    /// The child at `index`, mutably.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut dyn Control, RegistryError> {
        let key = self.key_at(index)?;
        let control: &mut dyn Control = self.nodes[key].as_mut();
        Ok(control)
    }

    /// The first child, in index order, whose id is `id`.
    pub fn find(&self, id: &str) -> Option<&dyn Control> {
        let index = self.index_of_id(id)?;
        self.get(index).ok()
    }

    /// The first child whose id is `id`, mutably.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut dyn Control> {
        let index = self.index_of_id(id)?;
        self.get_mut(index).ok()
    }

    /// The key of the child at `index`.
    pub fn key_at(&self, index: usize) -> Result<ChildKey, RegistryError> {
        self.order
            .get(index)
            .copied()
            .ok_or(RegistryError::IndexOutOfRange { index, len: self.order.len() })
    }

    /// Current index of the child behind `key`.
    pub fn index_of(&self, key: ChildKey) -> Option<usize> {
        self.order.iter().position(|k| *k == key)
    }

    fn index_of_id(&self, id: &str) -> Option<usize> {
        self.order
            .iter()
            .position(|k| self.nodes[*k].core().id() == Some(id))
    }

    /// The child behind `key`, if it is still registered.
    pub fn by_key(&self, key: ChildKey) -> Option<&dyn Control> {
        self.nodes.get(key).map(|c| c.as_ref())
    }

    /// The child behind `key`, mutably.
    pub fn by_key_mut(&mut self, key: ChildKey) -> Option<&mut dyn Control> {
        let control: &mut dyn Control = self.nodes.get_mut(key)?.as_mut();
        Some(control)
    }

    /// Children in index order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Control> + '_ {
        self.order.iter().map(move |k| self.nodes[*k].as_ref())
    }

    /// Keys in index order.
    pub fn keys(&self) -> &[ChildKey] {
        &self.order
    }

    /// Keys ordered for hit-testing: highest z first, later children first
    /// among equal z-indices.
    pub fn z_ordered_keys(&self) -> Vec<ChildKey> {
        let mut keys = Vec::with_capacity(self.order.len());
        self.z_ordered_keys_into(&mut keys);
        keys
    }

    /// Like [`z_ordered_keys`](Self::z_ordered_keys), reusing `out`.
    pub fn z_ordered_keys_into(&self, out: &mut Vec<ChildKey>) {
        out.clear();
        out.extend_from_slice(&self.order);
        out.sort_by(|a, b| z_order(self.nodes[*a].as_ref(), self.nodes[*b].as_ref()));
        out.reverse();
    }
}

impl Default for ChildRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ChildRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChildRegistry")
            .field("id", &self.id)
            .field("children", &self.iter().map(|c| c.core().id()).collect::<Vec<_>>())
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
