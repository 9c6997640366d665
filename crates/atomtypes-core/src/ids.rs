//! Dense integer handles for types and modules.
//!
//! All three handles are plain indices. Comparing two handles is O(1) integer
//! comparison and their ordering is allocation order, not name order.

use std::fmt;

/// Handle to a committed type.
///
/// Allocated densely in commit order, starting at 0. Once allocated an id
/// keeps its meaning for the lifetime of the hierarchy and is never reused.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    /// Raw index for serialization/debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Create a TypeId from a raw index. Only meaningful against the
    /// hierarchy that produced the index.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to a registered module.
///
/// Allocated when a module's batch commits; a rejected batch never
/// consumes an id.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(transparent)]
pub struct ModuleId(u32);

impl ModuleId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Run-independent type index.
///
/// Position of a type in the frozen hierarchy sorted by `(depth, name)`.
/// Unlike `TypeId`, it does not depend on module load order, so it is the
/// one to persist when ids must survive a restart.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(transparent)]
pub struct CanonicalId(u32);

impl CanonicalId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
