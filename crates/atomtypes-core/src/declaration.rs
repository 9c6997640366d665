//! Declaration batches as a module supplies them.
//!
//! A batch is transient: a module builds it at load time, the registrar
//! consumes it, and nothing keeps a reference afterwards.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single type declaration: a name plus the names of its parents.
///
/// An empty parent list declares a root type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parents: Vec<String>,
}

impl TypeDeclaration {
    pub fn new<S: Into<String>>(name: impl Into<String>, parents: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            parents: parents.into_iter().map(Into::into).collect(),
        }
    }

    pub fn root(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parents: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

/// Everything one module contributes to the hierarchy.
///
/// `depends` names the modules that must already be registered before this
/// one; `types` is processed in order, so parents come before children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDeclarations {
    pub module: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends: Vec<String>,
    #[serde(default)]
    pub types: Vec<TypeDeclaration>,
}

impl ModuleDeclarations {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            depends: Vec::new(),
            types: Vec::new(),
        }
    }

    /// Builder: require `module` to be registered first.
    pub fn depends_on(mut self, module: impl Into<String>) -> Self {
        self.depends.push(module.into());
        self
    }

    /// Builder: append a declaration.
    pub fn declare<S: Into<String>>(
        mut self,
        name: impl Into<String>,
        parents: impl IntoIterator<Item = S>,
    ) -> Self {
        self.types.push(TypeDeclaration::new(name, parents));
        self
    }

    /// Builder: append a root declaration.
    pub fn declare_root(mut self, name: impl Into<String>) -> Self {
        self.types.push(TypeDeclaration::root(name));
        self
    }

    pub fn push(&mut self, decl: TypeDeclaration) {
        self.types.push(decl);
    }

    /// Build a batch from the two companion tables a module ships:
    /// a flat enumeration of names and a name → parents mapping.
    ///
    /// Declarations follow the enumeration order. Names that only occur in
    /// the mapping are appended after it in mapping order, so nothing is
    /// dropped; the registrar reports them if they are out of order.
    pub fn from_parts(module: impl Into<String>, names: &[&str], inheritance: &[(&str, &[&str])]) -> Self {
        let mut parents: IndexMap<&str, &[&str]> = inheritance.iter().copied().collect();
        let mut batch = Self::new(module);

        for &name in names {
            let declared = parents.shift_remove(name).unwrap_or(&[]);
            batch.push(TypeDeclaration::new(name, declared.iter().copied()));
        }
        for (name, declared) in parents {
            batch.push(TypeDeclaration::new(name, declared.iter().copied()));
        }

        batch
    }

    pub fn get(&self, name: &str) -> Option<&TypeDeclaration> {
        self.types.iter().find(|decl| decl.name == name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDeclaration> {
        self.types.iter()
    }

    /// Declared type names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|decl| decl.name.as_str())
    }
}
