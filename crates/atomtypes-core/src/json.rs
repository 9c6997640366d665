//! JSON declaration feeds.
//!
//! ```json
//! {
//!   "module": "pattern_miner",
//!   "depends": ["core"],
//!   "types": [
//!     { "name": "PatternLink", "parents": ["Link", "Node"] }
//!   ]
//! }
//! ```

use crate::{DeclarationError, ModuleDeclarations};

impl ModuleDeclarations {
    /// Parse a batch from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, DeclarationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty-printed JSON form.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("serialization should not fail")
    }
}
