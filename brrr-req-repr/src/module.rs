//! Whole-program containers handed over by the external parser

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::decl::Decl;
use crate::error::ReprResult;

/// A parsed source file: its top-level declarations in document order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Module {
    /// Module name from the header, if any
    pub name: Option<String>,
    pub decls: Vec<Decl>,
}

impl Module {
    pub fn new(decls: Vec<Decl>) -> Self {
        Self { name: None, decls }
    }

    /// Decode a tree serialized as JSON
    pub fn from_json(json: &str) -> ReprResult<Self> {
        decode_tree(json)
    }

    /// Serialize as JSON
    pub fn to_json(&self) -> ReprResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Outcome of parsing a submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParsedProgram {
    /// The source did not parse; nothing further is known
    Unparsable,
    /// The full tree
    Parsed(Module),
}

impl ParsedProgram {
    /// The tree, when parsing succeeded
    pub fn module(&self) -> Option<&Module> {
        match self {
            Self::Parsed(module) => Some(module),
            Self::Unparsable => None,
        }
    }

    /// Decode a parse outcome serialized as JSON
    pub fn from_json(json: &str) -> ReprResult<Self> {
        decode_tree(json)
    }
}

impl From<Module> for ParsedProgram {
    fn from(module: Module) -> Self {
        Self::Parsed(module)
    }
}

/// Decode without serde_json's nesting limit: every expression level costs
/// several JSON levels, so ordinary programs exceed the default of 128.
fn decode_tree<T: DeserializeOwned>(json: &str) -> ReprResult<T> {
    let mut de = serde_json::Deserializer::from_str(json);
    de.disable_recursion_limit();
    let value = T::deserialize(&mut de)?;
    de.end()?;
    Ok(value)
}
