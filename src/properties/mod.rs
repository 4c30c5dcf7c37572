//! Property definitions
//!
//! Parses the property definitions advertised with an object type and uses
//! them to pull validated values out of an object's property set.

pub mod definition;
pub mod parser;

pub use definition::{ObjectTypeRef, PropertyDefinition};
pub use parser::PropertyDefinitionParser;
