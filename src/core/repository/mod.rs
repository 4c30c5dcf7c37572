//! Repository descriptors
//!
//! - [`descriptor`] - one workspace of a service document, its collections and
//!   by-id lookups
//! - [`collection`] - well-known collection kinds
//! - [`template`] - URI template selection and filling

pub mod collection;
pub mod descriptor;
pub mod template;

pub use collection::{Collection, CollectionKind};
pub use descriptor::{EntryFactory, Repository, OBJECT_BY_ID, TYPE_BY_ID};
pub use template::{collect_templates, fill_template, percent_encode, pick_template, UriTemplate};
