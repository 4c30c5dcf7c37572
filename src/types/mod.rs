//! Atomic value types
//!
//! The protocol's primitive value kinds, their shared descriptors and the
//! rules that turn wire text into native values.
//!
//! ```rust
//! use cmis_client::types::{AtomicKind, AtomicParams, AtomicTypeRegistry, NativeValue};
//!
//! # fn example() -> cmis_client::domain::Result<()> {
//! let registry = AtomicTypeRegistry::global();
//! let boolean = registry.construct(AtomicKind::Boolean, &AtomicParams::default())?;
//! assert_eq!(boolean.convert_text("1")?, NativeValue::Boolean(true));
//! # Ok(())
//! # }
//! ```

pub mod atomic;
pub mod native;
pub mod registry;

pub use atomic::{AtomicKind, AtomicType, DateTimeResolution};
pub use native::{parse_bool, NativeValue};
pub use registry::{AtomicParams, AtomicTypeRegistry};
