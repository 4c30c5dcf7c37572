//! CLI command implementations

pub mod init;
pub mod template;
pub mod validate;
