//! Source-level rewrite passes for decompiled Java class files.
//!
//! The decompiler rebuilds a typed [`syntax`] tree from bytecode; [`cast`] then reconciles the
//! explicit casts in that tree so the regenerated source compiles the same way the original did.

#![forbid(unsafe_code)]

pub mod cast;
pub mod config;
mod error;
pub mod oracle;
pub mod syntax;

pub use crate::cast::{add_cast_expressions, CastPass, CastReport, LOG_TARGET};
pub use crate::config::{init_tracing, CastConfig, LoggingConfig};
pub use crate::error::{CastError, ConfigError, Result};
pub use crate::oracle::{ClassDef, ClassHierarchy, ClassKind, TypeOracle};
