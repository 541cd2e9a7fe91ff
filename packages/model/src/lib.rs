//! # Scribe Model
//!
//! Document tree and schema for the Scribe editor state.
//!
//! ```rust,ignore
//! use scribe_model::{Schema, builders::{doc, p}};
//!
//! let schema = Schema::basic();
//! let empty = schema.create_default();          // doc(paragraph)
//! let d = doc(vec![p("ok")]);
//! assert_eq!(d.content_size(), 4);
//! assert!(d.resolve(3)?.in_textblock());
//!
//! let copy = schema.node_from_json(&d.to_json())?;
//! assert_eq!(copy, d);
//! ```

pub mod builders;
mod error;
mod node;
mod schema;

pub use error::{ModelError, ModelResult};
pub use node::{Node, ResolvedPos};
pub use schema::{NodeKind, NodeType, Schema};
