//! # Screenplay Document
//!
//! Document model shared by every screenplay crate.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ import: plain text / markup → Document      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ document: ordered blocks, one format each   │
//! │  - FormatRegistry lookups                   │
//! │  - JSON / markup serialization              │
//! │  - Visitor walk, substring search           │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor / analytics / linter                 │
//! └─────────────────────────────────────────────┘
//! ```

pub mod block;
pub mod error;
pub mod format;
pub mod import;
pub mod search;
pub mod serializer;
pub mod visitor;

pub use block::{Block, Document};
pub use error::{DocumentError, DocumentResult};
pub use format::{FormatKey, FormatSpec, FORMAT_REGISTRY};
pub use import::{normalize_whitespace, ImportKind};
pub use search::{search, SearchHit};
pub use visitor::{walk_block, walk_document, Visitor};
