//! Core résumé-builder library: the document model, the state store with
//! its persistence contract, the six template renderers, and the fixed
//! tailoring heuristics.
//!
//! The store is the single source of truth for one [`ResumeDocument`].
//! Everything degrades instead of failing: malformed stored data falls
//! back to defaults, persist failures are logged and dropped, and the
//! renderers tolerate every field being empty.

pub mod cover_letter;
pub mod dates;
pub mod document;
pub mod markdown;
pub mod patch;
pub mod photo;
pub mod render;
pub mod sanitize;
pub mod storage;
pub mod store;
pub mod suggest;
pub mod tailoring;

pub use document::{
    Language, PhotoShape, PhotoSize, ResumeDocument, SectionKey, TemplateId, TextAlign,
};
pub use patch::{ResumePatch, SectionData};
pub use sanitize::sanitize;
pub use storage::{FileStorage, MemoryStorage, StorageBackend, StorageError};
pub use store::{ResetDecision, ResumeStore};
