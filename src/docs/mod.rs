//! Document collection catalogs (knowledge base and session attachments).

pub mod catalog;

pub use catalog::{DocScope, DocumentCatalog, SessionDocuments};
