//! Storage abstractions for service layer
//!
//! Contains the reusable whole-document JSON store the typed catalog sits on.

pub mod json_doc_store;
