//! Storage abstractions for service layer
//!
//! File-backed document collections for stores where a database server is
//! not part of the deployment.

pub mod json_collection_store;
