//! Service layer for the feedback and analytics services.
//! - Repository traits keep services independent of the backing store.
//! - Services delegate to their repository without transforming data.

pub mod errors;
pub mod storage;
pub mod feedback;
pub mod analytics;
#[cfg(test)]
pub mod test_support;
