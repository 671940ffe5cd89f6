//! Analyzed feedback: repository contract, JSON document adapter and service.

pub mod repository;
pub mod document;
pub mod service;

pub use document::JsonDocumentRepository;
pub use repository::AnalyzedFeedbackRepository;
pub use service::AnalyzedFeedbackService;
