//! Relational feedback: repository contract, SeaORM adapter and service.

pub mod repository;
pub mod seaorm;
pub mod service;

pub use repository::FeedbackRepository;
pub use seaorm::SeaOrmFeedbackRepository;
pub use service::FeedbackService;
