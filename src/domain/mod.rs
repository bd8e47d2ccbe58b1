// Domain layer - Pure data models
pub mod chart;
pub mod chat;
pub mod schema;
