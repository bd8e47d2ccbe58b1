// Application layer - Use cases and service seams
pub mod chat_service;
pub mod completion;
pub mod extractor;
pub mod mock_charts;
pub mod prompt;
pub mod trend_service;
