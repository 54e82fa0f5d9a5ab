pub mod analytics_service;
pub mod balance_service;
pub mod chart_service;
pub mod filter_service;
pub mod ingest_service;
