pub mod decoder;
pub mod event_bus;
pub mod ingest;
pub mod ports;
pub mod repository;
pub mod toast_queue;
