pub mod ingest;

pub use ingest::MediaIngestService;
