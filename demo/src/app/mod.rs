pub mod storage;
pub mod tracing;
