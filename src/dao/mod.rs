/// In-memory roster store implementation.
pub mod memory;
/// Storage abstraction layer for roster operations.
pub mod storage;
