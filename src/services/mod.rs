/// OpenAPI documentation generation.
pub mod documentation;
/// Team draw orchestration over roster snapshots.
pub mod formation_service;
/// Health check service.
pub mod health_service;
/// Roster read/write operations.
pub mod roster_service;
