/// Small shared response payloads.
pub mod common;
/// Team draw responses.
pub mod formation;
/// Health check payloads.
pub mod health;
/// Roster wire types.
pub mod roster;
/// Validation helpers for DTOs.
pub mod validation;
