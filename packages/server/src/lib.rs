// Press SYNC Outlet Server - API Core
//
// This crate turns a publishing outlet into a front-end for the Press
// Blockchain gateway: it gates article submissions behind on-chain fee
// verification and AI moderation, records article provenance, and exposes
// vote reads. All blockchain operations happen in the external
// gateway/installer services; this service only coordinates them.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
