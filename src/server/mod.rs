//! HTTP server implementation
//!
//! This module provides the HTTP server and routing functionality.

// Submodules
pub mod routes;

// Modular server components
pub mod builder;
pub mod server;
pub mod state;


pub use server::HttpServer;
