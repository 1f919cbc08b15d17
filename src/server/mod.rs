//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the catalog API,
//! including endpoints, the listing engine, the page cache, and data access. The
//! backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and extractor rejection mapping
//! - **Service Layer** (`service/`) - Validation, caching and orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Filtered, ordered and windowed queries plus update/delete operations
//! - **Model Layer** (`model/`) - Validated listing requests and per-resource descriptors
//! - **Cache** (`cache/`) - TTL page cache with single-flight miss handling
//! - **Error Layer** (`error/`) - Application error types and problem document mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, cache, settings)
//! - **Startup** (`startup`) - Database connection, migrations and cache janitor
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! A typical listing request flows through these layers:
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** extracts the raw query parameters and calls the service
//! 3. **Service** validates them into a listing request and derives the cache key
//! 4. **Cache** returns the stored page, or runs the computation once per key
//! 5. **Data** queries the database for the page and, always fresh, the record count
//! 6. **Service** assembles the response envelope with its self link
//! 7. **Controller** returns it as JSON, or the error as a problem document

pub mod cache;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
