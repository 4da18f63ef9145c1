//! # Classroom API Server Library
//!
//! This library provides the core functionality for the classroom API server:
//! a ping endpoint, paginated static users, task CRUD, a filtered product
//! catalog, credential-gated orders, and user profiles, all over in-memory
//! collections.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `extract`: Request extractors that reject with `ApiError`
//! - `middleware`: Basic authentication for order creation
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
