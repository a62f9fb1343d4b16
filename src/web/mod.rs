// src/web/mod.rs
pub mod auth_handlers;
pub mod extract;
pub mod guia_handlers;
pub mod mw_auth;
pub mod professor_handlers;
pub mod routes;
