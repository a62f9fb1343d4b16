// src/web/extract.rs
use crate::error::AppError;
use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

/// `Json` com rejeição própria: corpo inválido responde 400 com `{"error": ...}`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `Path` com a mesma rejeição: `/guia_ensino/abc` também responde em JSON.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
