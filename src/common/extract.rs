// src/common/extract.rs

use axum::extract::{FromRequest, Request};
use axum::Json;

use crate::common::error::AppError;

/// `Json` que devolve o corpo inválido no formato de erro da API
/// (`{"error", "details"}`) em vez do texto puro do axum.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = axum::extract::rejection::JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(AppJson(value))
    }
}
