use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// `Path<T>` that reports unparsable segments (e.g. `/pets/abc` or an id that
/// overflows `i32`) as a 400 `{error, code}` body instead of axum's plain-text
/// rejection.
pub struct AppPath<T>(pub T);

impl<S, T> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(AppPath(value)),
            Err(rejection) => {
                tracing::debug!(status = %rejection.status(), "Rejected path parameters");
                Err(AppError::Validation(rejection.body_text()))
            }
        }
    }
}
