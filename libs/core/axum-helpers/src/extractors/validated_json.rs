//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::Validate;

/// Deserializes a JSON body and runs [`Validate::validate`] on it.
///
/// Validation failures become `400 VALIDATION_ERROR` with an `errors` array
/// of `{ field, message }`; body-parsing failures keep axum's status code.
///
/// A request without a `Content-Type` header is read as `{}`, so missing
/// required fields are reported by validation rather than as 415. Types that
/// cannot be built from `{}` still get axum's rejection.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateTodo {
///     #[validate(length(min = 1, message = "Task is required"))]
///     task: String,
/// }
///
/// async fn create(ValidatedJson(input): ValidatedJson<CreateTodo>) -> String {
///     input.task
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !req.headers().contains_key(CONTENT_TYPE) {
            if let Ok(data) = serde_json::from_value::<T>(Value::Object(Map::new())) {
                return validated(data);
            }
        }

        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        validated(data)
    }
}

fn validated<T: Validate>(data: T) -> Result<ValidatedJson<T>, Response> {
    data.validate()
        .map_err(|e| AppError::from(e).into_response())?;

    Ok(ValidatedJson(data))
}
