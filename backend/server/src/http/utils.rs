use axum::{
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use super::error::{HttpError, INVALID_REQUEST_MESSAGE};

/// JSON extractor answering malformed bodies with the gateway's 400 failure body.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::warn!(%rejection, "rejected request body");
                Err(
                    HttpError::bad_request(INVALID_REQUEST_MESSAGE, Some(rejection.body_text()))
                        .into_response(),
                )
            }
        }
    }
}
