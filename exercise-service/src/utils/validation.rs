use axum::{
    extract::{FromRequest, Request},
    Form,
};
use serde::de::DeserializeOwned;
use service_core::error::AppError;
use validator::Validate;

/// Form body that is deserialized and validated before the handler runs.
///
/// Both a malformed body and failed validation surface as `AppError`, so the
/// caller always gets the JSON error shape.
pub struct ValidatedForm<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedForm<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Form parse error: {}", e.body_text())))?;

        value.validate()?;

        Ok(ValidatedForm(value))
    }
}
