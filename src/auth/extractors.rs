use crate::auth::models::AuthContext;
use crate::auth::passcode;
use crate::auth::responses::{PasscodeExtractionError, PasscodeExtractionReason};
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::Json;

pub struct Player(pub AuthContext);

#[async_trait]
impl<S> FromRequestParts<S> for Player
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<PasscodeExtractionError>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(passcode) = parts.headers.get("Passcode") else {
            return Err(rejection(PasscodeExtractionReason::NoPasscodeHeaderProvided));
        };
        let Ok(passcode) = passcode.to_str() else {
            return Err(rejection(PasscodeExtractionReason::InvalidPasscode));
        };
        match passcode::decode(passcode) {
            Ok(jwt_payload) => Ok(Player(AuthContext {
                username: jwt_payload.username,
                verified: jwt_payload.verified,
            })),
            Err(err) => {
                tracing::debug!("Rejecting passcode: {err}.");
                Err(rejection(PasscodeExtractionReason::InvalidPasscode))
            }
        }
    }
}

fn rejection(reason: PasscodeExtractionReason) -> (StatusCode, Json<PasscodeExtractionError>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(PasscodeExtractionError {
            error: true,
            reason,
        }),
    )
}
