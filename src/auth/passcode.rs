use crate::auth::JWT_SIGNING_KEY;
use jwt::VerifyWithKey;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct JwtPayload {
    pub username: String,
    pub verified: bool,
}

#[derive(Debug, Error)]
pub enum PasscodeError {
    #[error("the JWT signing key was not initialized")]
    SigningKeyMissing,
    #[error("passcode verification failed: {0}")]
    Invalid(#[from] jwt::Error),
}

pub fn decode(passcode: &str) -> Result<JwtPayload, PasscodeError> {
    let signing_key = JWT_SIGNING_KEY
        .get()
        .ok_or(PasscodeError::SigningKeyMissing)?;
    let jwt_payload: JwtPayload = passcode.verify_with_key(signing_key)?;
    Ok(jwt_payload)
}
