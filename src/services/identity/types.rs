use serde::Deserialize;

/// The authenticated principal resolved by the identity service.
///
/// Inserted into request extensions by the auth middleware and dropped with the request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Identity {
    pub email: String,
}

impl Identity {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}
