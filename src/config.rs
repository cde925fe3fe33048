use std::env;

/// optional api secrets, read once at startup and passed by reference
/// into the lookups that need them
pub struct ApiCredentials {
    pub hibp_key: Option<String>,
    pub hunter_key: Option<String>,
}

impl ApiCredentials {
    /// an empty env var counts as unset, same as a missing one
    pub fn from_env() -> Self {
        Self {
            hibp_key: non_empty(env::var("HIBP_API_KEY")),
            hunter_key: non_empty(env::var("HUNTERIO_API_KEY")),
        }
    }

    pub fn none() -> Self {
        Self {
            hibp_key: None,
            hunter_key: None,
        }
    }
}

fn non_empty(var: Result<String, env::VarError>) -> Option<String> {
    match var {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}
