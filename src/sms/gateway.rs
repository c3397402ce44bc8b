use crate::errors::ServerError;
use reqwest::blocking::Client;

/// Outbound SMS boundary. The Free Mobile API has no destination
/// parameter (messages go to the account owner's line), so the contract
/// is just the message text; recipients are tracked in the audit log.
pub trait SmsGateway: Send + Sync {
    fn send(&self, message: &str) -> Result<(), ServerError>;
}

pub struct FreeMobileGateway {
    user: String,
    api_key: String,
    endpoint: String,
    client: Client,
}

impl FreeMobileGateway {
    pub const DEFAULT_ENDPOINT: &'static str = "https://smsapi.free-mobile.fr/sendmsg";

    pub fn new(user: String, api_key: String) -> Self {
        Self::with_endpoint(user, api_key, Self::DEFAULT_ENDPOINT.to_string())
    }

    pub fn with_endpoint(user: String, api_key: String, endpoint: String) -> Self {
        Self {
            user,
            api_key,
            endpoint,
            client: Client::new(),
        }
    }

    /// Reads `FREE_USER` / `FREE_API_KEY`; `None` when either is unset.
    pub fn from_env() -> Option<Self> {
        let user = std::env::var("FREE_USER").ok()?;
        let api_key = std::env::var("FREE_API_KEY").ok()?;
        Some(Self::new(user, api_key))
    }
}

impl SmsGateway for FreeMobileGateway {
    fn send(&self, message: &str) -> Result<(), ServerError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("user", self.user.as_str()),
                ("pass", self.api_key.as_str()),
                ("msg", message),
            ])
            .send()
            .map_err(|e| ServerError::SmsError(format!("gateway request failed: {e}")))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ServerError::SmsError(format!(
                "gateway returned {}",
                response.status()
            )))
        }
    }
}

/// Stand-in used when no credentials are configured. Every attempt is
/// still logged, just as a failure.
pub struct SmsDisabled;

impl SmsGateway for SmsDisabled {
    fn send(&self, _message: &str) -> Result<(), ServerError> {
        Err(ServerError::SmsError(
            "SMS gateway not configured (set FREE_USER and FREE_API_KEY)".to_string(),
        ))
    }
}
