//! Authenticated session client for the register/login/poll scenario.

use crate::error::{DispatchError, SessionError};
use crate::result::DispatchResult;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    password: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: Option<String>,
}

/// HTTP client bound to one base URL and, after [`SessionClient::login`], one bearer token.
pub struct SessionClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl SessionClient {
    pub const REGISTER_PATH: &'static str = "/auth/register/";
    pub const LOGIN_PATH: &'static str = "/auth/login/";

    /// Create a client for the service at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, DispatchError> {
        Url::parse(base_url).map_err(|e| DispatchError::InvalidEndpoint {
            endpoint: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Register a new account.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> Result<(), SessionError> {
        let request = RegisterRequest {
            username,
            password,
            email,
        };
        let response = self
            .client
            .post(self.url(Self::REGISTER_PATH))
            .json(&request)
            .send()
            .await
            .map_err(|source| SessionError::Transport {
                step: "register",
                source,
            })?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(SessionError::Rejected {
                step: "register",
                status,
                body,
            });
        }

        debug!("Registered user: {username}");
        Ok(())
    }

    /// Log in and keep the returned token for later requests.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), SessionError> {
        let request = LoginRequest { username, password };
        let response = self
            .client
            .post(self.url(Self::LOGIN_PATH))
            .json(&request)
            .send()
            .await
            .map_err(|source| SessionError::Transport {
                step: "login",
                source,
            })?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(SessionError::Rejected {
                step: "login",
                status,
                body,
            });
        }

        let login: LoginResponse = response
            .json()
            .await
            .map_err(|source| SessionError::Transport {
                step: "login",
                source,
            })?;
        let token = login.token.ok_or(SessionError::MissingToken)?;

        debug!("Logged in user: {username}");
        self.token = Some(token);
        Ok(())
    }

    /// `GET <base_url><path>`, carrying the bearer token when logged in.
    pub async fn get(&self, path: &str) -> DispatchResult {
        let mut request = self.client.get(self.url(path));
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        match request.send().await {
            Ok(response) => DispatchResult::Status(response.status().as_u16()),
            Err(e) => DispatchResult::Error(e.to_string()),
        }
    }
}
