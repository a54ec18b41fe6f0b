use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Response, header};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::env;
use std::time::Duration;
use url::Url;

use crate::conversation::NavigatorApi;
use crate::error::{Error, Result};
use crate::observability::{CLIENT_REQUEST_ERRORS, CLIENT_REQUESTS};
use crate::types::{CareerPath, GoalCatalog, NavigatorTurn, Quest, QuestOutcome, UserProfile};

const DEFAULT_API_URL: &str = "http://localhost:8000/api/";
const DEFAULT_SESSION: &str = "default";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Career Cosmos API.
#[derive(Debug, Clone)]
pub struct Cosmos {
    client: ReqwestClient,
    base_url: Url,
    session: String,
    timeout: Duration,
}

impl Cosmos {
    /// Create a new Career Cosmos client.
    ///
    /// The base URL can be provided directly or read from the COSMOS_API_URL
    /// environment variable; otherwise a local development server is assumed.
    pub fn new(base_url: Option<String>) -> Result<Self> {
        Self::with_options(base_url, None, None)
    }

    /// Create a new client with custom settings.
    pub fn with_options(
        base_url: Option<String>,
        session: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let base_url = base_url
            .or_else(|| env::var("COSMOS_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        // Endpoint paths join onto the base, so it must end with a slash.
        let base_url = if base_url.ends_with('/') {
            base_url
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&base_url)?;

        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                Error::http_client(
                    format!("Failed to build HTTP client: {}", e),
                    Some(Box::new(e)),
                )
            })?;

        Ok(Self {
            client,
            base_url,
            session: session.unwrap_or_else(|| DEFAULT_SESSION.to_string()),
            timeout,
        })
    }

    /// Returns the session identifier sent with every request.
    pub fn session(&self) -> &str {
        &self.session
    }

    /// Create and return default headers for API requests.
    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let mut url = self.base_url.join(path)?;
        url.query_pairs_mut()
            .append_pair("session_id", &self.session);
        Ok(url)
    }

    fn triage_request_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::timeout(
                format!("Request timed out: {}", e),
                Some(self.timeout.as_secs_f64()),
            )
        } else if e.is_connect() {
            Error::connection(format!("Connection error: {}", e), Some(Box::new(e)))
        } else {
            Error::http_client(format!("Request failed: {}", e), Some(Box::new(e)))
        }
    }

    /// Process API response errors and convert to our Error type
    async fn process_error_response(response: Response) -> Error {
        let status_code = response.status().as_u16();

        // FastAPI error bodies carry the message under "detail".
        #[derive(Deserialize)]
        struct ErrorResponse {
            detail: Option<String>,
        }

        let error_body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return Error::http_client(
                    format!("Failed to read error response: {}", e),
                    Some(Box::new(e)),
                );
            }
        };

        let error_message = serde_json::from_str::<ErrorResponse>(&error_body)
            .ok()
            .and_then(|e| e.detail)
            .unwrap_or_else(|| error_body.clone());

        match status_code {
            400 => Error::bad_request(error_message, None),
            404 => Error::not_found(error_message),
            408 => Error::timeout(error_message, None),
            500 => Error::internal_server(error_message),
            502..=504 => Error::service_unavailable(error_message),
            _ => Error::api(status_code, error_message),
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        if !response.status().is_success() {
            return Err(Self::process_error_response(response).await);
        }
        response.json::<T>().await.map_err(|e| {
            Error::serialization(
                format!("Failed to parse response: {}", e),
                Some(Box::new(e)),
            )
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        CLIENT_REQUESTS.click();
        let response = self
            .client
            .get(url)
            .headers(self.default_headers())
            .send()
            .await
            .map_err(|e| {
                CLIENT_REQUEST_ERRORS.click();
                self.triage_request_error(e)
            })?;
        Self::decode(response).await
    }

    async fn post_json<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.endpoint(path)?;
        CLIENT_REQUESTS.click();
        let response = self
            .client
            .post(url)
            .headers(self.default_headers())
            .json(body)
            .send()
            .await
            .map_err(|e| {
                CLIENT_REQUEST_ERRORS.click();
                self.triage_request_error(e)
            })?;
        Self::decode(response).await
    }

    /// Fetch the quest catalog.
    pub async fn fetch_quests(&self) -> Result<Vec<Quest>> {
        self.get_json("quests").await
    }

    /// Fetch the goal catalog.
    pub async fn fetch_goals(&self) -> Result<GoalCatalog> {
        self.get_json("goals").await
    }

    /// Fetch the career path catalog, keyed by path name.
    pub async fn fetch_career_paths(&self) -> Result<BTreeMap<String, CareerPath>> {
        self.get_json("career_paths").await
    }

    /// Complete a quest and collect its rewards.
    ///
    /// The backend rejects quests that are already completed or unknown; the
    /// outcome's `success` flag distinguishes the two cases.
    pub async fn complete_quest(&self, quest_id: u32) -> Result<QuestOutcome> {
        #[derive(serde::Serialize)]
        struct CompleteQuest {
            quest_id: u32,
        }

        self.post_json("complete_quest", &CompleteQuest { quest_id })
            .await
    }

    /// Select a career path and return the updated profile.
    pub async fn select_career(&self, career_path: &str) -> Result<UserProfile> {
        #[derive(serde::Serialize)]
        struct SelectCareer<'a> {
            career_path: &'a str,
        }

        #[derive(Deserialize)]
        struct SelectCareerResponse {
            user_data: UserProfile,
        }

        let response: SelectCareerResponse = self
            .post_json("select_career", &SelectCareer { career_path })
            .await?;
        Ok(response.user_data)
    }
}

#[async_trait::async_trait]
impl NavigatorApi for Cosmos {
    async fn navigator_turn(&self, message: &str) -> Result<NavigatorTurn> {
        #[derive(serde::Serialize)]
        struct ChatRequest<'a> {
            message: &'a str,
        }

        self.post_json("ai_chat", &ChatRequest { message }).await
    }

    async fn fetch_profile(&self) -> Result<UserProfile> {
        self.get_json("user").await
    }
}
