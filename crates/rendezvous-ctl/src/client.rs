//! HTTP client for the rendezvous protocol.

use reqwest::{Response, Url};
use serde::de::DeserializeOwned;

use rendezvous_core::{
    ErrorResponse, PeerAddress, PeerInfoResponse, PeersResponse, RegisterRequest,
    RegisterResponse,
};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("failed to connect to rendezvous daemon at {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to parse response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    /// The daemon answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

impl ClientError {
    /// HTTP status of a rejection, if the daemon answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Client for one rendezvous daemon.
#[derive(Debug, Clone)]
pub struct RendezvousClient {
    http: reqwest::Client,
    base_url: String,
}

impl RendezvousClient {
    /// `base_url` is the daemon root, e.g. `http://127.0.0.1:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Client for a daemon at `host:port`.
    pub fn for_host(host: &str, port: u16) -> Self {
        Self::new(format!("http://{}:{}", host, port))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST /register
    pub async fn register(&self, req: &RegisterRequest) -> Result<RegisterResponse, ClientError> {
        let url = format!("{}/register", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(req)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;
        decode(&url, resp).await
    }

    /// GET /peers
    pub async fn peers(&self) -> Result<Vec<String>, ClientError> {
        let url = format!("{}/peers", self.base_url);
        let resp = self.get(&url).await?;
        let body: PeersResponse = decode(&url, resp).await?;
        Ok(body.peers)
    }

    /// GET /peerinfo?username=<id>
    pub async fn peer_info(&self, username: &str) -> Result<PeerAddress, ClientError> {
        let url = Url::parse_with_params(
            &format!("{}/peerinfo", self.base_url),
            &[("username", username)],
        )
        .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        let resp = self.get(url.as_str()).await?;
        let body: PeerInfoResponse = decode(url.as_str(), resp).await?;
        Ok(body.user_info)
    }

    async fn get(&self, url: &str) -> Result<Response, ClientError> {
        self.http
            .get(url)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.to_string(),
                source,
            })
    }
}

/// Success bodies decode as `T`; anything else becomes `Rejected`, carrying
/// the daemon's error message when it sent one.
async fn decode<T: DeserializeOwned>(url: &str, resp: Response) -> Result<T, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return resp.json::<T>().await.map_err(|source| ClientError::Decode {
            url: url.to_string(),
            source,
        });
    }

    let message = match resp.json::<ErrorResponse>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_string(),
    };
    Err(ClientError::Rejected {
        status: status.as_u16(),
        message,
    })
}
