// Use 3rd party
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

// Use local
use crate::config::Config;
use crate::model::EntityKind;

const USER_AGENT: &str = concat!("rsdeezer/", env!("CARGO_PKG_VERSION"));

// Deezer answers "no data" with HTTP 200 and this code in the error envelope.
const DATA_NOT_FOUND: u32 = 800;

// Possible errors returned from the `rsdeezer` client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("deezer returned {status} for {path}")]
    UpstreamHttp { status: StatusCode, path: String },
    #[error("deezer error: {0}")]
    Api(#[from] ApiError),
    #[error("{kind} response does not match its schema at `{field}`: {message}")]
    SchemaViolation {
        kind: EntityKind,
        field: String,
        message: String,
    },
    #[error("json parse error: {0}")]
    ParseJSON(#[from] serde_json::Error),
    #[error("query encode error: {0}")]
    EncodeQuery(#[from] serde_urlencoded::ser::Error),
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}

impl ClientError {
    fn from_failure(status: StatusCode, path: &str, body: &str) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) if status == StatusCode::NOT_FOUND => envelope.error.into(),
            _ => Self::UpstreamHttp {
                status,
                path: path.to_owned(),
            },
        }
    }

    /// Whether this is upstream's way of saying the entity does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Api(error) => error.is_not_found(),
            Self::UpstreamHttp { status, .. } => *status == StatusCode::NOT_FOUND,
            _ => false,
        }
    }
}

/// The `{error: {type, message, code}}` body Deezer sends on failure.
#[derive(Debug, Clone, PartialEq, Error, Deserialize)]
#[error("{kind}: {message} (code {code})")]
pub struct ApiError {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: u32,
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        self.code == DATA_NOT_FOUND
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Query parameters; pairs whose value is `None` are left out of the URL.
pub type Params<'a> = [(&'a str, Option<String>)];

// Deezer API
pub struct Deezer {
    client: Client,
    config: Config,
}

impl Deezer {
    pub fn new(config: Config) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn url(&self, path: &str, params: &Params<'_>) -> ClientResult<String> {
        let base_url = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');

        let mut query: Vec<(&str, &str)> = params
            .iter()
            .filter_map(|(key, value)| value.as_deref().map(|value| (*key, value)))
            .collect();
        if let Some(token) = self.config.access_token.as_deref() {
            query.push(("access_token", token));
        }

        if query.is_empty() {
            Ok(format!("{}/{}", base_url, path))
        } else {
            let query = serde_urlencoded::to_string(&query)?;
            Ok(format!("{}/{}?{}", base_url, path, query))
        }
    }

    /// Issues `GET {base_url}/{path}` and returns the decoded JSON tree.
    ///
    /// Non-2xx answers fail with [`ClientError::UpstreamHttp`]; a 2xx body
    /// carrying Deezer's error envelope fails with [`ClientError::Api`].
    pub async fn get(&self, path: &str, params: &Params<'_>) -> ClientResult<Value> {
        let url = self.url(path, params)?;
        debug!("GET /{} {:?}", path.trim_start_matches('/'), params);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("deezer answered {} for {}", status, path);
            return Err(ClientError::from_failure(status, path, &body));
        }

        let value: Value = serde_json::from_str(&body)?;
        if let Some(error) = value.get("error") {
            let error = ApiError::deserialize(error)?;
            debug!("deezer reported {} for {}", error, path);
            return Err(error.into());
        }

        Ok(value)
    }

    /// Releases the connection pool. Dropping the client has the same effect;
    /// this makes the shutdown point explicit.
    pub fn close(self) {
        debug!("closing deezer client for {}", self.config.base_url);
        drop(self.client);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use mockito::{Matcher, Mock, ServerGuard};

    #[tokio::test]
    async fn client_get() {
        let mut server = server().await;
        let _mock = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"result": "ok"}"#)
            .create_async()
            .await;

        let response = client(&server).get("/", &[]).await.unwrap();
        assert_eq!(response["result"], "ok");
    }

    #[tokio::test]
    async fn close_after_use() {
        let mut server = server().await;
        let _mock = server
            .mock("GET", "/genre")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"data": []}"#)
            .create_async()
            .await;

        let deezer = client(&server);
        deezer.get("genre", &[]).await.unwrap();
        deezer.close();
    }

    #[tokio::test]
    async fn absent_params_are_not_sent() {
        let mut server = server().await;
        let mock = server
            .mock("GET", "/search/track")
            .match_query(Matcher::Exact("q=daft+punk&limit=10".to_owned()))
            .with_status(200)
            .with_body(r#"{"data": []}"#)
            .create_async()
            .await;

        let params = [
            ("q", Some("daft punk".to_owned())),
            ("limit", Some("10".to_owned())),
            ("strict", None),
        ];
        client(&server).get("search/track", &params).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn access_token_is_appended() {
        let mut server = server().await;
        let mock = server
            .mock("GET", "/user/me")
            .match_query(Matcher::UrlEncoded("access_token".into(), "secret".into()))
            .with_status(200)
            .with_body(r#"{"id": 1, "name": "me"}"#)
            .create_async()
            .await;

        let config = Config::new(server.url()).access_token(Some("secret".to_owned()));
        Deezer::new(config).unwrap().get("user/me", &[]).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn server_error_is_upstream_http() {
        let mut server = server().await;
        let _mock = server
            .mock("GET", "/track/1")
            .with_status(503)
            .with_body("unavailable")
            .create_async()
            .await;

        let err = client(&server).get("track/1", &[]).await.unwrap_err();
        match err {
            ClientError::UpstreamHttp { status, ref path } => {
                assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
                assert_eq!(path, "track/1");
            }
            ref other => panic!("unexpected error: {:?}", other),
        }
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn error_envelope_with_ok_status_is_api_error() {
        let mut server = server().await;
        let _mock = mock_request_success_from_file(
            &mut server,
            "/track/999999999",
            Matcher::Any,
            "tests/files/not_found.json",
        )
        .await;

        let err = client(&server).get("track/999999999", &[]).await.unwrap_err();
        assert!(matches!(err, ClientError::Api(ref e) if e.code == 800));
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn not_found_status_with_envelope_is_api_error() {
        let mut server = server().await;
        let _mock = server
            .mock("GET", "/album/0")
            .with_status(404)
            .with_body_from_file("tests/files/not_found.json")
            .create_async()
            .await;

        let err = client(&server).get("album/0", &[]).await.unwrap_err();
        assert!(matches!(err, ClientError::Api(_)));
        assert!(err.is_not_found());
    }

    #[test]
    fn url_joins_base_and_path() {
        let deezer = Deezer::new(Config::new("http://localhost:1234/")).unwrap();
        assert_eq!(
            deezer.url("/artist/27/top", &[("limit", Some("5".to_owned()))]).unwrap(),
            "http://localhost:1234/artist/27/top?limit=5"
        );
        assert_eq!(deezer.url("genre", &[]).unwrap(), "http://localhost:1234/genre");
    }

    pub(crate) async fn server() -> ServerGuard {
        mockito::Server::new_async().await
    }

    pub(crate) fn client(server: &ServerGuard) -> Deezer {
        Deezer::new(Config::new(server.url())).unwrap()
    }

    pub(crate) async fn mock_request_success_from_file(
        server: &mut ServerGuard,
        path: &str,
        query: Matcher,
        file_path: &str,
    ) -> Mock {
        server
            .mock("GET", path)
            .match_query(query)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body_from_file(file_path)
            .create_async()
            .await
    }

    pub(crate) async fn expect_request_from_file(
        server: &mut ServerGuard,
        path: &str,
        query: Matcher,
        file_path: &str,
        hits: usize,
    ) -> Mock {
        server
            .mock("GET", path)
            .match_query(query)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body_from_file(file_path)
            .expect(hits)
            .create_async()
            .await
    }
}
