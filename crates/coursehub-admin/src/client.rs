//! HTTP implementation of [`VideoApi`].

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

use coursehub_core::error::{AppError, ErrorKind};
use coursehub_core::result::AppResult;
use coursehub_entity::video::{Video, VideoChanges};

use crate::api::{CountsPayload, UploadRequest, VideoApi, VideoPage};
use crate::query::VideoQuery;

/// Talks to a `coursehub-server` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpVideoApi {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideoEnvelope {
    video: Video,
}

fn transport_error(action: &str, e: reqwest::Error) -> AppError {
    AppError::with_source(
        ErrorKind::ExternalService,
        format!("Failed to {action}: {e}"),
        e,
    )
}

impl HttpVideoApi {
    /// Client for the server at `base_url`, e.g. `http://localhost:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`].
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    fn url_with(&self, path: &str, params: &[(&str, String)]) -> AppResult<Url> {
        Url::parse_with_params(&self.url(path), params)
            .map_err(|e| AppError::configuration(format!("Invalid API URL: {e}")))
    }

    /// Turn a non-2xx response into the matching [`AppError`].
    async fn ensure_success(response: Response) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.json::<ErrorBody>().await.ok();
        let message = body
            .and_then(|b| b.error.filter(|_| status.is_server_error()).or(b.message))
            .unwrap_or_else(|| status.to_string());

        Err(match status {
            StatusCode::BAD_REQUEST => AppError::validation(message),
            StatusCode::NOT_FOUND => AppError::not_found(message),
            StatusCode::PAYLOAD_TOO_LARGE => AppError::payload_too_large(message),
            StatusCode::SERVICE_UNAVAILABLE => AppError::service_unavailable(message),
            _ => AppError::external(format!("Server returned {status}: {message}")),
        })
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        Self::ensure_success(response)
            .await?
            .json::<T>()
            .await
            .map_err(|e| transport_error("decode response", e))
    }
}

#[async_trait]
impl VideoApi for HttpVideoApi {
    async fn list(&self, query: &VideoQuery) -> AppResult<VideoPage> {
        let url = self.url_with("/videos", &query.to_params())?;
        debug!(%url, "Listing videos");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error("list videos", e))?;
        Self::parse(response).await
    }

    async fn upload(&self, request: UploadRequest) -> AppResult<Video> {
        let UploadRequest { fields, file } = request;
        let mut part = Part::bytes(file.data.to_vec()).file_name(file.name.clone());
        if let Some(mime) = &file.mime_type {
            part = part
                .mime_str(mime)
                .map_err(|e| AppError::validation(format!("Invalid content type {mime}: {e}")))?;
        }

        let form = Form::new()
            .text("title", fields.title)
            .text("description", fields.description)
            .text("videoType", fields.video_type.as_str())
            .text("category", fields.category.unwrap_or_default())
            .text("accessCode", fields.access_code.unwrap_or_default())
            .part("videoFile", part);

        debug!(file = %file.name, bytes = file.data.len(), "Uploading video");
        let response = self
            .client
            .post(self.url("/admin/upload-video"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| transport_error("upload video", e))?;
        Ok(Self::parse::<VideoEnvelope>(response).await?.video)
    }

    async fn update(&self, id: Uuid, changes: &VideoChanges) -> AppResult<Video> {
        let response = self
            .client
            .put(self.url(&format!("/admin/videos/{id}")))
            .json(changes)
            .send()
            .await
            .map_err(|e| transport_error("update video", e))?;
        Ok(Self::parse::<VideoEnvelope>(response).await?.video)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/admin/videos/{id}")))
            .send()
            .await
            .map_err(|e| transport_error("delete video", e))?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn counts(&self, user: Option<&str>) -> AppResult<CountsPayload> {
        let params: Vec<(&str, String)> = user
            .map(|u| vec![("userId", u.to_string())])
            .unwrap_or_default();
        let url = self.url_with("/notifications/counts", &params)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error("fetch notification counts", e))?;
        Self::parse(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let api = HttpVideoApi::new("http://localhost:5000/");
        assert_eq!(api.url("/videos"), "http://localhost:5000/api/videos");

        let query = VideoQuery::new().with_search("city tour").with_page(2);
        let url = api.url_with("/videos", &query.to_params()).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/videos?page=2&limit=20&search=city+tour&admin=true"
        );
    }
}
