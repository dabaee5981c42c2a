//! Request descriptors for the Strapi REST endpoints.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, warn};
use url::Url;

use crate::error::ApiError;
use crate::model::{Collection, Single};
use crate::query::Query;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Everything an HTTP client needs to perform one call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: vec![("Content-Type", "application/json".to_string())],
            body: None,
        }
    }

    fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrapiClient {
    base_url: String,
}

impl StrapiClient {
    /// `base_url` is the Strapi origin; requests go to `<base_url>/api/...`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get_all(&self, content_type: &str, query: &Query) -> Result<ApiRequest, ApiError> {
        let url = self.endpoint(&[content_type], query)?;
        Ok(ApiRequest::new(Method::Get, url))
    }

    pub fn get_by_id(
        &self,
        content_type: &str,
        id: u64,
        query: &Query,
    ) -> Result<ApiRequest, ApiError> {
        let url = self.endpoint(&[content_type, &id.to_string()], query)?;
        Ok(ApiRequest::new(Method::Get, url))
    }

    /// Strapi expects the payload wrapped as `{ "data": ... }`.
    pub fn create<T: Serialize>(
        &self,
        content_type: &str,
        data: &T,
    ) -> Result<ApiRequest, ApiError> {
        let url = self.endpoint(&[content_type], &Query::new())?;
        Ok(ApiRequest::new(Method::Post, url).with_body(json!({ "data": data })))
    }

    pub fn update<T: Serialize>(
        &self,
        content_type: &str,
        id: u64,
        data: &T,
    ) -> Result<ApiRequest, ApiError> {
        let url = self.endpoint(&[content_type, &id.to_string()], &Query::new())?;
        Ok(ApiRequest::new(Method::Put, url).with_body(json!({ "data": data })))
    }

    pub fn delete(&self, content_type: &str, id: u64) -> Result<ApiRequest, ApiError> {
        let url = self.endpoint(&[content_type, &id.to_string()], &Query::new())?;
        Ok(ApiRequest::new(Method::Delete, url))
    }

    /// Multipart upload; the caller's HTTP client sets the boundary header.
    pub fn upload(&self) -> Result<ApiRequest, ApiError> {
        let url = self.endpoint(&["upload"], &Query::new())?;
        let mut request = ApiRequest::new(Method::Post, url);
        request.headers.clear();
        Ok(request)
    }

    /// Absolute URL for a media path returned by the CMS (often `/uploads/...`).
    ///
    /// Root-relative paths resolve under `base_url`, keeping any path prefix
    /// it carries (`https://host/cms` + `/uploads/a.png` is
    /// `https://host/cms/uploads/a.png`). Absolute and scheme-relative URLs
    /// are returned as they point.
    pub fn media_url(&self, path: &str) -> Result<Url, ApiError> {
        let base = Url::parse(&format!("{}/", self.base_url))?;
        let relative = match path.strip_prefix('/') {
            Some(rest) if !rest.starts_with('/') => rest,
            _ => path,
        };
        Ok(base.join(relative)?)
    }

    fn endpoint(&self, segments: &[&str], query: &Query) -> Result<Url, ApiError> {
        let not_a_base = ApiError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase);
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| not_a_base)?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        if !query.is_empty() {
            url.set_query(Some(&query.to_query_string()));
        }
        debug!(url = %url, "cms: request prepared");
        Ok(url)
    }
}

/// Map a non-2xx status to [`ApiError::Http`], pulling Strapi's
/// `error.message` out of the body when present.
pub fn check_status(status: u16, body: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("status {status}"));
    warn!(status, %message, "cms: request failed");
    Err(ApiError::Http { status, message })
}

pub fn decode_collection<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<Collection<T>, ApiError> {
    check_status(status, body)?;
    Ok(serde_json::from_str(body)?)
}

pub fn decode_single<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<Single<T>, ApiError> {
    check_status(status, body)?;
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FeatureAttributes;

    fn client() -> StrapiClient {
        StrapiClient::new("http://localhost:1337/")
    }

    #[test]
    fn get_all_targets_api_prefix_with_query() {
        let request = client()
            .get_all("features", &Query::new().locale("ar").populate_all())
            .unwrap();
        assert_eq!(request.method, Method::Get);
        assert_eq!(
            request.url.as_str(),
            "http://localhost:1337/api/features?locale=ar&populate=*"
        );
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert!(request.body.is_none());
    }

    #[test]
    fn get_by_id_appends_id_segment() {
        let request = client().get_by_id("funds", 42, &Query::new()).unwrap();
        assert_eq!(request.url.path(), "/api/funds/42");
        assert_eq!(request.url.query(), None);
    }

    #[test]
    fn writes_wrap_payload_in_data() {
        let payload = json!({ "title": "New fund" });
        let created = client().create("funds", &payload).unwrap();
        assert_eq!(created.method, Method::Post);
        assert_eq!(created.body, Some(json!({ "data": { "title": "New fund" } })));

        let updated = client().update("funds", 3, &payload).unwrap();
        assert_eq!(updated.method.as_str(), "PUT");
        assert_eq!(updated.url.path(), "/api/funds/3");

        let deleted = client().delete("funds", 3).unwrap();
        assert_eq!(deleted.method, Method::Delete);
        assert!(deleted.body.is_none());
    }

    #[test]
    fn upload_leaves_content_type_to_the_transport() {
        let request = client().upload().unwrap();
        assert_eq!(request.url.path(), "/api/upload");
        assert_eq!(request.header("Content-Type"), None);
        assert_eq!(request.method, Method::Post);
    }

    #[test]
    fn media_paths_resolve_against_origin() {
        let url = client().media_url("/uploads/rombo.webm").unwrap();
        assert_eq!(url.as_str(), "http://localhost:1337/uploads/rombo.webm");
        let absolute = client().media_url("https://cdn.example.com/a.png").unwrap();
        assert_eq!(absolute.host_str(), Some("cdn.example.com"));
    }

    #[test]
    fn media_paths_keep_base_path_prefix() {
        let proxied = StrapiClient::new("https://example.com/cms/");
        let url = proxied.media_url("/uploads/x.webm").unwrap();
        assert_eq!(url.as_str(), "https://example.com/cms/uploads/x.webm");
        let relative = proxied.media_url("uploads/x.webm").unwrap();
        assert_eq!(relative, url);
        let cdn = proxied.media_url("//cdn.example.com/x.webm").unwrap();
        assert_eq!(cdn.as_str(), "https://cdn.example.com/x.webm");

        let request = proxied.get_all("features", &Query::new()).unwrap();
        assert_eq!(request.url.path(), "/cms/api/features");
    }

    #[test]
    fn invalid_base_url_is_reported() {
        let err = StrapiClient::new("not a url").get_all("features", &Query::new());
        assert!(matches!(err, Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn error_status_uses_strapi_message() {
        let body = r#"{ "data": null, "error": { "status": 404, "name": "NotFoundError", "message": "Not Found" } }"#;
        match check_status(404, body) {
            Err(ApiError::Http { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "Not Found");
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(matches!(
            check_status(500, "<html>"),
            Err(ApiError::Http { status: 500, .. })
        ));
    }

    #[test]
    fn decode_collection_checks_status_first() {
        let ok = decode_collection::<FeatureAttributes>(200, r#"{ "data": [] }"#).unwrap();
        assert!(ok.data.is_empty());
        assert!(matches!(
            decode_collection::<FeatureAttributes>(200, "{"),
            Err(ApiError::Decode(_))
        ));
        assert!(matches!(
            decode_single::<FeatureAttributes>(403, "{}"),
            Err(ApiError::Http { status: 403, .. })
        ));
    }
}
