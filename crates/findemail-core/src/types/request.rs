use serde::Serialize;

/// Body of `POST /v1/search/domain`
#[derive(Debug, Clone, Serialize)]
pub struct DomainSearchRequest<'a> {
    pub domain: &'a str,
}

/// Body of the typed searches (`/v1/search/leak`, `/v1/search/logs`)
#[derive(Debug, Clone, Serialize)]
pub struct TypedSearchRequest<'a> {
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub data: &'a str,
}

/// Body of `POST /v1/download`
#[derive(Debug, Clone, Serialize)]
pub struct DownloadRequest<'a> {
    pub id: &'a str,
    #[serde(rename = "type")]
    pub kind: &'a str,
}
