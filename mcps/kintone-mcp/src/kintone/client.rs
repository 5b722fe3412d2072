//! Async client for the kintone REST API
//!
//! Every call goes out as `POST` with `X-HTTP-Method-Override` naming the
//! real method, so parameters always travel as a JSON body rather than a
//! length-limited query string.

use reqwest::{multipart, Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use super::auth::Auth;
use super::error::{KintoneError, KintoneResult};
use super::models::*;
use super::query::{parse_query, ParsedQuery};

/// Records returned by one `records.json` call at most
pub const MAX_RECORDS_PER_REQUEST: u64 = 500;
/// Apps returned by one `apps.json` call at most
pub const MAX_APPS_PER_REQUEST: u64 = 100;
/// Comments returned by one `record/comments.json` call at most
pub const MAX_COMMENTS_PER_REQUEST: u64 = 10;
/// Records accepted by one bulk add/update call at most
pub const MAX_BATCH_RECORDS: usize = 100;

const METHOD_OVERRIDE_HEADER: &str = "X-HTTP-Method-Override";

/// kintone REST client bound to one domain and credential
#[derive(Debug, Clone)]
pub struct KintoneClient {
    client: Client,
    base_url: String,
}

impl KintoneClient {
    /// Create a client for `base_url` (e.g. `https://example.cybozu.com`)
    pub fn new(base_url: impl Into<String>, auth: &Auth, timeout: Duration) -> KintoneResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("kintone-mcp/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .default_headers(auth.headers()?)
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!(base_url = %base_url, auth = auth.kind(), "created kintone client");

        Ok(Self { client, base_url })
    }

    /// The base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/k/v1{}", self.base_url, endpoint)
    }

    #[instrument(skip(self, body))]
    async fn request<B, T>(&self, method: &'static str, endpoint: &str, body: &B) -> KintoneResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("sending {} {}", method, endpoint);

        let response = self
            .client
            .post(self.url(endpoint))
            .header(METHOD_OVERRIDE_HEADER, method)
            .json(body)
            .send()
            .await?;

        let response = check_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // ========================================================================
    // Records
    // ========================================================================

    /// Fetch one page of records.
    ///
    /// `limit` is capped at [`MAX_RECORDS_PER_REQUEST`]. Any `order by`,
    /// `limit` or `offset` inside `query` is honoured: a query limit can only
    /// shrink the page, a query offset replaces `offset`.
    pub async fn get_records(
        &self,
        app: u64,
        query: Option<&str>,
        fields: Option<&[String]>,
        limit: u64,
        offset: u64,
        total_count: Option<bool>,
    ) -> KintoneResult<GetRecordsResponse> {
        let size = limit.min(MAX_RECORDS_PER_REQUEST);
        let parsed = parse_query(query, Some(size), Some(offset))?;
        self.fetch_records(app, &parsed, fields, total_count).await
    }

    /// Fetch every record matching `query`, page by page.
    ///
    /// Pages are requested sequentially with increasing offsets until a page
    /// comes back empty or shorter than the page size. A query `limit 0`
    /// fetches a single page.
    pub async fn get_all_records(
        &self,
        app: u64,
        query: Option<&str>,
        fields: Option<&[String]>,
        batch_size: u64,
    ) -> KintoneResult<Vec<Record>> {
        let size = batch_size.min(MAX_RECORDS_PER_REQUEST);
        let parsed = parse_query(query, Some(size), Some(0))?;
        let page_size = parsed.limit.unwrap_or(size);
        let mut offset = parsed.offset.unwrap_or(0);

        let mut all_records = Vec::new();
        loop {
            let page = ParsedQuery {
                offset: Some(offset),
                ..parsed.clone()
            };
            let records = self.fetch_records(app, &page, fields, None).await?.records;
            let count = records.len() as u64;
            all_records.extend(records);

            // `limit 0` leaves nothing to advance by
            if page_size == 0 || count == 0 || count < page_size {
                break;
            }
            offset += page_size;
        }

        info!(app, total = all_records.len(), "fetched all records");
        Ok(all_records)
    }

    async fn fetch_records(
        &self,
        app: u64,
        parsed: &ParsedQuery,
        fields: Option<&[String]>,
        total_count: Option<bool>,
    ) -> KintoneResult<GetRecordsResponse> {
        let request = GetRecordsRequest {
            app,
            query: parsed.to_query_string(),
            fields: fields.filter(|f| !f.is_empty()),
            total_count,
        };
        self.request("GET", "/records.json", &request).await
    }

    /// Fetch a single record by ID
    pub async fn get_record(&self, app: u64, id: u64) -> KintoneResult<GetRecordResponse> {
        self.request("GET", "/record.json", &json!({ "app": app, "id": id }))
            .await
    }

    /// Add one record
    pub async fn add_record(&self, app: u64, record: &Record) -> KintoneResult<AddRecordResponse> {
        self.request("POST", "/record.json", &json!({ "app": app, "record": record }))
            .await
    }

    /// Add up to [`MAX_BATCH_RECORDS`] records
    pub async fn add_records(&self, app: u64, records: &[Record]) -> KintoneResult<AddRecordsResponse> {
        check_batch("add", records.len())?;
        self.request("POST", "/records.json", &json!({ "app": app, "records": records }))
            .await
    }

    /// Update one record identified by `id` or `update_key`
    pub async fn update_record(
        &self,
        app: u64,
        record: &Record,
        id: Option<u64>,
        update_key: Option<&UpdateKey>,
        revision: Option<i64>,
    ) -> KintoneResult<UpdateRecordResponse> {
        if id.is_none() && update_key.is_none() {
            return Err(KintoneError::Validation(
                "either id or update_key must be specified".to_string(),
            ));
        }

        let mut body = json!({ "app": app, "record": record });
        if let Some(id) = id {
            body["id"] = json!(id);
        }
        if let Some(key) = update_key {
            body["updateKey"] = serde_json::to_value(key)?;
        }
        if let Some(revision) = revision {
            body["revision"] = json!(revision);
        }

        self.request("PUT", "/record.json", &body).await
    }

    /// Update up to [`MAX_BATCH_RECORDS`] records
    pub async fn update_records(
        &self,
        app: u64,
        records: &[UpdateRecordData],
    ) -> KintoneResult<UpdateRecordsResponse> {
        check_batch("update", records.len())?;
        if let Some(pos) = records
            .iter()
            .position(|r| r.id.is_none() && r.update_key.is_none())
        {
            return Err(KintoneError::Validation(format!(
                "records[{}]: either id or updateKey must be specified",
                pos
            )));
        }
        self.request("PUT", "/records.json", &json!({ "app": app, "records": records }))
            .await
    }

    // ========================================================================
    // Comments
    // ========================================================================

    /// Fetch comments of a record; `limit` is capped at [`MAX_COMMENTS_PER_REQUEST`]
    pub async fn get_comments(
        &self,
        app: u64,
        record: u64,
        order: &str,
        offset: u64,
        limit: u64,
    ) -> KintoneResult<GetCommentsResponse> {
        let body = json!({
            "app": app,
            "record": record,
            "order": order,
            "offset": offset,
            "limit": limit.min(MAX_COMMENTS_PER_REQUEST),
        });
        self.request("GET", "/record/comments.json", &body).await
    }

    /// Post a comment on a record
    pub async fn add_comment(
        &self,
        app: u64,
        record: u64,
        comment: &CommentContent,
    ) -> KintoneResult<AddCommentResponse> {
        let body = json!({ "app": app, "record": record, "comment": comment });
        self.request("POST", "/record/comment.json", &body).await
    }

    // ========================================================================
    // Process management
    // ========================================================================

    /// Run a process management action on one record
    pub async fn update_status(
        &self,
        app: u64,
        id: u64,
        action: &str,
        assignee: Option<&str>,
        revision: Option<i64>,
    ) -> KintoneResult<UpdateStatusResponse> {
        let mut body = json!({ "app": app, "id": id, "action": action });
        if let Some(assignee) = assignee {
            body["assignee"] = json!(assignee);
        }
        if let Some(revision) = revision {
            body["revision"] = json!(revision);
        }
        self.request("PUT", "/record/status.json", &body).await
    }

    /// Run process management actions on up to [`MAX_BATCH_RECORDS`] records
    pub async fn update_statuses(
        &self,
        app: u64,
        records: &[StatusUpdate],
    ) -> KintoneResult<UpdateStatusesResponse> {
        check_batch("update the status of", records.len())?;
        self.request("PUT", "/records/status.json", &json!({ "app": app, "records": records }))
            .await
    }

    // ========================================================================
    // Apps
    // ========================================================================

    /// List apps; `request.limit` is capped at [`MAX_APPS_PER_REQUEST`]
    pub async fn get_apps(&self, mut request: GetAppsRequest) -> KintoneResult<GetAppsResponse> {
        request.limit = request.limit.min(MAX_APPS_PER_REQUEST);
        self.request("GET", "/apps.json", &request).await
    }

    /// Fetch one app's settings summary
    pub async fn get_app(&self, id: u64) -> KintoneResult<AppInfo> {
        self.request("GET", "/app.json", &json!({ "id": id })).await
    }

    /// Fetch the form field definitions of an app
    pub async fn get_form_fields(
        &self,
        app: u64,
        lang: Option<&str>,
    ) -> KintoneResult<GetFormFieldsResponse> {
        let mut body = json!({ "app": app });
        if let Some(lang) = lang {
            body["lang"] = json!(lang);
        }
        self.request("GET", "/app/form/fields.json", &body).await
    }

    // ========================================================================
    // Files
    // ========================================================================

    /// Upload a local file; the returned key can be attached to a record
    #[instrument(skip(self))]
    pub async fn upload_file(&self, path: &Path) -> KintoneResult<FileUploadResponse> {
        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        debug!(size = data.len(), "uploading {}", file_name);

        let form = multipart::Form::new().part("file", multipart::Part::bytes(data).file_name(file_name));
        let response = self
            .client
            .post(self.url("/file.json"))
            .header(METHOD_OVERRIDE_HEADER, "POST")
            .multipart(form)
            .send()
            .await?;

        let response = check_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Download the raw contents of an uploaded file
    #[instrument(skip(self))]
    pub async fn download_file(&self, file_key: &str) -> KintoneResult<Vec<u8>> {
        let response = self
            .client
            .post(self.url("/file.json"))
            .header(METHOD_OVERRIDE_HEADER, "GET")
            .json(&json!({ "fileKey": file_key }))
            .send()
            .await?;

        let response = check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

/// Turn an HTTP error status into [`KintoneError::Api`]
async fn check_status(response: Response) -> KintoneResult<Response> {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return Ok(response);
    }

    let body = response.text().await.map_err(|e| e.to_string());
    let err = api_error(status.as_u16(), body);

    warn!(status = status.as_u16(), error = %err, "kintone request failed");
    Err(err)
}

/// Build the error for a failed response from its body, or from the reason
/// the body could not be read
fn api_error(status: u16, body: Result<String, String>) -> KintoneError {
    let text = match body {
        Ok(text) => text,
        Err(reason) => {
            return KintoneError::Api {
                status,
                code: None,
                message: format!("HTTP {} (failed to read response body: {})", status, reason),
                errors: None,
            }
        }
    };

    match serde_json::from_str::<ApiErrorBody>(&text) {
        Ok(body) => KintoneError::Api {
            status,
            code: body.code,
            message: body.message.unwrap_or_else(|| format!("HTTP {}", status)),
            errors: body.errors,
        },
        Err(_) => KintoneError::Api {
            status,
            code: None,
            message: format!("HTTP {}: {}", status, text),
            errors: None,
        },
    }
}

fn check_batch(verb: &str, len: usize) -> KintoneResult<()> {
    if len > MAX_BATCH_RECORDS {
        return Err(KintoneError::Validation(format!(
            "cannot {} more than {} records at once (got {})",
            verb, MAX_BATCH_RECORDS, len
        )));
    }
    Ok(())
}
