//! Document upload to the class documents backend.
//!
//! The form only knows the [`DocumentUploader`] trait. Callers inject their
//! own implementation, or use [`HttpDocumentUploader`] which posts a
//! multipart form to the REST API.

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::Request;
use url::Url;
use web_sys::{File, FormData};

use crate::error::{UploadError, UploadResult};
use crate::types::UploadedDocument;

/// Submit function injected into the upload form.
///
/// Resolves `Ok(())` once the document is persisted. Every error is treated
/// the same way by the form.
pub trait DocumentUploader<F> {
    fn upload_docs(&self, class_id: &str, title: &str, file: F) -> LocalBoxFuture<'static, UploadResult<()>>;
}

/// Uploader posting to `{base_url}/api/classes/{class_id}/documents`.
///
/// The class id is percent-encoded as a single path segment.
#[derive(Clone, Debug)]
pub struct HttpDocumentUploader {
    base_url: String,
}

impl HttpDocumentUploader {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Endpoint receiving the documents of a class.
    pub fn endpoint(&self, class_id: &str) -> UploadResult<String> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| UploadError::Request(format!("Invalid backend URL {}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| UploadError::Request(format!("Backend URL cannot take a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["api", "classes", class_id, "documents"]);
        Ok(url.into())
    }
}

impl DocumentUploader<File> for HttpDocumentUploader {
    fn upload_docs(&self, class_id: &str, title: &str, file: File) -> LocalBoxFuture<'static, UploadResult<()>> {
        let url = self.endpoint(class_id);
        let title = title.to_string();
        async move { post_document(&url?, &title, &file).await }.boxed_local()
    }
}

async fn post_document(url: &str, title: &str, file: &File) -> UploadResult<()> {
    let form_data = FormData::new().map_err(|e| UploadError::Request(format!("Failed to create FormData: {:?}", e)))?;
    form_data
        .append_with_str("title", title)
        .map_err(|e| UploadError::Request(format!("Failed to append title: {:?}", e)))?;
    form_data
        .append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| UploadError::Request(format!("Failed to append file: {:?}", e)))?;

    let request = Request::post(url)
        .body(form_data)
        .map_err(|e| UploadError::Request(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| UploadError::Network(e.to_string()))?;

    if !response.ok() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(UploadError::Server {
            status: response.status(),
            body,
        });
    }

    // The body is informational; a backend answering 204 is fine too.
    match response.text().await {
        Ok(body) => match parse_uploaded_document(&body) {
            Some(doc) => log::info!("Stored document {} ({})", doc.id, doc.title),
            None => log::debug!("Upload accepted without a document record"),
        },
        Err(e) => log::debug!("Could not read upload response: {}", e),
    }

    Ok(())
}

fn parse_uploaded_document(body: &str) -> Option<UploadedDocument> {
    serde_json::from_str(body).ok()
}
