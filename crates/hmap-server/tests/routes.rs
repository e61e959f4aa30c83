use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use hmap_model::TemplateSchema;
use hmap_oracle::{HeaderOracle, OracleError};
use hmap_server::{AppState, router};

const BOUNDARY: &str = "test-boundary";

struct CannedOracle(&'static str);

#[async_trait]
impl HeaderOracle for CannedOracle {
    async fn propose_mapping(&self, _prompt: &str) -> Result<String, OracleError> {
        Ok(self.0.to_string())
    }
}

fn app(reply: &'static str) -> axum::Router {
    router(AppState {
        template: Arc::new(TemplateSchema::default_template()),
        oracle: Arc::new(CannedOracle(reply)),
    })
}

fn multipart_request(parts: &[(&str, Option<&str>, &str)]) -> Request<Body> {
    let mut body = String::new();
    for (name, filename, content) in parts {
        body.push_str(&format!("--{BOUNDARY}\r\n"));
        match filename {
            Some(filename) => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n"
            )),
            None => {
                body.push_str(&format!("Content-Disposition: form-data; name=\"{name}\"\r\n"));
            }
        }
        body.push_str("Content-Type: text/csv\r\n\r\n");
        body.push_str(content);
        body.push_str("\r\n");
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));

    Request::builder()
        .method("POST")
        .uri("/map-headers")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn error_message(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    value["error"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn upload_without_file_field_is_rejected() {
    let request = multipart_request(&[("notes", None, "not the upload")]);
    let response = app("{}").oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(response.into_body()).await, "No file uploaded");
}

#[tokio::test]
async fn upload_with_empty_filename_is_rejected() {
    let request = multipart_request(&[("file", Some(""), "a,b\n1,2")]);
    let response = app("{}").oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(response.into_body()).await, "Empty file");
}

#[tokio::test]
async fn successful_upload_returns_csv_attachment() {
    let request = multipart_request(&[(
        "file",
        Some("contracts.csv"),
        "Ctr No,Region\nC-1,West",
    )]);
    let response = app(r#"{"Ctr No": "Contract Number"}"#)
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/csv"
    );
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"mapped_headers.csv\""
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert_eq!(body, "Contract Number,Region\nC-1,West\n");
}

#[tokio::test]
async fn oracle_garbage_is_a_server_error() {
    let request = multipart_request(&[("file", Some("contracts.csv"), "a,b\n1,2")]);
    let response = app("no mapping, sorry").oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        error_message(response.into_body())
            .await
            .contains("JSON object")
    );
}
