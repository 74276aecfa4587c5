use std::sync::{Arc, Mutex};
use std::time::Duration;

use folio_engine::{
    EngineEvent, FailureKind, FetchProgress, FetchSettings, Fetcher, FileFetcher, ProgressSink,
    ReqwestFetcher,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DOC: &str = r#"[{"title":"A","architecture":["Web"],"technologies":["Go"],"description":""}]"#;

#[derive(Default)]
struct TestSink {
    events: Arc<Mutex<Vec<EngineEvent>>>,
}

impl TestSink {
    fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn take(&self) -> Vec<EngineEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl ProgressSink for TestSink {
    fn emit(&self, event: EngineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[tokio::test]
async fn fetcher_returns_json_and_emits_progress() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/entries.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(DOC, "application/json"))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let sink = TestSink::new();
    let url = format!("{}/entries.json", server.uri());

    let output = fetcher.fetch(&url, &sink).await.expect("fetch ok");
    assert_eq!(output.metadata.original_location, url);
    assert_eq!(output.metadata.final_location, output.metadata.original_location);
    assert_eq!(output.metadata.redirect_count, 0);
    assert_eq!(output.metadata.content_type.as_deref(), Some("application/json"));
    assert_eq!(output.bytes, DOC.as_bytes());

    let progress = sink
        .take()
        .into_iter()
        .filter_map(|event| match event {
            EngineEvent::Progress(FetchProgress { bytes, .. }) => Some(bytes),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(progress.last().copied(), Some(DOC.len() as u64));
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/entries.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let url = format!("{}/entries.json", server.uri());

    let err = fetcher.fetch(&url, &TestSink::new()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn fetcher_accepts_any_content_type_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/entries.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(DOC, "application/octet-stream"),
        )
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let url = format!("{}/entries.json", server.uri());

    let output = fetcher.fetch(&url, &TestSink::new()).await.expect("fetch ok");
    assert_eq!(output.bytes, DOC.as_bytes());
    assert_eq!(
        output.metadata.content_type.as_deref(),
        Some("application/octet-stream")
    );
}

#[tokio::test]
async fn fetcher_rejects_types_outside_configured_allow_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/entries.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"))
        .mount(&server)
        .await;

    let settings = FetchSettings {
        allowed_content_types: vec!["application/json".to_string()],
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);
    let url = format!("{}/entries.json", server.uri());

    let err = fetcher.fetch(&url, &TestSink::new()).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::UnsupportedContentType {
            content_type: "text/html".to_string()
        }
    );
    assert_eq!(err.message, url);
    assert_eq!(
        err.to_string(),
        format!("unsupported content type text/html: {url}")
    );
}

#[test]
fn default_settings_enforce_no_timeouts() {
    let settings = FetchSettings::default();
    assert_eq!(settings.connect_timeout, None);
    assert_eq!(settings.request_timeout, None);
    assert!(settings.allowed_content_types.is_empty());
}

#[tokio::test]
async fn fetcher_times_out_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw(DOC, "application/json"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);
    let url = format!("{}/slow", server.uri());

    let err = fetcher.fetch(&url, &TestSink::new()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_too_large_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[0123456789]", "application/json"))
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);
    let url = format!("{}/large", server.uri());

    let err = fetcher.fetch(&url, &TestSink::new()).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(12)
        }
    );
    assert_eq!(err.message, url);
}

#[tokio::test]
async fn fetcher_reports_invalid_url() {
    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let err = fetcher.fetch("http://", &TestSink::new()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

#[tokio::test]
async fn file_fetcher_reads_local_document() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("entries.json");
    std::fs::write(&file, DOC).unwrap();
    let location = file.to_string_lossy().to_string();

    let fetcher = FileFetcher::new(&FetchSettings::default());
    let output = fetcher.fetch(&location, &TestSink::new()).await.expect("read ok");
    assert_eq!(output.bytes, DOC.as_bytes());
    assert_eq!(output.metadata.byte_len, DOC.len() as u64);
}

#[tokio::test]
async fn file_fetcher_reports_missing_file_as_io() {
    let dir = tempfile::TempDir::new().unwrap();
    let location = dir.path().join("missing.json").to_string_lossy().to_string();

    let fetcher = FileFetcher::new(&FetchSettings::default());
    let err = fetcher.fetch(&location, &TestSink::new()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Io);
}
