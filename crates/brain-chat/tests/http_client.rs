//! HTTP client tests against a one-shot local server.

use std::sync::Arc;
use std::time::Duration;

use brain_chat::{
    AnswerClient, ChatError, ChatSession, DoorItem, EvalLabel, HttpAnswerClient,
    HttpClientConfig, Message, Source, SubmitOutcome,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A request as seen by the test server.
struct Captured {
    head: String,
    body: String,
}

impl Captured {
    fn request_line(&self) -> &str {
        self.head.lines().next().unwrap_or_default()
    }

    fn header(&self, name: &str) -> Option<String> {
        self.head.lines().skip(1).find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim()
                .eq_ignore_ascii_case(name)
                .then(|| value.trim().to_string())
        })
    }
}

/// Serve exactly one HTTP request with the given status line and body,
/// returning the base URL and a handle yielding the captured request.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];

        let (head_end, content_length) = loop {
            let n = stream.read(&mut chunk).await.unwrap();
            assert!(n > 0, "client closed before sending headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..pos]).to_string();
                let length = head
                    .lines()
                    .find_map(|l| {
                        let (k, v) = l.split_once(':')?;
                        k.trim()
                            .eq_ignore_ascii_case("content-length")
                            .then(|| v.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                break (pos + 4, length);
            }
        };

        while buf.len() < head_end + content_length {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();

        Captured {
            head: String::from_utf8_lossy(&buf[..head_end - 4]).to_string(),
            body: String::from_utf8_lossy(&buf[head_end..]).to_string(),
        }
    });

    (format!("http://{addr}"), handle)
}

fn client(base_url: &str) -> HttpAnswerClient {
    let config = HttpClientConfig::new(base_url)
        .with_connect_timeout(Duration::from_secs(2))
        .with_request_timeout(Some(Duration::from_secs(5)));
    HttpAnswerClient::new(config).unwrap()
}

#[tokio::test]
async fn ask_posts_json_message_to_chat() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"type":"qa","answer":"It is 900mm.","sources":[{"file_name":"spec.pdf","page":4}]}"#,
    )
    .await;

    let reply = client(&url).ask("How wide is D1?").await.unwrap();
    let captured = server.await.unwrap();

    assert_eq!(captured.request_line(), "POST /chat HTTP/1.1");
    assert_eq!(
        captured.header("content-type").as_deref(),
        Some("application/json")
    );
    let body: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(body, serde_json::json!({"message": "How wide is D1?"}));

    assert_eq!(
        reply.into_message(),
        Message::answer(
            "It is 900mm.",
            vec![Source {
                file_name: "spec.pdf".into(),
                page: 4
            }]
        )
    );
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_ignored() {
    let (url, server) = serve_once("200 OK", r#"{"answer":"ok"}"#).await;

    client(&format!("{url}/")).ask("hi").await.unwrap();

    assert_eq!(server.await.unwrap().request_line(), "POST /chat HTTP/1.1");
}

#[tokio::test]
async fn non_success_status_is_status_error() {
    let (url, server) = serve_once("500 Internal Server Error", r#"{"detail":"boom"}"#).await;

    let err = client(&url).ask("hi").await.unwrap_err();
    server.await.unwrap();

    match err {
        ChatError::Status { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("boom"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_decode_error() {
    let (url, server) = serve_once("200 OK", "<html>not json</html>").await;

    let err = client(&url).ask("hi").await.unwrap_err();
    server.await.unwrap();

    assert!(matches!(err, ChatError::Decode(_)));
}

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{addr}")).ask("hi").await.unwrap_err();
    assert!(matches!(err, ChatError::Network(_) | ChatError::Timeout));
}

#[tokio::test]
async fn session_over_http_records_door_schedule() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"type":"structured","data":[{"mark":"D1","location":"Lobby","width_mm":null,"fire_rating":"FD30"}],"sources":[{"file_name":"doors.pdf","page":2}]}"#,
    )
    .await;

    let session = ChatSession::new(Arc::new(client(&url)));
    let outcome = session.submit("Generate a door schedule").await;
    server.await.unwrap();

    let mut d1 = DoorItem::new("D1", "Lobby");
    d1.fire_rating = Some("FD30".into());
    let expected = Message::table(
        vec![d1],
        vec![Source {
            file_name: "doors.pdf".into(),
            page: 2,
        }],
    );
    assert_eq!(outcome, SubmitOutcome::Answered(expected.clone()));
    assert_eq!(session.transcript().last(), Some(&expected));
}

#[tokio::test]
async fn session_over_http_keeps_schedule_with_malformed_row() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"type":"structured","data":[{"mark":"D1","location":"Lobby","width_mm":"900"},{"mark":null,"location":"Stair"}],"sources":[{"file_name":"doors.pdf","page":2}]}"#,
    )
    .await;

    let session = ChatSession::new(Arc::new(client(&url)));
    let outcome = session.submit("Generate a door schedule").await;
    server.await.unwrap();

    let mut d1 = DoorItem::new("D1", "Lobby");
    d1.width_mm = Some(900.0);
    let expected = Message::table(
        vec![d1, DoorItem::new("", "Stair")],
        vec![Source {
            file_name: "doors.pdf".into(),
            page: 2,
        }],
    );
    assert_eq!(outcome, SubmitOutcome::Answered(expected));
}

#[tokio::test]
async fn session_over_http_falls_back_on_server_error() {
    let (url, server) = serve_once("503 Service Unavailable", "").await;

    let session = ChatSession::new(Arc::new(client(&url)));
    session.submit("anything").await;
    server.await.unwrap();

    assert_eq!(session.transcript().last(), Some(&Message::backend_error()));
    assert!(!session.is_pending());
}

#[tokio::test]
async fn health_returns_status() {
    let (url, server) = serve_once("200 OK", r#"{"status":"ok"}"#).await;

    let status = client(&url).health().await.unwrap();
    let captured = server.await.unwrap();

    assert_eq!(captured.request_line(), "GET /health HTTP/1.1");
    assert_eq!(status, "ok");
}

#[tokio::test]
async fn evaluate_decodes_report() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"summary":{"looks_correct":1,"partially_correct":0,"wrong":1},
            "results":[{"question":"Q1","label":"looks correct","sources":[]},
                       {"question":"Q2","label":"wrong","sources":[{"file_name":"a.pdf","page":9}]}]}"#,
    )
    .await;

    let report = client(&url).evaluate().await.unwrap();
    let captured = server.await.unwrap();

    assert_eq!(captured.request_line(), "GET /eval HTTP/1.1");
    assert_eq!(report.summary.total(), 2);
    assert_eq!(report.results[1].label, EvalLabel::Wrong);
    assert_eq!(report.results[1].sources[0].page, 9);
}
