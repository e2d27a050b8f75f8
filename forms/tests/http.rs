#![cfg(feature = "native")]

use std::rc::Rc;
use std::time::Duration;

use forms::http::HttpTransport;
use forms::{
    Attempt, Coordinator, Endpoint, Failure, FieldSpec, FormSchema, SubmissionState, SubmitError,
    WireMapping,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

fn coordinator(endpoint: Endpoint) -> Coordinator<HttpTransport> {
    let schema = FormSchema::builder("book-demo")
        .field(FieldSpec::text("name").required())
        .field(FieldSpec::email("email").required())
        .build()
        .unwrap();
    let coordinator = Coordinator::new(Rc::new(schema), HttpTransport::new(endpoint))
        .with_mapping(WireMapping::identity().rename("email", "workEmail"));
    coordinator.set_field("name", "Jane").unwrap();
    coordinator.set_field("email", "jane@example.com").unwrap();
    coordinator
}

/// Reads one request, headers and `Content-Length` body.
async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

async fn listen() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/api/book-demo", listener.local_addr().unwrap());
    (listener, url)
}

#[tokio::test]
async fn silent_server_times_out() {
    let (listener, url) = listen().await;
    tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
    });

    let timeout = Duration::from_millis(300);
    let form = coordinator(Endpoint::custom(url).with_timeout(timeout));

    assert_eq!(
        form.submit().await,
        Attempt::Finished(SubmissionState::Failed(Failure::Submit(SubmitError::TimedOut(timeout))))
    );
}

#[tokio::test]
async fn closed_port_is_unreachable() {
    let (listener, url) = listen().await;
    drop(listener);

    let form = coordinator(Endpoint::custom(url).with_timeout(Duration::from_secs(5)));

    let attempt = form.submit().await;
    assert!(
        matches!(
            attempt,
            Attempt::Finished(SubmissionState::Failed(Failure::Submit(SubmitError::Unreachable(_))))
        ),
        "got {:?}",
        attempt
    );
}

#[tokio::test]
async fn server_error_body_is_surfaced() {
    let (listener, url) = listen().await;
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let body = r#"{"error":"db down"}"#;
        let response = format!(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        request
    });

    let form = coordinator(Endpoint::custom(url).with_timeout(Duration::from_secs(5)));

    assert_eq!(
        form.submit().await,
        Attempt::Finished(SubmissionState::Failed(Failure::Submit(SubmitError::Server {
            status: 500,
            message: "db down".into(),
        })))
    );
    assert_eq!(form.field("name"), Some("Jane".into()));

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/book-demo"));
    assert!(request.contains(r#""workEmail":"jane@example.com""#));
}
