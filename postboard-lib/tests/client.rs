//! Client tests against a local stub HTTP server.

use std::convert::Infallible;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use postboard_lib::PostboardClient;
use postboard_lib::error::{ApiError, Error};
use postboard_lib::model::PostDraft;

const POST_JSON: &str = r#"{"id":1,"title":"First post","body":"Hello","userId":3}"#;
const POSTS_JSON: &str = r#"[
    {"id":1,"title":"First post","body":"Hello","userId":3},
    {"id":2,"title":"Second post","body":"World","userId":4,"author":"Jordan"}
]"#;
const USERS_JSON: &str =
    r#"[{"id":3,"name":"Jordan Reyes","username":"jreyes","email":"jordan@example.com"}]"#;

async fn handle(req: Request<Incoming>) -> Result<Response<Full<Bytes>>, Infallible> {
    let (status, body) = match (req.method().as_str(), req.uri().path()) {
        ("GET", "/posts") => (StatusCode::OK, POSTS_JSON),
        ("GET", "/posts/1") => (StatusCode::OK, POST_JSON),
        ("POST", "/posts") => (StatusCode::CREATED, POST_JSON),
        ("PUT", "/posts/1") => (StatusCode::OK, POST_JSON),
        ("DELETE", "/posts/1") => (StatusCode::OK, "{}"),
        ("GET", "/users") => (StatusCode::OK, USERS_JSON),
        ("GET", "/posts/418") => (StatusCode::IM_A_TEAPOT, "short and stout"),
        ("GET", "/posts/503") => (StatusCode::SERVICE_UNAVAILABLE, ""),
        _ => (StatusCode::NOT_FOUND, "no such post"),
    };

    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body)))
        .unwrap())
}

/// Starts a stub server on an ephemeral port, returning its base URL.
async fn start_stub_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                return;
            };
            let io = TokioIo::new(stream);
            tokio::spawn(async move {
                let _ = http1::Builder::new()
                    .serve_connection(io, service_fn(handle))
                    .await;
            });
        }
    });

    format!("http://{}", addr)
}

fn client_for(base_url: &str) -> PostboardClient {
    PostboardClient::builder().url(base_url).build().unwrap()
}

#[tokio::test]
async fn test_list_posts() {
    let base = start_stub_server().await;
    let client = client_for(&base);

    let posts = client.list_posts().await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].title, "First post");
    assert_eq!(posts[0].user_id, 3);
    assert_eq!(posts[0].author, None);
    assert_eq!(posts[1].author.as_deref(), Some("Jordan"));
}

#[tokio::test]
async fn test_crud_round_trip() {
    let base = start_stub_server().await;
    let client = client_for(&base);

    let draft = PostDraft {
        title: "First post".to_string(),
        body: "Hello".to_string(),
        user_id: 3,
    };

    let created = client.create_post(&draft).await.unwrap();
    assert_eq!(created.id, 1);

    let fetched = client.get_post(1).await.unwrap();
    assert_eq!(fetched, created);

    let updated = client.update_post(1, &draft).await.unwrap();
    assert_eq!(updated.id, 1);

    client.delete_post(1).await.unwrap();
}

#[tokio::test]
async fn test_list_users() {
    let base = start_stub_server().await;
    let client = client_for(&base);

    let users = client.list_users().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "jordan@example.com");
}

#[tokio::test]
async fn test_missing_post_classifies_as_not_found() {
    let base = start_stub_server().await;
    let client = client_for(&base);

    match client.get_post(999).await {
        Err(Error::Api(ApiError::NotFound { message })) => {
            assert_eq!(message, "no such post");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unmapped_status_carries_code() {
    let base = start_stub_server().await;
    let client = client_for(&base);

    match client.get_post(418).await {
        Err(Error::Api(ApiError::Http { status, message })) => {
            assert_eq!(status, 418);
            assert_eq!(message, "short and stout");
        }
        other => panic!("expected generic Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_error_body_gets_default_message() {
    let base = start_stub_server().await;
    let client = client_for(&base);

    match client.get_post(503).await {
        Err(Error::Api(ApiError::ServiceUnavailable { message })) => {
            assert_eq!(message, "Service unavailable");
        }
        other => panic!("expected ServiceUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_server_classifies_as_network() {
    // Bind then drop a listener so the port is (almost certainly) closed.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{}", addr));
    match client.list_posts().await {
        Err(Error::Api(ApiError::Network(source))) => {
            assert!(source.status().is_none());
        }
        other => panic!("expected Network error, got {other:?}"),
    }
}
