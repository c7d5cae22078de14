use std::time::Duration;

use extractor_engine::{ClientSettings, ExtractError, ExtractionClient, ReqwestExtractionClient};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE_URL: &str = "https://www.amazon.in/dp/B0C1234567?th=1&psc=1";

fn client_for(server: &MockServer) -> ReqwestExtractionClient {
    ReqwestExtractionClient::new(ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    })
    .expect("client")
}

#[tokio::test]
async fn returns_image_and_gallery() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/extract-images"))
        .and(query_param("url", PAGE_URL))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "image": "https://m.media-amazon.com/images/I/main.jpg",
            "imageList": [
                "https://m.media-amazon.com/images/I/a._SS40_.jpg",
                "https://m.media-amazon.com/images/I/b._SS40_.jpg"
            ],
            "url": PAGE_URL
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).extract(PAGE_URL).await.expect("extract ok");

    assert_eq!(response.image, "https://m.media-amazon.com/images/I/main.jpg");
    assert_eq!(
        response.image_list,
        vec![
            "https://m.media-amazon.com/images/I/a._SS40_.jpg".to_string(),
            "https://m.media-amazon.com/images/I/b._SS40_.jpg".to_string(),
        ]
    );
}

#[tokio::test]
async fn gallery_is_optional() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/extract-images"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "image": "https://x/img.jpg" })),
        )
        .mount(&server)
        .await;

    let response = client_for(&server)
        .extract("https://shop.example/item")
        .await
        .expect("extract ok");
    assert_eq!(response.image, "https://x/img.jpg");
    assert!(response.image_list.is_empty());
}

#[tokio::test]
async fn accepts_legacy_images_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/extract-images"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "image": "https://x/img.jpg",
            "images": ["https://x/a.jpg"]
        })))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .extract("https://shop.example/item")
        .await
        .expect("extract ok");
    assert_eq!(response.image_list, vec!["https://x/a.jpg".to_string()]);
}

#[tokio::test]
async fn missing_image_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/extract-images"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "image": "",
            "imageList": ["https://x/a.jpg"]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .extract("https://shop.example/item")
        .await
        .unwrap_err();
    assert_eq!(err, ExtractError::NotFound);
}

#[tokio::test]
async fn non_json_success_body_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/extract-images"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .extract("https://shop.example/item")
        .await
        .unwrap_err();
    assert_eq!(err, ExtractError::NotFound);
}

#[tokio::test]
async fn service_error_carries_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/extract-images"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "message": "Unsupported site" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .extract("https://shop.example/item")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ExtractError::Service {
            status: 422,
            message: "Unsupported site".to_string()
        }
    );
}

#[tokio::test]
async fn service_error_without_body_has_empty_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/extract-images"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .extract("https://shop.example/item")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ExtractError::Service {
            status: 500,
            message: String::new()
        }
    );
}

#[tokio::test]
async fn blank_url_never_hits_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server).extract("  \t ").await.unwrap_err();
    assert!(matches!(err, ExtractError::Validation(_)));
}

#[tokio::test]
async fn slow_service_times_out_as_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/extract-images"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "image": "https://x/img.jpg" })),
        )
        .mount(&server)
        .await;

    let client = ReqwestExtractionClient::new(ClientSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    })
    .expect("client");

    let err = client
        .extract("https://shop.example/item")
        .await
        .unwrap_err();
    assert!(matches!(err, ExtractError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_service_is_network_error() {
    // Nothing listens on port 1.
    let client = ReqwestExtractionClient::new(ClientSettings {
        base_url: "http://127.0.0.1:1".to_string(),
        connect_timeout: Duration::from_secs(2),
        ..ClientSettings::default()
    })
    .expect("client");

    let err = client
        .extract("https://shop.example/item")
        .await
        .unwrap_err();
    assert!(matches!(err, ExtractError::Network(_)), "got {err:?}");
}

#[test]
fn endpoint_percent_encodes_the_page_url() {
    let client = ReqwestExtractionClient::new(ClientSettings {
        base_url: "http://localhost:3000/".to_string(),
        ..ClientSettings::default()
    })
    .expect("client");

    let endpoint = client.endpoint("https://a.example/x?y=1&z=2").unwrap();
    assert_eq!(
        endpoint.as_str(),
        "http://localhost:3000/api/extract-images?url=https%3A%2F%2Fa.example%2Fx%3Fy%3D1%26z%3D2"
    );
}
