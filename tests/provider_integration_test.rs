/// Integration tests for the Unsplash media provider
///
/// These tests drive the provider end-to-end against a mock Unsplash
/// server, covering:
/// - Listing queries with sponsored-entry repair
/// - Search queries with synthetic rank dates and total counts
/// - Query translation as it appears on the wire
/// - Credential header handling (present and absent)
/// - The empty-list failure boundary (HTTP errors, malformed bodies)
use mockito::{Matcher, Server, ServerGuard};
use serde_json::{json, Value};

use unsplash_provider::{
    MediaProvider, MediaQuery, ProviderConfig, SortDirection, UnsplashProvider,
    SEARCH_DATE_BASE,
};

/// Raw photo object as the API would return it.
fn photo(id: &str, created_at: Option<&str>, sponsored: bool) -> Value {
    let mut value = json!({
        "id": id,
        "created_at": created_at,
        "width": 4000,
        "height": 3000,
        "description": null,
        "alt_description": format!("photo {id}"),
        "urls": {
            "raw": format!("https://images.unsplash.com/photo-{id}?ixid=tracked")
        },
        "links": {
            "html": format!("https://unsplash.com/photos/{id}")
        },
        "user": {
            "name": "Test Photographer",
            "links": { "html": "https://unsplash.com/@tester" }
        }
    });
    if sponsored {
        value["sponsorship"] = json!({ "sponsor": { "id": "brand" } });
    }
    value
}

fn provider_for(server: &ServerGuard) -> UnsplashProvider {
    let config = ProviderConfig {
        api_key: Some("test-api-key".to_string()),
        base_url: server.url(),
        ..Default::default()
    };
    UnsplashProvider::new(&config).expect("Failed to create provider")
}

#[tokio::test]
async fn test_listing_repairs_sponsored_entries() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/photos")
        .match_header("authorization", "Client-ID test-api-key")
        .match_header("accept-version", "v1")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("per_page".into(), "30".into()),
            Matcher::UrlEncoded("order_by".into(), "latest".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                photo("X", Some("2020-01-01T00:00:00Z"), true),
                photo("Y", Some("1970-01-01T00:01:40Z"), false),
                photo("Z", Some("1970-01-01T00:01:30Z"), false),
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let provider = provider_for(&server);
    let list = provider.query(&MediaQuery::default()).await;

    let summary: Vec<(&str, Option<i64>)> = list
        .items
        .iter()
        .map(|image| (image.id.as_str(), image.date))
        .collect();
    assert_eq!(
        summary,
        [("X100", Some(100)), ("Y", Some(100)), ("Z", Some(90))]
    );
    assert_eq!(list.total, None);

    // The sponsored entry still routes downloads by its upstream id.
    assert_eq!(list.items[0].source_id, "X");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_listing_maps_photo_fields() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/photos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([photo("abc", Some("2020-04-17T00:00:00Z"), false)]).to_string())
        .create_async()
        .await;

    let provider = provider_for(&server);
    let list = provider.query(&MediaQuery::default()).await;

    assert_eq!(list.len(), 1);
    let image = &list.items[0];
    assert_eq!(image.mime_type, "image/jpeg");
    assert_eq!(image.filename, "abc.jpg");
    assert_eq!(image.title, "photo abc");
    assert_eq!(image.alt, "photo abc");
    assert!(image.description.contains("Test Photographer"));
    assert!(image.sizes.contains_key("thumbnail"));
    assert!(image.sizes.contains_key("full"));
    assert!(image.sizes["medium"].url.contains("fit=crop"));
    assert!(image.sizes["large"].url.contains("fit=max"));
}

#[tokio::test]
async fn test_search_assigns_rank_dates_and_total() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/search/photos")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "coffee".into()),
            Matcher::UrlEncoded("order_by".into(), "relevant".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("per_page".into(), "30".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "total": 2000,
                "total_pages": 67,
                "results": [
                    photo("first", Some("2019-06-01T00:00:00Z"), false),
                    photo("second", Some("2021-06-01T00:00:00Z"), false),
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let provider = provider_for(&server);
    let list = provider
        .query(&MediaQuery {
            search: Some("coffee".to_string()),
            // A date sort is requested, but search only supports relevance.
            order_by: Some("date".to_string()),
            order: Some(SortDirection::Desc),
            ..Default::default()
        })
        .await;

    // Rank dates replace capture dates entirely.
    assert_eq!(list.items[0].date, Some(SEARCH_DATE_BASE - 29));
    assert_eq!(list.items[1].date, Some(SEARCH_DATE_BASE - 28));
    assert_eq!(list.total, Some(2000));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_requested_page_size_is_clamped_on_the_wire() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/photos")
        .match_query(Matcher::UrlEncoded("per_page".into(), "30".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let provider = provider_for(&server);
    let list = provider
        .query(&MediaQuery {
            per_page: Some(100),
            ..Default::default()
        })
        .await;

    assert!(list.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_credential_sends_no_authorization_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/photos")
        .match_header("authorization", Matcher::Missing)
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"errors":["OAuth error: The access token is invalid"]}"#)
        .create_async()
        .await;

    let config = ProviderConfig {
        api_key: None,
        base_url: server.url(),
        ..Default::default()
    };
    let provider = UnsplashProvider::new(&config).expect("Failed to create provider");
    let list = provider.query(&MediaQuery::default()).await;

    // The upstream rejection surfaces as an empty result, nothing more.
    assert!(list.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_yields_empty_list() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/photos")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let provider = provider_for(&server);
    let list = provider.query(&MediaQuery::default()).await;

    assert!(list.is_empty());
}

#[tokio::test]
async fn test_malformed_body_yields_empty_list() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/photos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html>definitely not json</html>")
        .create_async()
        .await;

    let provider = provider_for(&server);
    let list = provider.query(&MediaQuery::default()).await;

    assert!(list.is_empty());
}

#[tokio::test]
async fn test_search_failure_yields_empty_list() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/search/photos")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("try later")
        .create_async()
        .await;

    let provider = provider_for(&server);
    let list = provider
        .query(&MediaQuery {
            search: Some("anything".to_string()),
            ..Default::default()
        })
        .await;

    assert!(list.is_empty());
}

#[tokio::test]
async fn test_track_download_pings_upstream() {
    let mut server = Server::new_async().await;
    let listing = server
        .mock("GET", "/photos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([photo("dl1", Some("2020-04-17T00:00:00Z"), false)]).to_string())
        .create_async()
        .await;
    let download = server
        .mock("GET", "/photos/dl1/download")
        .match_header("authorization", "Client-ID test-api-key")
        .with_status(200)
        .with_body(r#"{"url":"https://images.unsplash.com/photo-dl1"}"#)
        .create_async()
        .await;

    let provider = provider_for(&server);
    let list = provider.query(&MediaQuery::default()).await;
    provider.track_download(&list.items[0]);

    // Fire-and-forget: give the spawned request a moment to land.
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;

    listing.assert_async().await;
    download.assert_async().await;
}

#[tokio::test]
async fn test_track_download_failure_is_silent() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/photos/gone/download")
        .with_status(404)
        .with_body(r#"{"errors":["Couldn't find Photo"]}"#)
        .create_async()
        .await;

    let config = ProviderConfig {
        api_key: Some("test-api-key".to_string()),
        base_url: server.url(),
        ..Default::default()
    };
    let provider = UnsplashProvider::new(&config).expect("Failed to create provider");

    let image = unsplash_provider::Image {
        id: "gone".to_string(),
        source_id: "gone".to_string(),
        mime_type: "image/jpeg".to_string(),
        url: String::new(),
        filename: "gone.jpg".to_string(),
        link: String::new(),
        title: String::new(),
        width: 1,
        height: 1,
        alt: String::new(),
        description: String::new(),
        caption: String::new(),
        sizes: std::collections::BTreeMap::new(),
        date: None,
    };

    // Must not panic or block on the failed ping.
    provider.track_download(&image);
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
}
