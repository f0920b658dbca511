//! Platform clients against fake upstream servers.

use mockito::Matcher;
use social_client::{FacebookClient, InstagramClient, SocialClientError, TikTokClient};

#[tokio::test]
async fn facebook_posts_request_shape_and_decoding() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v18.0/page-1/posts")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("access_token".into(), "fb-token".into()),
            Matcher::UrlEncoded("limit".into(), "10".into()),
            Matcher::UrlEncoded(
                "fields".into(),
                "id,message,created_time,likes.summary(true),comments.summary(true),shares,full_picture,permalink_url,from".into(),
            ),
        ]))
        .with_status(200)
        .with_body(
            r#"{"data":[{"id":"p1","message":"hello","created_time":"2024-01-01T00:00:00+0000",
                "likes":{"summary":{"total_count":5}},"from":{"name":"Page"}}],
                "paging":{"cursors":{}}}"#,
        )
        .create_async()
        .await;

    let client = FacebookClient::new("fb-token", "page-1").with_base_url(server.url());
    let posts = client.popular_posts(10).await.unwrap();

    mock.assert_async().await;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, "p1");
    assert_eq!(posts[0].like_count(), Some(5));
    assert_eq!(posts[0].from.as_ref().and_then(|f| f.name.as_deref()), Some("Page"));
}

#[tokio::test]
async fn facebook_error_status_is_api_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v18.0/page-1/posts")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(r#"{"error":{"message":"Invalid OAuth access token."}}"#)
        .create_async()
        .await;

    let client = FacebookClient::new("bad", "page-1").with_base_url(server.url());
    let err = client.popular_posts(10).await.unwrap_err();

    match err {
        SocialClientError::Api { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("Invalid OAuth"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn facebook_malformed_payload_is_parse_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v18.0/page-1/posts")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"unexpected":true}"#)
        .create_async()
        .await;

    let client = FacebookClient::new("tok", "page-1").with_base_url(server.url());
    let err = client.popular_posts(10).await.unwrap_err();
    assert!(matches!(err, SocialClientError::Parse(_)));
}

#[tokio::test]
async fn facebook_publish_uses_photos_edge_with_image() {
    let mut server = mockito::Server::new_async().await;
    let photos = server
        .mock("POST", "/v18.0/page-1/photos")
        .match_body(Matcher::Json(serde_json::json!({
            "message": "Look at this",
            "access_token": "tok",
            "url": "https://img.example/a.jpg"
        })))
        .with_status(200)
        .with_body(r#"{"id":"photo-1","post_id":"page-1_9"}"#)
        .create_async()
        .await;

    let client = FacebookClient::new("tok", "page-1").with_base_url(server.url());
    let id = client
        .publish("Look at this", Some("https://img.example/a.jpg"))
        .await
        .unwrap();

    photos.assert_async().await;
    assert_eq!(id, "photo-1");
}

#[tokio::test]
async fn facebook_publish_uses_feed_edge_without_image() {
    let mut server = mockito::Server::new_async().await;
    let feed = server
        .mock("POST", "/v18.0/page-1/feed")
        .match_body(Matcher::Json(serde_json::json!({
            "message": "Text only",
            "access_token": "tok"
        })))
        .with_status(200)
        .with_body(r#"{"id":"page-1_10"}"#)
        .create_async()
        .await;

    let client = FacebookClient::new("tok", "page-1").with_base_url(server.url());
    let id = client.publish("Text only", None).await.unwrap();

    feed.assert_async().await;
    assert_eq!(id, "page-1_10");
}

#[tokio::test]
async fn instagram_media_request_and_decoding() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v18.0/acct-1/media")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("access_token".into(), "ig-token".into()),
            Matcher::UrlEncoded("limit".into(), "10".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"data":[{"id":"m1","caption":"cap","media_type":"VIDEO",
                "media_url":"https://v.example/1.mp4","thumbnail_url":"https://i.example/1.jpg",
                "like_count":7,"comments_count":2,"username":"creator"}]}"#,
        )
        .create_async()
        .await;

    let client = InstagramClient::new("ig-token", "acct-1").with_base_url(server.url());
    let media = client.popular_posts(10).await.unwrap();

    assert_eq!(media.len(), 1);
    assert!(media[0].is_video());
    assert_eq!(media[0].like_count, Some(7));
}

#[tokio::test]
async fn instagram_publish_creates_then_publishes_container() {
    let mut server = mockito::Server::new_async().await;
    let container = server
        .mock("POST", "/v18.0/acct-1/media")
        .match_body(Matcher::Json(serde_json::json!({
            "image_url": "https://img.example/b.jpg",
            "caption": "Caption",
            "access_token": "tok"
        })))
        .with_status(200)
        .with_body(r#"{"id":"container-42"}"#)
        .create_async()
        .await;
    let publish = server
        .mock("POST", "/v18.0/acct-1/media_publish")
        .match_body(Matcher::Json(serde_json::json!({
            "creation_id": "container-42",
            "access_token": "tok"
        })))
        .with_status(200)
        .with_body(r#"{"id":"media-99"}"#)
        .create_async()
        .await;

    let client = InstagramClient::new("tok", "acct-1").with_base_url(server.url());
    let id = client
        .publish("Caption", "https://img.example/b.jpg")
        .await
        .unwrap();

    container.assert_async().await;
    publish.assert_async().await;
    assert_eq!(id, "media-99");
}

#[tokio::test]
async fn instagram_publish_stops_when_container_fails() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v18.0/acct-1/media")
        .with_status(500)
        .create_async()
        .await;
    let publish = server
        .mock("POST", "/v18.0/acct-1/media_publish")
        .expect(0)
        .create_async()
        .await;

    let client = InstagramClient::new("tok", "acct-1").with_base_url(server.url());
    let err = client.publish("c", "https://img.example/b.jpg").await.unwrap_err();

    assert!(matches!(err, SocialClientError::Api { status: 500, .. }));
    publish.assert_async().await;
}

#[tokio::test]
async fn tiktok_list_uses_bearer_auth() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/video/list/")
        .match_header("authorization", "Bearer tt-token")
        .match_query(Matcher::UrlEncoded("max_count".into(), "10".into()))
        .with_status(200)
        .with_body(
            r#"{"data":{"videos":[{"id":"v1","title":"t","create_time":1700000000,
                "like_count":10,"share_count":1}],"cursor":0,"has_more":false},
                "error":{"code":"ok","message":""}}"#,
        )
        .create_async()
        .await;

    let client = TikTokClient::new("tt-token").with_base_url(server.url());
    let videos = client.popular_posts(10).await.unwrap();

    mock.assert_async().await;
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].create_time, Some(1_700_000_000));
    assert_eq!(videos[0].comment_count, None);
}
