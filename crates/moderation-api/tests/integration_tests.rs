//! Integration tests for moderation-api against a mocked backend.
//!
//! Run with:
//!   cargo test -p moderation-api --test integration_tests

use moderation_api::{
    ApiClient, ApiError, ApiRequest, ChatUpdate, ClientConfig, CustomPromptCreate,
    CustomPromptUpdate, KeyValueStore, LinkCustomPromptRequest, LinkPromptRequest, LoginRequest,
    MemoryStore, PageQuery, RegisterRequest, TokenStore, UserStateUpdate, TOKEN_KEY,
};
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ClientConfig::new(server.uri())).unwrap()
}

fn logged_in_client(server: &MockServer, token: &str) -> ApiClient {
    let client = client_for(server);
    client.tokens().set_token(Some(token.to_string())).unwrap();
    client
}

fn chat_json(id: &str, enable_ai_check: bool) -> Value {
    json!({
        "id": id,
        "title": "Moderated group",
        "chat_link": null,
        "type": "supergroup",
        "platform_chat_id": -1001234567,
        "user_id": "u1",
        "enable_ai_check": enable_ai_check,
        "prompts_threshold": 0.5,
        "custom_prompt_threshold": 0.3,
        "cleanup_mentions": false,
        "allowed_mentions": [],
        "cleanup_emojis": true,
        "max_emoji_count": 5,
        "cleanup_links": true,
        "allowed_link_domains": ["example.com"],
        "cleanup_emails": false,
        "is_active": true,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z"
    })
}

fn custom_prompt_json(id: &str, name: &str, text: &str) -> Value {
    json!({
        "id": id,
        "user_id": "u1",
        "name": name,
        "prompt_text": text,
        "is_active": true,
        "created_at": "2024-01-01T00:00:00Z"
    })
}

fn user_state_json(id: &str, trusted: bool, valid_messages: u32) -> Value {
    json!({
        "id": id,
        "chat_id": "c1",
        "external_user_id": 424242,
        "trusted": trusted,
        "joined_at": null,
        "valid_messages": valid_messages,
        "is_active": true,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}

// ============================================================================
// Auth and token lifecycle
// ============================================================================

mod auth_tests {
    use super::*;

    #[tokio::test]
    async fn test_login_stores_access_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({ "email": "a@b.com", "password": "pw" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "jwt-123",
                "token_type": "bearer"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let token = client
            .auth()
            .login(&LoginRequest::new("a@b.com", "pw"))
            .await
            .unwrap();

        assert_eq!(token, "jwt-123");
        assert_eq!(client.tokens().token(), Some("jwt-123".to_string()));
    }

    #[tokio::test]
    async fn test_login_persists_into_storage() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "persisted",
                "token_type": "bearer"
            })))
            .mount(&server)
            .await;

        let storage = Arc::new(MemoryStore::new());
        let tokens = TokenStore::open(storage.clone()).unwrap();
        let client = ApiClient::with_token_store(ClientConfig::new(server.uri()), tokens).unwrap();

        client
            .auth()
            .login(&LoginRequest::new("a@b.com", "pw"))
            .await
            .unwrap();

        assert_eq!(storage.get(TOKEN_KEY).unwrap(), Some("persisted".to_string()));
    }

    #[tokio::test]
    async fn test_failed_login_keeps_previous_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_string(r#"{"detail":"Invalid credentials"}"#),
            )
            .mount(&server)
            .await;

        let client = logged_in_client(&server, "old");
        let err = client
            .auth()
            .login(&LoginRequest::new("a@b.com", "wrong"))
            .await
            .unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(client.tokens().token(), Some("old".to_string()));
    }

    #[tokio::test]
    async fn test_logout_clears_token_without_request() {
        let server = MockServer::start().await;
        let client = logged_in_client(&server, "jwt-123");

        client.auth().logout().unwrap();
        assert!(client.tokens().token().is_none());

        // Logging out twice is harmless
        client.auth().logout().unwrap();
        assert!(client.tokens().token().is_none());

        let requests = server.received_requests().await.unwrap();
        assert!(requests.is_empty());
    }

    #[tokio::test]
    async fn test_register_returns_user() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .and(body_json(json!({ "email": "a@b.com", "password": "pw" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "u1",
                "email": "a@b.com",
                "created_at": "2024-01-01T00:00:00Z"
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "unused",
                "token_type": "bearer"
            })))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let user = client
            .auth()
            .register(&RegisterRequest::new("a@b.com", "pw"))
            .await
            .unwrap();

        assert_eq!(user.id, "u1");
        assert_eq!(user.email, "a@b.com");
        assert!(user.username.is_none());
        assert!(client.tokens().token().is_none());
    }

    #[tokio::test]
    async fn test_register_then_login_when_enabled() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "u2",
                "email": "new@b.com",
                "username": "newbie",
                "created_at": "2024-01-01T00:00:00Z"
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({ "email": "new@b.com", "password": "secret123" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "fresh",
                "token_type": "bearer"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = ClientConfig::new(server.uri()).with_login_after_register(true);
        let client = ApiClient::new(config).unwrap();
        let user = client
            .auth()
            .register(&RegisterRequest::new("new@b.com", "secret123").with_username("newbie"))
            .await
            .unwrap();

        assert_eq!(user.username.as_deref(), Some("newbie"));
        assert_eq!(client.tokens().token(), Some("fresh".to_string()));
    }

    #[tokio::test]
    async fn test_connect_telegram() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/me/connect_telegram"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "pending",
                "message": "Click the link to connect your Telegram account",
                "bot_link": "https://t.me/modbot"
            })))
            .mount(&server)
            .await;

        let client = logged_in_client(&server, "jwt");
        let connect = client.auth().connect_telegram().await.unwrap();
        assert!(!connect.is_connected());
        assert_eq!(connect.bot_link.as_deref(), Some("https://t.me/modbot"));
    }
}

// ============================================================================
// Request wrapper behavior
// ============================================================================

mod request_tests {
    use super::*;

    #[tokio::test]
    async fn test_bearer_header_when_token_set() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .and(header("authorization", "Bearer jwt-abc"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "u1",
                "email": "a@b.com",
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z",
                "is_active": true,
                "telegram_user_id": 99
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = logged_in_client(&server, "jwt-abc");
        let me = client.auth().me().await.unwrap();
        assert_eq!(me.telegram_user_id, Some(99));
        assert_eq!(me.is_active, Some(true));
    }

    #[tokio::test]
    async fn test_no_authorization_header_without_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/chats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.chats().list().await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get("authorization").is_none());
        assert_eq!(
            requests[0].headers.get("content-type").unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_error_message_is_raw_body() {
        let server = MockServer::start().await;
        let body = r#"{"detail":"Chat not found"}"#;
        Mock::given(method("GET"))
            .and(path("/chats/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string(body))
            .mount(&server)
            .await;

        let client = logged_in_client(&server, "jwt");
        let err = client.chats().get("missing").await.unwrap_err();

        assert_eq!(err.to_string(), body);
        assert_eq!(err.status(), Some(404));
        match err {
            ApiError::Http { status, body: text } => {
                assert_eq!(status, 404);
                assert_eq!(text, body);
            }
            e => panic!("Unexpected error type: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_no_content_is_not_parsed() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/prompts/custom/p1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(3)
            .mount(&server)
            .await;

        let client = logged_in_client(&server, "jwt");
        client.prompts().delete("p1").await.unwrap();

        client
            .execute::<()>(ApiRequest::delete("/prompts/custom/p1"))
            .await
            .unwrap();

        let nothing: Option<Value> = client
            .execute(ApiRequest::delete("/prompts/custom/p1"))
            .await
            .unwrap();
        assert!(nothing.is_none());
    }

    #[tokio::test]
    async fn test_no_content_where_record_expected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = logged_in_client(&server, "jwt");
        let err = client.auth().me().await.unwrap_err();
        assert!(matches!(err, ApiError::Json(_)));
    }

    #[tokio::test]
    async fn test_invalid_json_is_a_json_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = logged_in_client(&server, "jwt");
        let err = client.auth().me().await.unwrap_err();
        assert!(matches!(err, ApiError::Json(_)));
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        let client = ApiClient::new(ClientConfig::new("http://127.0.0.1:59999")).unwrap();
        let err = client.auth().me().await.unwrap_err();
        match err {
            ApiError::Transport(_) => {} // Expected
            e => panic!("Unexpected error type: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_path_segments_are_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/chats/a%2Fb"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_json("a/b", false)))
            .expect(1)
            .mount(&server)
            .await;

        let client = logged_in_client(&server, "jwt");
        let chat = client.chats().get("a/b").await.unwrap();
        assert_eq!(chat.id, "a/b");
    }
}

// ============================================================================
// Chats
// ============================================================================

mod chat_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_unwraps_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/chats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [chat_json("c1", false)],
                "total": 1,
                "page": 1,
                "page_size": 20
            })))
            .mount(&server)
            .await;

        let client = logged_in_client(&server, "jwt");
        let chats = client.chats().list().await.unwrap();

        assert_eq!(chats.len(), 1);
        assert_eq!(chats[0].id, "c1");
        assert_eq!(
            chats[0].allowed_link_domains,
            Some(vec!["example.com".to_string()])
        );
    }

    #[tokio::test]
    async fn test_list_page_passes_page_numbers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/chats"))
            .and(query_param("page", "2"))
            .and(query_param("page_size", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [chat_json("c2", true)],
                "total": 3,
                "page": 2,
                "page_size": 1
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = logged_in_client(&server, "jwt");
        let page = client.chats().list_page(&PageQuery::page(2, 1)).await.unwrap();

        assert_eq!(page.page, Some(2));
        assert_eq!(page.total, Some(3));
        assert!(page.has_more());
        assert_eq!(page.items[0].id, "c2");
    }

    #[tokio::test]
    async fn test_update_then_get_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/chats/c1"))
            .and(body_json(json!({ "enable_ai_check": true })))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_json("c1", true)))
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/chats/c1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_json("c1", true)))
            .mount(&server)
            .await;

        let client = logged_in_client(&server, "jwt");
        let update = ChatUpdate::default().enable_ai_check(true);

        for _ in 0..2 {
            let updated = client.chats().update("c1", &update).await.unwrap();
            assert!(updated.enable_ai_check);
            let fetched = client.chats().get("c1").await.unwrap();
            assert!(fetched.enable_ai_check);
        }
    }

    #[tokio::test]
    async fn test_update_sends_only_set_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/chats/c1"))
            .and(body_json(json!({
                "cleanup_emojis": true,
                "max_emoji_count": 2
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_json("c1", false)))
            .expect(1)
            .mount(&server)
            .await;

        let client = logged_in_client(&server, "jwt");
        let update = ChatUpdate::default().cleanup_emojis(true, 2);
        client.chats().update("c1", &update).await.unwrap();
    }
}

// ============================================================================
// Prompts and prompt links
// ============================================================================

mod prompt_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_prompt_echoes_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/prompts/custom"))
            .and(body_json(json!({ "name": "Greeting", "prompt_text": "Hello" })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(custom_prompt_json("p-new", "Greeting", "Hello")),
            )
            .mount(&server)
            .await;

        let client = logged_in_client(&server, "jwt");
        let prompt = client
            .prompts()
            .create(&CustomPromptCreate::new("Greeting", "Hello"))
            .await
            .unwrap();

        assert_eq!(prompt.id, "p-new");
        assert_eq!(prompt.name.as_deref(), Some("Greeting"));
        assert_eq!(prompt.prompt_text.as_deref(), Some("Hello"));
    }

    #[tokio::test]
    async fn test_update_prompt_partial_body() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/prompts/custom/p1"))
            .and(body_json(json!({ "prompt_text": "Be strict" })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(custom_prompt_json("p1", "Rules", "Be strict")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = logged_in_client(&server, "jwt");
        let prompt = client
            .prompts()
            .update("p1", &CustomPromptUpdate::default().prompt_text("Be strict"))
            .await
            .unwrap();
        assert_eq!(prompt.prompt_text.as_deref(), Some("Be strict"));
    }

    #[tokio::test]
    async fn test_list_system_and_custom() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/prompts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{
                    "id": "s1",
                    "name": "Spam",
                    "prompt_text": "Detect spam",
                    "is_active": true,
                    "created_at": "2024-01-01T00:00:00Z"
                }],
                "total": 1,
                "page": 1,
                "page_size": 20
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/prompts/custom"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [custom_prompt_json("p1", "Mine", "Text")],
                "total": 1,
                "page": 1,
                "page_size": 20
            })))
            .mount(&server)
            .await;

        let client = logged_in_client(&server, "jwt");
        let system = client.prompts().list_system().await.unwrap();
        let custom = client.prompts().list_custom().await.unwrap();

        assert_eq!(system[0].name.as_deref(), Some("Spam"));
        assert_eq!(custom[0].id, "p1");
    }

    #[tokio::test]
    async fn test_system_prompt_search() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/prompts"))
            .and(query_param("search", "spam"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let client = logged_in_client(&server, "jwt");
        let page = client
            .prompts()
            .list_system_page(&PageQuery::default().with_search("spam"))
            .await
            .unwrap();
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn test_linked_prompts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/chats/c1/linked_prompts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "system_prompts": [{
                    "id": "l1",
                    "prompt_id": "s1",
                    "prompt_name": "Spam",
                    "threshold": 0.3,
                    "priority": 1,
                    "is_active": true
                }],
                "custom_prompts": []
            })))
            .mount(&server)
            .await;

        let client = logged_in_client(&server, "jwt");
        let links = client.chat_prompts().linked_prompts("c1").await.unwrap();

        assert_eq!(links.system_prompts.len(), 1);
        assert_eq!(links.system_prompts[0].prompt_id, "s1");
        assert!(links.custom_prompts.is_empty());
        assert!(!links.is_empty());
    }

    #[tokio::test]
    async fn test_link_and_unlink() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chats/c1/prompts"))
            .and(body_json(json!({ "prompt_id": "s1", "threshold": 0.7 })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "l1",
                "prompt_id": "s1",
                "threshold": 0.7,
                "is_active": true
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/chats/c1/custom-prompts"))
            .and(body_json(json!({ "custom_prompt_id": "p1", "priority": 2 })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "l2",
                "custom_prompt_id": "p1",
                "threshold": 0.3,
                "priority": 2,
                "is_active": true
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/chats/c1/prompts/s1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/chats/c1/custom-prompts/p1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = logged_in_client(&server, "jwt");
        let links = client.chat_prompts();

        let system = links
            .link_prompt("c1", &LinkPromptRequest::new("s1").with_threshold(0.7))
            .await
            .unwrap();
        assert_eq!(system.threshold, 0.7);

        let custom = links
            .link_custom_prompt("c1", &LinkCustomPromptRequest::new("p1").with_priority(2))
            .await
            .unwrap();
        assert_eq!(custom.priority, Some(2));

        links.unlink_prompt("c1", "s1").await.unwrap();
        links.unlink_custom_prompt("c1", "p1").await.unwrap();
    }
}

// ============================================================================
// Member trust and deleted messages
// ============================================================================

mod user_state_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_user_states_window() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/chats/c1/user-states"))
            .and(query_param("limit", "50"))
            .and(query_param("offset", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [user_state_json("us1", true, 12)],
                "limit": 50,
                "offset": 0,
                "total": 1
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = logged_in_client(&server, "jwt");
        let page = client
            .user_states()
            .list_page("c1", &PageQuery::window(50, 0))
            .await
            .unwrap();

        assert_eq!(page.items[0].external_user_id, 424242);
        assert!(!page.has_more());
    }

    #[tokio::test]
    async fn test_update_and_make_untrusted() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/chats/c1/user-states/us1"))
            .and(body_json(json!({ "trusted": true })))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_state_json("us1", true, 3)))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/chats/c1/user-states/us1/make-untrusted"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(user_state_json("us1", false, 0)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = logged_in_client(&server, "jwt");
        let trusted = client
            .user_states()
            .update("c1", "us1", &UserStateUpdate::trusted(true))
            .await
            .unwrap();
        assert!(trusted.trusted);

        let reset = client.user_states().make_untrusted("c1", "us1").await.unwrap();
        assert!(!reset.trusted);
        assert_eq!(reset.valid_messages, 0);
    }

    #[tokio::test]
    async fn test_deleted_messages() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/deleted-messages/c1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{
                    "job_id": "job-1",
                    "chat_id": -1001234567,
                    "chat_uuid": "c1",
                    "platform_user_id": 424242,
                    "nickname": "spammer",
                    "message_text": "buy now",
                    "timestamp": 1704067200
                }]
            })))
            .mount(&server)
            .await;

        let client = logged_in_client(&server, "jwt");
        let messages = client.deleted_messages().list("c1").await.unwrap();

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].nickname.as_deref(), Some("spammer"));
        assert!(messages[0].user_state_id.is_none());
    }

    #[tokio::test]
    async fn test_deleted_messages_with_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/deleted-messages/c1"))
            .and(query_param("limit", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [],
                "total": 0
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = logged_in_client(&server, "jwt");
        let page = client
            .deleted_messages()
            .list_page("c1", &PageQuery::limit(10))
            .await
            .unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total, Some(0));
    }
}
