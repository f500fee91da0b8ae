//! Unit tests for the HTTP transport

use super::*;
use crate::error::ErrorKind;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn source_for(server: &MockServer) -> HttpSource {
    let config = Config::default().with_base_url(server.uri()).unwrap();
    HttpSource::new(&config).unwrap()
}

#[cfg(test)]
mod url_tests {
    use super::*;

    #[test]
    fn test_players_url() {
        assert_eq!(
            players_url("https://fantasy.premierleague.com/drf"),
            "https://fantasy.premierleague.com/drf/elements/"
        );
        assert_eq!(players_url("http://localhost/"), "http://localhost/elements/");
    }

    #[test]
    fn test_player_detail_url() {
        assert_eq!(
            player_detail_url("https://fantasy.premierleague.com/drf", PlayerId::new(302)),
            "https://fantasy.premierleague.com/drf/element-summary/302"
        );
    }

    #[test]
    fn test_with_client_trims_trailing_slash() {
        let source = HttpSource::with_client(Client::new(), "http://localhost:1234/");
        assert_eq!(source.base_url(), "http://localhost:1234");
    }
}

#[cfg(test)]
mod http_tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_all_players_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/elements/"))
            .and(header("accept", "application/json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"id": 1, "web_name": "A"}, {"id": 2}])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let players = source_for(&mock_server).fetch_all_players().await.unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0]["web_name"], "A");
    }

    #[tokio::test]
    async fn test_fetch_player_detail_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/element-summary/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "fixtures": [],
                "history": []
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let detail = source_for(&mock_server)
            .fetch_player_detail(PlayerId::new(7))
            .await
            .unwrap();
        assert!(detail.contains_key("fixtures"));
    }

    #[tokio::test]
    async fn test_http_error_status_is_transport_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&mock_server)
            .await;

        let err = source_for(&mock_server)
            .fetch_player_detail(PlayerId::new(1))
            .await
            .unwrap_err();

        assert!(matches!(err, FplError::Http(_)));
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_invalid_json_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("invalid json"))
            .mount(&mock_server)
            .await;

        let err = source_for(&mock_server)
            .fetch_all_players()
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_bulk_list_must_be_array() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/elements/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"elements": []})))
            .mount(&mock_server)
            .await;

        let err = source_for(&mock_server)
            .fetch_all_players()
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            FplError::InvalidField {
                document: Document::Bulk,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_detail_must_be_object() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/element-summary/3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2, 3])))
            .mount(&mock_server)
            .await;

        let err = source_for(&mock_server)
            .fetch_player_detail(PlayerId::new(3))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conversion);
    }

    #[tokio::test]
    async fn test_user_agent_from_config() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/elements/"))
            .and(header("user-agent", "fpl-test-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut config = Config::default().with_base_url(mock_server.uri()).unwrap();
        config.user_agent = "fpl-test-agent".to_string();
        let source = HttpSource::new(&config).unwrap();

        let players = source.fetch_all_players().await.unwrap();
        assert!(players.is_empty());
    }
}
