use awsrole::{aws::Credentials, aws::Federation, cli::Cli};
use aws_smithy_types::DateTime;
use clap::Parser;
use serde_json::json;
use url::Url;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const DESTINATION: &str = "https://console.aws.amazon.com/console/home";

fn credentials() -> Credentials {
    Credentials {
        access_key_id: "ASIAMOCK".to_string(),
        secret_access_key: "mock_session_key".to_string(),
        session_token: "mock_session_token".to_string(),
        expiration: DateTime::from_secs(1_700_000_000),
    }
}

fn federation(server: &MockServer) -> (Federation, String) {
    let endpoint = format!("{}/federation", server.uri());
    let federation = Federation::new(Url::parse(&endpoint).unwrap(), DESTINATION);
    (federation, endpoint)
}

fn query_value(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

#[tokio::test]
async fn test_login_url_from_signin_token() {
    let server = MockServer::start().await;
    let (federation, endpoint) = federation(&server);

    Mock::given(method("GET"))
        .and(path("/federation"))
        .and(query_param("Action", "getSigninToken"))
        .and(query_param(
            "Session",
            r#"{"sessionId":"ASIAMOCK","sessionKey":"mock_session_key","sessionToken":"mock_session_token"}"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "SigninToken": "T" })))
        .expect(1)
        .mount(&server)
        .await;

    let url = federation.login_url_for(&credentials(), 3600).await.unwrap();

    assert!(url.as_str().starts_with(&format!("{endpoint}?")));
    assert!(url.as_str().contains("SigninToken=T"));
    assert_eq!(query_value(&url, "Action").as_deref(), Some("login"));
    assert_eq!(query_value(&url, "Destination").as_deref(), Some(DESTINATION));
    assert_eq!(query_value(&url, "SigninToken").as_deref(), Some("T"));
}

#[tokio::test]
async fn test_default_duration_is_sent_as_session_duration() {
    let server = MockServer::start().await;
    let (federation, _) = federation(&server);

    Mock::given(method("GET"))
        .and(path("/federation"))
        .and(query_param("SessionDuration", "43200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "SigninToken": "T" })))
        .expect(1)
        .mount(&server)
        .await;

    let cli = Cli::try_parse_from(["awsrole", "MyRole"]).unwrap();
    let duration = i32::try_from(cli.assume.time).unwrap();

    let token = federation
        .signin_token(&credentials(), duration)
        .await
        .unwrap();
    assert_eq!(token, "T");
}

#[tokio::test]
async fn test_error_status_fails() {
    let server = MockServer::start().await;
    let (federation, _) = federation(&server);

    Mock::given(method("GET"))
        .and(path("/federation"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Bad Request"))
        .mount(&server)
        .await;

    let err = federation
        .login_url_for(&credentials(), 3600)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("400"));
}

#[tokio::test]
async fn test_malformed_response_fails() {
    let server = MockServer::start().await;
    let (federation, _) = federation(&server);

    Mock::given(method("GET"))
        .and(path("/federation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Token": "T" })))
        .mount(&server)
        .await;

    let err = federation
        .signin_token(&credentials(), 3600)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Failed to parse signin token response"));
}
