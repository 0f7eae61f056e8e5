use crate::support::{closed_port_url, test_fetcher, RecordingSleeper};
use quote_scraper::config::{FetcherConfig, UserAgentConfig};
use quote_scraper::fetch::build_http_client;
use quote_scraper::{AttemptState, Fetcher};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .expect("Request recording is enabled")
        .len()
}

#[tokio::test]
async fn test_transport_failure_uses_every_attempt() {
    for max_attempts in 1..=4 {
        let config = FetcherConfig::default();
        let (mut fetcher, sleeper) = test_fetcher(&config);

        let outcome = fetcher.fetch_outcome(&closed_port_url(), max_attempts).await;

        assert_eq!(outcome.state, AttemptState::Exhausted);
        assert_eq!(outcome.attempts, max_attempts);
        assert!(outcome.body.is_none());
        // One pre-request pause per attempt
        assert_eq!(sleeper.count(), max_attempts as usize);
    }
}

#[tokio::test]
async fn test_server_error_uses_every_attempt() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&mock_server)
        .await;

    let (mut fetcher, _) = test_fetcher(&FetcherConfig::default());
    let body = fetcher.fetch(&mock_server.uri(), 3).await;

    assert!(body.is_none());
    assert_eq!(request_count(&mock_server).await, 3);
}

#[tokio::test]
async fn test_success_on_attempt_k_stops_retrying() {
    let max_attempts = 4;

    for k in 1..=max_attempts {
        let mock_server = MockServer::start().await;

        if k > 1 {
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(503))
                .up_to_n_times(k as u64 - 1)
                .mount(&mock_server)
                .await;
        }
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>ok</p>"))
            .mount(&mock_server)
            .await;

        let (mut fetcher, sleeper) = test_fetcher(&FetcherConfig::default());
        let outcome = fetcher.fetch_outcome(&mock_server.uri(), max_attempts).await;

        assert_eq!(outcome.state, AttemptState::Succeeded);
        assert_eq!(outcome.attempts, k);
        assert_eq!(outcome.body.as_deref(), Some("<p>ok</p>"));
        assert_eq!(request_count(&mock_server).await, k as usize);
        assert_eq!(sleeper.count(), k as usize);
    }
}

#[tokio::test]
async fn test_client_error_retried_by_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(3)
        .mount(&mock_server)
        .await;

    let (mut fetcher, _) = test_fetcher(&FetcherConfig::default());
    let url = format!("{}/missing", mock_server.uri());
    let outcome = fetcher.fetch_outcome(&url, 3).await;

    assert_eq!(outcome.state, AttemptState::Exhausted);
    assert_eq!(outcome.attempts, 3);
}

#[tokio::test]
async fn test_client_error_abandoned_when_not_retrying() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = FetcherConfig {
        retry_client_errors: false,
        ..FetcherConfig::default()
    };
    let (mut fetcher, _) = test_fetcher(&config);
    let url = format!("{}/missing", mock_server.uri());
    let outcome = fetcher.fetch_outcome(&url, 3).await;

    assert_eq!(outcome.state, AttemptState::Abandoned);
    assert_eq!(outcome.attempts, 1);
    assert!(outcome.body.is_none());
}

#[tokio::test]
async fn test_too_many_requests_still_retried_when_not_retrying_client_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .expect(3)
        .mount(&mock_server)
        .await;

    let config = FetcherConfig {
        retry_client_errors: false,
        ..FetcherConfig::default()
    };
    let (mut fetcher, _) = test_fetcher(&config);
    let outcome = fetcher.fetch_outcome(&mock_server.uri(), 3).await;

    assert_eq!(outcome.state, AttemptState::Exhausted);
    assert_eq!(outcome.attempts, 3);
}

#[tokio::test]
async fn test_sends_configured_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("user-agent", "QuoteScraperTest/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = FetcherConfig::default();
    let agent = UserAgentConfig {
        value: "QuoteScraperTest/1.0".to_string(),
    };
    let client = build_http_client(&agent, &config).expect("Failed to build HTTP client");
    let mut fetcher = Fetcher::with_parts(
        client,
        &config,
        StdRng::seed_from_u64(3),
        RecordingSleeper::default(),
    );
    let body = fetcher.fetch(&mock_server.uri(), 1).await;

    assert_eq!(body.as_deref(), Some("hello"));
}

#[tokio::test]
async fn test_pauses_drawn_from_configured_range() {
    let config = FetcherConfig {
        min_delay_ms: 1000,
        max_delay_ms: 3000,
        ..FetcherConfig::default()
    };
    let (mut fetcher, sleeper) = test_fetcher(&config);

    let body = fetcher.fetch(&closed_port_url(), 5).await;
    assert!(body.is_none());

    let pauses = sleeper.pauses();
    assert_eq!(pauses.len(), 5);
    for pause in pauses {
        assert!(pause >= Duration::from_millis(1000));
        assert!(pause <= Duration::from_millis(3000));
    }
}
