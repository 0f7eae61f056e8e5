use crate::support::{quotes_page, test_fetcher};
use quote_scraper::config::Config;
use quote_scraper::{read_table, Coordinator, QUOTE_FIELDS};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a config pointing at `url` and writing into `dir`
fn create_test_config(url: &str, dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.target.url = url.to_string();
    config.output.csv_path = dir.path().join("quotes.csv").display().to_string();
    config.fetcher.max_attempts = 2;
    config
}

#[tokio::test]
async fn test_full_scrape_writes_csv() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(quotes_page(&[
                    ("“The world as we have created it.”", "Albert Einstein", &["change", "thinking"]),
                    ("“It is our choices, Harry.”", "J.K. Rowling", &["abilities", "choices"]),
                    ("“A day without sunshine.”", "Steve Martin", &[]),
                ]))
                .insert_header("content-type", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&format!("{}/", mock_server.uri()), &dir);
    let (fetcher, _) = test_fetcher(&config.fetcher);
    let mut coordinator = Coordinator::with_fetcher(config, fetcher);

    let records = coordinator.run(None).await;

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].text, "“The world as we have created it.”");
    assert_eq!(records[0].author, "Albert Einstein");
    assert_eq!(records[0].tags, "change, thinking");
    assert_eq!(records[2].tags, "");

    let (header, rows) = read_table(&dir.path().join("quotes.csv")).unwrap();
    assert_eq!(header, QUOTE_FIELDS);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1].get("author"), Some("J.K. Rowling"));
    assert_eq!(rows[1].get("tags"), Some("abilities, choices"));
}

#[tokio::test]
async fn test_url_argument_overrides_target() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page/2/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(quotes_page(&[("Second page", "Someone", &["x"])])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&format!("{}/", mock_server.uri()), &dir);
    let (fetcher, _) = test_fetcher(&config.fetcher);
    let mut coordinator = Coordinator::with_fetcher(config, fetcher);

    let url = format!("{}/page/2/", mock_server.uri());
    let records = coordinator.run(Some(&url)).await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text, "Second page");
}

#[tokio::test]
async fn test_failed_fetch_returns_nothing_and_writes_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), &dir);
    let (fetcher, sleeper) = test_fetcher(&config.fetcher);
    let mut coordinator = Coordinator::with_fetcher(config, fetcher);

    let records = coordinator.run(None).await;

    assert!(records.is_empty());
    assert!(!dir.path().join("quotes.csv").exists());
    assert_eq!(sleeper.count(), 2);
}

#[tokio::test]
async fn test_page_without_quotes_writes_header_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body><p>Nothing here</p></body></html>"),
        )
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), &dir);
    let (fetcher, _) = test_fetcher(&config.fetcher);
    let mut coordinator = Coordinator::with_fetcher(config, fetcher);

    let records = coordinator.run(None).await;

    assert!(records.is_empty());
    let content = std::fs::read_to_string(dir.path().join("quotes.csv")).unwrap();
    assert_eq!(content.trim_end(), "text,author,tags");
}

#[tokio::test]
async fn test_malformed_quote_is_skipped() {
    let mock_server = MockServer::start().await;

    let page = format!(
        "{}{}",
        r#"<div class="quote"><span class="text">Orphan text</span></div>"#,
        quotes_page(&[("Complete", "Writer", &["t"])])
    );
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), &dir);
    let (fetcher, _) = test_fetcher(&config.fetcher);
    let mut coordinator = Coordinator::with_fetcher(config, fetcher);

    let records = coordinator.run(None).await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].author, "Writer");
}

#[tokio::test]
async fn test_unwritable_output_still_returns_records() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(quotes_page(&[("Kept", "A", &[])])))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut config = create_test_config(&mock_server.uri(), &dir);
    config.output.csv_path = dir
        .path()
        .join("missing-dir")
        .join("quotes.csv")
        .display()
        .to_string();
    let (fetcher, _) = test_fetcher(&config.fetcher);
    let mut coordinator = Coordinator::with_fetcher(config, fetcher);

    let records = coordinator.run(None).await;

    assert_eq!(records.len(), 1);
    assert!(!dir.path().join("missing-dir").exists());
}

#[tokio::test]
async fn test_collect_links_resolves_against_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/list/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body>
                <a href="/a">A</a>
                <a>no target</a>
                <a href="b">B</a>
                <a href="https://x.test/c">C</a>
                <a href="/a">A again</a>
            </body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let base = mock_server.uri();
    let config = create_test_config(&format!("{}/list/", base), &dir);
    let (fetcher, _) = test_fetcher(&config.fetcher);
    let mut coordinator = Coordinator::with_fetcher(config, fetcher);

    let links = coordinator.collect_links(None).await;

    assert_eq!(
        links,
        vec![
            format!("{}/a", base),
            format!("{}/list/b", base),
            "https://x.test/c".to_string(),
            format!("{}/a", base),
        ]
    );
}
