//! End-to-end tests for the discount pipeline
//!
//! These tests use wiremock to serve a listing page and product pages and
//! run the full fetch, classify, price and export cycle against it.

use discount_scout::config::{Config, CrawlConfig, HttpConfig, OutputConfig};
use discount_scout::crawler::{DiscountPipeline, HttpFetcher, PageFetcher};
use discount_scout::output::read_records;
use discount_scout::product::ProductClassifier;
use discount_scout::{DiscountRecord, DiscountRule, SiteRules};
use std::collections::HashMap;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Site rules for the mock server, whose URLs all contain its loopback host
fn mock_site_rules() -> SiteRules {
    SiteRules {
        domain_token: "127.0.0.1".to_string(),
        product_marker_class: "product-details-full".to_string(),
        current_price_class: "price-current".to_string(),
        original_price_class: "price-original".to_string(),
    }
}

fn create_test_config(seed_url: String, csv_path: &str) -> Config {
    Config {
        crawl: CrawlConfig {
            seed_url,
            discount_rule: DiscountRule::OriginalPresent,
        },
        site: mock_site_rules(),
        http: HttpConfig {
            user_agent: "discount-scout-tests/1.0".to_string(),
            timeout_secs: 5,
        },
        output: OutputConfig {
            csv_path: csv_path.to_string(),
        },
    }
}

fn fetcher() -> HttpFetcher {
    HttpFetcher::from_config(&HttpConfig::default()).expect("Failed to build client")
}

async fn mount_html(server: &MockServer, page_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Listing with three off-site links and two product links
async fn mount_shop(server: &MockServer) {
    mount_html(
        server,
        "/genres",
        r#"<html><head><title>Genres</title></head><body>
            <a href="https://twitter.com/bookstore">Twitter</a>
            <a href="https://www.instagram.com/bookstore">Instagram</a>
            <a href="https://maps.example.org/bookstore">Find us</a>
            <a href="/products/on-sale">On sale</a>
            <a href="products/full-price">Full price</a>
        </body></html>"#
            .to_string(),
    )
    .await;

    mount_html(
        server,
        "/products/on-sale",
        r#"<html><body><div class="product-details-full">
            <h1>Discounted Book</h1>
            <span class="price-original">$30.00</span>
            <span class="price-current">Now $20.00</span>
        </div></body></html>"#
            .to_string(),
    )
    .await;

    mount_html(
        server,
        "/products/full-price",
        r#"<html><body><div class="product-details-full">
            <h1>Regular Book</h1>
            <span class="price-current">$15.00</span>
        </div></body></html>"#
            .to_string(),
    )
    .await;
}

#[tokio::test]
async fn test_pipeline_finds_single_discount() {
    let mock_server = MockServer::start().await;
    mount_shop(&mock_server).await;
    let base_url = mock_server.uri();

    let pipeline = DiscountPipeline::new(
        fetcher(),
        mock_site_rules(),
        DiscountRule::OriginalPresent,
    );
    let report = pipeline
        .find_discounts(&format!("{}/genres", base_url))
        .await;

    let product_url = format!("{}/products/on-sale", base_url);
    let mut expected = HashMap::new();
    expected.insert(
        product_url.clone(),
        DiscountRecord {
            url: product_url,
            original_price: 30.0,
            current_price: 20.0,
        },
    );

    assert_eq!(report.discounts, expected);
    assert_eq!(report.seed_title, Some("Genres".to_string()));
    assert_eq!(report.links_found, 5);
    assert_eq!(report.on_site_links, 2);
    assert_eq!(report.product_pages.len(), 2);
}

#[tokio::test]
async fn test_run_appends_discounts_to_csv() {
    let mock_server = MockServer::start().await;
    mount_shop(&mock_server).await;
    let base_url = mock_server.uri();

    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let csv_path = dir.path().join("discounts.csv");
    let config = create_test_config(
        format!("{}/genres", base_url),
        csv_path.to_str().expect("Temp path is not UTF-8"),
    );

    discount_scout::run(&config).await.expect("First run failed");
    discount_scout::run(&config).await.expect("Second run failed");

    // Export is append-only: a second run stores the same discount again
    let stored = read_records(&csv_path).expect("Failed to read CSV");
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0], stored[1]);
    assert_eq!(stored[0].url, format!("{}/products/on-sale", base_url));
    assert_eq!(stored[0].original_price, 30.0);
    assert_eq!(stored[0].current_price, 20.0);
}

#[tokio::test]
async fn test_redirected_seed_resolves_links_against_final_url() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/start"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("location", format!("{}/catalog/books/", base_url).as_str()),
        )
        .mount(&mock_server)
        .await;

    mount_html(
        &mock_server,
        "/catalog/books/",
        r#"<a href="item-7">Item 7</a>"#.to_string(),
    )
    .await;

    mount_html(
        &mock_server,
        "/catalog/books/item-7",
        r#"<div class="product-details-full">
            <p class="price-original">CAD 12.50</p>
            <p class="price-current">CAD 9.99</p>
        </div>"#
            .to_string(),
    )
    .await;

    let pipeline = DiscountPipeline::new(
        fetcher(),
        mock_site_rules(),
        DiscountRule::OriginalPresent,
    );
    let report = pipeline.find_discounts(&format!("{}/start", base_url)).await;

    let record = report
        .discounts
        .get(&format!("{}/catalog/books/item-7", base_url))
        .expect("Discount behind redirect not found");
    assert_eq!(record.original_price, 12.5);
    assert_eq!(record.current_price, 9.99);
}

#[tokio::test]
async fn test_server_errors_degrade_to_empty_results() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_html(
        &mock_server,
        "/list",
        r#"<a href="/broken">Broken</a><a href="/missing">Missing</a>"#.to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let pipeline = DiscountPipeline::new(
        fetcher(),
        mock_site_rules(),
        DiscountRule::OriginalPresent,
    );
    let report = pipeline.find_discounts(&format!("{}/list", base_url)).await;

    assert_eq!(report.on_site_links, 2);
    assert!(report.product_pages.is_empty());
    assert!(report.discounts.is_empty());
}

#[tokio::test]
async fn test_failed_seed_gives_empty_report() {
    let mock_server = MockServer::start().await;

    let pipeline = DiscountPipeline::new(
        fetcher(),
        mock_site_rules(),
        DiscountRule::OriginalPresent,
    );
    let report = pipeline
        .find_discounts(&format!("{}/nothing-here", mock_server.uri()))
        .await;

    assert_eq!(report.seed_title, None);
    assert_eq!(report.links_found, 0);
    assert!(report.discounts.is_empty());
}

#[tokio::test]
async fn test_fetch_reports_status_and_final_url() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    mount_html(&mock_server, "/ok", "<p>ok</p>".to_string()).await;

    let fetcher = fetcher();

    let ok = fetcher.fetch(&format!("{}/ok", base_url)).await;
    assert!(ok.success());
    assert_eq!(ok.status_code, Some(200));
    assert_eq!(ok.resolved_url, format!("{}/ok", base_url));

    let missing = fetcher.fetch(&format!("{}/missing", base_url)).await;
    assert!(!missing.success());
    assert_eq!(missing.status_code, Some(404));
}

#[tokio::test]
async fn test_classifier_unreachable_url_is_not_product() {
    let fetcher = fetcher();
    let rules = mock_site_rules();
    let classifier = ProductClassifier::new(&fetcher, &rules);

    // Nothing listens on port 1
    assert!(!classifier.is_product_page("http://127.0.0.1:1/product").await);
}
