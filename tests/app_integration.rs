use std::fs;
use std::io::Cursor;

use fxc::config::AppConfig;
use fxc::convert;
use fxc::providers::exchange_rate_api::ExchangeRateApiProvider;

mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn create_mock_server(base_currency: &str, mock_response: &str) -> MockServer {
        let mock_server = MockServer::start().await;
        let url_path = format!("/v4/latest/{base_currency}");

        Mock::given(method("GET"))
            .and(path(&url_path))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }
}

async fn run_with_input(provider: &ExchangeRateApiProvider, input: &str) -> String {
    let mut reader = Cursor::new(input.to_string());
    let mut output = Vec::new();
    convert::run(provider, &mut reader, &mut output)
        .await
        .expect("conversion flow failed");
    String::from_utf8(output).expect("output is not valid UTF-8")
}

#[test_log::test(tokio::test)]
async fn test_full_convert_flow_with_mock() {
    let mock_response = r#"{"base":"USD","date":"2024-05-01","rates":{"EUR":0.9,"GBP":0.79}}"#;
    let mock_server = test_utils::create_mock_server("USD", mock_response).await;

    let provider = ExchangeRateApiProvider::new(&mock_server.uri());

    // Lowercase input must request /v4/latest/USD; anything else misses the
    // mock and would surface as an Error line.
    let output = run_with_input(&provider, "usd\neur\n100\n").await;

    assert!(output.ends_with("100 USD = 90.00 EUR\n"), "output: {output}");
}

#[test_log::test(tokio::test)]
async fn test_missing_target_currency_reports_not_found() {
    let mock_response = r#"{"rates":{"GBP":0.79}}"#;
    let mock_server = test_utils::create_mock_server("USD", mock_response).await;

    let provider = ExchangeRateApiProvider::new(&mock_server.uri());
    let output = run_with_input(&provider, "USD\nEUR\n100\n").await;

    assert!(
        output.ends_with("Error: Currency not found.\n"),
        "output: {output}"
    );
    assert!(!output.contains(" = "));
}

#[test_log::test(tokio::test)]
async fn test_http_failure_reports_error_line() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v4/latest/USD"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let provider = ExchangeRateApiProvider::new(&mock_server.uri());
    let output = run_with_input(&provider, "USD\nEUR\n100\n").await;

    let last_line = output.lines().last().unwrap_or_default();
    assert!(last_line.starts_with("Error:"), "output: {output}");
    assert!(!output.contains(" = "));
}

#[test_log::test(tokio::test)]
async fn test_invalid_amount_makes_no_request() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v4/latest/USD"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"rates":{"EUR":0.9}}"#))
        .expect(0)
        .mount(&mock_server)
        .await;

    let provider = ExchangeRateApiProvider::new(&mock_server.uri());
    let output = run_with_input(&provider, "USD\nEUR\nabc\n").await;

    assert!(
        output.ends_with("Invalid amount. Please enter a numeric value.\n"),
        "output: {output}"
    );
    // Dropping the server verifies the expect(0) on the mock.
}

#[test_log::test(tokio::test)]
async fn test_config_file_overrides_provider_base_url() {
    let mock_response = r#"{"rates":{"INR":83.12}}"#;
    let mock_server = test_utils::create_mock_server("USD", mock_response).await;

    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let config_content = format!(
        r#"
providers:
  exchange_rate_api:
    base_url: {}
"#,
        mock_server.uri()
    );
    fs::write(config_file.path(), &config_content).expect("Failed to write config file");

    let config = AppConfig::load_from_path(config_file.path()).expect("Failed to load config");
    let base_url = config
        .providers
        .exchange_rate_api
        .expect("provider config missing")
        .base_url;
    assert_eq!(base_url, mock_server.uri());

    let provider = ExchangeRateApiProvider::new(&base_url);
    let output = run_with_input(&provider, "USD\nINR\n10\n").await;

    assert!(output.ends_with("10 USD = 831.20 INR\n"), "output: {output}");
}
