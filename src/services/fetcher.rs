//! Sheet fetcher for the Google Sheets `values.get` endpoint
//!
//! One blocking GET per tab, authenticated with a query-string API key.
//! No retries: a failed fetch is reported to the caller as a `FetchError`.

use crate::services::config::SyncConfig;
use crate::types::{FetchError, SheetValues};
use reqwest::Url;
use std::time::Duration;
use tracing::{debug, instrument};

/// HTTP request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Source of raw sheet tabs
pub trait SheetSource {
    /// Fetch the full value range of the named tab
    fn fetch(&self, sheet: &str) -> Result<SheetValues, FetchError>;
}

/// Google Sheets values API client
pub struct SheetsClient {
    client: reqwest::blocking::Client,
    base_url: String,
    spreadsheet_id: String,
    api_key: String,
}

impl SheetsClient {
    pub fn new(config: &SyncConfig) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("bizsync/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
            spreadsheet_id: config.spreadsheet_id.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// `{base}/{spreadsheet_id}/values/{sheet}?key={api_key}` with every
    /// path segment percent-encoded (tab names often contain spaces).
    pub fn values_url(&self, sheet: &str) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| FetchError::Url(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| FetchError::Url(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend([self.spreadsheet_id.as_str(), "values", sheet]);
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }
}

impl SheetSource for SheetsClient {
    #[instrument(level = "info", skip(self))]
    fn fetch(&self, sheet: &str) -> Result<SheetValues, FetchError> {
        let url = self.values_url(sheet)?;

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Request {
                sheet: sheet.to_string(),
                message: e.without_url().to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                sheet: sheet.to_string(),
                status: status.as_u16(),
            });
        }

        let values: SheetValues = response.json().map_err(|e| FetchError::Decode {
            sheet: sheet.to_string(),
            message: e.without_url().to_string(),
        })?;

        debug!(rows = values.values.len(), "decoded sheet values");
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    fn make_config(base: &str) -> SyncConfig {
        SyncConfig {
            spreadsheet_id: "abc123".into(),
            api_key: "secret-key".into(),
            businesses_sheet: "Businesses".into(),
            categories_sheet: "Categories".into(),
            api_base_url: base.into(),
        }
    }

    #[test]
    fn test_values_url_default_base() {
        let client = SheetsClient::new(&make_config(crate::services::config::DEFAULT_API_BASE_URL))
            .unwrap();
        let url = client.values_url("Businesses").unwrap();
        assert_eq!(
            url.as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/abc123/values/Businesses?key=secret-key"
        );
    }

    #[test]
    fn test_values_url_encodes_sheet_name() {
        let client = SheetsClient::new(&make_config("https://example.test/v4/spreadsheets")).unwrap();
        let url = client.values_url("Local Businesses").unwrap();
        assert_eq!(url.path(), "/v4/spreadsheets/abc123/values/Local%20Businesses");
    }

    #[test]
    fn test_values_url_tolerates_trailing_slash() {
        let client = SheetsClient::new(&make_config("https://example.test/v4/spreadsheets/")).unwrap();
        let url = client.values_url("Businesses").unwrap();
        assert_eq!(url.path(), "/v4/spreadsheets/abc123/values/Businesses");
    }

    #[test]
    fn test_values_url_invalid_base() {
        let client = SheetsClient::new(&make_config("not a url")).unwrap();
        assert!(matches!(
            client.values_url("Businesses"),
            Err(FetchError::Url(_))
        ));
    }

    #[test]
    fn test_unreachable_host_is_request_error() {
        // Port 9 on loopback: connection refused without leaving the machine
        let client = SheetsClient::new(&make_config("http://127.0.0.1:9/v4/spreadsheets")).unwrap();
        let err = client.fetch("Businesses").unwrap_err();
        assert!(matches!(err, FetchError::Request { ref sheet, .. } if sheet == "Businesses"));
    }

    /// Serve a single canned HTTP response on a loopback port and return
    /// the API base URL pointing at it.
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{}/v4/spreadsheets", addr)
    }

    #[test]
    fn test_non_success_status_is_status_error() {
        let base = serve_once(
            "HTTP/1.1 403 Forbidden\r\nContent-Type: application/json\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{}",
        );
        let client = SheetsClient::new(&make_config(&base)).unwrap();

        let err = client.fetch("Businesses").unwrap_err();

        assert!(matches!(
            err,
            FetchError::Status { ref sheet, status: 403 } if sheet == "Businesses"
        ));
    }

    #[test]
    fn test_malformed_payload_is_decode_error() {
        let base = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 18\r\nConnection: close\r\n\r\n{\"values\":[[1,2]]}",
        );
        let client = SheetsClient::new(&make_config(&base)).unwrap();

        let err = client.fetch("Businesses").unwrap_err();

        assert!(matches!(err, FetchError::Decode { ref sheet, .. } if sheet == "Businesses"));
    }

    #[test]
    fn test_success_payload_decoded() {
        let base = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 31\r\nConnection: close\r\n\r\n{\"values\":[[\"Name\"],[\"Joe's\"]]}",
        );
        let client = SheetsClient::new(&make_config(&base)).unwrap();

        let values = client.fetch("Businesses").unwrap();

        assert_eq!(values.values, vec![vec!["Name"], vec!["Joe's"]]);
    }

    #[test]
    #[ignore] // Network required
    fn test_public_endpoint_rejects_bogus_key() {
        let client = SheetsClient::new(&make_config(crate::services::config::DEFAULT_API_BASE_URL))
            .unwrap();
        let err = client.fetch("Businesses").unwrap_err();
        assert!(matches!(err, FetchError::Status { .. }));
    }
}
