//! Provider implementation for ROAF using the Norkart Min Renovasjon proxy.
//!
//! The proxy takes the upstream API in a `server` query parameter and
//! forwards the rest of the query string to it, so one request here is one
//! request against the real calendar API.

use reqwest::Client;
use tracing::debug;
use url::{Url, form_urlencoded};

use roaf_core::{CalendarError, PickupRecord};

/// Header carrying the municipality number.
const MUNICIPALITY_HEADER: &str = "Kommunenr";
/// Header carrying the application key issued by Norkart.
const APP_KEY_HEADER: &str = "RenovasjonAppKey";

/// Connection and address parameters for one calendar lookup.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL of the Norkart proxy endpoint.
    pub proxy_url: String,
    /// Upstream calendar API the proxy forwards to.
    pub api_base: String,
    /// Municipality number, sent both as query parameter and header.
    pub municipality: String,
    /// Street name of the address.
    pub street_name: String,
    /// House number of the address.
    pub house_number: String,
    /// Municipal street code of the address.
    pub street_code: String,
    /// Application key issued by Norkart.
    pub app_key: String,
}

/// Calendar client bound to one configured address.
pub struct NorkartProvider {
    client: Client,
    config: ProviderConfig,
}

impl NorkartProvider {
    /// Create a new provider bound to the given HTTP client.
    #[must_use]
    pub fn new(client: Client, config: ProviderConfig) -> Self {
        Self { client, config }
    }

    /// Fetch the pickup calendar for the configured address.
    ///
    /// The body is read in full and decoded regardless of the HTTP status;
    /// the proxy reports lookup problems in the payload itself.
    ///
    /// # Errors
    ///
    /// Returns a [`CalendarError`] when the proxy URL is malformed, the
    /// request fails, or the body is not a valid calendar.
    pub async fn pickup_calendar(&self) -> Result<Vec<PickupRecord>, CalendarError> {
        let url = self.request_url()?;
        debug!(url = %url, "requesting pickup calendar");

        let body = self
            .client
            .get(url)
            .header(MUNICIPALITY_HEADER, &self.config.municipality)
            .header(APP_KEY_HEADER, &self.config.app_key)
            .send()
            .await?
            .text()
            .await?;

        debug!(bytes = body.len(), "received calendar response");
        decode(&body)
    }

    /// Assemble the proxied calendar URL.
    ///
    /// The proxy reads `server` as a single parameter and hands the rest of
    /// the query text to the upstream API verbatim, so the address block is
    /// encoded on its own and appended as raw text instead of being merged
    /// into one parameter set.
    fn request_url(&self) -> Result<Url, CalendarError> {
        let mut url = Url::parse(&self.config.proxy_url)?;
        url.query_pairs_mut()
            .append_pair("server", &self.config.api_base);

        let address = form_urlencoded::Serializer::new(String::new())
            .append_pair("kommunenr", &self.config.municipality)
            .append_pair("gatenavn", &self.config.street_name)
            .append_pair("husnr", &self.config.house_number)
            .append_pair("gatekode", &self.config.street_code)
            .finish();

        let server = url.query().unwrap_or_default().to_owned();
        url.set_query(Some(&format!("{server}&{address}")));
        Ok(url)
    }
}

/// Decode a calendar response body, preserving the response order.
///
/// # Errors
///
/// Returns [`CalendarError::Decode`] when the body is not a JSON array of
/// pickup records.
pub fn decode(body: &str) -> Result<Vec<PickupRecord>, CalendarError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use reqwest::Client;
    use roaf_core::PickupRecord;

    use super::{NorkartProvider, ProviderConfig, decode};

    fn provider() -> NorkartProvider {
        NorkartProvider::new(
            Client::new(),
            ProviderConfig {
                proxy_url: "https://proxy.example/proxyserver.ashx".to_owned(),
                api_base: "https://api.example/tommekalender/%3F".to_owned(),
                municipality: "1234".to_owned(),
                street_name: "Storgata".to_owned(),
                house_number: "5".to_owned(),
                street_code: "9001".to_owned(),
                app_key: "secret".to_owned(),
            },
        )
    }

    #[test]
    fn request_url_layers_server_and_address_blocks() {
        let url = provider().request_url().unwrap();
        let query = url.query().unwrap();

        // `server` is one fully encoded parameter, the address block follows
        // as its own encoded query string.
        assert!(query.starts_with("server=https%3A%2F%2Fapi.example%2Ftommekalender%2F%253F"));
        assert!(query.contains("kommunenr=1234&gatenavn=Storgata&husnr=5&gatekode=9001"));
    }

    #[test]
    fn request_url_rejects_a_malformed_proxy_url() {
        let mut bad = provider();
        bad.config.proxy_url = "not a url".to_owned();
        assert!(bad.request_url().is_err());
    }

    #[test]
    fn decode_preserves_response_order() {
        let body = r#"[
            {"FraksjonId": 2, "TommeDatoer": ["2024-01-22T06:00:00"]},
            {"FraksjonId": 1, "FraksjonName": "Restavfall", "TommeDatoer": ["2024-01-15T06:00:00", "2024-01-29T06:00:00"]},
            {"FraksjonId": 99, "TommeDatoer": []}
        ]"#;

        let records = decode(body).unwrap();
        let expected = vec![
            PickupRecord {
                fraction_id: 2,
                fraction_name: String::new(),
                pickup_dates: vec!["2024-01-22T06:00:00".to_owned()],
            },
            PickupRecord {
                fraction_id: 1,
                fraction_name: "Restavfall".to_owned(),
                pickup_dates: vec![
                    "2024-01-15T06:00:00".to_owned(),
                    "2024-01-29T06:00:00".to_owned(),
                ],
            },
            PickupRecord {
                fraction_id: 99,
                fraction_name: String::new(),
                pickup_dates: Vec::new(),
            },
        ];
        assert_eq!(records, expected);
    }

    #[test]
    fn decode_rejects_a_body_of_the_wrong_shape() {
        assert!(decode(r#"{"FraksjonId": 1}"#).is_err());
        assert!(decode("not json at all").is_err());
    }
}
