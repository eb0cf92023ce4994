//! Provider response shape classification
//!
//! Yahoo returns one of two known JSON layouts: the chart API nests a
//! `meta` object under `chart.result[0]`, while the quote API puts the
//! fields directly on `quoteResponse.result[0]`. Anything else, including
//! `result: null` error bodies, is unrecognized and treated as a miss.

use serde::Deserialize;
use serde_json::Value;

use stockmcp_core::Quote;

/// Market fields carried by the chart API's `meta` object.
///
/// Fields the provider omits default to zero; a field of the wrong JSON
/// type rejects the whole shape.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartMeta {
    pub regular_market_price: f64,
    pub previous_close: f64,
    pub regular_market_day_high: f64,
    pub regular_market_day_low: f64,
    pub regular_market_volume: f64,
}

/// Market fields carried by a quote API result row.
///
/// Same fields as [`ChartMeta`] except the previous-close key.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct QuoteRow {
    pub regular_market_price: f64,
    pub regular_market_previous_close: f64,
    pub regular_market_day_high: f64,
    pub regular_market_day_low: f64,
    pub regular_market_volume: f64,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    // null on provider-side errors, e.g. unknown symbols
    result: Option<Vec<ChartEntry>>,
}

#[derive(Debug, Deserialize)]
struct ChartEntry {
    meta: Option<ChartMeta>,
}

#[derive(Debug, Deserialize)]
struct QuoteEnvelope {
    #[serde(rename = "quoteResponse")]
    quote_response: QuoteBody,
}

#[derive(Debug, Deserialize)]
struct QuoteBody {
    result: Option<Vec<QuoteRow>>,
}

/// A provider body classified into one of the recognized layouts
#[derive(Debug)]
pub enum ProviderPayload {
    Chart(ChartMeta),
    Quote(QuoteRow),
    Unrecognized,
}

impl ProviderPayload {
    /// Classify a decoded JSON document.
    ///
    /// The chart layout is checked first, then the quote layout, matching
    /// the order the endpoints are queried in.
    pub fn classify(body: &Value) -> Self {
        if let Ok(envelope) = serde_json::from_value::<ChartEnvelope>(body.clone()) {
            if let Some(meta) = envelope
                .chart
                .result
                .and_then(|entries| entries.into_iter().next())
                .and_then(|entry| entry.meta)
            {
                return ProviderPayload::Chart(meta);
            }
        }

        if let Ok(envelope) = serde_json::from_value::<QuoteEnvelope>(body.clone()) {
            if let Some(row) = envelope
                .quote_response
                .result
                .and_then(|rows| rows.into_iter().next())
            {
                return ProviderPayload::Quote(row);
            }
        }

        ProviderPayload::Unrecognized
    }

    /// Extract the derived quote fields for `symbol`
    pub fn into_quote(self, symbol: &str) -> Option<Quote> {
        match self {
            ProviderPayload::Chart(meta) => Some(Quote {
                symbol: symbol.to_string(),
                price: meta.regular_market_price,
                previous_close: meta.previous_close,
                day_high: meta.regular_market_day_high,
                day_low: meta.regular_market_day_low,
                volume: meta.regular_market_volume,
            }),
            ProviderPayload::Quote(row) => Some(Quote {
                symbol: symbol.to_string(),
                price: row.regular_market_price,
                previous_close: row.regular_market_previous_close,
                day_high: row.regular_market_day_high,
                day_low: row.regular_market_day_low,
                volume: row.regular_market_volume,
            }),
            ProviderPayload::Unrecognized => None,
        }
    }
}

/// Turn one raw endpoint body into a usable quote, or a miss.
///
/// A miss is any of: a non-JSON body, an unrecognized layout, or an
/// extracted price of exactly zero (conflated with "data absent").
pub fn quote_from_body(body: &str, symbol: &str) -> Option<Quote> {
    let value: Value = serde_json::from_str(body).ok()?;
    ProviderPayload::classify(&value)
        .into_quote(symbol)
        .filter(Quote::has_price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn chart_body(price: f64, previous_close: f64) -> String {
        json!({
            "chart": {
                "result": [{
                    "meta": {
                        "regularMarketPrice": price,
                        "previousClose": previous_close,
                        "regularMarketDayHigh": 152.0,
                        "regularMarketDayLow": 148.5,
                        "regularMarketVolume": 1_000_000.0
                    }
                }]
            }
        })
        .to_string()
    }

    fn quote_body(price: f64, previous_close: f64) -> String {
        json!({
            "quoteResponse": {
                "result": [{
                    "regularMarketPrice": price,
                    "regularMarketPreviousClose": previous_close,
                    "regularMarketDayHigh": 152.0,
                    "regularMarketDayLow": 148.5,
                    "regularMarketVolume": 1_000_000.0
                }]
            }
        })
        .to_string()
    }

    #[test]
    fn test_chart_shape_extraction() {
        let quote = quote_from_body(&chart_body(150.0, 145.0), "AAPL").unwrap();
        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.price, 150.0);
        assert_eq!(quote.previous_close, 145.0);
        assert_eq!(quote.day_high, 152.0);
        assert_eq!(quote.volume, 1_000_000.0);
    }

    #[test]
    fn test_quote_shape_extraction() {
        let quote = quote_from_body(&quote_body(150.0, 145.0), "MSFT").unwrap();
        assert_eq!(quote.symbol, "MSFT");
        assert_eq!(quote.previous_close, 145.0);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let body = json!({
            "chart": { "result": [{ "meta": { "regularMarketPrice": 99.5 } }] }
        })
        .to_string();

        let quote = quote_from_body(&body, "TSLA").unwrap();
        assert_eq!(quote.price, 99.5);
        assert_eq!(quote.previous_close, 0.0);
        assert_eq!(quote.volume, 0.0);
    }

    #[test]
    fn test_zero_price_is_a_miss() {
        assert!(quote_from_body(&chart_body(0.0, 145.0), "AAPL").is_none());
    }

    #[test]
    fn test_non_json_body_is_a_miss() {
        assert!(quote_from_body("<html>rate limited</html>", "AAPL").is_none());
    }

    #[test]
    fn test_null_result_is_a_miss() {
        let body = json!({
            "chart": { "result": null, "error": { "code": "Not Found" } }
        })
        .to_string();
        assert!(quote_from_body(&body, "NOPE").is_none());
    }

    #[test]
    fn test_empty_result_array_is_a_miss() {
        let body = json!({ "quoteResponse": { "result": [] } }).to_string();
        assert!(quote_from_body(&body, "AAPL").is_none());
    }

    #[test]
    fn test_unrelated_json_is_unrecognized() {
        let body = json!({ "status": "ok" }).to_string();
        assert!(quote_from_body(&body, "AAPL").is_none());
        assert!(matches!(
            ProviderPayload::classify(&json!({ "status": "ok" })),
            ProviderPayload::Unrecognized
        ));
    }

    #[test]
    fn test_wrong_typed_field_rejects_shape() {
        let body = json!({
            "chart": {
                "result": [{ "meta": { "regularMarketPrice": "150.0" } }]
            }
        })
        .to_string();
        assert!(quote_from_body(&body, "AAPL").is_none());
    }

    #[test]
    fn test_chart_body_renders_change_line() {
        let quote = quote_from_body(&chart_body(150.0, 145.0), "AAPL").unwrap();
        let text = crate::format::render_quote(&quote);
        assert!(text.contains("Change: $5.00 (3.45%)"));
    }

    #[test]
    fn test_fallback_prefers_first_usable_body() {
        // The first body is unparseable; iterating candidates in order must
        // land on the second endpoint's data.
        let bodies = ["definitely not json".to_string(), quote_body(88.0, 80.0)];
        let quote = bodies
            .iter()
            .find_map(|body| quote_from_body(body, "AAPL"))
            .unwrap();
        assert_eq!(quote.price, 88.0);
        assert_eq!(quote.previous_close, 80.0);
    }
}
