//! Quote text rendering

use stockmcp_core::Quote;

/// Render a quote into the fixed display template.
///
/// Day high, day low, and volume lines appear only when strictly positive;
/// the provider reports zero for fields it has no data for.
pub fn render_quote(quote: &Quote) -> String {
    let mut text = format!(
        "Stock: {}\nCurrent Price: ${:.2}\nPrevious Close: ${:.2}\nChange: ${:.2} ({:.2}%)",
        quote.symbol,
        quote.price,
        quote.previous_close,
        quote.change(),
        quote.change_percent()
    );

    if quote.day_high > 0.0 {
        text.push_str(&format!("\nDay High: ${:.2}", quote.day_high));
    }
    if quote.day_low > 0.0 {
        text.push_str(&format!("\nDay Low: ${:.2}", quote.day_low));
    }
    if quote.volume > 0.0 {
        text.push_str(&format!("\nVolume: {:.0}", quote.volume));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_quote() -> Quote {
        Quote {
            symbol: "AAPL".to_string(),
            price: 150.0,
            previous_close: 145.0,
            day_high: 152.25,
            day_low: 148.5,
            volume: 1_234_567.0,
        }
    }

    #[test]
    fn test_full_template() {
        let text = render_quote(&full_quote());
        assert_eq!(
            text,
            "Stock: AAPL\n\
             Current Price: $150.00\n\
             Previous Close: $145.00\n\
             Change: $5.00 (3.45%)\n\
             Day High: $152.25\n\
             Day Low: $148.50\n\
             Volume: 1234567"
        );
    }

    #[test]
    fn test_change_line_rounding() {
        let text = render_quote(&full_quote());
        assert!(text.contains("Change: $5.00 (3.45%)"));
    }

    #[test]
    fn test_zero_previous_close_reports_zero_percent() {
        let quote = Quote {
            previous_close: 0.0,
            ..full_quote()
        };
        let text = render_quote(&quote);
        assert!(text.contains("Change: $150.00 (0.00%)"));
    }

    #[test]
    fn test_negative_change() {
        let quote = Quote {
            price: 140.0,
            ..full_quote()
        };
        let text = render_quote(&quote);
        assert!(text.contains("Change: $-5.00 (-3.45%)"));
    }

    #[test]
    fn test_optional_lines_omitted_when_zero() {
        let quote = Quote {
            day_high: 0.0,
            day_low: 0.0,
            volume: 0.0,
            ..full_quote()
        };
        let text = render_quote(&quote);
        assert!(!text.contains("Day High"));
        assert!(!text.contains("Day Low"));
        assert!(!text.contains("Volume"));
        assert!(text.ends_with("Change: $5.00 (3.45%)"));
    }
}
