//! Request classification: event type, page label, campaign attribution.

use cartgate_entity::tracking::EventType;

/// Classify a request into an event type from its path and method.
///
/// Rules are evaluated in order; the first match wins:
/// 1. path contains `search` → [`EventType::Search`]
/// 2. path contains `product` and its last segment is all digits →
///    [`EventType::ProductView`]
/// 3. path contains `cart` → add/remove/update keyed off POST/DELETE/PUT
/// 4. otherwise → [`EventType::Pageview`]
pub fn classify_event(method: &str, path: &str) -> EventType {
    let lower = path.to_ascii_lowercase();

    if lower.contains("search") {
        return EventType::Search;
    }
    if lower.contains("product") && last_segment(&lower).is_some_and(is_all_digits) {
        return EventType::ProductView;
    }
    if lower.contains("cart") {
        return match method {
            "POST" => EventType::AddToCart,
            "DELETE" => EventType::RemoveFromCart,
            "PUT" => EventType::UpdateCart,
            _ => EventType::Pageview,
        };
    }
    EventType::Pageview
}

/// Derive a page label from the path: the last segment, or `"Home"`.
pub fn page_title(path: &str) -> String {
    match last_segment(path) {
        Some(segment) => segment.to_string(),
        None => "Home".to_string(),
    }
}

/// UTM campaign parameters pulled out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UtmParams {
    /// utm_source value, if present.
    pub source: Option<String>,
    /// utm_medium value, if present.
    pub medium: Option<String>,
    /// utm_campaign value, if present.
    pub campaign: Option<String>,
}

/// Extract UTM parameters from decoded query pairs.
pub fn extract_utm(query: &[(String, String)]) -> UtmParams {
    let find = |key: &str| {
        query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    };
    UtmParams {
        source: find("utm_source"),
        medium: find("utm_medium"),
        campaign: find("utm_campaign"),
    }
}

/// Hostname of the referring site, if the Referer header parses as a URL.
pub fn referer_host(referer: &str) -> Option<String> {
    reqwest::Url::parse(referer)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
}

fn last_segment(path: &str) -> Option<&str> {
    path.split('/').next_back().filter(|s| !s.is_empty())
}

fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_view_needs_numeric_tail() {
        assert_eq!(classify_event("GET", "/products/88"), EventType::ProductView);
        assert_eq!(classify_event("GET", "/products"), EventType::Pageview);
        assert_eq!(classify_event("GET", "/products/new"), EventType::Pageview);
    }

    #[test]
    fn test_cart_events_keyed_off_method() {
        assert_eq!(classify_event("POST", "/cart/items"), EventType::AddToCart);
        assert_eq!(
            classify_event("DELETE", "/cart/items/3"),
            EventType::RemoveFromCart
        );
        assert_eq!(
            classify_event("PUT", "/cart/items/3"),
            EventType::UpdateCart
        );
        assert_eq!(classify_event("GET", "/cart"), EventType::Pageview);
    }

    #[test]
    fn test_search_wins_over_later_rules() {
        assert_eq!(classify_event("GET", "/search"), EventType::Search);
        // "search" appears before the product rule is ever consulted.
        assert_eq!(
            classify_event("GET", "/search/products/12"),
            EventType::Search
        );
    }

    #[test]
    fn test_page_title() {
        assert_eq!(page_title("/products/88"), "88");
        assert_eq!(page_title("/"), "Home");
        assert_eq!(page_title(""), "Home");
    }

    #[test]
    fn test_extract_utm() {
        let query = vec![
            ("utm_source".to_string(), "newsletter".to_string()),
            ("utm_campaign".to_string(), "spring".to_string()),
            ("q".to_string(), "shoes".to_string()),
        ];
        let utm = extract_utm(&query);
        assert_eq!(utm.source.as_deref(), Some("newsletter"));
        assert_eq!(utm.medium, None);
        assert_eq!(utm.campaign.as_deref(), Some("spring"));
    }

    #[test]
    fn test_referer_host() {
        assert_eq!(
            referer_host("https://www.example.com/page?x=1").as_deref(),
            Some("www.example.com")
        );
        assert_eq!(referer_host("not a url"), None);
    }
}
