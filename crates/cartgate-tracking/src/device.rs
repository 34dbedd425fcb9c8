//! User-Agent parsing: device class plus browser and OS labels.
//!
//! Pattern-based, matching what the original storefront middleware
//! detected. Anything unrecognized falls back to desktop with no labels.

use std::sync::LazyLock;

use regex::Regex;

use cartgate_entity::tracking::DeviceType;

static MOBILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(android|bb\d+|meego).+mobile|avantgo|bada/|blackberry|blazer|compal|elaine|fennec|hiptop|iemobile|ip(hone|od)|iris|kindle|lge |maemo|midp|mmp|mobile.+firefox|netfront|opera m(ob|in)i|palm( os)?|phone|p(ixi|re)/|plucker|pocket|psp|series(4|6)0|symbian|treo|up\.(browser|link)|vodafone|wap|windows ce|xda|xiino",
    )
    .expect("mobile pattern is valid")
});

static TABLET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)ipad|tablet|playbook|silk|kindle").expect("tablet pattern is valid")
});

/// Classify the device from a User-Agent string.
///
/// Tablets are checked first: tablet agents frequently contain mobile
/// markers too, and the more specific class should win. Android without
/// the `Mobile` token is a tablet by convention.
pub fn classify_device(user_agent: &str) -> DeviceType {
    if TABLET_RE.is_match(user_agent) || is_android_tablet(user_agent) {
        DeviceType::Tablet
    } else if MOBILE_RE.is_match(user_agent) {
        DeviceType::Mobile
    } else {
        DeviceType::Desktop
    }
}

fn is_android_tablet(user_agent: &str) -> bool {
    let lower = user_agent.to_ascii_lowercase();
    lower.contains("android") && !lower.contains("mobile")
}

/// Browser family label, `None` when unrecognized.
pub fn parse_browser(user_agent: &str) -> Option<String> {
    // Order matters: Edge and Opera embed "Chrome", Chrome embeds "Safari".
    const BROWSERS: [(&str, &str); 6] = [
        ("Edg/", "Edge"),
        ("OPR/", "Opera"),
        ("Firefox/", "Firefox"),
        ("Chrome/", "Chrome"),
        ("Safari/", "Safari"),
        ("MSIE", "Internet Explorer"),
    ];
    BROWSERS
        .iter()
        .find(|(marker, _)| user_agent.contains(marker))
        .map(|(_, name)| name.to_string())
}

/// Operating system label, `None` when unrecognized.
pub fn parse_os(user_agent: &str) -> Option<String> {
    // Android before Linux, iOS devices before Mac OS.
    const SYSTEMS: [(&str, &str); 6] = [
        ("Android", "Android"),
        ("iPhone", "iOS"),
        ("iPad", "iOS"),
        ("Windows", "Windows"),
        ("Mac OS X", "macOS"),
        ("Linux", "Linux"),
    ];
    SYSTEMS
        .iter()
        .find(|(marker, _)| user_agent.contains(marker))
        .map(|(_, name)| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
    const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) \
         AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
    const IPAD_UA: &str = "Mozilla/5.0 (iPad; CPU OS 16_0 like Mac OS X) AppleWebKit/605.1.15 \
         (KHTML, like Gecko) Version/16.0 Mobile/15E148 Safari/604.1";

    #[test]
    fn test_classify_device() {
        assert_eq!(classify_device(DESKTOP_UA), DeviceType::Desktop);
        assert_eq!(classify_device(IPHONE_UA), DeviceType::Mobile);
        assert_eq!(classify_device(IPAD_UA), DeviceType::Tablet);
    }

    #[test]
    fn test_garbage_falls_back_to_desktop() {
        assert_eq!(classify_device(""), DeviceType::Desktop);
        assert_eq!(classify_device("curl/8.4.0"), DeviceType::Desktop);
    }

    #[test]
    fn test_browser_labels() {
        assert_eq!(parse_browser(DESKTOP_UA).as_deref(), Some("Chrome"));
        assert_eq!(parse_browser(IPHONE_UA).as_deref(), Some("Safari"));
        assert_eq!(parse_browser("curl/8.4.0"), None);
    }

    #[test]
    fn test_os_labels() {
        assert_eq!(parse_os(DESKTOP_UA).as_deref(), Some("Windows"));
        assert_eq!(parse_os(IPHONE_UA).as_deref(), Some("iOS"));
        assert_eq!(parse_os("curl/8.4.0"), None);
    }
}
