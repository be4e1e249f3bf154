use std::collections::HashMap;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Looks up a cookie value by name.
pub trait CookieSource {
    fn cookie(&self, name: &str) -> Option<String>;
}

impl CookieSource for HashMap<String, String> {
    fn cookie(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Splits a `document.cookie` string into name/value pairs.
///
/// Values keep any `=` they contain and lose surrounding double quotes.
/// Entries without `=` are skipped. When a name repeats, the first entry wins,
/// as browsers list the most specific path first.
pub fn parse_cookies(raw: &str) -> HashMap<String, String> {
    let mut cookies = HashMap::new();
    for pair in raw.split(';') {
        let Some((name, value)) = pair.split_once('=') else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value);
        cookies
            .entry(name.to_string())
            .or_insert_with(|| value.to_string());
    }
    cookies
}

/// Reads `document.cookie` on every lookup so a rotated token is picked up.
pub struct DocumentCookies {
    document: HtmlDocument,
}

impl DocumentCookies {
    pub fn new(document: &web_sys::Document) -> Option<Self> {
        document
            .clone()
            .dyn_into::<HtmlDocument>()
            .ok()
            .map(|document| Self { document })
    }
}

impl CookieSource for DocumentCookies {
    fn cookie(&self, name: &str) -> Option<String> {
        match self.document.cookie() {
            Ok(raw) => parse_cookies(&raw).remove(name),
            Err(_) => {
                log::warn!("document.cookie is not readable");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_with_whitespace() {
        let cookies = parse_cookies("sessionid=abc; csrftoken=XyZ123 ;theme=dark");
        assert_eq!(cookies.get("csrftoken").map(String::as_str), Some("XyZ123"));
        assert_eq!(cookies.get("sessionid").map(String::as_str), Some("abc"));
        assert_eq!(cookies.get("theme").map(String::as_str), Some("dark"));
    }

    #[test]
    fn keeps_equals_signs_inside_values() {
        let cookies = parse_cookies("token=a=b==; other=1");
        assert_eq!(cookies.get("token").map(String::as_str), Some("a=b=="));
    }

    #[test]
    fn strips_quotes_and_skips_bare_entries() {
        let cookies = parse_cookies("flag; quoted=\"v1\"; =orphan");
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies.get("quoted").map(String::as_str), Some("v1"));
    }

    #[test]
    fn first_duplicate_wins() {
        let cookies = parse_cookies("csrftoken=path-specific; csrftoken=root");
        assert_eq!(cookies.cookie("csrftoken").as_deref(), Some("path-specific"));
    }

    #[test]
    fn missing_cookie_is_none() {
        assert_eq!(parse_cookies("").cookie("csrftoken"), None);
    }
}
