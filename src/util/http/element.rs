use scraper::Selector;

/// Extracts the text value of the first element matching a CSS selector.
///
/// If the CSS selector is invalid or no element matches, `None` is returned.
pub fn parse_value(element: &scraper::ElementRef, css_selector: &str) -> Option<String> {
    match Selector::parse(css_selector) {
        Ok(s) => element
            .select(&s)
            .next()
            .map(|v| v.text().collect::<String>()),
        Err(_) => None,
    }
}

/// Extracts an attribute value from the first element matching a CSS selector.
///
/// 回傳原始屬性值，不做修剪；空字串視同屬性不存在。
pub fn parse_attr(element: &scraper::ElementRef, css_selector: &str, attr: &str) -> Option<String> {
    match Selector::parse(css_selector) {
        Ok(s) => element
            .select(&s)
            .next()
            .and_then(|v| v.value().attr(attr))
            .filter(|v| !v.is_empty())
            .map(String::from),
        Err(_) => None,
    }
}
