//! Display-text derivation for notification rendering.
//!
//! Computed fresh from the record at each finalization, never stored.

/// Map hosting/domain choice codes to human phrases. Unrecognized codes pass
/// through unchanged.
pub fn provision_text(code: &str) -> String {
    match code {
        "client" => "Client to Provide".to_string(),
        "bim" => "Bim Africa to Provide".to_string(),
        other => other.to_string(),
    }
}

/// Render feature tags: each tag capitalized with hyphens replaced by
/// spaces, joined with `", "`. An empty set renders as `"None"`.
pub fn features_text(features: &[String]) -> String {
    if features.is_empty() {
        return "None".to_string();
    }
    features.iter().map(|tag| capitalize(tag).replace('-', " ")).collect::<Vec<_>>().join(", ")
}

/// First letter uppercase, the rest lowercase.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Pages only make sense for site types that are priced per page.
pub fn shows_pages(website_type: &str, pages: &str) -> bool {
    let kind = website_type.trim().to_ascii_lowercase();
    kind != "ecommerce" && kind != "landing" && !pages.trim().is_empty()
}

pub fn shows_products(products: &str) -> bool {
    !products.trim().is_empty()
}

/// Price rounded to the nearest whole unit, digits grouped in thousands,
/// prefixed by the currency code: `MUR 1,235`.
pub fn price_text(currency: &str, price: f64) -> String {
    format!("{currency} {}", group_thousands(price.round() as i64))
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
