//! Text formatting helpers shared by the forms and the card templates.

fn digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Live phone formatting applied on every input event.
///
/// `"555123"` becomes `"(555) 123"`, ten digits become `"(555) 123-4567"`;
/// digits past the tenth are dropped. Separators only appear once a digit
/// follows them.
pub fn format_phone_input(raw: &str) -> String {
    let value = digits(raw);
    let len = value.len();

    if len > 6 {
        let end = len.min(10);
        format!("({}) {}-{}", &value[..3], &value[3..6], &value[6..end])
    } else if len > 3 {
        format!("({}) {}", &value[..3], &value[3..])
    } else {
        value
    }
}

/// Live ZIP formatting: the dash appears once a sixth digit is typed.
pub fn format_zip_input(raw: &str) -> String {
    let value = digits(raw);
    if value.len() > 5 {
        let end = value.len().min(9);
        format!("{}-{}", &value[..5], &value[5..end])
    } else {
        value
    }
}

/// Display formatting for a complete number; anything that is not exactly
/// ten digits is returned untouched.
pub fn format_phone(phone: &str) -> String {
    let value = digits(phone);
    if value.len() == 10 {
        format!("({}) {}-{}", &value[..3], &value[3..6], &value[6..])
    } else {
        phone.to_string()
    }
}

pub fn format_business_name(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// USD with thousands separators and two decimals, e.g. `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!(
        "{}${}.{:02}",
        if negative { "-" } else { "" },
        grouped,
        cents % 100
    )
}

pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let head: String = text.chars().take(max_length).collect();
    format!("{}...", head)
}

pub fn state_name(abbr: &str) -> &str {
    match abbr {
        "CA" => "California",
        "TX" => "Texas",
        "FL" => "Florida",
        "NY" => "New York",
        "AZ" => "Arizona",
        "NV" => "Nevada",
        "CO" => "Colorado",
        "NC" => "North Carolina",
        "NJ" => "New Jersey",
        "MA" => "Massachusetts",
        other => other,
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `"Residential Solar"` → `"residential-solar"`, used for checkbox ids.
pub fn slugify(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_input_progression() {
        assert_eq!(format_phone_input("55"), "55");
        assert_eq!(format_phone_input("555"), "555");
        assert_eq!(format_phone_input("5551"), "(555) 1");
        assert_eq!(format_phone_input("555123"), "(555) 123");
        assert_eq!(format_phone_input("5551234"), "(555) 123-4");
        assert_eq!(format_phone_input("5551234567"), "(555) 123-4567");
        assert_eq!(format_phone_input("(555) 123-45678"), "(555) 123-4567");
    }

    #[test]
    fn test_zip_input() {
        assert_eq!(format_zip_input("1234"), "1234");
        assert_eq!(format_zip_input("12345"), "12345");
        assert_eq!(format_zip_input("123456"), "12345-6");
        assert_eq!(format_zip_input("123456789"), "12345-6789");
        assert_eq!(format_zip_input("12345-67890"), "12345-6789");
    }

    #[test]
    fn test_format_phone_display() {
        assert_eq!(format_phone("555.123.4567"), "(555) 123-4567");
        assert_eq!(format_phone("12345"), "12345");
    }

    #[test]
    fn test_business_name() {
        assert_eq!(format_business_name("sUNNY dAYS solar"), "Sunny Days Solar");
    }

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(49.0), "$49.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn test_truncate_and_escape() {
        assert_eq!(truncate_text("Solar", 10), "Solar");
        assert_eq!(truncate_text("Solar Panels", 5), "Solar...");
        assert_eq!(escape_html("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
    }

    #[test]
    fn test_state_name_and_slug() {
        assert_eq!(state_name("NC"), "North Carolina");
        assert_eq!(state_name("WA"), "WA");
        assert_eq!(slugify("Grid-Tie  Systems"), "grid-tie-systems");
    }
}
