//! Console output helpers for CLI handlers

pub fn print_info(message: &str) {
    println!("{message}");
}

pub fn print_warning(message: &str) {
    println!("⚠️  {message}");
}

pub fn print_error(message: &str) {
    eprintln!("❌ {message}");
}

/// Truncate to `max_chars`, appending an ellipsis when anything was cut
#[must_use]
pub fn truncate_str(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str_short_input_untouched() {
        assert_eq!(truncate_str("gm", 10), "gm");
    }

    #[test]
    fn test_truncate_str_counts_chars_not_bytes() {
        assert_eq!(truncate_str("ééééé", 3), "ééé…");
    }
}
