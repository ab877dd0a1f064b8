use std::path::PathBuf;

/// Locate the Claude Code log root (the `projects` tree of session JSONL files).
///
/// An explicit override wins even when the directory does not exist; the scan
/// falls back to cached data in that case. Otherwise prefer `~/.claude`, then
/// the XDG config dir.
pub fn default_claude_root(override_dir: Option<&str>) -> PathBuf {
    if let Some(dir) = override_dir {
        let trimmed = dir.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    let basedirs = directories::BaseDirs::new();
    let home = basedirs
        .as_ref()
        .map(|b| b.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~"));
    let xdg_config = basedirs
        .as_ref()
        .map(|b| b.config_dir().to_path_buf())
        .unwrap_or_else(|| home.join(".config"));
    let preferred = home.join(".claude").join("projects");
    let fallback = xdg_config.join("claude").join("projects");
    if !preferred.is_dir() && fallback.is_dir() {
        return fallback;
    }
    preferred
}

/// Abbreviate large counts: 2_300_000 -> "2.3M", 1_500 -> "1.5K", 999 -> "999".
pub fn format_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1e6)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1e3)
    } else {
        n.to_string()
    }
}

/// Thousands separators: 1234567 -> "1,234,567".
pub fn group_digits(n: u64) -> String {
    group_digit_str(&n.to_string())
}

pub fn group_digits_signed(n: i64) -> String {
    if n < 0 {
        format!("-{}", group_digits(n.unsigned_abs()))
    } else {
        group_digits(n as u64)
    }
}

/// Currency with grouping and cents: 1234.5 -> "$1,234.50".
pub fn format_money(v: f64) -> String {
    let fixed = format!("{:.2}", v.max(0.0));
    match fixed.split_once('.') {
        Some((int_part, cents)) => format!("${}.{}", group_digit_str(int_part), cents),
        None => format!("${fixed}"),
    }
}

fn group_digit_str(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
