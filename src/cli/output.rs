//! Output formatting and progress spinners for CLI

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{game::GameState, session::Session};

const RULE_WIDTH: usize = 56;

/// Spinner shown while a tree is built and searched
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner().with_message(message.to_string());
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]")
            .expect("Invalid spinner template"),
    );
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Title framed by double rules
pub fn print_section(title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("\n{rule}\n{title}\n{rule}");
}

/// Title underlined with a single rule
pub fn print_subsection(title: &str) {
    println!("\n{title}\n{}", "-".repeat(title.len().max(RULE_WIDTH / 2)));
}

/// Group digits in threes: `1234567` becomes `1,234,567`
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let head = digits.len() % 3;
    let mut groups: Vec<&str> = Vec::new();
    if head > 0 {
        groups.push(&digits[..head]);
    }
    groups.extend(
        digits.as_bytes()[head..]
            .chunks(3)
            .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default()),
    );
    groups.join(",")
}

/// Format a duration in milliseconds with three decimals
pub fn format_duration(duration: Duration) -> String {
    format!("{:.3} ms", duration.as_secs_f64() * 1000.0)
}

/// Aligned `label: value` line
pub fn print_kv(key: &str, value: &str) {
    let label = format!("{key}:");
    println!("  {label:<16} {value}");
}

/// Render the row with 1-based positions underneath
pub fn format_row_with_positions(numbers: &[u8]) -> (String, String) {
    let mut values = String::new();
    let mut positions = String::new();
    for (i, n) in numbers.iter().enumerate() {
        let label = (i + 1).to_string();
        let width = label.len().max(1);
        values.push_str(&format!("{n:>width$} "));
        positions.push_str(&format!("{label:>width$} "));
    }
    (values.trim_end().to_string(), positions.trim_end().to_string())
}

/// Print the counters of a state
pub fn print_counters(state: &GameState) {
    print_kv("Points", &state.points().to_string());
    print_kv("Bank", &state.bank().to_string());
}

/// Print the row, counters and whose turn it is
pub fn print_position(session: &Session) {
    let (values, positions) = format_row_with_positions(session.row().numbers());
    println!();
    println!("  Row:      {values}");
    println!("  Position: {positions}");
    print_counters(session.state());
    if !session.is_over() {
        print_kv(
            "To move",
            &format!(
                "{} ({})",
                session.player_to_move(),
                session.participant_to_move()
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_are_separated() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn positions_line_up_with_values() {
        let numbers = [3, 2, 1, 4, 2, 3, 4, 1, 1, 2, 3];
        let (values, positions) = format_row_with_positions(&numbers);
        assert_eq!(values.len(), positions.len());
        assert!(values.ends_with(" 3"));
        assert!(positions.ends_with("11"));
    }
}
