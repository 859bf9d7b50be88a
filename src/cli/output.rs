//! Output formatting for CLI commands

use crate::pagerank::Ranks;

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// One `  page: 0.1234` line per page, in page order
pub fn format_ranks(ranks: &Ranks) -> String {
    ranks
        .iter()
        .map(|(page, rank)| format!("  {page}: {rank:.4}\n"))
        .collect()
}

/// Print a titled rank listing
pub fn print_ranks(title: &str, ranks: &Ranks) {
    println!("{title}");
    print!("{}", format_ranks(ranks));
}
