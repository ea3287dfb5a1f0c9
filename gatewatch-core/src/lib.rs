pub mod checks;
pub mod dispatch;
pub mod limiter;
pub mod report;

pub use dispatch::{CheckOutcome, UrlChecker};
pub use limiter::{Clock, RateLimiter, SystemClock};

use colored::Colorize;

pub fn print_banner() {
    println!("{}", "═".repeat(60).bright_blue().bold());
    println!(
        "{}",
        "  GATEWATCH - chat-driven website fingerprinting"
            .bright_white()
            .bold()
    );
    println!(
        "{}",
        format!("  v{}", env!("CARGO_PKG_VERSION")).bright_cyan()
    );
    println!("{}", "═".repeat(60).bright_blue().bold());
}
