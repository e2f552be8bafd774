use colored::Colorize;

/// Print a status message for a step that is starting
pub fn status_message(message: &str) {
    println!("{} {}...", "⏳".yellow(), message.bright_white());
}

/// Print a success message
pub fn success_message(message: &str) {
    println!("{} {}", "✅".green(), message.green());
}

/// Print a warning message
pub fn warning_message(message: &str) {
    println!("{} {}", "⚠️ ".yellow(), message.yellow());
}

/// Print a simple informational message
pub fn info_message(message: &str) {
    println!("{} {}", "ℹ️ ".blue(), message.blue());
}

/// Print a header separating logical sections of output
pub fn section_header(title: &str) {
    println!("\n{}", format!("── {title} ──").cyan().bold());
}
