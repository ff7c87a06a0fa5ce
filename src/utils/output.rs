use colored::*;

pub struct OutputStyle;

impl OutputStyle {
    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    pub fn print_field(label: &str, value: &str) {
        println!("{:>12}: {}", Self::label(label), value);
    }
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

pub fn print_warning(message: &str) {
    println!("⚠️  {}", OutputStyle::warning(message));
}

pub fn print_system_error(message: &str) {
    eprintln!("❌ {}", OutputStyle::error(message));
}

pub fn print_empty_result(item_type: &str) {
    println!("{}", OutputStyle::muted(&format!("No {} found", item_type)));
}
