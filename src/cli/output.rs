use console::style;

pub fn print_info(message: &str) {
    println!("{} {}", style("[INFO]").cyan(), message);
}

pub fn print_success(message: &str) {
    println!("{} {}", style("[INFO]").green(), message);
}

pub fn print_warn(message: &str) {
    eprintln!("{} {}", style("[WARN]").yellow().bold(), message);
}

/// Warn about things that do not stop generation.
pub fn print_diagnostics(generation: &crate::pipeline::Generation) {
    for name in &generation.resolution.unbacked {
        print_warn(&format!(
            "Entry point {} has no matching import",
            style(name).bold()
        ));
    }

    if generation.extra_factory_calls > 0 {
        print_warn(&format!(
            "Found {} additional factory call(s) in {}; only the first is used",
            generation.extra_factory_calls,
            generation.declaration.display()
        ));
    }
}
