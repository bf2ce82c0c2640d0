use std::process;

fn main() {
    if let Err(e) = torto::cli::run() {
        eprintln!("{}", torto::ui::format_fatal(&e.to_string()));
        process::exit(1);
    }
}
