//! GSearch entry point
//!
//! Launches the GUI; the program takes no command-line arguments.

#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

use console::style;

fn main() {
    gsearch::logging::init();
    gsearch::logging::info("MAIN", "GSearch starting up");

    if let Err(e) = gsearch::gui::run() {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}
