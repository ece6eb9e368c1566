//! User-facing status messages with ANSI color and icons.

use crate::utils::colors::{BOLD, CYAN, GREEN, RED, RESET, YELLOW};
use std::fmt;

const BLUE: &str = "\x1b[34m";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}ℹ️ {RESET} {msg}");
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{GREEN}{BOLD}✅{RESET} {msg}");
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{YELLOW}{BOLD}⚠️ {RESET} {msg}");
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{RED}{BOLD}❌{RESET} {msg}");
}

/// Section header for report-style output.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{CYAN}{BOLD}=== {msg} ==={RESET}");
}
