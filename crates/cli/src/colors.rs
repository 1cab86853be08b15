// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help and list output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Default values/context: medium grey
    pub const CONTEXT: u8 = 245;
    pub const SUCCESS: u8 = 114;
    pub const WARNING: u8 = 214;
    pub const ERROR: u8 = 203;

    pub const RESET: &str = "\x1b[0m";
}

/// Palette color values and the terminal color each is shown with.
const SWATCHES: [(&str, u8); 6] = [
    ("bg-blue-100", 117),
    ("bg-green-100", 151),
    ("bg-yellow-100", 229),
    ("bg-purple-100", 183),
    ("bg-pink-100", 218),
    ("bg-orange-100", 216),
];

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// Wraps `text` in a foreground color.
pub fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, codes::RESET)
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Terminal color for a palette value such as `bg-pink-100`.
pub fn swatch(color: &str) -> Option<u8> {
    SWATCHES
        .iter()
        .find(|(value, _)| *value == color)
        .map(|(_, code)| *code)
}

/// Colorize an examples help block.
///
/// Lines ending with `:` become headers; in `  sjn cmd args    Description`
/// lines the command part is shown as a literal.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len() + 128);
    for line in text.lines() {
        if !result.is_empty() {
            result.push('\n');
        }

        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            result.push_str(indent);
            result.push_str(&header(trimmed));
        } else if let Some(cmd_end) = find_description_start(trimmed) {
            result.push_str(indent);
            result.push_str(&literal(&trimmed[..cmd_end]));
            result.push_str(&trimmed[cmd_end..]);
        } else {
            result.push_str(line);
        }
    }
    result
}

/// Find where the description starts (after 2+ spaces following the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut space_start = None;

    for (i, &b) in bytes.iter().enumerate() {
        if b == b' ' {
            space_start.get_or_insert(i);
        } else if let Some(start) = space_start.take() {
            if i - start >= 2 {
                return Some(start);
            }
        }
    }
    None
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
