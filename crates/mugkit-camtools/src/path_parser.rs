//! SVG path mini-language parsing.
//!
//! Turns a path-data string (`"M 0 0 L 10 0 c 1,2 3,4 5,6 Z"`) into typed
//! segments. The grammar is forgiving the way browsers are: whitespace and
//! commas are interchangeable, unparsable numbers are dropped, and unknown
//! command letters are skipped together with their arguments. A malformed
//! trailing argument group is dropped whole; it never produces a partially
//! filled segment.

use tracing::debug;

/// One parsed path command.
///
/// Coordinate-carrying variants record whether the source letter was
/// uppercase (`absolute`) or lowercase (relative to the current pen
/// position). Trailing argument groups after a single letter repeat the
/// command, so `L 1 2 3 4` parses to two `LineTo` segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo {
        absolute: bool,
        x: f64,
        y: f64,
    },
    LineTo {
        absolute: bool,
        x: f64,
        y: f64,
    },
    HorizontalTo {
        absolute: bool,
        x: f64,
    },
    VerticalTo {
        absolute: bool,
        y: f64,
    },
    CubicTo {
        absolute: bool,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    QuadTo {
        absolute: bool,
        x1: f64,
        y1: f64,
        x: f64,
        y: f64,
    },
    Close,
}

/// Parses path data into segments.
///
/// Never fails: unrecognized or malformed input degrades to fewer segments.
/// Arc commands (`A`/`a`) and the smooth shorthands (`S`/`s`, `T`/`t`) are
/// not supported and are skipped with their arguments.
pub fn parse_path_data(data: &str) -> Vec<PathSegment> {
    let tokens = tokenize(data);
    let mut segments = Vec::new();
    let mut i = 0usize;

    while i < tokens.len() {
        let Some(cmd) = command_letter(&tokens[i]) else {
            // Numbers before any command letter have no meaning.
            i += 1;
            continue;
        };
        i += 1;

        // Everything up to the next command letter belongs to this command.
        // Unparsable tokens are filtered here rather than aborting.
        let mut args: Vec<f64> = Vec::new();
        while i < tokens.len() && command_letter(&tokens[i]).is_none() {
            if let Ok(value) = tokens[i].parse::<f64>() {
                args.push(value);
            } else {
                debug!(token = %tokens[i], "dropping unparsable path token");
            }
            i += 1;
        }

        let absolute = cmd.is_ascii_uppercase();
        match cmd.to_ascii_uppercase() {
            'M' => {
                for pair in args.chunks_exact(2) {
                    segments.push(PathSegment::MoveTo {
                        absolute,
                        x: pair[0],
                        y: pair[1],
                    });
                }
            }
            'L' => {
                for pair in args.chunks_exact(2) {
                    segments.push(PathSegment::LineTo {
                        absolute,
                        x: pair[0],
                        y: pair[1],
                    });
                }
            }
            'H' => {
                for &x in &args {
                    segments.push(PathSegment::HorizontalTo { absolute, x });
                }
            }
            'V' => {
                for &y in &args {
                    segments.push(PathSegment::VerticalTo { absolute, y });
                }
            }
            'C' => {
                for group in args.chunks_exact(6) {
                    segments.push(PathSegment::CubicTo {
                        absolute,
                        x1: group[0],
                        y1: group[1],
                        x2: group[2],
                        y2: group[3],
                        x: group[4],
                        y: group[5],
                    });
                }
            }
            'Q' => {
                for group in args.chunks_exact(4) {
                    segments.push(PathSegment::QuadTo {
                        absolute,
                        x1: group[0],
                        y1: group[1],
                        x: group[2],
                        y: group[3],
                    });
                }
            }
            'Z' => {
                segments.push(PathSegment::Close);
            }
            other => {
                debug!(command = %other, args = args.len(), "skipping unsupported path command");
            }
        }
    }

    segments
}

/// Tokenize path data into command letters and numeric strings.
///
/// Splits on whitespace and commas, and on `+`/`-` when they begin a new
/// number (`10-5` -> `10`, `-5`) while keeping scientific-notation signs
/// (`1e-3`) intact.
pub fn tokenize(data: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in data.chars() {
        match ch {
            'M' | 'm' | 'L' | 'l' | 'H' | 'h' | 'V' | 'v' | 'C' | 'c' | 'S' | 's' | 'Q' | 'q'
            | 'T' | 't' | 'A' | 'a' | 'Z' | 'z' => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                tokens.push(ch.to_string());
            }
            ' ' | ',' | '\n' | '\r' | '\t' => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            '-' | '+' => {
                if current.is_empty() {
                    current.push(ch);
                } else if matches!(current.chars().last(), Some('e' | 'E')) {
                    current.push(ch);
                } else {
                    tokens.push(std::mem::take(&mut current));
                    current.push(ch);
                }
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

fn command_letter(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
        _ => None,
    }
}
