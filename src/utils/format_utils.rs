//! Text formatting helpers for console reports

/// Indent a single-line WKT definition, one node per line
///
/// Nodes that hold only literal values stay on one line, e.g.
/// `UNIT["metre",1]`, while nodes containing other nodes are expanded.
pub fn pretty_wkt(wkt: &str) -> String {
    let chars: Vec<char> = wkt.trim().chars().collect();
    let mut out = String::with_capacity(chars.len() * 2);
    let mut depth = 0usize;
    let mut in_quotes = false;

    for (i, &c) in chars.iter().enumerate() {
        if in_quotes {
            out.push(c);
            if c == '"' {
                in_quotes = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_quotes = true;
                out.push(c);
            },
            '[' => {
                depth += 1;
                out.push(c);
            },
            ']' => {
                depth = depth.saturating_sub(1);
                out.push(c);
            },
            ',' if starts_node(&chars[i + 1..]) => {
                out.push(',');
                out.push('\n');
                out.push_str(&"    ".repeat(depth));
            },
            _ => out.push(c),
        }
    }

    out
}

// A keyword followed by '[' starts a nested node
fn starts_node(rest: &[char]) -> bool {
    let keyword_len = rest.iter()
        .take_while(|c| c.is_ascii_alphanumeric() || **c == '_')
        .count();
    keyword_len > 0 && rest.get(keyword_len) == Some(&'[')
}

/// Format a coordinate with fixed decimals, for display
pub fn format_coordinate(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}
