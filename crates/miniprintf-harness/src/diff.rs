//! Diff rendering for fixture comparison.

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Render a text diff between expected and actual output.
///
/// Fixture outputs are escaped, so most are a single line; each differing
/// line also carries the column of its first divergence.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }

    let mut out = String::new();
    out.push_str("--- expected\n");
    out.push_str("+++ actual\n");
    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();
    let rows = expected_lines.len().max(actual_lines.len()).max(1);
    for i in 0..rows {
        let e = expected_lines.get(i).copied().unwrap_or("");
        let a = actual_lines.get(i).copied().unwrap_or("");
        if e != a {
            let col = first_divergence(e, a) + 1;
            out.push_str(&format!("@@ line {} col {col} @@\n", i + 1));
            out.push_str(&format!("-{e}\n"));
            out.push_str(&format!("+{a}\n"));
        }
    }
    out
}

fn first_divergence(a: &str, b: &str) -> usize {
    a.bytes()
        .zip(b.bytes())
        .position(|(x, y)| x != y)
        .unwrap_or_else(|| a.len().min(b.len()))
}

/// `PASS`/`FAIL` label, colored when `ansi` is set.
#[must_use]
pub fn status_label(passed: bool, ansi: bool) -> String {
    let (label, color) = if passed { ("PASS", GREEN) } else { ("FAIL", RED) };
    if ansi {
        format!("{color}{label}{RESET}")
    } else {
        label.to_string()
    }
}
