use crate::geometry::Point;

/// Serialize a path to its text form.
///
/// Format: `(125,100)-(135,100)-(135,160)-(265,160)`
///
/// Integral coordinates are written without decimals (e.g. `125`),
/// others as plain decimals (e.g. `12.5`).
pub fn path_to_string(path: &[Point]) -> String {
    path.iter()
        .map(|&p| format_point(p))
        .collect::<Vec<_>>()
        .join("-")
}

fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

fn format_point(p: Point) -> String {
    format!("({},{})", format_number(p.x), format_number(p.y))
}

/// Parse a path from its text form.
///
/// Returns `None` if the string is malformed or holds fewer than two points.
pub fn string_to_path(s: &str) -> Option<Vec<Point>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let tokens = tokenize(s)?;
    let points = tokens
        .iter()
        .map(|t| parse_point(t))
        .collect::<Option<Vec<_>>>()?;

    if points.len() < 2 {
        return None;
    }
    Some(points)
}

/// Split into `(...)` groups separated by single dashes.
///
/// Negative coordinates carry their own `-` inside the parentheses, so only
/// dashes between groups act as separators.
fn tokenize(s: &str) -> Option<Vec<String>> {
    let mut tokens = Vec::new();
    let mut chars = s.chars().peekable();

    loop {
        if chars.peek() != Some(&'(') {
            return None;
        }
        let mut token = String::new();
        loop {
            let ch = chars.next()?;
            token.push(ch);
            if ch == ')' {
                break;
            }
        }
        tokens.push(token);

        match chars.next() {
            None => break,
            Some('-') => continue,
            Some(_) => return None,
        }
    }

    Some(tokens)
}

/// Parse a point token like `(1,2)` or `(-1.5,2)`.
fn parse_point(s: &str) -> Option<Point> {
    let inner = s.trim().strip_prefix('(')?.strip_suffix(')')?;
    let (x, y) = inner.split_once(',')?;
    let x: f64 = x.trim().parse().ok()?;
    let y: f64 = y.trim().parse().ok()?;
    Some(Point::new(x, y))
}
