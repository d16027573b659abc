/// Wraps `s` in single quotes, escaping every embedded `'` as `\'`.
///
/// Backslashes already present in `s` are left untouched.
pub fn quote_single(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');

    for ch in s.chars() {
        if ch == '\'' {
            out.push('\\');
        }
        out.push(ch);
    }

    out.push('\'');
    out
}
