/// atoi: skip surrounding whitespace, read an optional sign and then digits
/// up to the first non-digit. Out-of-range values saturate to `i64` bounds.
pub fn string_to_int(s: &str) -> i64 {
    let s = s.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(b - b'0');
        let next = value.checked_mul(10).and_then(|v| {
            if negative { v.checked_sub(d) } else { v.checked_add(d) }
        });
        match next {
            Some(v) => value = v,
            None => return if negative { i64::MIN } else { i64::MAX },
        }
    }
    value
}

/// Balanced `()`, `[]`, `{}`; other characters are ignored.
pub fn is_valid_parentheses(s: &str) -> bool {
    let mut stack: Vec<char> = Vec::new();
    for ch in s.chars() {
        match ch {
            '(' => stack.push(')'),
            '[' => stack.push(']'),
            '{' => stack.push('}'),
            ')' | ']' | '}' => {
                if stack.pop() != Some(ch) {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

/// Writes `s` in a zigzag over `rows` rows and reads it back row by row.
pub fn zigzag_convert(s: &str, rows: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if rows <= 1 || rows >= chars.len() {
        return s.to_owned();
    }
    let mut lines = vec![String::new(); rows];
    let (mut row, mut down) = (0usize, false);
    for ch in chars {
        lines[row].push(ch);
        if row == 0 || row == rows - 1 {
            down = !down;
        }
        if down { row += 1 } else { row -= 1 }
    }
    lines.concat()
}

/// Alphanumeric only, 3 to 15 characters.
pub fn is_valid_username(username: &str) -> bool {
    let len = username.chars().count();
    (3..=15).contains(&len) && username.chars().all(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atoi() {
        assert_eq!(string_to_int("42"), 42);
        assert_eq!(string_to_int("   -42"), -42);
        assert_eq!(string_to_int("4193 with words"), 4193);
        assert_eq!(string_to_int("words and 987"), 0);
        assert_eq!(string_to_int("+7"), 7);
        assert_eq!(string_to_int(""), 0);
        assert_eq!(string_to_int("-"), 0);
        assert_eq!(string_to_int("99999999999999999999"), i64::MAX);
        assert_eq!(string_to_int("-9223372036854775808"), i64::MIN);
        assert_eq!(string_to_int("-99999999999999999999"), i64::MIN);
    }

    #[test]
    fn brackets() {
        assert!(is_valid_parentheses("()[]{}"));
        assert!(is_valid_parentheses("{[()]}"));
        assert!(!is_valid_parentheses("(]"));
        assert!(!is_valid_parentheses("(("));
        assert!(!is_valid_parentheses(")"));
        assert!(is_valid_parentheses("f(x) = [a + {b}]"));
    }

    #[test]
    fn zigzag() {
        assert_eq!(zigzag_convert("PAYPALISHIRING", 3), "PAHNAPLSIIGYIR");
        assert_eq!(zigzag_convert("PAYPALISHIRING", 4), "PINALSIGYAHRPI");
        assert_eq!(zigzag_convert("AB", 1), "AB");
    }

    #[test]
    fn usernames() {
        assert!(is_valid_username("user123"));
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username("user@123"));
        assert!(!is_valid_username("a_very_long_username_indeed"));
    }
}
