//! Input line tokenizer.

/// Split a raw input line into tokens.
///
/// Tokens are separated by runs of whitespace. A token that starts with a
/// single or double quote extends to the next matching quote and is
/// emitted without the quotes, so it may contain whitespace. A quote that
/// is never closed, or that encloses nothing, is kept as a literal
/// character. Quotes inside a token are literal.
///
/// The first token is the command name; the rest are arguments in order.
pub fn tokenize(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        if ch.is_whitespace() {
            i += 1;
            continue;
        }

        // Quoted token: at least one character between the quotes.
        if (ch == '\'' || ch == '"')
            && let Some(len) = chars
                .get(i + 2..)
                .and_then(|rest| rest.iter().position(|&c| c == ch))
        {
            let end = i + 2 + len;
            tokens.push(chars[i + 1..end].iter().collect());
            i = end + 1;
            continue;
        }

        let start = i;
        while i < chars.len() && !chars[i].is_whitespace() {
            i += 1;
        }
        tokens.push(chars[start..i].iter().collect());
    }

    tokens
}
