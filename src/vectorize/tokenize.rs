//! Text normalization and tokenization.
//!
//! Each CJK ideograph is its own token; contiguous alphanumeric runs form one
//! token; everything else separates tokens. Single-character tokens are
//! dropped unless they are ideographs.

/// Returns `true` for characters in the CJK Unified Ideographs block.
#[inline]
pub fn is_ideographic(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Lower-cases `text` and splits it into tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut run = String::new();

    for c in text.chars().flat_map(char::to_lowercase) {
        if is_ideographic(c) {
            flush_run(&mut run, &mut tokens);
            tokens.push(c.to_string());
        } else if c.is_alphanumeric() {
            run.push(c);
        } else {
            flush_run(&mut run, &mut tokens);
        }
    }
    flush_run(&mut run, &mut tokens);

    tokens
}

fn flush_run(run: &mut String, tokens: &mut Vec<String>) {
    if run.chars().nth(1).is_some() {
        tokens.push(std::mem::take(run));
    } else {
        run.clear();
    }
}
