/// Symbols removed from a claim before matching. `?` and `'` are kept.
const STRIPPED_SYMBOLS: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`',
    '~', '(', ')',
];

/// Bengali nukta sign.
const NUKTA: char = '\u{09bc}';

/// Lower-case a claim, strip punctuation and collapse whitespace.
///
/// Bengali ড়, ঢ় and য় are folded to their single-code-point letters, so
/// input typed either way matches the catalog. Unicode NFC keeps the
/// two-code-point spelling.
pub fn normalize_claim(input: &str) -> String {
    let lower = input.to_lowercase();
    let stripped: String = fold_bengali_nukta(&lower)
        .filter(|c| !STRIPPED_SYMBOLS.contains(c))
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Base letter + nukta to the precomposed letter.
fn fold_bengali_nukta(text: &str) -> impl Iterator<Item = char> + '_ {
    let mut chars = text.chars().peekable();
    std::iter::from_fn(move || {
        let c = chars.next()?;
        let composed = match c {
            '\u{09a1}' => Some('\u{09dc}'),
            '\u{09a2}' => Some('\u{09dd}'),
            '\u{09af}' => Some('\u{09df}'),
            _ => None,
        };
        match composed {
            Some(letter) if chars.peek() == Some(&NUKTA) => {
                chars.next();
                Some(letter)
            }
            _ => Some(c),
        }
    })
}
