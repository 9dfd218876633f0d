//! Fixed character-to-symbol alphabets.

/// Separator between encoded words: a space symbol joined by single spaces.
pub const WORD_GAP: &str = "   ";

/// An ordered, immutable alphabet mapping characters to symbols.
///
/// Characters are stored uppercase; lookups by character ignore ASCII case.
#[derive(Debug, Clone, Copy)]
pub struct CodeTable {
    entries: &'static [(char, &'static str)],
}

impl CodeTable {
    pub const fn new(entries: &'static [(char, &'static str)]) -> Self {
        Self { entries }
    }

    /// Entries in table order.
    pub fn entries(&self) -> &'static [(char, &'static str)] {
        self.entries
    }

    pub fn symbol_for(&self, c: char) -> Option<&'static str> {
        let c = c.to_ascii_uppercase();
        self.entries
            .iter()
            .find(|(key, _)| *key == c)
            .map(|&(_, symbol)| symbol)
    }

    pub fn char_for(&self, symbol: &str) -> Option<char> {
        self.entries
            .iter()
            .find(|(_, s)| s.eq_ignore_ascii_case(symbol))
            .map(|&(c, _)| c)
    }

    /// Symbols separated by single spaces. Characters outside the table,
    /// including spaces, pass through unchanged.
    pub fn encode(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 4);
        for (i, c) in text.chars().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            match self.symbol_for(c) {
                Some(symbol) => out.push_str(symbol),
                None => out.push(c),
            }
        }
        out
    }
}

/// Split encoded text on [`WORD_GAP`].
pub fn split_words(encoded: &str) -> impl Iterator<Item = &str> + '_ {
    encoded.trim().split(WORD_GAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC: CodeTable = CodeTable::new(&[('A', "x"), ('B', "yy"), ('C', "zzz")]);

    #[test]
    fn test_lookup_both_ways() {
        assert_eq!(ABC.symbol_for('b'), Some("yy"));
        assert_eq!(ABC.symbol_for('?'), None);
        assert_eq!(ABC.char_for("ZZZ"), Some('C'));
        assert_eq!(ABC.char_for("q"), None);
        assert_eq!(ABC.entries().len(), 3);
    }

    #[test]
    fn test_encode_passes_unknown_through() {
        assert_eq!(ABC.encode("ab c!"), "x yy   zzz !");
        assert_eq!(ABC.encode(""), "");
    }

    #[test]
    fn test_split_words() {
        let words: Vec<&str> = split_words(" x yy   zzz ").collect();
        assert_eq!(words, vec!["x yy", "zzz"]);
    }
}
