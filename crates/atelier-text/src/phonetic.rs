//! NATO phonetic alphabet.

use crate::table::{split_words, CodeTable};

pub const PHONETIC: CodeTable = CodeTable::new(&[
    ('A', "Alpha"),
    ('B', "Bravo"),
    ('C', "Charlie"),
    ('D', "Delta"),
    ('E', "Echo"),
    ('F', "Foxtrot"),
    ('G', "Golf"),
    ('H', "Hotel"),
    ('I', "India"),
    ('J', "Juliet"),
    ('K', "Kilo"),
    ('L', "Lima"),
    ('M', "Mike"),
    ('N', "November"),
    ('O', "Oscar"),
    ('P', "Papa"),
    ('Q', "Quebec"),
    ('R', "Romeo"),
    ('S', "Sierra"),
    ('T', "Tango"),
    ('U', "Uniform"),
    ('V', "Victor"),
    ('W', "Whiskey"),
    ('X', "X-ray"),
    ('Y', "Yankee"),
    ('Z', "Zulu"),
    ('0', "Zero"),
    ('1', "One"),
    ('2', "Two"),
    ('3', "Three"),
    ('4', "Four"),
    ('5', "Five"),
    ('6', "Six"),
    ('7', "Seven"),
    ('8', "Eight"),
    ('9', "Nine"),
]);

pub fn text_to_phonetic(text: &str) -> String {
    PHONETIC.encode(text)
}

/// Code words map back to their character, ignoring case. Unknown words
/// are kept as they are.
pub fn phonetic_to_text(phonetic: &str) -> String {
    split_words(phonetic)
        .map(|word| {
            word.split_whitespace()
                .map(|w| match PHONETIC.char_for(w) {
                    Some(c) => c.to_string(),
                    None => w.to_string(),
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}
