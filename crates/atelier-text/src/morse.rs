//! International Morse code for letters and digits.

use atelier_core::{AtelierError, Result};

use crate::table::{split_words, CodeTable};

pub const MORSE: CodeTable = CodeTable::new(&[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
]);

/// Letters separated by one space, words by three.
pub fn text_to_morse(text: &str) -> String {
    MORSE.encode(text)
}

/// Decode Morse; fails on any symbol that is not a letter or digit code.
pub fn morse_to_text(morse: &str) -> Result<String> {
    let mut words = Vec::new();
    for word in split_words(morse) {
        let mut text = String::new();
        for symbol in word.split_whitespace() {
            let c = MORSE
                .char_for(symbol)
                .ok_or_else(|| AtelierError::Parse(format!("unknown Morse symbol {symbol:?}")))?;
            text.push(c);
        }
        words.push(text);
    }
    Ok(words.join(" "))
}
