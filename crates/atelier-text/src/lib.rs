//! Atelier text tools: symbol alphabets (Morse, NATO phonetic), reversible
//! text encodings, and volume unit conversion.

pub mod codec;
pub mod morse;
pub mod phonetic;
pub mod table;
pub mod volume;

pub use codec::Encoding;
pub use morse::{morse_to_text, text_to_morse, MORSE};
pub use phonetic::{phonetic_to_text, text_to_phonetic, PHONETIC};
pub use table::{split_words, CodeTable, WORD_GAP};
pub use volume::{convert_volume, VolumeUnit};
