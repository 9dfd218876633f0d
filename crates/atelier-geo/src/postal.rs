//! Canadian postal code format: letter-digit-letter, optional space,
//! digit-letter-digit. Matching is case-insensitive.

use rand::Rng;

/// Letters that appear in issued postal codes (no D, F, I, O, Q, U, W, Z).
pub const VALID_LETTERS: [char; 18] = [
    'A', 'B', 'C', 'E', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'R', 'S', 'T', 'V', 'X', 'Y',
];

/// Whether `code` has the `A1A 1A1` or `A1A1A1` shape.
pub fn is_valid_postal_code(code: &str) -> bool {
    let chars: Vec<char> = code.chars().collect();
    let compact: Vec<char> = match chars.len() {
        6 => chars,
        7 if chars[3].is_whitespace() => {
            chars[..3].iter().chain(&chars[4..]).copied().collect()
        }
        _ => return false,
    };
    compact.iter().enumerate().all(|(i, c)| {
        if i % 2 == 0 {
            c.is_ascii_alphabetic()
        } else {
            c.is_ascii_digit()
        }
    })
}

/// Lookup key: whitespace removed, uppercased.
pub fn postal_key(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Canonical `A1A 1A1` form, or `None` if `code` is not a postal code.
pub fn normalize_postal_code(code: &str) -> Option<String> {
    let code = code.trim();
    if !is_valid_postal_code(code) {
        return None;
    }
    let key = postal_key(code);
    Some(format!("{} {}", &key[..3], &key[3..]))
}

fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    VALID_LETTERS[rng.gen_range(0..VALID_LETTERS.len())]
}

fn random_digit<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(b'0' + rng.gen_range(0..10u8))
}

/// A random code in canonical `A1A 1A1` form, drawn from [`VALID_LETTERS`].
pub fn generate_postal_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut code = String::with_capacity(7);
    for i in 0..6 {
        if i == 3 {
            code.push(' ');
        }
        code.push(if i % 2 == 0 {
            random_letter(rng)
        } else {
            random_digit(rng)
        });
    }
    code
}

/// `count` random codes; duplicates are possible.
pub fn generate_postal_codes<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<String> {
    (0..count).map(|_| generate_postal_code(&mut *rng)).collect()
}
