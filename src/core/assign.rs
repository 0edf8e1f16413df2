//! Replacement-token assignment.
//!
//! Entries are ranked by weight (`length(name) * count`, descending; ties go to
//! the lower count first) and paired with tokens from [`TokenSpace`] in order,
//! so the identifiers occupying the most bytes get the shortest tokens.

use crate::core::{
    data::{Category, IdentifierEntry},
    error::AssignError,
    registry::Entries,
};

/// Substitute alphabet, in enumeration order.
pub const ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Default maximum token length.
pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 5;

/// Number of distinct tokens of length `1..=max_token_length`.
///
/// Saturates at `u64::MAX`.
pub fn token_capacity(max_token_length: usize) -> u64 {
    let base = ALPHABET.len() as u64;
    let mut total: u64 = 0;
    let mut per_length: u64 = 1;
    for _ in 0..max_token_length {
        per_length = per_length.saturating_mul(base);
        total = total.saturating_add(per_length);
    }
    total
}

/// Enumerates substitute tokens: every 1-letter token, then every 2-letter
/// token in lexicographic order over [`ALPHABET`], and so on up to the maximum
/// length.
#[derive(Debug, Clone)]
pub struct TokenSpace {
    max_token_length: usize,
    /// Alphabet index per position; rightmost varies fastest.
    digits: Vec<usize>,
    exhausted: bool,
}

impl TokenSpace {
    pub fn new(max_token_length: usize) -> Self {
        Self {
            max_token_length,
            digits: vec![0],
            exhausted: max_token_length == 0,
        }
    }

    fn advance(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < ALPHABET.len() {
                return;
            }
            *digit = 0;
        }
        // Every position wrapped: move to the next length.
        if self.digits.len() == self.max_token_length {
            self.exhausted = true;
        } else {
            self.digits = vec![0; self.digits.len() + 1];
        }
    }
}

impl Iterator for TokenSpace {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }
        let token = self
            .digits
            .iter()
            .map(|&d| char::from(ALPHABET[d]))
            .collect();
        self.advance();
        Some(token)
    }
}

/// Ranking order: heaviest first, then fewer matches first. Stable, so equal
/// keys keep first-seen order.
fn ranking(entries: &[IdentifierEntry]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| {
        let (a, b) = (&entries[a], &entries[b]);
        b.weight().cmp(&a.weight()).then(a.count.cmp(&b.count))
    });
    order
}

/// `literal` with every instance of `name` replaced by `substitute`.
pub fn rewrite_occurrence(literal: &str, name: &str, substitute: &str) -> String {
    literal.replace(name, substitute)
}

/// Assign a unique substitute and rewritten occurrences to every entry.
///
/// Fails without touching any entry when the category has more entries than
/// there are tokens up to `max_token_length`.
pub fn assign_replacements(
    category: Category,
    entries: &mut Entries,
    max_token_length: usize,
) -> Result<(), AssignError> {
    let available = token_capacity(max_token_length);
    let required = entries.len();
    let exhausted = || AssignError::TokenSpaceExhausted {
        category,
        required,
        available,
        max_token_length,
    };
    if required as u64 > available {
        return Err(exhausted());
    }

    let slice = entries.as_mut_slice();
    let order = ranking(slice);
    let mut tokens = TokenSpace::new(max_token_length);

    let mut assigned = Vec::with_capacity(order.len());
    for _ in &order {
        assigned.push(tokens.next().ok_or_else(exhausted)?);
    }

    for (index, substitute) in order.into_iter().zip(assigned) {
        let entry = &mut slice[index];
        entry.rewritten_occurrences = entry
            .occurrences
            .iter()
            .map(|literal| rewrite_occurrence(literal, &entry.name, &substitute))
            .collect();
        entry.substitute = substitute;
    }

    Ok(())
}
