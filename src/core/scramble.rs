use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Upper bound on random redraws before falling back to a rotation.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 64;

/// Returns a random permutation of `word`'s characters that differs from `word`.
///
/// Words with no differing permutation (length <= 1, or a single repeated
/// character) are returned unchanged. Otherwise the characters are reshuffled
/// until the result differs; should the generator keep reproducing the input,
/// the word is rotated left by one character, which is guaranteed to differ.
pub fn shuffle<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    shuffle_with_attempts(word, rng, MAX_SHUFFLE_ATTEMPTS)
}

fn shuffle_with_attempts<R: Rng + ?Sized>(word: &str, rng: &mut R, max_attempts: usize) -> String {
    let mut chars: Vec<char> = word.chars().collect();

    if !has_distinct_permutation(&chars) {
        return word.to_string();
    }

    for _ in 0..max_attempts {
        chars.shuffle(rng);
        let candidate: String = chars.iter().collect();
        if candidate != word {
            return candidate;
        }
    }

    debug!(
        "Shuffle reproduced the input {} times, rotating instead",
        max_attempts
    );
    // Draws may have left `chars` in any order; rotate the original.
    let mut chars: Vec<char> = word.chars().collect();
    chars.rotate_left(1);
    chars.into_iter().collect()
}

/// True when the characters of `word` can be rearranged into a different string.
pub fn can_scramble(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    has_distinct_permutation(&chars)
}

/// True when `a` and `b` contain exactly the same characters with the same multiplicities.
pub fn is_permutation(a: &str, b: &str) -> bool {
    let mut left: Vec<char> = a.chars().collect();
    let mut right: Vec<char> = b.chars().collect();
    if left.len() != right.len() {
        return false;
    }
    left.sort_unstable();
    right.sort_unstable();
    left == right
}

fn has_distinct_permutation(chars: &[char]) -> bool {
    match chars.first() {
        Some(first) => chars.iter().any(|c| c != first),
        None => false,
    }
}
