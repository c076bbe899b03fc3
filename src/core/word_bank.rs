use std::collections::HashSet;
use std::sync::Arc;

use crate::utils::{GameError, GameResult};

const DEFAULT_WORDS: &[&str] = &[
    "animal", "auto", "anecdote", "alphabet", "all", "awesome", "arise", "balloon", "basket",
    "bench", "best", "birthday", "book", "briefcase", "camera", "camping", "candle", "cat",
    "cauliflower", "chat", "children", "class", "classic", "classroom", "coffee", "colorful",
    "cookie", "creative", "cruise", "dance", "daytime", "dinosaur", "doorknob", "dine", "dream",
    "dusk", "eating", "elephant", "emerald", "eerie", "electric", "finish", "flowers", "follow",
    "fox", "frame", "free", "frequent", "funnel", "green", "guitar", "grocery", "glass", "great",
    "giggle", "haircut", "half", "homemade", "happen", "honey", "hurry", "hundred", "ice",
    "igloo", "invest", "invite", "icon", "introduce", "joke", "jovial", "journal", "jump", "join",
    "kangaroo", "keyboard", "kitchen", "koala", "kind", "kaleidoscope", "landscape", "late",
    "laugh", "learning", "lemon", "letter", "lily", "magazine", "marine", "marshmallow", "maze",
    "meditate", "melody", "minute", "monument", "moon", "motorcycle", "mountain", "music",
    "north", "nose", "night", "name", "never", "negotiate", "number", "opposite", "octopus",
    "oak", "order", "open", "polar", "pack", "painting", "person", "picnic", "pillow", "pizza",
    "podcast", "presentation", "puppy", "puzzle", "recipe", "release", "restaurant", "revolve",
    "rewind", "room", "run", "secret", "seed", "ship", "shirt", "should", "small", "spaceship",
    "stargazing", "skill", "street", "style", "sunrise", "taxi", "tidy", "timer", "together",
    "tooth", "tourist", "travel", "truck", "under", "useful", "unicorn", "unique", "uplift",
    "uniform", "vase", "violin", "visitor", "vision", "volume", "view", "walrus", "wander",
    "world", "winter", "well", "whirlwind", "x-ray", "xylophone", "yoga", "yogurt", "yoyo",
    "you", "year", "yummy", "zebra", "zigzag", "zoology", "zone", "zeal",
];

/// Immutable, cheaply clonable list of candidate words.
///
/// Words are trimmed on construction; empty entries and duplicates are
/// rejected so that the bank's length is also its count of distinct words.
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Arc<[String]>,
}

impl WordBank {
    pub fn new<I, S>(words: I) -> GameResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut collected = Vec::new();

        for word in words {
            let word = word.into().trim().to_string();
            if word.is_empty() {
                return Err(GameError::word_bank("Word bank contains an empty word"));
            }
            if !seen.insert(word.clone()) {
                return Err(GameError::word_bank(format!("Duplicate word: {}", word)));
            }
            collected.push(word);
        }

        if collected.is_empty() {
            return Err(GameError::word_bank("Word bank is empty"));
        }

        Ok(Self {
            words: collected.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}
