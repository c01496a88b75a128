//! Word tables for generated names and text.
//!
//! Sentence templates are grammar strings: each letter stands for a
//! word class (N noun, V verb, J adjective, D adverb, X auxiliary,
//! P preposition, A article, T terminator) and everything else is
//! copied through literally.

use super::Distribution;

pub const SYLLABLES: &[&str] = &[
    "able", "ought", "pri", "ese", "anti", "cally", "ation", "eing",
    "n st", "eable", "less", "ely", "ought to", "bar", "cor", "amal",
    "dem", "expor", "import", "oughtn", "ati", "barpri", "callyn",
    "ationese", "eser", "antiba", "priun", "corable",
];

const NOUNS: &[&str] = &[
    "time", "year", "people", "way", "day", "man", "thing", "woman",
    "child", "world", "school", "state", "family", "student", "group",
    "country", "problem", "hand", "part", "place", "case", "week",
    "company", "system", "program", "question", "work", "government",
    "number", "night", "point", "home", "water", "room", "mother",
    "area", "money", "story", "fact", "month",
];

const VERBS: &[&str] = &[
    "be", "have", "do", "say", "get", "make", "go", "know", "take",
    "see", "come", "think", "look", "want", "give", "use", "find",
    "tell", "ask", "work", "seem", "feel", "try", "leave", "call",
    "buy", "sell", "reach", "remain", "consider",
];

const ADJECTIVES: &[&str] = &[
    "good", "new", "first", "last", "long", "great", "little", "own",
    "other", "old", "right", "big", "high", "different", "small",
    "large", "next", "early", "young", "important", "few", "public",
    "bad", "same", "able", "national", "whole", "special", "clear",
    "major",
];

const ADVERBS: &[&str] = &[
    "up", "so", "out", "just", "now", "how", "then", "more", "also",
    "here", "well", "only", "very", "even", "back", "there", "down",
    "still", "around", "too", "never", "really", "most", "again",
    "finally", "simply", "quite",
];

const AUXILIARIES: &[&str] = &[
    "will", "would", "can", "could", "shall", "should", "may",
    "might", "must", "cannot", "ought to", "used to", "need to",
];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "to", "for", "with", "on", "at", "from", "by",
    "about", "as", "into", "like", "through", "after", "over",
    "between", "against", "during", "without",
];

const ARTICLES: &[&str] = &["the", "a", "an", "some", "this", "that"];

const TERMINATORS: &[&str] = &[".", ".", ".", ";", "!", "?"];

const SENTENCES: &[&str] = &[
    "A N V.",
    "A J N V D.",
    "N X V A N.",
    "D, A N V P A J N.",
    "A N P A N X V.",
    "J N V A J N.",
    "N V P A N T",
    "A J N X D V.",
    "N P A N V D T",
    "D A N V.",
];

pub fn syllables() -> Distribution {
    Distribution::uniform(SYLLABLES.to_vec())
}

pub fn nouns() -> Distribution {
    Distribution::uniform(NOUNS.to_vec())
}

pub fn verbs() -> Distribution {
    Distribution::uniform(VERBS.to_vec())
}

pub fn adjectives() -> Distribution {
    Distribution::uniform(ADJECTIVES.to_vec())
}

pub fn adverbs() -> Distribution {
    Distribution::uniform(ADVERBS.to_vec())
}

pub fn auxiliaries() -> Distribution {
    Distribution::uniform(AUXILIARIES.to_vec())
}

pub fn prepositions() -> Distribution {
    Distribution::uniform(PREPOSITIONS.to_vec())
}

pub fn articles() -> Distribution {
    Distribution::uniform(ARTICLES.to_vec())
}

pub fn terminators() -> Distribution {
    Distribution::uniform(TERMINATORS.to_vec())
}

pub fn sentences() -> Distribution {
    Distribution::uniform(SENTENCES.to_vec())
}
