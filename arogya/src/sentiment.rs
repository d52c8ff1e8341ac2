//! Lexicon-based sentiment scoring and emotion classification.
//!
//! A compact VADER-style polarity scorer: tokens are looked up in a small
//! valence lexicon, the raw sum is squashed into a compound score in
//! `[-1, 1]`, and positive/negative/neutral proportions are derived from the
//! per-token valences. On top of the scores, an ordered keyword decision
//! list picks one of seven emotion labels, each carrying a canned supportive
//! message.
//!
//! Keyword matching is case-insensitive substring containment with no
//! tokenization, stemming, or negation handling ("I am not anxious" still
//! matches "anxious"). That is intentional and preserved; callers should not
//! expect linguistic precision from it.

/// Sentiment polarity breakdown for one text span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScores {
    /// Overall polarity in `[-1, 1]`.
    pub compound: f64,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

impl SentimentScores {
    /// All-zero scores, used for degraded replies where no sentiment was
    /// attached to the exchange.
    pub fn zero() -> Self {
        Self {
            compound: 0.0,
            positive: 0.0,
            negative: 0.0,
            neutral: 0.0,
        }
    }
}

/// Emotion label inferred for a user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emotion {
    Neutral,
    Frustrated,
    InPain,
    Anxious,
    Sad,
    Positive,
    Calm,
}

impl Emotion {
    /// Wire label; "in pain" keeps its space.
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Neutral => "neutral",
            Emotion::Frustrated => "frustrated",
            Emotion::InPain => "in pain",
            Emotion::Anxious => "anxious",
            Emotion::Sad => "sad",
            Emotion::Positive => "positive",
            Emotion::Calm => "calm",
        }
    }

    /// Canned supportive message attached to each label.
    pub fn motivation(&self) -> &'static str {
        match self {
            Emotion::Frustrated => {
                "I can see you're feeling frustrated. Your feelings are valid. Let's focus on finding solutions that can help you feel better. 🤝"
            }
            Emotion::InPain => {
                "I'm sorry you're experiencing pain. Your wellbeing matters, and I'm here to help you understand your symptoms better. 💙"
            }
            Emotion::Anxious => {
                "I understand you're feeling worried. Take a deep breath - you're not alone in this. Let's work through this together, one step at a time. 🌟"
            }
            Emotion::Sad => {
                "I can sense you're going through a difficult time. Remember, it's okay to feel this way, and seeking help is a sign of strength. You're taking a positive step by reaching out. 💙"
            }
            Emotion::Positive => {
                "It's wonderful to see your positive spirit! Let's make sure you stay healthy and well. 😊"
            }
            Emotion::Calm => {
                "I'm glad to help you with your health concerns. Your proactive approach to health is commendable. ✨"
            }
            Emotion::Neutral => {
                "I'm here to assist you with your medical questions. Feel free to share your concerns. 🩺"
            }
        }
    }
}

/// Result of [`analyze`]: polarity scores plus the inferred emotion.
#[derive(Debug, Clone, Copy)]
pub struct SentimentAnalysis {
    pub scores: SentimentScores,
    pub emotion: Emotion,
}

// Valence lexicon, sorted for binary search. Values follow VADER's scale
// (roughly -4..4); the list is trimmed to vocabulary that actually shows up
// in health conversations.
const LEXICON: &[(&str, f64)] = &[
    ("ache", -1.8),
    ("afraid", -2.2),
    ("agony", -2.9),
    ("amazing", 2.8),
    ("angry", -2.3),
    ("annoyed", -1.8),
    ("anxious", -1.9),
    ("awesome", 3.1),
    ("awful", -2.9),
    ("bad", -2.5),
    ("better", 1.9),
    ("bleeding", -2.4),
    ("calm", 1.3),
    ("comfortable", 1.5),
    ("crying", -2.1),
    ("depressed", -2.2),
    ("die", -2.9),
    ("dying", -3.4),
    ("excellent", 2.7),
    ("fear", -2.2),
    ("fine", 0.8),
    ("frustrated", -2.1),
    ("furious", -2.7),
    ("glad", 2.0),
    ("good", 1.9),
    ("grateful", 2.3),
    ("great", 3.1),
    ("grief", -2.5),
    ("happy", 2.7),
    ("hate", -2.7),
    ("healthy", 1.7),
    ("hope", 1.9),
    ("hopeless", -2.6),
    ("horrible", -2.9),
    ("hurt", -2.4),
    ("hurts", -2.4),
    ("improved", 1.8),
    ("improving", 1.6),
    ("injured", -1.9),
    ("lonely", -2.0),
    ("love", 3.2),
    ("mad", -2.2),
    ("miserable", -2.7),
    ("nervous", -1.7),
    ("nice", 1.8),
    ("pain", -2.5),
    ("painful", -2.6),
    ("panic", -2.4),
    ("perfect", 2.7),
    ("positive", 2.3),
    ("recovered", 1.8),
    ("recovering", 1.4),
    ("relief", 1.6),
    ("relieved", 1.9),
    ("sad", -2.1),
    ("safe", 1.8),
    ("scared", -2.2),
    ("severe", -2.0),
    ("sick", -2.3),
    ("stress", -1.9),
    ("stressed", -2.0),
    ("strong", 1.5),
    ("suffering", -2.6),
    ("terrible", -2.9),
    ("terrified", -2.7),
    ("thank", 1.9),
    ("thanks", 1.9),
    ("tired", -1.4),
    ("unbearable", -3.0),
    ("upset", -1.9),
    ("weak", -1.7),
    ("well", 1.1),
    ("wonderful", 2.7),
    ("worried", -1.9),
    ("worse", -2.1),
    ("worst", -3.1),
];

// Intensity boosters scale the valence of the following token.
const BOOSTERS: &[&str] = &["very", "so", "really", "extremely", "incredibly"];
const BOOST_FACTOR: f64 = 1.293;

// VADER's normalization constant.
const NORMALIZATION_ALPHA: f64 = 15.0;

const ANGER_KEYWORDS: &[&str] = &[
    "angry",
    "furious",
    "mad",
    "frustrated",
    "annoyed",
    "irritated",
    "rage",
    "outraged",
    "pissed",
    "upset",
];

const PAIN_KEYWORDS: &[&str] = &["pain", "hurt", "ache", "suffering", "agony"];

const ANXIETY_KEYWORDS: &[&str] = &[
    "anxious",
    "worried",
    "scared",
    "panic",
    "nervous",
    "fear",
    "stress",
    "terrified",
];

const SADNESS_KEYWORDS: &[&str] = &[
    "sad",
    "depressed",
    "hopeless",
    "lonely",
    "crying",
    "down",
    "miserable",
    "grief",
];

/// True when `haystack` (already lowercased) contains any trigger phrase.
pub(crate) fn contains_any(haystack: &str, triggers: &[&str]) -> bool {
    triggers.iter().any(|trigger| haystack.contains(trigger))
}

fn valence(token: &str) -> Option<f64> {
    LEXICON
        .binary_search_by(|(word, _)| word.cmp(&token))
        .ok()
        .map(|idx| LEXICON[idx].1)
}

fn score(text: &str) -> SentimentScores {
    let lowered = text.to_lowercase();
    let tokens: Vec<String> = lowered
        .split_whitespace()
        .map(|raw| {
            raw.trim_matches(|c: char| !c.is_alphanumeric())
                .to_string()
        })
        .filter(|token| !token.is_empty())
        .collect();

    let mut sum = 0.0;
    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;

    for (idx, token) in tokens.iter().enumerate() {
        let Some(mut v) = valence(token) else {
            if !BOOSTERS.contains(&token.as_str()) {
                neu_count += 1.0;
            }
            continue;
        };

        if idx > 0 && BOOSTERS.contains(&tokens[idx - 1].as_str()) {
            v *= BOOST_FACTOR;
        }

        sum += v;
        if v > 0.0 {
            pos_sum += v + 1.0;
        } else {
            neg_sum += v.abs() + 1.0;
        }
    }

    let compound = (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0);

    let total = pos_sum + neg_sum + neu_count;
    let (positive, negative, neutral) = if total > 0.0 {
        (pos_sum / total, neg_sum / total, neu_count / total)
    } else {
        (0.0, 0.0, 0.0)
    };

    SentimentScores {
        compound,
        positive,
        negative,
        neutral,
    }
}

fn classify_emotion(text_lower: &str, compound: f64) -> Emotion {
    // Ordered decision list; first match wins.
    if contains_any(text_lower, ANGER_KEYWORDS) {
        Emotion::Frustrated
    } else if contains_any(text_lower, PAIN_KEYWORDS) {
        Emotion::InPain
    } else if contains_any(text_lower, ANXIETY_KEYWORDS) {
        Emotion::Anxious
    } else if contains_any(text_lower, SADNESS_KEYWORDS) || compound < -0.5 {
        Emotion::Sad
    } else if compound > 0.5 {
        Emotion::Positive
    } else if compound > 0.1 {
        Emotion::Calm
    } else {
        Emotion::Neutral
    }
}

/// Score `text` and infer its emotion label.
pub fn analyze(text: &str) -> SentimentAnalysis {
    let scores = score(text);
    let emotion = classify_emotion(&text.to_lowercase(), scores.compound);

    SentimentAnalysis { scores, emotion }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_is_sorted_for_binary_search() {
        for pair in LEXICON.windows(2) {
            assert!(
                pair[0].0 < pair[1].0,
                "lexicon out of order: {} >= {}",
                pair[0].0,
                pair[1].0
            );
        }
    }

    #[test]
    fn anger_keywords_win_over_everything() {
        let analysis = analyze("I'm so angry and frustrated");
        assert_eq!(analysis.emotion, Emotion::Frustrated);
    }

    #[test]
    fn pain_beats_anxiety_and_sadness() {
        let analysis = analyze("I have severe pain in my chest");
        assert_eq!(analysis.emotion, Emotion::InPain);

        // "worried" and "pain" both present; pain is checked first.
        let analysis = analyze("I'm worried about this pain");
        assert_eq!(analysis.emotion, Emotion::InPain);
    }

    #[test]
    fn anxiety_keywords_classify_as_anxious() {
        let analysis = analyze("I'm nervous and scared about the surgery");
        assert_eq!(analysis.emotion, Emotion::Anxious);
    }

    #[test]
    fn sadness_keywords_classify_as_sad() {
        let analysis = analyze("I feel so sad and depressed");
        assert_eq!(analysis.emotion, Emotion::Sad);
    }

    #[test]
    fn strongly_negative_text_without_keywords_is_sad() {
        let analysis = analyze("everything is terrible and horrible and awful");
        assert!(analysis.scores.compound < -0.5);
        assert_eq!(analysis.emotion, Emotion::Sad);
    }

    #[test]
    fn positive_text_classifies_as_positive() {
        let analysis = analyze("I'm feeling great and happy");
        assert!(analysis.scores.compound > 0.5);
        assert_eq!(analysis.emotion, Emotion::Positive);
    }

    #[test]
    fn mildly_positive_text_is_calm() {
        let analysis = analyze("I am fine today");
        assert!(analysis.scores.compound > 0.1 && analysis.scores.compound <= 0.5);
        assert_eq!(analysis.emotion, Emotion::Calm);
    }

    #[test]
    fn plain_question_is_neutral() {
        let analysis = analyze("What is the recommended dosage of paracetamol?");
        assert_eq!(analysis.emotion, Emotion::Neutral);
    }

    #[test]
    fn empty_text_scores_zero() {
        let scores = score("");
        assert_eq!(scores.compound, 0.0);
        assert_eq!(scores.positive, 0.0);
        assert_eq!(scores.negative, 0.0);
        assert_eq!(scores.neutral, 0.0);
    }

    #[test]
    fn boosters_amplify_the_next_token() {
        let plain = score("I am happy");
        let boosted = score("I am very happy");
        assert!(boosted.compound > plain.compound);
    }

    #[test]
    fn no_negation_handling_by_design() {
        // Substring containment: the negation does not flip the label.
        let analysis = analyze("I am not anxious at all");
        assert_eq!(analysis.emotion, Emotion::Anxious);
    }

    #[test]
    fn compound_stays_in_range() {
        let scores = score(
            "terrible terrible terrible terrible terrible terrible terrible terrible terrible",
        );
        assert!(scores.compound >= -1.0);
    }

    #[test]
    fn every_emotion_has_a_motivation() {
        for emotion in [
            Emotion::Neutral,
            Emotion::Frustrated,
            Emotion::InPain,
            Emotion::Anxious,
            Emotion::Sad,
            Emotion::Positive,
            Emotion::Calm,
        ] {
            assert!(!emotion.motivation().is_empty());
            assert!(!emotion.label().is_empty());
        }
    }
}
