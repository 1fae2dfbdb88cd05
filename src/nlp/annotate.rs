//! Linguistic annotation: sentence and token segmentation, part-of-speech
//! tagging, and named-entity extraction.
//!
//! Provides an `AnnotatorBackend` trait for pluggable annotators and a
//! built-in `RuleAnnotator` that combines UAX-29 segmentation with
//! lexicon and suffix heuristics. High precision on everyday English prose,
//! no external models or runtime downloads.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

/// Errors from annotation backends.
#[derive(Debug, Error)]
pub enum AnnotateError {
    #[error("Annotation failed: {0}")]
    Failed(String),
}

/// Coarse part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Number,
    Other,
}

/// A single token with its surface text and annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub tag: PosTag,
    pub is_alpha: bool,
}

impl Token {
    /// Length of the surface text in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// One sentence with its tokens, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub text: String,
    pub tokens: Vec<Token>,
}

/// Classification of extracted entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityLabel {
    Organization,
    Technology,
    Science,
    Person,
    Location,
}

/// A single extracted entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

/// The annotated form of one input text: ordered sentences of tokens plus
/// the named-entity spans found anywhere in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub sentences: Vec<Sentence>,
    pub entities: Vec<Entity>,
}

impl Document {
    /// Iterate all tokens in sentence order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.sentences.iter().flat_map(|s| s.tokens.iter())
    }
}

/// Trait for pluggable annotation backends.
pub trait AnnotatorBackend: Send + Sync {
    /// Human-readable backend identifier (e.g. "rules").
    fn backend_id(&self) -> &str;

    /// Annotate raw text into a `Document`.
    fn annotate(&self, text: &str) -> Result<Document, AnnotateError>;
}

/// Rule-based annotator.
///
/// Sentences and words come from UAX-29 segmentation; part-of-speech tags
/// from closed-class lexicons plus suffix rules; entities from gazetteer
/// and pattern matching.
pub struct RuleAnnotator;

impl RuleAnnotator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RuleAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotatorBackend for RuleAnnotator {
    fn backend_id(&self) -> &str {
        "rules"
    }

    fn annotate(&self, text: &str) -> Result<Document, AnnotateError> {
        let sentences: Vec<Sentence> = text
            .unicode_sentences()
            .filter_map(|raw| {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return None;
                }
                Some(Sentence {
                    text: trimmed.to_string(),
                    tokens: tokenize(trimmed),
                })
            })
            .collect();

        if sentences.is_empty() {
            return Err(AnnotateError::Failed(
                "input contains no sentences".to_string(),
            ));
        }

        Ok(Document {
            sentences,
            entities: extract_entities(text),
        })
    }
}

/// Split one sentence into tokens, skipping whitespace segments.
fn tokenize(sentence: &str) -> Vec<Token> {
    sentence
        .split_word_bounds()
        .filter(|seg| !seg.trim().is_empty())
        .map(|seg| {
            let is_alpha = seg.chars().all(|c| c.is_alphabetic());
            let tag = if is_alpha {
                tag_word(seg)
            } else if seg.chars().all(|c| c.is_ascii_digit()) {
                PosTag::Number
            } else {
                PosTag::Other
            };
            Token {
                text: seg.to_string(),
                tag,
                is_alpha,
            }
        })
        .collect()
}

// ============================================================================
// Part-of-speech tagging
// ============================================================================

static DETERMINERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "the", "this", "that", "these", "those", "each", "every", "either", "neither",
        "some", "any", "no", "both", "all", "several", "most", "few", "many", "much", "such",
    ]
    .into_iter()
    .collect()
});

static PRONOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my",
        "your", "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs", "who",
        "whom", "whose", "which", "what", "someone", "anyone", "everyone", "nobody", "something",
        "anything", "everything", "nothing", "myself", "yourself", "himself", "herself", "itself",
        "ourselves", "themselves",
    ]
    .into_iter()
    .collect()
});

static PREPOSITIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
        "during", "before", "after", "above", "below", "to", "from", "up", "down", "of", "off",
        "over", "under", "again", "near", "across", "behind", "beyond", "within", "without",
        "along", "around", "among", "toward", "towards", "upon", "despite", "per", "via",
    ]
    .into_iter()
    .collect()
});

static CONJUNCTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "and", "or", "but", "nor", "so", "yet", "because", "although", "though", "while",
        "whereas", "unless", "since", "if", "when", "whenever", "where", "wherever", "until",
        "once", "as", "than", "whether",
    ]
    .into_iter()
    .collect()
});

static COMMON_ADVERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "not", "very", "too", "also", "just", "still", "even", "only", "quite", "rather",
        "almost", "always", "never", "often", "sometimes", "soon", "now", "then", "here",
        "there", "well", "however", "instead", "perhaps", "maybe", "again", "already", "yet",
    ]
    .into_iter()
    .collect()
});

static COMMON_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had", "do",
        "does", "did", "done", "will", "would", "shall", "should", "can", "could", "may",
        "might", "must", "say", "says", "said", "go", "goes", "went", "gone", "get", "gets",
        "got", "make", "makes", "made", "know", "knows", "knew", "known", "think", "thinks",
        "thought", "take", "takes", "took", "taken", "see", "sees", "saw", "seen", "come",
        "comes", "came", "want", "wants", "wanted", "use", "uses", "used", "find", "finds",
        "found", "give", "gives", "gave", "given", "tell", "tells", "told", "work", "works",
        "worked", "call", "calls", "called", "try", "tries", "tried", "ask", "asks", "asked",
        "need", "needs", "needed", "feel", "feels", "felt", "become", "becomes", "became",
        "leave", "leaves", "left", "put", "puts", "mean", "means", "meant", "keep", "keeps",
        "kept", "let", "lets", "begin", "begins", "began", "begun", "seem", "seems", "seemed",
        "help", "helps", "helped", "show", "shows", "showed", "shown", "run", "runs", "ran",
        "write", "writes", "wrote", "written", "read", "reads", "provide", "provides",
        "provided", "include", "includes", "included", "continue", "continues", "continued",
        "set", "sets", "follow", "follows", "followed", "stop", "stops", "stopped", "create",
        "creates", "created", "speak", "speaks", "spoke", "spoken", "allow", "allows",
        "allowed", "add", "adds", "added", "grow", "grows", "grew", "grown", "open", "opens",
        "opened", "offer", "offers", "offered", "consider", "considers", "considered",
        "expect", "expects", "expected", "build", "builds", "built", "remain", "remains",
        "remained", "improve", "improves", "improved", "reduce", "reduces", "reduced",
    ]
    .into_iter()
    .collect()
});

static COMMON_ADJECTIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "good", "bad", "new", "old", "great", "high", "low", "small", "large", "big", "long",
        "short", "little", "own", "other", "same", "different", "early", "late", "young",
        "important", "public", "able", "clear", "simple", "complex", "easy", "hard", "free",
        "full", "strong", "weak", "best", "worst", "better", "worse", "main", "major", "minor",
        "recent", "common", "likely", "certain", "real", "whole", "right", "wrong", "true",
        "false", "sophisticated", "concise", "readable", "verbose", "technical",
    ]
    .into_iter()
    .collect()
});

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "less", "ish", "ical", "ary", "ent", "ant",
];

const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify", "ing", "ed"];

/// Tag one alphabetic word. Closed-class lexicons win over suffix rules;
/// anything left defaults to noun.
fn tag_word(word: &str) -> PosTag {
    let lower = word.to_lowercase();
    if DETERMINERS.contains(lower.as_str()) {
        return PosTag::Determiner;
    }
    if PRONOUNS.contains(lower.as_str()) {
        return PosTag::Pronoun;
    }
    if PREPOSITIONS.contains(lower.as_str()) {
        return PosTag::Preposition;
    }
    if CONJUNCTIONS.contains(lower.as_str()) {
        return PosTag::Conjunction;
    }
    if COMMON_ADVERBS.contains(lower.as_str()) {
        return PosTag::Adverb;
    }
    if COMMON_VERBS.contains(lower.as_str()) {
        return PosTag::Verb;
    }
    if COMMON_ADJECTIVES.contains(lower.as_str()) {
        return PosTag::Adjective;
    }
    if lower.len() > 3 && lower.ends_with("ly") {
        return PosTag::Adverb;
    }
    if lower.len() > 4 {
        if ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return PosTag::Adjective;
        }
        if VERB_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return PosTag::Verb;
        }
    }
    PosTag::Noun
}

// ============================================================================
// Named-entity extraction
// ============================================================================

/// Organization names written out in full, matched verbatim.
static FULL_NAME_ORGS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    vec![
        "World Health Organization",
        "United Nations",
        "European Union",
        "Food and Drug Administration",
        "Environmental Protection Agency",
        "Department of Energy",
        "Department of Education",
        "Department of Commerce",
        "Federal Reserve",
        "World Bank",
        "International Monetary Fund",
        "Massachusetts Institute of Technology",
        "Stanford University",
        "Oxford University",
        "International Organization for Standardization",
        "Internet Engineering Task Force",
        "World Wide Web Consortium",
        "Red Cross",
        "Doctors Without Borders",
    ]
});

/// Well-known organization acronyms.
static ORG_ACRONYMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "NASA", "NATO", "IBM", "IEEE", "ISO", "WHO", "UNESCO", "UNICEF", "FDA", "EPA", "CDC",
        "NIH", "NIST", "CERN", "ESA", "OPEC", "IMF", "OECD", "BBC", "NPR", "MIT", "UCLA", "W3C",
        "ICANN", "IETF", "ACM", "ANSI", "WTO", "WWF",
    ]
    .into_iter()
    .collect()
});

/// Capitalized name runs ending in a corporate or institutional suffix.
static ORG_SUFFIX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b((?:[A-Z][A-Za-z&.'-]*\s+)+(?:Inc\.?|Corp\.?|Corporation|Company|Co\.|LLC|Ltd\.?|Agency|Administration|Bureau|Institute|Institution|University|College|Laboratory|Laboratories|Labs|Foundation|Association|Organization|Commission|Committee|Council|Department|Ministry|Authority|Group|Partners|Society|Union))\b",
    )
    .expect("org suffix pattern should compile")
});

/// Technology acronyms and initialisms.
static TECH_ACRONYMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "API", "HTTP", "HTTPS", "JSON", "XML", "HTML", "CSS", "SQL", "TCP", "UDP", "DNS",
        "URL", "URI", "GPU", "CPU", "RAM", "SSD", "SDK", "IDE", "REST", "GRPC", "VPN", "SSL",
        "TLS", "SSH", "FTP", "CDN", "CLI", "GUI", "ORM", "CI", "CD", "JWT", "CSV", "YAML",
    ]
    .into_iter()
    .collect()
});

/// Technology terms matched against lowercased word tokens.
static TECH_TERMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "blockchain",
        "kubernetes",
        "microservices",
        "microservice",
        "devops",
        "webassembly",
        "cryptocurrency",
        "serverless",
        "middleware",
        "firmware",
        "bytecode",
        "hypervisor",
        "containerization",
        "virtualization",
        "compiler",
        "interpreter",
        "transpiler",
    ]
    .into_iter()
    .collect()
});

/// Science acronyms and initialisms.
static SCI_ACRONYMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["DNA", "RNA", "CRISPR", "ATP", "PCR", "MRI", "LHC"].into_iter().collect()
});

/// Science terms matched against lowercased word tokens.
static SCI_TERMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "photosynthesis",
        "thermodynamics",
        "spectroscopy",
        "chromatography",
        "electrophoresis",
        "nanoparticle",
        "neutrino",
        "isotope",
        "enzyme",
        "genome",
        "chromosome",
        "mitochondria",
        "quasar",
        "boson",
        "superconductor",
    ]
    .into_iter()
    .collect()
});

/// Honorific followed by a capitalized name.
static TITLED_PERSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:(?:Mr|Mrs|Ms|Dr|Prof)\.\s+)([A-Z][a-z]+(?:\s+[A-Z]\.?)?(?:\s+[A-Z][a-z]+)?)",
    )
    .expect("titled person pattern should compile")
});

/// Well-known place names, matched verbatim.
static NOTABLE_LOCATIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    vec![
        "United States",
        "United Kingdom",
        "New York",
        "San Francisco",
        "London",
        "Paris",
        "Berlin",
        "Tokyo",
        "Beijing",
        "Sydney",
        "Toronto",
        "California",
        "Texas",
        "Europe",
        "Asia",
        "Africa",
        "Antarctica",
    ]
});

/// Standalone all-caps word, candidate acronym.
static ACRONYM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][A-Z0-9]{1,6}\b").expect("acronym pattern should compile"));

/// Extract named entities from raw text. Duplicate surface forms are
/// collapsed; entities appear in extraction order.
fn extract_entities(text: &str) -> Vec<Entity> {
    let mut seen = HashSet::new();
    let mut entities = Vec::new();

    extract_organizations(text, &mut entities, &mut seen);
    extract_terms(text, &mut entities, &mut seen);
    extract_persons(text, &mut entities, &mut seen);
    extract_locations(text, &mut entities, &mut seen);

    entities
}

fn push_entity(
    entities: &mut Vec<Entity>,
    seen: &mut HashSet<String>,
    text: &str,
    label: EntityLabel,
) {
    let key = format!("{:?}:{}", label, text);
    if seen.insert(key) {
        entities.push(Entity {
            text: text.to_string(),
            label,
        });
    }
}

fn extract_organizations(text: &str, entities: &mut Vec<Entity>, seen: &mut HashSet<String>) {
    for name in FULL_NAME_ORGS.iter() {
        if text.contains(name) {
            push_entity(entities, seen, name, EntityLabel::Organization);
        }
    }

    for cap in ORG_SUFFIX_PATTERN.captures_iter(text) {
        if let Some(m) = cap.get(1) {
            push_entity(entities, seen, m.as_str().trim(), EntityLabel::Organization);
        }
    }

    for m in ACRONYM_PATTERN.find_iter(text) {
        if ORG_ACRONYMS.contains(m.as_str()) {
            push_entity(entities, seen, m.as_str(), EntityLabel::Organization);
        }
    }
}

fn extract_terms(text: &str, entities: &mut Vec<Entity>, seen: &mut HashSet<String>) {
    for m in ACRONYM_PATTERN.find_iter(text) {
        if TECH_ACRONYMS.contains(m.as_str()) {
            push_entity(entities, seen, m.as_str(), EntityLabel::Technology);
        } else if SCI_ACRONYMS.contains(m.as_str()) {
            push_entity(entities, seen, m.as_str(), EntityLabel::Science);
        }
    }

    for word in text.unicode_words() {
        let lower = word.to_lowercase();
        if TECH_TERMS.contains(lower.as_str()) {
            push_entity(entities, seen, word, EntityLabel::Technology);
        } else if SCI_TERMS.contains(lower.as_str()) {
            push_entity(entities, seen, word, EntityLabel::Science);
        }
    }
}

fn extract_persons(text: &str, entities: &mut Vec<Entity>, seen: &mut HashSet<String>) {
    for cap in TITLED_PERSON.captures_iter(text) {
        if let Some(m) = cap.get(1) {
            push_entity(entities, seen, m.as_str().trim(), EntityLabel::Person);
        }
    }
}

fn extract_locations(text: &str, entities: &mut Vec<Entity>, seen: &mut HashSet<String>) {
    for location in NOTABLE_LOCATIONS.iter() {
        if text.contains(location) {
            push_entity(entities, seen, location, EntityLabel::Location);
        }
    }
}
