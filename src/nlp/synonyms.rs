//! Synonym dictionary built from embedded sense groups.
//!
//! Each sense group collects words sharing one meaning; a word can appear
//! in several groups, one per sense. Multi-word entries are stored
//! underscore-joined and rendered with spaces by callers.

use std::collections::HashMap;

/// Dictionary mapping words to the sense groups containing them.
pub struct SynonymDictionary {
    synsets: Vec<&'static [&'static str]>,
    index: HashMap<&'static str, Vec<usize>>,
}

impl SynonymDictionary {
    /// Build the dictionary from the embedded sense groups.
    pub fn builtin() -> Self {
        let mut index: HashMap<&'static str, Vec<usize>> = HashMap::new();
        for (i, group) in SENSE_GROUPS.iter().enumerate() {
            for &word in group.iter() {
                index.entry(word).or_default().push(i);
            }
        }
        Self {
            synsets: SENSE_GROUPS.to_vec(),
            index,
        }
    }

    /// Number of sense groups.
    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    /// All sense groups containing the given word. Lookup is
    /// case-insensitive; the stored members keep their dictionary form.
    pub fn synsets(&self, word: &str) -> Vec<&'static [&'static str]> {
        let lower = word.to_lowercase();
        self.index
            .get(lower.as_str())
            .map(|ids| ids.iter().map(|&i| self.synsets[i]).collect())
            .unwrap_or_default()
    }
}

static SENSE_GROUPS: &[&[&str]] = &[
    &["big", "large", "great", "sizable"],
    &["small", "little", "minor", "compact"],
    &["fast", "quick", "rapid", "speedy", "swift"],
    &["slow", "sluggish", "gradual", "unhurried"],
    &["good", "fine", "sound", "solid"],
    &["bad", "poor", "inferior", "substandard"],
    &["new", "novel", "fresh", "recent"],
    &["old", "aged", "ancient", "antique"],
    &["easy", "simple", "effortless", "straightforward"],
    &["hard", "difficult", "demanding", "tough"],
    &["important", "significant", "crucial", "essential", "vital"],
    &["clear", "plain", "lucid", "transparent"],
    &["sophisticated", "advanced", "refined", "intricate"],
    &["complex", "complicated", "involved", "intricate"],
    &["strong", "powerful", "robust", "sturdy"],
    &["weak", "feeble", "fragile", "frail"],
    &["happy", "glad", "pleased", "content"],
    &["sad", "unhappy", "sorrowful", "downcast"],
    &["beautiful", "lovely", "gorgeous", "stunning"],
    &["smart", "clever", "intelligent", "bright"],
    &["use", "utilize", "employ", "apply"],
    &["make", "create", "produce", "construct"],
    &["show", "demonstrate", "display", "exhibit"],
    &["help", "assist", "aid", "support"],
    &["improve", "enhance", "refine", "better"],
    &["begin", "start", "commence", "initiate", "set_out"],
    &["end", "finish", "conclude", "terminate", "wind_up"],
    &["establish", "found", "institute", "set_up"],
    &["examine", "inspect", "review", "look_over"],
    &["explain", "clarify", "describe", "spell_out"],
    &["get", "obtain", "acquire", "receive"],
    &["give", "provide", "supply", "furnish"],
    &["keep", "retain", "preserve", "maintain"],
    &["change", "alter", "modify", "adjust"],
    &["remove", "delete", "eliminate", "take_out"],
    &["choose", "select", "pick", "pick_out"],
    &["need", "require", "demand", "call_for"],
    &["think", "consider", "reflect", "ponder"],
    &["say", "state", "declare", "mention"],
    &["write", "compose", "draft", "pen"],
    &["find", "discover", "locate", "uncover"],
    &["reduce", "decrease", "lessen", "cut_back"],
    &["increase", "raise", "boost", "step_up"],
    &["stop", "halt", "cease", "discontinue"],
    &["continue", "proceed", "persist", "carry_on"],
    &["check", "verify", "confirm", "double_check"],
    &["fix", "repair", "mend", "correct"],
    &["buy", "purchase", "procure", "pick_up"],
    &["sell", "vend", "market", "trade"],
    &["method", "methodology", "procedure", "technique", "approach"],
    &["plan", "scheme", "strategy", "blueprint"],
    &["goal", "aim", "objective", "target"],
    &["idea", "notion", "concept", "thought"],
    &["problem", "issue", "difficulty", "obstacle"],
    &["result", "outcome", "consequence", "effect"],
    &["reason", "cause", "motive", "grounds"],
    &["part", "portion", "segment", "section"],
    &["whole", "entirety", "total", "aggregate"],
    &["company", "firm", "business", "enterprise"],
    &["job", "task", "assignment", "duty"],
    &["money", "funds", "capital", "currency"],
    &["house", "home", "dwelling", "residence"],
    &["story", "tale", "narrative", "account"],
    &["word", "term", "expression", "phrase"],
    &["speech", "talk", "address", "lecture"],
    &["meeting", "gathering", "assembly", "session"],
    &["answer", "reply", "response", "rejoinder"],
    &["question", "query", "inquiry", "enquiry"],
    &["error", "mistake", "fault", "slip"],
    &["chance", "opportunity", "occasion", "opening"],
    &["danger", "risk", "hazard", "peril"],
    &["effort", "endeavor", "exertion", "attempt"],
    &["power", "strength", "force", "might"],
    &["view", "opinion", "stance", "point_of_view"],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_word() {
        let dict = SynonymDictionary::builtin();
        let groups = dict.synsets("quick");
        assert_eq!(groups.len(), 1);
        assert!(groups[0].contains(&"fast"));
        assert!(groups[0].contains(&"rapid"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let dict = SynonymDictionary::builtin();
        assert!(!dict.synsets("Quick").is_empty());
        assert!(!dict.synsets("QUICK").is_empty());
    }

    #[test]
    fn test_unknown_word_has_no_groups() {
        let dict = SynonymDictionary::builtin();
        assert!(dict.synsets("zyzzyva").is_empty());
    }

    #[test]
    fn test_word_in_multiple_senses() {
        let dict = SynonymDictionary::builtin();
        // "intricate" belongs to both the sophisticated and complex groups.
        assert_eq!(dict.synsets("intricate").len(), 2);
    }

    #[test]
    fn test_multiword_entries_use_underscores() {
        let dict = SynonymDictionary::builtin();
        let groups = dict.synsets("establish");
        assert!(groups[0].contains(&"set_up"));
    }

    #[test]
    fn test_dictionary_is_populated() {
        let dict = SynonymDictionary::builtin();
        assert!(!dict.is_empty());
        assert!(dict.len() > 50);
    }
}
