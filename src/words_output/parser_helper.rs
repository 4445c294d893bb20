use serde::{Deserialize, Serialize};

use crate::words_output::{expansion_parser::Expansion, possibility_parser::Possibility};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedWordsOutput {
    pub items: Vec<ResultItem>,
    // Set once any '*' marker was seen; the engine emits the marker per
    // dictionary entry, this flag collapses that to "somewhere in the
    // response".
    pub truncated: bool,
}

// One gloss, paired with the headword line that introduced it. Pronoun
// entries can carry a gloss without any expansion line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub expansion: Option<Expansion>,
    pub meaning: String,
}

// A contiguous run of analysis lines together with the dictionary entries
// they resolved to. An emitted definition always has at least one word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    pub possibilities: Vec<Possibility>,
    pub words: Vec<Word>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "type")]
pub enum ResultItem {
    Definition(Definition),
    Text { value: String },
}

// Accumulator for the definition under construction. Words and definitions
// are only emitted at the finalization triggers; an in-progress definition
// whose words list is still empty is dropped, never emitted.
pub struct DefinitionList {
    items: Vec<ResultItem>,
    possibilities: Vec<Possibility>,
    words: Vec<Word>,
    pending_expansion: Option<Expansion>,
    meaning: Option<String>,
}

impl DefinitionList {
    pub fn new() -> Self {
        DefinitionList {
            items: Vec::new(),
            possibilities: Vec::new(),
            words: Vec::new(),
            pending_expansion: None,
            meaning: None,
        }
    }

    pub fn inside_definition(&self) -> bool {
        self.pending_expansion.is_some() || !self.possibilities.is_empty()
    }

    // A new analysis line closes the previous definition only when that one
    // already collected a word; otherwise it belongs to the same block.
    pub fn push_possibility(&mut self, possibility: Possibility) {
        self.flush_word();
        if !self.words.is_empty() {
            self.flush_definition();
        }
        self.possibilities.push(possibility);
    }

    pub fn push_expansion(&mut self, expansion: Expansion) {
        self.flush_word();
        self.pending_expansion = Some(expansion);
    }

    // Multi-line glosses keep their line breaks.
    pub fn push_meaning_line(&mut self, line: &str) {
        match &mut self.meaning {
            Some(meaning) => {
                meaning.push('\n');
                meaning.push_str(line);
            }
            None => self.meaning = Some(line.to_owned()),
        }
    }

    pub fn push_text(&mut self, value: String) {
        self.items.push(ResultItem::Text { value });
    }

    // Word boundary. A gloss without an expansion line still counts; an
    // expansion that never received a gloss is dropped.
    fn flush_word(&mut self) {
        let expansion = self.pending_expansion.take();
        if let Some(meaning) = self.meaning.take() {
            self.words.push(Word { expansion, meaning });
        }
    }

    pub fn flush_definition(&mut self) {
        self.flush_word();
        let possibilities = std::mem::take(&mut self.possibilities);
        let words = std::mem::take(&mut self.words);
        if !words.is_empty() {
            self.items
                .push(ResultItem::Definition(Definition {
                    possibilities,
                    words,
                }));
        }
    }

    pub fn collect_to_vec(mut self) -> Vec<ResultItem> {
        self.flush_definition();
        self.items
    }
}
