use serde::{Deserialize, Serialize};

use crate::words_output::{
    grammar::{Case, Conjugation, Declension, Degree, Gender, Mood, Number, Person, Tense, Voice},
    scanner::ColumnScanner,
};

// Inflected surface form, left-aligned and padded to 21 columns.
const FORM_WIDTH: usize = 21;

// Part-of-speech tag slot, sized for the longest tag (PREFIX, SUPINE, ...).
const TAG_WIDTH: usize = 6;

// Participle lines close with a literal marker after the voice column.
const PARTICIPLE_SUFFIX: &str = "PPL";

// One grammatical reading of a surface form. Field order matches the column
// order of the engine line exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", rename_all_fields = "camelCase", tag = "type")]
pub enum Possibility {
    Noun {
        text: String,
        declension: Option<Declension>,
        variety: usize,
        case: Option<Case>,
        number: Option<Number>,
        gender: Gender,
    },
    Adjective {
        text: String,
        declension: Option<Declension>,
        variety: usize,
        case: Option<Case>,
        number: Option<Number>,
        gender: Option<Gender>,
        degree: Degree,
    },
    Adverb {
        text: String,
        degree: Degree,
    },
    Verb {
        text: String,
        conjugation: Option<Conjugation>,
        variety: usize,
        tense: Tense,
        voice: Option<Voice>,
        mood: Mood,
        person: Option<Person>,
        number: Option<Number>,
    },
    Pronoun {
        text: String,
        declension: Option<Declension>,
        variety: usize,
        case: Case,
        number: Number,
        gender: Option<Gender>,
    },
    Preposition {
        text: String,
        case: Option<Case>,
    },
    Prefix {
        text: String,
    },
    Suffix {
        text: String,
    },
    Tackon {
        text: String,
    },
    Conjunction {
        text: String,
    },
    VerbParticiple {
        text: String,
        conjugation: Option<Conjugation>,
        variety: usize,
        case: Option<Case>,
        number: Option<Number>,
        gender: Option<Gender>,
        tense: Tense,
        voice: Voice,
    },
    Supine {
        text: String,
        conjugation: Option<Conjugation>,
        variety: usize,
        case: Option<Case>,
        number: Option<Number>,
        gender: Option<Gender>,
    },
}

impl Possibility {
    pub fn text(&self) -> &str {
        match self {
            Self::Noun { text, .. }
            | Self::Adjective { text, .. }
            | Self::Adverb { text, .. }
            | Self::Verb { text, .. }
            | Self::Pronoun { text, .. }
            | Self::Preposition { text, .. }
            | Self::Prefix { text }
            | Self::Suffix { text }
            | Self::Tackon { text }
            | Self::Conjunction { text }
            | Self::VerbParticiple { text, .. }
            | Self::Supine { text, .. } => text,
        }
    }

    // The engine leaves the voice column empty for deponent verbs.
    pub fn is_deponent(&self) -> bool {
        matches!(self, Self::Verb { voice: None, .. })
    }
}

// One fixed-layout analysis line, or None when the line is something else.
// The tag must match exactly; variants are tried in a fixed order so that
// classification stays deterministic.
pub fn parse_possibility(line: &str) -> Option<Possibility> {
    let chars: Vec<char> = line.chars().collect();
    let mut scanner = ColumnScanner::new(&chars);

    let text = scanner.take_slot_end_trimmed(FORM_WIDTH);
    if text.is_empty() || text.starts_with(' ') {
        return None;
    }

    let tag = scanner.take_slot_trimmed(TAG_WIDTH);
    match tag.as_str() {
        "N" => {
            let declension = scanner.take_optional_field::<Declension>()?;
            let variety = scanner.take_variety()?;
            let case = scanner.take_optional_field::<Case>()?;
            let number = scanner.take_optional_field::<Number>()?;
            let gender = scanner.take_field::<Gender>()?;
            scanner.expect_blank_rest()?;
            Some(Possibility::Noun {
                text,
                declension,
                variety,
                case,
                number,
                gender,
            })
        }

        "ADJ" => {
            let declension = scanner.take_optional_field::<Declension>()?;
            let variety = scanner.take_variety()?;
            let case = scanner.take_optional_field::<Case>()?;
            let number = scanner.take_optional_field::<Number>()?;
            let gender = scanner.take_optional_field::<Gender>()?;
            let degree = scanner.take_field::<Degree>()?;
            scanner.expect_blank_rest()?;
            Some(Possibility::Adjective {
                text,
                declension,
                variety,
                case,
                number,
                gender,
                degree,
            })
        }

        "ADV" => {
            let degree = scanner.take_field::<Degree>()?;
            scanner.expect_blank_rest()?;
            Some(Possibility::Adverb { text, degree })
        }

        "V" => {
            let conjugation = scanner.take_optional_field::<Conjugation>()?;
            let variety = scanner.take_variety()?;
            let tense = scanner.take_field::<Tense>()?;
            let voice = scanner.take_optional_field::<Voice>()?;
            let mood = scanner.take_field::<Mood>()?;
            let person = scanner.take_optional_field::<Person>()?;
            let number = scanner.take_optional_field::<Number>()?;
            scanner.expect_blank_rest()?;
            Some(Possibility::Verb {
                text,
                conjugation,
                variety,
                tense,
                voice,
                mood,
                person,
                number,
            })
        }

        "PRON" => {
            let declension = scanner.take_optional_field::<Declension>()?;
            let variety = scanner.take_variety()?;
            let case = scanner.take_field::<Case>()?;
            let number = scanner.take_field::<Number>()?;
            let gender = scanner.take_optional_field::<Gender>()?;
            scanner.expect_blank_rest()?;
            Some(Possibility::Pronoun {
                text,
                declension,
                variety,
                case,
                number,
                gender,
            })
        }

        "PREP" => {
            let case = scanner.take_optional_field::<Case>()?;
            scanner.expect_blank_rest()?;
            Some(Possibility::Preposition { text, case })
        }

        "PREFIX" => Some(Possibility::Prefix { text }),
        "SUFFIX" => Some(Possibility::Suffix { text }),
        "TACKON" => Some(Possibility::Tackon { text }),
        "CONJ" => Some(Possibility::Conjunction { text }),

        "VPAR" => {
            let conjugation = scanner.take_optional_field::<Conjugation>()?;
            let variety = scanner.take_variety()?;
            let case = scanner.take_optional_field::<Case>()?;
            let number = scanner.take_optional_field::<Number>()?;
            let gender = scanner.take_optional_field::<Gender>()?;
            let tense = scanner.take_field::<Tense>()?;
            let voice = scanner.take_field::<Voice>()?;
            let rest = scanner.rest_trimmed();
            if !rest.is_empty() && rest != PARTICIPLE_SUFFIX {
                return None;
            }
            Some(Possibility::VerbParticiple {
                text,
                conjugation,
                variety,
                case,
                number,
                gender,
                tense,
                voice,
            })
        }

        "SUPINE" => {
            let conjugation = scanner.take_optional_field::<Conjugation>()?;
            let variety = scanner.take_variety()?;
            let case = scanner.take_optional_field::<Case>()?;
            let number = scanner.take_optional_field::<Number>()?;
            let gender = scanner.take_optional_field::<Gender>()?;
            scanner.expect_blank_rest()?;
            Some(Possibility::Supine {
                text,
                conjugation,
                variety,
                case,
                number,
                gender,
            })
        }

        _ => None,
    }
}
