use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::words_output::grammar::{
    Case, Conjugation, Declension, Gender, GrammarCode, PartOfSpeech,
};

// The dictionary headword line introducing a gloss: principal parts, the
// part-of-speech tag, an optional "(1st)".."(6th)" ordinal, a gender or case
// where the part of speech carries one, then free-text notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", rename_all_fields = "camelCase", tag = "type")]
pub enum Expansion {
    Noun {
        principal_parts: String,
        declension: Option<Declension>,
        gender: Gender,
        notes: Vec<String>,
    },
    Verb {
        principal_parts: String,
        conjugation: Option<Conjugation>,
        notes: Vec<String>,
    },
    Adjective {
        principal_parts: String,
        declension: Option<Declension>,
        notes: Vec<String>,
    },
    Adverb {
        principal_parts: String,
        notes: Vec<String>,
    },
    Pronoun {
        principal_parts: String,
        declension: Option<Declension>,
        notes: Vec<String>,
    },
    Preposition {
        principal_parts: String,
        case: Option<Case>,
        notes: Vec<String>,
    },
    Conjunction {
        principal_parts: String,
        notes: Vec<String>,
    },
    VerbParticiple {
        principal_parts: String,
        conjugation: Option<Conjugation>,
        notes: Vec<String>,
    },
}

impl Expansion {
    pub fn principal_parts(&self) -> &str {
        match self {
            Self::Noun {
                principal_parts, ..
            }
            | Self::Verb {
                principal_parts, ..
            }
            | Self::Adjective {
                principal_parts, ..
            }
            | Self::Adverb {
                principal_parts, ..
            }
            | Self::Pronoun {
                principal_parts, ..
            }
            | Self::Preposition {
                principal_parts, ..
            }
            | Self::Conjunction {
                principal_parts, ..
            }
            | Self::VerbParticiple {
                principal_parts, ..
            } => principal_parts,
        }
    }
}

// "(1st)", "(2nd)", ... the digit is the declension or conjugation number.
static REGEX_ORDINAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\((\d)(st|nd|rd|th)\)").unwrap());

// Note segments are delimited by runs of two or more spaces.
static REGEX_NOTE_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());

// One expansion line, or None when the line is something else (no tag after
// the double-space split point means it is not a headword line).
pub fn parse_expansion(line: &str) -> Option<Expansion> {
    let split = line.find("  ")?;
    let principal_parts = line[..split].trim().to_owned();
    if principal_parts.is_empty() {
        return None;
    }

    let rest = line[split..].trim_start();
    let (tag, rest) = match rest.split_once(' ') {
        Some((tag, rest)) => (tag, rest.trim_start()),
        None => (rest, ""),
    };

    let (ordinal, rest) = take_ordinal(rest);

    match PartOfSpeech::of_code(tag)? {
        PartOfSpeech::Noun => {
            let declension = match &ordinal {
                Some(digit) => Some(Declension::of_code(digit)?),
                None => None,
            };
            let (gender_token, rest) = match rest.split_once(' ') {
                Some((gender_token, rest)) => (gender_token, rest.trim_start()),
                None => (rest, ""),
            };
            if gender_token.chars().count() != 1 {
                return None;
            }
            let gender = Gender::of_code(gender_token)?;
            Some(Expansion::Noun {
                principal_parts,
                declension,
                gender,
                notes: parse_notes(rest),
            })
        }

        PartOfSpeech::Verb => {
            let conjugation = match &ordinal {
                Some(digit) => Some(Conjugation::of_code(digit)?),
                None => None,
            };
            Some(Expansion::Verb {
                principal_parts,
                conjugation,
                notes: parse_notes(rest),
            })
        }

        PartOfSpeech::Adjective => {
            let declension = match &ordinal {
                Some(digit) => Some(Declension::of_code(digit)?),
                None => None,
            };
            Some(Expansion::Adjective {
                principal_parts,
                declension,
                notes: parse_notes(rest),
            })
        }

        PartOfSpeech::Adverb => Some(Expansion::Adverb {
            principal_parts,
            notes: parse_notes(rest),
        }),

        PartOfSpeech::Pronoun => {
            let declension = match &ordinal {
                Some(digit) => Some(Declension::of_code(digit)?),
                None => None,
            };
            Some(Expansion::Pronoun {
                principal_parts,
                declension,
                notes: parse_notes(rest),
            })
        }

        PartOfSpeech::Preposition => {
            let (case_token, after_case) = match rest.split_once(' ') {
                Some((case_token, after_case)) => (case_token, after_case.trim_start()),
                None => (rest, ""),
            };
            match Case::of_code(case_token) {
                Some(case) => Some(Expansion::Preposition {
                    principal_parts,
                    case: Some(case),
                    notes: parse_notes(after_case),
                }),
                None => Some(Expansion::Preposition {
                    principal_parts,
                    case: None,
                    notes: parse_notes(rest),
                }),
            }
        }

        PartOfSpeech::Conjunction => Some(Expansion::Conjunction {
            principal_parts,
            notes: parse_notes(rest),
        }),

        PartOfSpeech::VerbParticiple => {
            let conjugation = match &ordinal {
                Some(digit) => Some(Conjugation::of_code(digit)?),
                None => None,
            };
            Some(Expansion::VerbParticiple {
                principal_parts,
                conjugation,
                notes: parse_notes(rest),
            })
        }
    }
}

fn take_ordinal(rest: &str) -> (Option<String>, &str) {
    match REGEX_ORDINAL.captures(rest) {
        Some(captures) => {
            let digit = captures[1].to_owned();
            let end = captures[0].len();
            (Some(digit), rest[end..].trim_start())
        }
        None => (None, rest),
    }
}

fn parse_notes(rest: &str) -> Vec<String> {
    REGEX_NOTE_SPLIT
        .split(rest)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(normalize_note)
        .collect()
}

// The engine packs some annotations into fixed columns; restore the readable
// form. Unknown segments pass through unchanged.
fn normalize_note(segment: &str) -> String {
    match segment {
        "veryrare" => "very rare",
        "veryfreq" => "very frequent",
        "inscript" => "inscriptions",
        "NeoLatin" => "Neo-Latin",
        segment => segment,
    }
    .to_owned()
}
