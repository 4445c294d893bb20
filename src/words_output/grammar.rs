use serde::{Deserialize, Serialize};

// Closed code sets of the engine's column grammar. Every category knows the
// exact text the engine emits (`code`) and a short display form
// (`abbreviation`); the width of a category's column slot is the length of
// its longest code.
pub(super) trait GrammarCode: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn code(self) -> &'static str;

    fn slot_width() -> usize {
        Self::ALL.iter().map(|v| v.code().len()).max().unwrap_or(0)
    }

    fn of_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Preposition,
    Conjunction,
    VerbParticiple,
}

impl GrammarCode for PartOfSpeech {
    const ALL: &'static [Self] = &[
        Self::Noun,
        Self::Verb,
        Self::Adjective,
        Self::Adverb,
        Self::Pronoun,
        Self::Preposition,
        Self::Conjunction,
        Self::VerbParticiple,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Noun => "N",
            Self::Verb => "V",
            Self::Adjective => "ADJ",
            Self::Adverb => "ADV",
            Self::Pronoun => "PRON",
            Self::Preposition => "PREP",
            Self::Conjunction => "CONJ",
            Self::VerbParticiple => "VPAR",
        }
    }
}

impl PartOfSpeech {
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
            Self::Pronoun => "pronoun",
            Self::Preposition => "preposition",
            Self::Conjunction => "conjunction",
            Self::VerbParticiple => "participle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Case {
    Nominative,
    Vocative,
    Genitive,
    Dative,
    Accusative,
    Ablative,
    Locative,
}

impl GrammarCode for Case {
    const ALL: &'static [Self] = &[
        Self::Nominative,
        Self::Vocative,
        Self::Genitive,
        Self::Dative,
        Self::Accusative,
        Self::Ablative,
        Self::Locative,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Nominative => "NOM",
            Self::Vocative => "VOC",
            Self::Genitive => "GEN",
            Self::Dative => "DAT",
            Self::Accusative => "ACC",
            Self::Ablative => "ABL",
            Self::Locative => "LOC",
        }
    }
}

impl Case {
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Nominative => "nom.",
            Self::Vocative => "voc.",
            Self::Genitive => "gen.",
            Self::Dative => "dat.",
            Self::Accusative => "acc.",
            Self::Ablative => "abl.",
            Self::Locative => "loc.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Number {
    Singular,
    Plural,
}

impl GrammarCode for Number {
    const ALL: &'static [Self] = &[Self::Singular, Self::Plural];

    fn code(self) -> &'static str {
        match self {
            Self::Singular => "S",
            Self::Plural => "P",
        }
    }
}

impl Number {
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Singular => "sing.",
            Self::Plural => "pl.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
    Common,
}

impl GrammarCode for Gender {
    const ALL: &'static [Self] = &[
        Self::Masculine,
        Self::Feminine,
        Self::Neuter,
        Self::Common,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Masculine => "M",
            Self::Feminine => "F",
            Self::Neuter => "N",
            Self::Common => "C",
        }
    }
}

impl Gender {
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Masculine => "masc.",
            Self::Feminine => "fem.",
            Self::Neuter => "neut.",
            Self::Common => "common",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Declension {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
}

impl GrammarCode for Declension {
    const ALL: &'static [Self] = &[
        Self::First,
        Self::Second,
        Self::Third,
        Self::Fourth,
        Self::Fifth,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::First => "1",
            Self::Second => "2",
            Self::Third => "3",
            Self::Fourth => "4",
            Self::Fifth => "5",
        }
    }
}

impl Declension {
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::First => "1st",
            Self::Second => "2nd",
            Self::Third => "3rd",
            Self::Fourth => "4th",
            Self::Fifth => "5th",
        }
    }
}

// 5th and 6th cover the engine's irregular conjugation numbers (sum, eo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Conjugation {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
}

impl GrammarCode for Conjugation {
    const ALL: &'static [Self] = &[
        Self::First,
        Self::Second,
        Self::Third,
        Self::Fourth,
        Self::Fifth,
        Self::Sixth,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::First => "1",
            Self::Second => "2",
            Self::Third => "3",
            Self::Fourth => "4",
            Self::Fifth => "5",
            Self::Sixth => "6",
        }
    }
}

impl Conjugation {
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::First => "1st",
            Self::Second => "2nd",
            Self::Third => "3rd",
            Self::Fourth => "4th",
            Self::Fifth => "5th",
            Self::Sixth => "6th",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tense {
    Present,
    Imperfect,
    Future,
    Perfect,
    Pluperfect,
    FuturePerfect,
}

impl GrammarCode for Tense {
    const ALL: &'static [Self] = &[
        Self::Present,
        Self::Imperfect,
        Self::Future,
        Self::Perfect,
        Self::Pluperfect,
        Self::FuturePerfect,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Present => "PRES",
            Self::Imperfect => "IMPF",
            Self::Future => "FUT",
            Self::Perfect => "PERF",
            Self::Pluperfect => "PLUP",
            Self::FuturePerfect => "FUTP",
        }
    }
}

impl Tense {
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Present => "pres.",
            Self::Imperfect => "imperf.",
            Self::Future => "fut.",
            Self::Perfect => "perf.",
            Self::Pluperfect => "pluperf.",
            Self::FuturePerfect => "fut. perf.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Voice {
    Active,
    Passive,
    Middle,
}

impl GrammarCode for Voice {
    const ALL: &'static [Self] = &[Self::Active, Self::Passive, Self::Middle];

    fn code(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Passive => "PASSIVE",
            Self::Middle => "MIDDLE",
        }
    }
}

impl Voice {
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Passive => "passive",
            Self::Middle => "middle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mood {
    Indicative,
    Infinitive,
    Subjunctive,
    Imperative,
}

impl GrammarCode for Mood {
    const ALL: &'static [Self] = &[
        Self::Indicative,
        Self::Infinitive,
        Self::Subjunctive,
        Self::Imperative,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Indicative => "IND",
            Self::Infinitive => "INF",
            Self::Subjunctive => "SUB",
            Self::Imperative => "IMP",
        }
    }
}

impl Mood {
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Indicative => "ind.",
            Self::Infinitive => "inf.",
            Self::Subjunctive => "subj.",
            Self::Imperative => "imper.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Person {
    First,
    Second,
    Third,
}

impl GrammarCode for Person {
    const ALL: &'static [Self] = &[Self::First, Self::Second, Self::Third];

    fn code(self) -> &'static str {
        match self {
            Self::First => "1",
            Self::Second => "2",
            Self::Third => "3",
        }
    }
}

impl Person {
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::First => "1st person",
            Self::Second => "2nd person",
            Self::Third => "3rd person",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Degree {
    Positive,
    Comparative,
    Superlative,
}

impl GrammarCode for Degree {
    const ALL: &'static [Self] = &[Self::Positive, Self::Comparative, Self::Superlative];

    fn code(self) -> &'static str {
        match self {
            Self::Positive => "POS",
            Self::Comparative => "COMP",
            Self::Superlative => "SUPER",
        }
    }
}

impl Degree {
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Positive => "pos.",
            Self::Comparative => "comp.",
            Self::Superlative => "superl.",
        }
    }
}
