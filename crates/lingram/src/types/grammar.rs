//! Closed grammatical tag sets.
//!
//! Each tag has a short raw form (the letter written in templates) used as
//! the lookup key into a locale's property index maps.

/// Grammatical gender tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
    Epicene,
}

impl Gender {
    pub fn parse(raw: &str) -> Option<Gender> {
        match raw.trim() {
            "m" | "masc" | "masculine" => Some(Gender::Masculine),
            "f" | "fem" | "feminine" => Some(Gender::Feminine),
            "n" | "neut" | "neuter" => Some(Gender::Neuter),
            "e" | "epi" | "epicene" => Some(Gender::Epicene),
            _ => None,
        }
    }

    /// The raw letter used in templates and property index maps.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Masculine => "m",
            Gender::Feminine => "f",
            Gender::Neuter => "n",
            Gender::Epicene => "e",
        }
    }
}

/// Grammatical person, with the inclusive/exclusive first-person split some
/// locales distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Person {
    First,
    FirstInclusive,
    FirstExclusive,
    Second,
    Third,
}

impl Person {
    pub fn parse(raw: &str) -> Option<Person> {
        match raw.trim() {
            "1" | "first" => Some(Person::First),
            "1i" | "inclusive" => Some(Person::FirstInclusive),
            "1e" | "exclusive" => Some(Person::FirstExclusive),
            "2" | "second" => Some(Person::Second),
            "3" | "third" => Some(Person::Third),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Person::First => "1",
            Person::FirstInclusive => "1i",
            Person::FirstExclusive => "1e",
            Person::Second => "2",
            Person::Third => "3",
        }
    }
}

/// Article-type tag driving article insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Article {
    Indefinite,
    Definite,
    Partitive,
    Proper,
    Zero,
}

impl Article {
    pub fn parse(raw: &str) -> Option<Article> {
        match raw.trim() {
            "i" | "indefinite" => Some(Article::Indefinite),
            "d" | "definite" => Some(Article::Definite),
            "p" | "partitive" => Some(Article::Partitive),
            "r" | "proper" => Some(Article::Proper),
            "z" | "zero" => Some(Article::Zero),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Article::Indefinite => "i",
            Article::Definite => "d",
            Article::Partitive => "p",
            Article::Proper => "r",
            Article::Zero => "z",
        }
    }
}
