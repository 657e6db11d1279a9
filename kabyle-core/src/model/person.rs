/// Grammatical person/number/gender keys used by the conjugation dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Person {
    FirstSingular,
    SecondSingular,
    ThirdSingular,
    ThirdSingularFeminine,
    FirstPlural,
    SecondPlural,
    SecondPluralFeminine,
    ThirdPlural,
    ThirdPluralFeminine,
}

impl Person {
    pub const ALL: [Person; 9] = [
        Person::FirstSingular,
        Person::SecondSingular,
        Person::ThirdSingular,
        Person::ThirdSingularFeminine,
        Person::FirstPlural,
        Person::SecondPlural,
        Person::SecondPluralFeminine,
        Person::ThirdPlural,
        Person::ThirdPluralFeminine,
    ];

    pub fn from_key(key: &str) -> Option<Person> {
        Person::ALL.into_iter().find(|p| p.key() == key)
    }

    pub fn key(self) -> &'static str {
        match self {
            Person::FirstSingular => "firstSingular",
            Person::SecondSingular => "secondSingular",
            Person::ThirdSingular => "thirdSingular",
            Person::ThirdSingularFeminine => "thirdSingularFeminine",
            Person::FirstPlural => "firstPlural",
            Person::SecondPlural => "secondPlural",
            Person::SecondPluralFeminine => "secondPluralFeminine",
            Person::ThirdPlural => "thirdPlural",
            Person::ThirdPluralFeminine => "thirdPluralFeminine",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Person::FirstSingular => "1ère personne du singulier",
            Person::SecondSingular => "2ème personne du singulier",
            Person::ThirdSingular => "3ème personne du singulier masculin",
            Person::ThirdSingularFeminine => "3ème personne du singulier féminin",
            Person::FirstPlural => "1ère personne du pluriel",
            Person::SecondPlural => "2ème personne du pluriel masculin",
            Person::SecondPluralFeminine => "2ème personne du pluriel féminin",
            Person::ThirdPlural => "3ème personne du pluriel masculin",
            Person::ThirdPluralFeminine => "3ème personne du pluriel féminin",
        }
    }
}

/// Display label for a dataset key; unknown keys are shown as-is.
pub fn person_label(key: &str) -> &str {
    match Person::from_key(key) {
        Some(p) => p.label(),
        None => key,
    }
}
