//! Field keys of a verb record and their display labels, in render order.

pub const INTENSIVE_FORMS_KEY: &str = "intensiveForms";

pub const VERB_FIELDS: [(&str, &str); 9] = [
    ("translation", "Traduction"),
    ("preterite", "Prétérit"),
    ("negativePreterite", "Prétérit Négatif"),
    ("aorist", "Aoriste"),
    ("imperative", "Impératif"),
    ("aoristParticiple", "Participe de l'aoriste"),
    ("preteriteParticiple", "Participe du prétérit (positif)"),
    ("negativePreteriteParticiple", "Participe du prétérit (négatif)"),
    (INTENSIVE_FORMS_KEY, "Formes Intensives"),
];

pub const INTENSIVE_FIELDS: [(&str, &str); 4] = [
    ("intensiveImperative", "Impératif Intensif"),
    ("intensiveAorist", "Aoriste Intensif"),
    ("intensiveAoristParticiple", "Participe de l'aoriste intensif"),
    (
        "negativeIntensiveAoristParticiple",
        "Participe de l'aoriste intensif négatif",
    ),
];
