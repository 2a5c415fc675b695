//! Nature and Demeanor archetypes offered on the concept page.

pub const NATURES: [&str; 32] = [
    "Architect",
    "Autocrat",
    "Bon Vivant",
    "Bravo",
    "Caretaker",
    "Celebrant",
    "Competitor",
    "Conformist",
    "Conniver",
    "Curmudgeon",
    "Defender",
    "Director",
    "Eye of the Storm",
    "Fanatic",
    "Gallant",
    "Gambler",
    "Jester",
    "Judge",
    "Loner",
    "Martyr",
    "Masochist",
    "Monster",
    "Penitent",
    "Perfectionist",
    "Rebel",
    "Rogue",
    "Scientist",
    "Survivor",
    "Thrill-Seeker",
    "Traditionalist",
    "Trickster",
    "Visionary",
];

/// Whether `name` is one of the listed archetypes. Empty means unset and is not listed.
pub fn is_listed_archetype(name: &str) -> bool {
    NATURES.contains(&name)
}
