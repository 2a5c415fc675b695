//! Clans, disciplines, and the discipline power table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A discipline. Only the three in the current clan's list can hold dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Discipline {
    Animalism,
    Auspex,
    Celerity,
    Dementation,
    Dominate,
    Fortitude,
    Necromancy,
    Obfuscate,
    Obtenebration,
    Potence,
    Presence,
    Protean,
    Quietus,
    Thaumaturgy,
    Vicissitude,
}

/// A named power unlocked at a discipline level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PowerInfo {
    pub name: &'static str,
    pub description: &'static str,
}

const fn power(name: &'static str, description: &'static str) -> PowerInfo {
    PowerInfo { name, description }
}

impl Discipline {
    pub const ALL: [Discipline; 15] = [
        Self::Animalism,
        Self::Auspex,
        Self::Celerity,
        Self::Dementation,
        Self::Dominate,
        Self::Fortitude,
        Self::Necromancy,
        Self::Obfuscate,
        Self::Obtenebration,
        Self::Potence,
        Self::Presence,
        Self::Protean,
        Self::Quietus,
        Self::Thaumaturgy,
        Self::Vicissitude,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Animalism => "Animalism",
            Self::Auspex => "Auspex",
            Self::Celerity => "Celerity",
            Self::Dementation => "Dementation",
            Self::Dominate => "Dominate",
            Self::Fortitude => "Fortitude",
            Self::Necromancy => "Necromancy",
            Self::Obfuscate => "Obfuscate",
            Self::Obtenebration => "Obtenebration",
            Self::Potence => "Potence",
            Self::Presence => "Presence",
            Self::Protean => "Protean",
            Self::Quietus => "Quietus",
            Self::Thaumaturgy => "Thaumaturgy",
            Self::Vicissitude => "Vicissitude",
        }
    }

    /// Power table entries indexed by `level - 1`. Missing levels are allowed.
    pub fn powers(&self) -> &'static [PowerInfo] {
        match self {
            Self::Protean => &PROTEAN,
            Self::Celerity => &CELERITY,
            Self::Potence => &POTENCE,
            Self::Presence => &PRESENCE,
            Self::Animalism => &ANIMALISM,
            Self::Fortitude => &FORTITUDE,
            Self::Auspex => &AUSPEX,
            Self::Dementation => &DEMENTATION,
            Self::Obfuscate => &OBFUSCATE,
            Self::Dominate => &DOMINATE,
            Self::Thaumaturgy => &THAUMATURGY,
            Self::Necromancy => &NECROMANCY,
            Self::Obtenebration => &OBTENEBRATION,
            Self::Quietus => &QUIETUS,
            Self::Vicissitude => &VICISSITUDE,
        }
    }

    /// Look up the power for a level (1-based).
    pub fn power(&self, level: u8) -> Option<PowerInfo> {
        let index = usize::from(level).checked_sub(1)?;
        self.powers().get(index).copied()
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Discipline {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::parse(format!("Unknown discipline: {}", s)))
    }
}

/// A vampire clan. Selects the three disciplines a character may learn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Clan {
    Brujah,
    Gangrel,
    Malkavian,
    Nosferatu,
    Toreador,
    Tremere,
    Ventrue,
    Assamite,
    Giovanni,
    Lasombra,
    Tzimisce,
}

impl Clan {
    pub const ALL: [Clan; 11] = [
        Self::Brujah,
        Self::Gangrel,
        Self::Malkavian,
        Self::Nosferatu,
        Self::Toreador,
        Self::Tremere,
        Self::Ventrue,
        Self::Assamite,
        Self::Giovanni,
        Self::Lasombra,
        Self::Tzimisce,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Brujah => "Brujah",
            Self::Gangrel => "Gangrel",
            Self::Malkavian => "Malkavian",
            Self::Nosferatu => "Nosferatu",
            Self::Toreador => "Toreador",
            Self::Tremere => "Tremere",
            Self::Ventrue => "Ventrue",
            Self::Assamite => "Assamite",
            Self::Giovanni => "Giovanni",
            Self::Lasombra => "Lasombra",
            Self::Tzimisce => "Tzimisce",
        }
    }

    /// The clan's three in-clan disciplines.
    pub fn disciplines(&self) -> &'static [Discipline; 3] {
        &CLAN_DISCIPLINES[*self as usize]
    }

    pub fn allows(&self, discipline: Discipline) -> bool {
        self.disciplines().contains(&discipline)
    }
}

impl fmt::Display for Clan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Clan {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::parse(format!("Unknown clan: {}", s)))
    }
}

/// Disciplines permitted by an optional clan. No clan permits nothing.
pub fn allowed_disciplines(clan: Option<Clan>) -> &'static [Discipline] {
    match clan {
        Some(clan) => clan.disciplines(),
        None => &[],
    }
}

/// Serde adapter for the persisted clan field: `""` means no clan.
pub mod clan_name {
    use super::Clan;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(clan: &Option<Clan>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(clan.map(|c| c.display_name()).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Clan>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        raw.parse::<Clan>()
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}

/// Indexed by `Clan` discriminant.
static CLAN_DISCIPLINES: [[Discipline; 3]; 11] = {
    use Discipline::*;
    [
        [Celerity, Potence, Presence],
        [Animalism, Fortitude, Protean],
        [Auspex, Dementation, Obfuscate],
        [Animalism, Obfuscate, Potence],
        [Auspex, Celerity, Presence],
        [Auspex, Dominate, Thaumaturgy],
        [Dominate, Fortitude, Presence],
        [Celerity, Obfuscate, Quietus],
        [Dominate, Fortitude, Necromancy],
        [Dominate, Obtenebration, Potence],
        [Animalism, Auspex, Vicissitude],
    ]
};

// =============================================================================
// Power table
// =============================================================================

const PROTEAN: [PowerInfo; 5] = [
    power("Eyes of the Beast", "Eyes glow red; see in total darkness. Cost/roll: none. Effect: night vision, intimidating gaze."),
    power("Feral Claws", "Spend 1 Blood. Grow claws; Str +1 aggravated damage; retract at will."),
    power("Earth Meld", "Roll Stamina+Survival diff 6; 1 turn to sink. Effect: meld with natural earth/stone to hide/sleep."),
    power("Shape of the Beast", "Assume wolf/bat form (depends ST); boosts and movement per form."),
    power("Mist Form", "Become living mist; immune to physical harm; move through cracks."),
];

const CELERITY: [PowerInfo; 5] = [
    power("Quickness", "Spend 1 Blood per extra action this turn. Effect: act faster; move blindingly."),
    power("Alacrity", "As above; improved speed and reaction."),
    power("Rapidity", "As above; multiple extra actions possible (ST adjudicates)."),
    power("Fleetness", "Supernatural speed; near-blur."),
    power("Blinding Speed", "Near-untouchable speed for a scene (with Blood)."),
];

const POTENCE: [PowerInfo; 5] = [
    power("Prowess", "Melee/Str damage boosted; spend Blood for auto successes (per dot)."),
    power("Might", "Feats of strength become trivial."),
    power("Vigor", "Devastating blows; break stone/steel with effort."),
    power("Intensity", "Crushing power; leap/throw far."),
    power("Heroic Strength", "Legendary force; shatter barriers."),
];

const PRESENCE: [PowerInfo; 5] = [
    power("Awe", "Captivates those nearby; no roll vs mortals typically; social edge."),
    power("Dread Gaze", "Instill fear; many mortals flee; roll Cha+Intimidation."),
    power("Entrancement", "Target adores you; extended influence."),
    power("Summon", "Call a known target from afar; they feel compelled to come."),
    power("Majesty", "Become regal/untouchable; few dare oppose you."),
];

const ANIMALISM: [PowerInfo; 5] = [
    power("Feral Whispers", "Speak with animals; simple commands."),
    power("Beckoning", "Call animals of a region; they come if able."),
    power("Quell the Beast", "Soothe or rouse Beast in mortals/vampires; resist frenzy."),
    power("Subsume the Spirit", "Possess an animal; control senses/body."),
    power("Drawing Out the Beast", "Shift frenzy to another or externalize it."),
];

const FORTITUDE: [PowerInfo; 5] = [
    power("Endurance", "Extra soak; resist harm beyond mortal limits."),
    power("Mettle", "Soak lethal; sometimes aggravated (ST)."),
    power("Resilience", "Stand against fire/sunlight longer (not immunity)."),
    power("Resolve", "Ignore crippling wounds briefly."),
    power("Unbreakable", "Near-impossible to put down."),
];

const AUSPEX: [PowerInfo; 5] = [
    power("Heightened Senses", "Sharpen all senses; risk sensory overload."),
    power("Aura Perception", "Read emotions/creature type via auras."),
    power("Telepathy", "Read/speak mind-to-mind; resisted by Willpower."),
    power("Psychic Projection", "Astral projection; travel as spirit; body inert."),
    power("Spirit's Touch", "Psychometry: read emotional impressions from objects."),
];

const DEMENTATION: [PowerInfo; 5] = [
    power("Passion", "Amplify or dampen emotions."),
    power("The Haunting", "Subject experiences unsettling phenomena."),
    power("Eyes of Chaos", "Perceive patterns in madness; hidden truths."),
    power("Voice of Madness", "Brief contagious hysteria/panic."),
    power("Total Insanity", "Crush a mind under madness."),
];

const OBFUSCATE: [PowerInfo; 5] = [
    power("Cloak of Shadows", "Remain unseen if still and in cover."),
    power("Unseen Presence", "Move while unseen; avoid drawing attention."),
    power("Mask of a Thousand Faces", "Appear as someone else; casual scrutiny fails."),
    power("Vanish from the Mind's Eye", "Disappear even in plain sight briefly."),
    power("Cloak the Gathering", "Extend obfuscation to companions."),
];

const DOMINATE: [PowerInfo; 5] = [
    power("Command", "Single-word orders; eye contact; mortals easy."),
    power("Mesmerize", "Implant suggestions; longer-term commands."),
    power("The Forgetful Mind", "Alter/erase memories."),
    power("Conditioning", "Long-term mental control over a subject."),
    power("Possession", "Wear a mortal like a suit; control their body."),
];

const THAUMATURGY: [PowerInfo; 5] = [
    power("Blood Magic (Paths/Rituals)", "Access level 1 of chosen Path; rituals by dots (ST approval)."),
    power("Path ••", "Use level 2 effects in chosen Path(s)."),
    power("Path •••", "Use level 3 effects."),
    power("Path ••••", "Use level 4 effects."),
    power("Path •••••", "Use level 5 effects; powerful rituals."),
];

const NECROMANCY: [PowerInfo; 5] = [
    power("Death Magic (Paths/Rituals)", "Access level 1 of Necromancy Path; rituals as learned."),
    power("Path ••", "Level 2 effects."),
    power("Path •••", "Level 3 effects."),
    power("Path ••••", "Level 4 effects."),
    power("Path •••••", "Level 5 effects; potent rites."),
];

const OBTENEBRATION: [PowerInfo; 5] = [
    power("Shadow Play", "Manipulate shadows; dim light."),
    power("Shroud of Night", "Summon oily darkness that hinders foes."),
    power("Arms of the Abyss", "Shadow-tentacles restrain/attack."),
    power("Black Metamorphosis", "Cloak self in living darkness; lethal to touch."),
    power("Tenebrous Form", "Become shadowstuff; pass through cracks."),
];

const QUIETUS: [PowerInfo; 5] = [
    power("Silence of Death", "Create zone of absolute silence."),
    power("Scorpion's Touch", "Envenomate blood/weapon; inflict penalties."),
    power("Dagon's Call", "Command victim’s blood to surge painfully."),
    power("Baal's Caress", "Coat weapon with deadly ichor."),
    power("Blood of Acid", "Your blood becomes corrosive."),
];

const VICISSITUDE: [PowerInfo; 5] = [
    power("Malleable Visage", "Reshape your face/flesh."),
    power("Fleshcraft", "Reshape flesh of others (willing or subdued)."),
    power("Bonecraft", "Reshape bone; change structure."),
    power("Horrid Form", "Monstrous battle-form with bonuses."),
    power("Bloodform", "Liquefy into blood; seep through cracks."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_clan_has_three_distinct_disciplines() {
        for clan in Clan::ALL {
            let list = clan.disciplines();
            assert_ne!(list[0], list[1]);
            assert_ne!(list[1], list[2]);
            assert_ne!(list[0], list[2]);
            assert_eq!(allowed_disciplines(Some(clan)), &list[..]);
        }
        assert_eq!(
            Clan::Gangrel.disciplines(),
            &[Discipline::Animalism, Discipline::Fortitude, Discipline::Protean]
        );
        assert_eq!(
            Clan::Tzimisce.disciplines(),
            &[Discipline::Animalism, Discipline::Auspex, Discipline::Vicissitude]
        );
    }

    #[test]
    fn no_clan_allows_nothing() {
        assert!(allowed_disciplines(None).is_empty());
    }

    #[test]
    fn power_lookup_is_one_based() {
        assert_eq!(Discipline::Protean.power(1).unwrap().name, "Eyes of the Beast");
        assert_eq!(Discipline::Protean.power(5).unwrap().name, "Mist Form");
        assert!(Discipline::Protean.power(0).is_none());
        assert!(Discipline::Protean.power(6).is_none());
    }

    #[test]
    fn clan_name_serde_treats_empty_as_none() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Holder {
            #[serde(with = "clan_name")]
            clan: Option<Clan>,
        }

        let none: Holder = serde_json::from_str(r#"{"clan":""}"#).unwrap();
        assert!(none.clan.is_none());
        assert_eq!(serde_json::to_string(&none).unwrap(), r#"{"clan":""}"#);

        let some: Holder = serde_json::from_str(r#"{"clan":"Gangrel"}"#).unwrap();
        assert_eq!(some.clan, Some(Clan::Gangrel));

        assert!(serde_json::from_str::<Holder>(r#"{"clan":"Baali"}"#).is_err());
    }
}
