//! Fixed trait vocabularies: attributes, abilities, backgrounds, and virtues.
//!
//! Every trait is a stable enum key. Display names are resolved at the
//! boundary via `display_name()`; serde names match the persisted sheet
//! document exactly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

// =============================================================================
// Attributes
// =============================================================================

/// The three attribute groups ranked by attribute priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeGroup {
    Physical,
    Social,
    Mental,
}

impl AttributeGroup {
    pub const ALL: [AttributeGroup; 3] = [Self::Physical, Self::Social, Self::Mental];

    /// Persisted key (e.g., "physical").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Physical => "physical",
            Self::Social => "social",
            Self::Mental => "mental",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Physical => "Physical",
            Self::Social => "Social",
            Self::Mental => "Mental",
        }
    }

    /// Attributes belonging to this group, in sheet order.
    pub fn attributes(&self) -> [Attribute; 3] {
        match self {
            Self::Physical => [Attribute::Strength, Attribute::Dexterity, Attribute::Stamina],
            Self::Social => [
                Attribute::Charisma,
                Attribute::Manipulation,
                Attribute::Appearance,
            ],
            Self::Mental => [
                Attribute::Perception,
                Attribute::Intelligence,
                Attribute::Wits,
            ],
        }
    }
}

impl fmt::Display for AttributeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeGroup {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "physical" => Ok(Self::Physical),
            "social" => Ok(Self::Social),
            "mental" => Ok(Self::Mental),
            other => Err(DomainError::parse(format!(
                "Unknown attribute group: {}",
                other
            ))),
        }
    }
}

/// The nine attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Strength,
    Dexterity,
    Stamina,
    Charisma,
    Manipulation,
    Appearance,
    Perception,
    Intelligence,
    Wits,
}

impl Attribute {
    pub const ALL: [Attribute; 9] = [
        Self::Strength,
        Self::Dexterity,
        Self::Stamina,
        Self::Charisma,
        Self::Manipulation,
        Self::Appearance,
        Self::Perception,
        Self::Intelligence,
        Self::Wits,
    ];

    pub fn group(&self) -> AttributeGroup {
        match self {
            Self::Strength | Self::Dexterity | Self::Stamina => AttributeGroup::Physical,
            Self::Charisma | Self::Manipulation | Self::Appearance => AttributeGroup::Social,
            Self::Perception | Self::Intelligence | Self::Wits => AttributeGroup::Mental,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Stamina => "Stamina",
            Self::Charisma => "Charisma",
            Self::Manipulation => "Manipulation",
            Self::Appearance => "Appearance",
            Self::Perception => "Perception",
            Self::Intelligence => "Intelligence",
            Self::Wits => "Wits",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Attribute {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::parse(format!("Unknown attribute: {}", s)))
    }
}

// =============================================================================
// Abilities
// =============================================================================

/// The three ability categories ranked by ability priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityCategory {
    Talents,
    Skills,
    Knowledges,
}

impl AbilityCategory {
    pub const ALL: [AbilityCategory; 3] = [Self::Talents, Self::Skills, Self::Knowledges];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Talents => "talents",
            Self::Skills => "skills",
            Self::Knowledges => "knowledges",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Talents => "Talents",
            Self::Skills => "Skills",
            Self::Knowledges => "Knowledges",
        }
    }

    /// Abilities belonging to this category, in sheet order.
    pub fn abilities(&self) -> [Ability; 10] {
        use Ability::*;
        match self {
            Self::Talents => [
                Alertness,
                Athletics,
                Brawl,
                Awareness,
                Empathy,
                Expression,
                Intimidation,
                Leadership,
                Streetwise,
                Subterfuge,
            ],
            Self::Skills => [
                AnimalKen,
                Crafts,
                Drive,
                Etiquette,
                Firearms,
                Larceny,
                Melee,
                Performance,
                Stealth,
                Survival,
            ],
            Self::Knowledges => [
                Academics,
                Computer,
                Finance,
                Investigation,
                Law,
                Linguistics,
                Medicine,
                Occult,
                Politics,
                Science,
            ],
        }
    }
}

impl fmt::Display for AbilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AbilityCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "talents" => Ok(Self::Talents),
            "skills" => Ok(Self::Skills),
            "knowledges" => Ok(Self::Knowledges),
            other => Err(DomainError::parse(format!(
                "Unknown ability category: {}",
                other
            ))),
        }
    }
}

/// The thirty abilities.
///
/// `Awareness` replaces Dodge in the talent list and is persisted under its
/// historical sheet key "Awarness".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ability {
    // Talents
    Alertness,
    Athletics,
    Brawl,
    #[serde(rename = "Awarness")]
    Awareness,
    Empathy,
    Expression,
    Intimidation,
    Leadership,
    Streetwise,
    Subterfuge,
    // Skills
    #[serde(rename = "Animal Ken")]
    AnimalKen,
    Crafts,
    Drive,
    Etiquette,
    Firearms,
    Larceny,
    Melee,
    Performance,
    Stealth,
    Survival,
    // Knowledges
    Academics,
    Computer,
    Finance,
    Investigation,
    Law,
    Linguistics,
    Medicine,
    Occult,
    Politics,
    Science,
}

impl Ability {
    pub fn all() -> impl Iterator<Item = Ability> {
        AbilityCategory::ALL
            .into_iter()
            .flat_map(|category| category.abilities())
    }

    pub fn category(&self) -> AbilityCategory {
        use Ability::*;
        match self {
            Alertness | Athletics | Brawl | Awareness | Empathy | Expression | Intimidation
            | Leadership | Streetwise | Subterfuge => AbilityCategory::Talents,
            AnimalKen | Crafts | Drive | Etiquette | Firearms | Larceny | Melee | Performance
            | Stealth | Survival => AbilityCategory::Skills,
            Academics | Computer | Finance | Investigation | Law | Linguistics | Medicine
            | Occult | Politics | Science => AbilityCategory::Knowledges,
        }
    }

    /// Sheet label. Matches the persisted key.
    pub fn display_name(&self) -> &'static str {
        use Ability::*;
        match self {
            Alertness => "Alertness",
            Athletics => "Athletics",
            Brawl => "Brawl",
            Awareness => "Awarness",
            Empathy => "Empathy",
            Expression => "Expression",
            Intimidation => "Intimidation",
            Leadership => "Leadership",
            Streetwise => "Streetwise",
            Subterfuge => "Subterfuge",
            AnimalKen => "Animal Ken",
            Crafts => "Crafts",
            Drive => "Drive",
            Etiquette => "Etiquette",
            Firearms => "Firearms",
            Larceny => "Larceny",
            Melee => "Melee",
            Performance => "Performance",
            Stealth => "Stealth",
            Survival => "Survival",
            Academics => "Academics",
            Computer => "Computer",
            Finance => "Finance",
            Investigation => "Investigation",
            Law => "Law",
            Linguistics => "Linguistics",
            Medicine => "Medicine",
            Occult => "Occult",
            Politics => "Politics",
            Science => "Science",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Ability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("awareness") {
            return Ok(Self::Awareness);
        }
        Self::all()
            .find(|a| a.display_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::parse(format!("Unknown ability: {}", s)))
    }
}

// =============================================================================
// Backgrounds
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Background {
    Allies,
    Contacts,
    Fame,
    Generation,
    Herd,
    Influence,
    Mentor,
    Resources,
    Retainers,
    Status,
}

impl Background {
    pub const ALL: [Background; 10] = [
        Self::Allies,
        Self::Contacts,
        Self::Fame,
        Self::Generation,
        Self::Herd,
        Self::Influence,
        Self::Mentor,
        Self::Resources,
        Self::Retainers,
        Self::Status,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Allies => "Allies",
            Self::Contacts => "Contacts",
            Self::Fame => "Fame",
            Self::Generation => "Generation",
            Self::Herd => "Herd",
            Self::Influence => "Influence",
            Self::Mentor => "Mentor",
            Self::Resources => "Resources",
            Self::Retainers => "Retainers",
            Self::Status => "Status",
        }
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Background {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::parse(format!("Unknown background: {}", s)))
    }
}

// =============================================================================
// Virtues
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Virtue {
    Conscience,
    SelfControl,
    Courage,
}

impl Virtue {
    pub const ALL: [Virtue; 3] = [Self::Conscience, Self::SelfControl, Self::Courage];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Conscience => "Conscience",
            Self::SelfControl => "Self-Control",
            Self::Courage => "Courage",
        }
    }
}

impl fmt::Display for Virtue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Virtue {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "").as_str() {
            "conscience" => Ok(Self::Conscience),
            "selfcontrol" => Ok(Self::SelfControl),
            "courage" => Ok(Self::Courage),
            _ => Err(DomainError::parse(format!("Unknown virtue: {}", s))),
        }
    }
}
