//! Static catalog served to clients: vocabularies, clans, powers, tiers,
//! and freebie prices.

use serde::Serialize;
use vtm_builder_domain::reference::GENERATION_TABLE;
use vtm_builder_domain::{
    Ability, AbilityCategory, Attribute, AttributeGroup, Background, Clan, Discipline,
    FreebieTarget, GenerationInfo, PowerInfo, Virtue, NATURES, STARTING_FREEBIES,
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceData {
    pub attribute_groups: Vec<NamedGroup>,
    pub ability_categories: Vec<NamedGroup>,
    pub backgrounds: Vec<&'static str>,
    pub virtues: Vec<&'static str>,
    pub clans: Vec<ClanEntry>,
    pub disciplines: Vec<DisciplineEntry>,
    pub generations: Vec<GenerationInfo>,
    pub natures: Vec<&'static str>,
    pub freebie_costs: Vec<CostEntry>,
    pub starting_freebies: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct NamedGroup {
    pub name: &'static str,
    pub traits: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClanEntry {
    pub name: &'static str,
    pub disciplines: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DisciplineEntry {
    pub name: &'static str,
    pub powers: &'static [PowerInfo],
}

#[derive(Debug, Clone, Serialize)]
pub struct CostEntry {
    pub kind: &'static str,
    pub cost: u32,
}

pub fn reference_data() -> ReferenceData {
    ReferenceData {
        attribute_groups: AttributeGroup::ALL
            .into_iter()
            .map(|g| NamedGroup {
                name: g.display_name(),
                traits: g.attributes().iter().map(|a| a.display_name()).collect(),
            })
            .collect(),
        ability_categories: AbilityCategory::ALL
            .into_iter()
            .map(|c| NamedGroup {
                name: c.display_name(),
                traits: c.abilities().iter().map(|a| a.display_name()).collect(),
            })
            .collect(),
        backgrounds: Background::ALL.iter().map(|b| b.display_name()).collect(),
        virtues: Virtue::ALL.iter().map(|v| v.display_name()).collect(),
        clans: Clan::ALL
            .iter()
            .map(|c| ClanEntry {
                name: c.display_name(),
                disciplines: c.disciplines().iter().map(|d| d.display_name()).collect(),
            })
            .collect(),
        disciplines: Discipline::ALL
            .iter()
            .map(|d| DisciplineEntry {
                name: d.display_name(),
                powers: d.powers(),
            })
            .collect(),
        generations: GENERATION_TABLE.to_vec(),
        natures: NATURES.to_vec(),
        freebie_costs: [
            FreebieTarget::Attribute(Attribute::Strength),
            FreebieTarget::Ability(Ability::Alertness),
            FreebieTarget::Discipline(Discipline::Animalism),
            FreebieTarget::Background(Background::Allies),
            FreebieTarget::Virtue(Virtue::Conscience),
            FreebieTarget::Humanity,
            FreebieTarget::Willpower,
        ]
        .iter()
        .map(|t| CostEntry {
            kind: cost_kind(t),
            cost: t.cost(),
        })
        .collect(),
        starting_freebies: STARTING_FREEBIES,
    }
}

fn cost_kind(target: &FreebieTarget) -> &'static str {
    match target {
        FreebieTarget::Attribute(_) => "attribute",
        FreebieTarget::Ability(_) => "ability",
        FreebieTarget::Discipline(_) => "discipline",
        FreebieTarget::Background(_) => "background",
        FreebieTarget::Virtue(_) => "virtue",
        FreebieTarget::Humanity => "humanity",
        FreebieTarget::Willpower => "willpower",
    }
}
