//! Sheet export and import.
//!
//! The document is `{"builder": {...}, "freebies": {...}}`. Import accepts
//! either half on its own and leaves the other half untouched. The whole
//! document is parsed and validated before anything is written, so a
//! rejected import leaves the character exactly as it was. Freebie counters
//! for disciplines outside the resulting clan are pruned and refunded rather
//! than rejected, since a clan switch after visiting the freebie page leaves
//! zero counters behind in exported sheets.

use serde::{Deserialize, Serialize};

use crate::character::{
    Builder, CharacterState, FreebiePool, Priorities, PriorityCategory, TraitKey,
};
use crate::error::DomainError;
use crate::game_systems::{BasePool, TRAIT_CAP};
use crate::reference::{allowed_disciplines, Clan, Discipline, Virtue, GENERATION_TABLE};

/// Import payload. Either half may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportDocument {
    #[serde(default)]
    pub builder: Option<Builder>,
    #[serde(default)]
    pub freebies: Option<FreebiePool>,
}

/// Which halves an import replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub builder: bool,
    pub freebies: bool,
    /// Freebie points returned for out-of-clan discipline counters dropped
    /// from the imported or existing ledger.
    pub refunded: u32,
}

impl CharacterState {
    /// Pretty-printed sheet document.
    pub fn export_document(&self) -> Result<String, DomainError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse, validate, then commit an import document.
    pub fn import_document(&mut self, raw: &str) -> Result<ImportSummary, DomainError> {
        let document: ImportDocument = serde_json::from_str(raw)?;
        self.import(document)
    }

    pub fn import(&mut self, document: ImportDocument) -> Result<ImportSummary, DomainError> {
        if document.builder.is_none() && document.freebies.is_none() {
            return Ok(ImportSummary::default());
        }

        let clan = document
            .builder
            .as_ref()
            .map_or(self.builder.clan(), Builder::clan);
        if let Some(builder) = &document.builder {
            validate_builder(builder)?;
        }
        if let Some(freebies) = &document.freebies {
            validate_freebies(freebies)?;
        }

        let mut summary = ImportSummary::default();
        if let Some(builder) = document.builder {
            self.builder = builder;
            summary.builder = true;
        }
        if let Some(freebies) = document.freebies {
            self.freebies = freebies;
            summary.freebies = true;
        }
        summary.refunded = self.prune_freebie_disciplines(clan);
        Ok(summary)
    }
}

fn validate_priorities<C: PriorityCategory>(
    label: &str,
    priorities: &Priorities<C>,
) -> Result<(), DomainError> {
    if priorities.is_permutation() {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "{} priorities must rank three different categories",
            label
        )))
    }
}

fn validate_builder(builder: &Builder) -> Result<(), DomainError> {
    let attributes = &builder.attributes;
    if !attributes.dots.has_exact_keys() {
        return Err(DomainError::validation(
            "attributes must list exactly the nine attributes under their groups",
        ));
    }
    if let Some((attribute, _)) = attributes.dots.iter().find(|(_, v)| *v < 1) {
        return Err(DomainError::validation(format!(
            "attribute {} must be at least 1",
            attribute
        )));
    }
    validate_priorities("attribute", &attributes.priorities)?;

    if !builder.abilities.dots.has_exact_keys() {
        return Err(DomainError::validation(
            "abilities must list exactly the thirty abilities under their categories",
        ));
    }
    validate_priorities("ability", &builder.abilities.priorities)?;
    if !builder.specialties.is_well_placed() {
        return Err(DomainError::validation(
            "ability specialties must sit under their own category",
        ));
    }

    if builder.virtues.len() != Virtue::ALL.len() {
        return Err(DomainError::validation(
            "virtues must list Conscience, SelfControl and Courage",
        ));
    }
    if let Some((virtue, _)) = builder.virtues.iter().find(|(_, v)| **v < 1) {
        return Err(DomainError::validation(format!(
            "virtue {} must be at least 1",
            virtue
        )));
    }

    check_maximums(builder)?;
    check_disciplines(builder.clan(), builder.disciplines.keys())?;
    check_budgets(builder)
}

/// Highest base an attribute can hold at any generation.
fn attribute_maximum() -> u8 {
    GENERATION_TABLE
        .iter()
        .map(|tier| tier.trait_ceiling)
        .max()
        .unwrap_or(TRAIT_CAP)
}

fn check_maximums(builder: &Builder) -> Result<(), DomainError> {
    let attribute_max = attribute_maximum();
    let capped = |key: TraitKey, value: u8| (key, value, TRAIT_CAP);

    let attributes = builder
        .attributes
        .dots
        .iter()
        .map(|(a, v)| (TraitKey::Attribute(a), v, attribute_max));
    let abilities = builder
        .abilities
        .dots
        .iter()
        .map(|(a, v)| capped(TraitKey::Ability(a), v));
    let disciplines = builder
        .disciplines
        .iter()
        .map(|(d, v)| capped(TraitKey::Discipline(*d), *v));
    let backgrounds = builder
        .backgrounds
        .iter()
        .map(|(b, v)| capped(TraitKey::Background(*b), *v));
    let virtues = builder
        .virtues
        .iter()
        .map(|(v, dots)| capped(TraitKey::Virtue(*v), *dots));

    let over = attributes
        .chain(abilities)
        .chain(disciplines)
        .chain(backgrounds)
        .chain(virtues)
        .find(|(_, value, max)| value > max);
    match over {
        None => Ok(()),
        Some((key, value, max)) => Err(DomainError::validation(format!(
            "{} is {} but may not exceed {}",
            key.display_name(),
            value,
            max
        ))),
    }
}

fn check_budgets(builder: &Builder) -> Result<(), DomainError> {
    let candidate = CharacterState {
        builder: builder.clone(),
        freebies: FreebiePool::default(),
    };
    let overspent = BasePool::all()
        .map(|pool| (pool, candidate.pool_status(pool)))
        .find(|(_, status)| status.spent > status.budget);
    match overspent {
        None => Ok(()),
        Some((pool, status)) => Err(DomainError::validation(format!(
            "{} spend {} exceeds its budget of {}",
            pool.label(),
            status.spent,
            status.budget
        ))),
    }
}

fn validate_freebies(freebies: &FreebiePool) -> Result<(), DomainError> {
    if !freebies.attributes.has_exact_keys() {
        return Err(DomainError::validation(
            "freebie attributes must list exactly the nine attributes under their groups",
        ));
    }
    if !freebies.abilities.has_exact_keys() {
        return Err(DomainError::validation(
            "freebie abilities must list exactly the thirty abilities under their categories",
        ));
    }
    if freebies.virtues.len() != Virtue::ALL.len() {
        return Err(DomainError::validation(
            "freebie virtues must list Conscience, SelfControl and Courage",
        ));
    }
    Ok(())
}

fn check_disciplines<'a>(
    clan: Option<Clan>,
    mut keys: impl Iterator<Item = &'a Discipline>,
) -> Result<(), DomainError> {
    let allowed = allowed_disciplines(clan);
    match keys.find(|d| !allowed.contains(d)) {
        None => Ok(()),
        Some(d) => Err(DomainError::constraint(match clan {
            Some(clan) => format!("{} is not a {} discipline", d, clan),
            None => format!("{} requires a clan", d),
        })),
    }
}
