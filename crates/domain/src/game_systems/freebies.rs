//! Freebie purchases and refunds.
//!
//! A purchase adds one dot on top of the base value and costs the target's
//! fixed rate. A refund removes one bought dot and returns the same amount.

use crate::character::{CharacterState, FreebieTarget};
use crate::reference::allowed_disciplines;

impl CharacterState {
    pub fn can_buy(&self, target: FreebieTarget) -> bool {
        if let FreebieTarget::Discipline(d) = target {
            if !self.discipline_allowed(d) {
                return false;
            }
        }
        self.freebies.pool >= target.cost()
            && self.target_total(target) < self.target_ceiling(target)
    }

    pub fn can_refund(&self, target: FreebieTarget) -> bool {
        self.freebies.counter(target) > 0
    }

    pub fn buy(&mut self, target: FreebieTarget) -> bool {
        if !self.can_buy(target) {
            return false;
        }
        let bought = self.freebies.counter(target) + 1;
        self.freebies.set_counter(target, bought);
        self.freebies.pool -= target.cost();
        true
    }

    pub fn refund(&mut self, target: FreebieTarget) -> bool {
        if !self.can_refund(target) {
            return false;
        }
        let bought = self.freebies.counter(target) - 1;
        self.freebies.set_counter(target, bought);
        self.freebies.pool = self.freebies.pool.saturating_add(target.cost());
        true
    }

    pub fn buy_humanity(&mut self) -> bool {
        self.buy(FreebieTarget::Humanity)
    }

    pub fn refund_humanity(&mut self) -> bool {
        self.refund(FreebieTarget::Humanity)
    }

    pub fn buy_willpower(&mut self) -> bool {
        self.buy(FreebieTarget::Willpower)
    }

    pub fn refund_willpower(&mut self) -> bool {
        self.refund(FreebieTarget::Willpower)
    }

    /// Adds a zero counter for each in-clan discipline that has none yet.
    pub fn prime_disciplines(&mut self) {
        for discipline in allowed_disciplines(self.builder.clan()) {
            self.freebies.disciplines.entry(*discipline).or_insert(0);
        }
    }

    /// Manual pool adjustment. Always applies.
    pub fn increase_pool(&mut self) -> bool {
        self.freebies.pool = self.freebies.pool.saturating_add(1);
        true
    }

    /// Manual pool adjustment. Applies while the pool is positive.
    pub fn decrease_pool(&mut self) -> bool {
        if self.freebies.pool == 0 {
            return false;
        }
        self.freebies.pool -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::TraitKey;
    use crate::reference::{Ability, Attribute, Background, Clan, Discipline, Virtue};

    fn sample_targets() -> Vec<FreebieTarget> {
        vec![
            FreebieTarget::Attribute(Attribute::Charisma),
            FreebieTarget::Ability(Ability::Occult),
            FreebieTarget::Discipline(Discipline::Auspex),
            FreebieTarget::Background(Background::Resources),
            FreebieTarget::Virtue(Virtue::Conscience),
            FreebieTarget::Humanity,
            FreebieTarget::Willpower,
        ]
    }

    #[test]
    fn buy_then_refund_is_a_no_op() {
        let mut state = CharacterState::new();
        state.set_clan(Some(Clan::Malkavian));
        for target in sample_targets() {
            let pool = state.freebies.pool;
            let total = state.target_total(target);
            assert!(state.buy(target), "buy {:?}", target);
            assert_eq!(state.freebies.pool, pool - target.cost());
            assert_eq!(state.target_total(target), total + 1);
            assert!(state.refund(target), "refund {:?}", target);
            assert_eq!(state.freebies.pool, pool);
            assert_eq!(state.target_total(target), total);
        }
    }

    #[test]
    fn buy_requires_enough_points() {
        let mut state = CharacterState::new();
        state.freebies.pool = 4;
        assert!(!state.buy(FreebieTarget::Attribute(Attribute::Wits)));
        assert!(state.buy(FreebieTarget::Ability(Ability::Law)));
        assert_eq!(state.freebies.pool, 2);
    }

    #[test]
    fn buy_stops_at_ceiling() {
        let mut state = CharacterState::new();
        state.freebies.pool = 100;
        let target = FreebieTarget::Ability(Ability::Stealth);
        let mut bought = 0;
        while state.buy(target) {
            bought += 1;
        }
        assert_eq!(bought, 5);
        assert_eq!(state.total(TraitKey::Ability(Ability::Stealth)), 5);
        assert_eq!(state.freebies.pool, 90);
    }

    #[test]
    fn attribute_buys_follow_generation_ceiling() {
        let mut state = CharacterState::new();
        state.freebies.pool = 100;
        assert!(state.set_generation(7));
        let target = FreebieTarget::Attribute(Attribute::Dexterity);
        let mut bought = 0;
        while state.buy(target) {
            bought += 1;
        }
        assert_eq!(bought, 5);
        assert_eq!(state.total(TraitKey::Attribute(Attribute::Dexterity)), 6);
        assert_eq!(state.freebies.pool, 75);
        assert!(!state.can_buy(target));

        // Dropping back to the 13th clamps the total without touching the ledger
        assert!(state.set_generation(13));
        assert_eq!(state.total(TraitKey::Attribute(Attribute::Dexterity)), 5);
        assert_eq!(state.freebies.counter(target), 5);
    }

    #[test]
    fn composites_stop_at_ten() {
        let mut state = CharacterState::new();
        state.freebies.pool = 100;
        while state.buy_humanity() {}
        while state.buy_willpower() {}
        assert_eq!(state.humanity(), 10);
        assert_eq!(state.willpower(), 10);
        assert_eq!(state.freebies.humanity_bonus, 8);
        assert_eq!(state.freebies.willpower_bonus, 9);
    }

    #[test]
    fn refund_requires_a_bought_dot() {
        let mut state = CharacterState::new();
        assert!(!state.refund(FreebieTarget::Background(Background::Allies)));
        assert!(!state.refund_humanity());
        assert_eq!(state.freebies.pool, 15);
    }

    #[test]
    fn out_of_clan_discipline_cannot_be_bought() {
        let mut state = CharacterState::new();
        state.set_clan(Some(Clan::Ventrue));
        assert!(!state.buy(FreebieTarget::Discipline(Discipline::Protean)));
        assert!(state.buy(FreebieTarget::Discipline(Discipline::Dominate)));
        assert_eq!(state.unlocked_powers(Discipline::Dominate).len(), 1);
    }

    #[test]
    fn priming_adds_zero_counters_for_clan() {
        let mut state = CharacterState::new();
        state.prime_disciplines();
        assert!(state.freebies.disciplines.is_empty());

        state.set_clan(Some(Clan::Tremere));
        state.prime_disciplines();
        assert_eq!(state.freebies.disciplines.len(), 3);
        assert!(state.freebies.disciplines.values().all(|v| *v == 0));
    }

    #[test]
    fn pool_adjustment() {
        let mut state = CharacterState::new();
        state.freebies.pool = 1;
        assert!(state.decrease_pool());
        assert!(!state.decrease_pool());
        assert_eq!(state.freebies.pool, 0);
        assert!(state.increase_pool());
        assert_eq!(state.freebies.pool, 1);
    }
}
