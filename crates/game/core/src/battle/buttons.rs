//! Projection of battle state onto the button adapter.

use strum::IntoEnumIterator;

use super::{BattleManager, BattleState, TurnState};
use crate::potion::PotionKind;
use crate::ui::{ActionButton, Button, ButtonAdapter, ButtonId};

impl BattleManager<'_> {
    /// Locks, unlocks, shows, and hides buttons to mirror the current state.
    ///
    /// Never changes battle state; calling it twice in a row leaves the
    /// buttons exactly as after the first call.
    pub fn update_button_states<A: ButtonAdapter>(&self, buttons: &mut A) {
        if self.state == BattleState::MonsterDefeated {
            set_all(buttons, ActionButton::COMBAT, Visibility::Unchanged, Lock::Locked);
            set_all(buttons, ActionButton::VICTORY, Visibility::Shown, Lock::Unlocked);
            self.hide_ability_slots(buttons);
            hide_potions(buttons);
            return;
        }

        set_all(buttons, ActionButton::VICTORY, Visibility::Hidden, Lock::Locked);

        if self.turn == TurnState::MonsterTurn {
            set_all(buttons, ActionButton::COMBAT, Visibility::Unchanged, Lock::Locked);
            self.hide_ability_slots(buttons);
            hide_potions(buttons);
            return;
        }

        match self.state {
            BattleState::Home => {
                set_all(
                    buttons,
                    [ActionButton::Ability, ActionButton::Rest, ActionButton::Flee],
                    Visibility::Shown,
                    Lock::Unlocked,
                );
                let potion_lock = if self.hero.has_potions() {
                    Lock::Unlocked
                } else {
                    Lock::Locked
                };
                set_all(buttons, [ActionButton::Potion], Visibility::Shown, potion_lock);
                self.hide_ability_slots(buttons);
                hide_potions(buttons);
            }
            BattleState::UseAbility => {
                set_all(buttons, [ActionButton::Ability], Visibility::Shown, Lock::Unlocked);
                set_all(
                    buttons,
                    [ActionButton::Rest, ActionButton::Potion, ActionButton::Flee],
                    Visibility::Unchanged,
                    Lock::Locked,
                );
                self.show_ability_slots(buttons);
                hide_potions(buttons);
            }
            BattleState::UseItem => {
                set_all(buttons, [ActionButton::Potion], Visibility::Shown, Lock::Unlocked);
                set_all(
                    buttons,
                    [ActionButton::Ability, ActionButton::Rest, ActionButton::Flee],
                    Visibility::Unchanged,
                    Lock::Locked,
                );
                self.show_potions(buttons);
                self.hide_ability_slots(buttons);
            }
            BattleState::RunAway => {
                set_all(buttons, ActionButton::COMBAT, Visibility::Unchanged, Lock::Locked);
                self.hide_ability_slots(buttons);
                hide_potions(buttons);
            }
            BattleState::MonsterDefeated => {}
        }
    }

    fn show_ability_slots<A: ButtonAdapter>(&self, buttons: &mut A) {
        for (slot, ability) in self.hero.abilities.iter().enumerate() {
            let button = buttons.button(ButtonId::AbilitySlot(slot));
            button.show();
            if ability.can_use() && ability.is_affordable(self.hero.energy) {
                button.unlock();
            } else {
                button.lock();
            }
        }
    }

    fn hide_ability_slots<A: ButtonAdapter>(&self, buttons: &mut A) {
        for slot in 0..self.hero.abilities.len() {
            buttons.button(ButtonId::AbilitySlot(slot)).hide();
        }
    }

    fn show_potions<A: ButtonAdapter>(&self, buttons: &mut A) {
        for kind in PotionKind::iter() {
            let button = buttons.button(ButtonId::Potion(kind));
            button.show();
            if self.hero.potions.count(kind) > 0 {
                button.unlock();
            } else {
                button.lock();
            }
        }
    }
}

#[derive(Clone, Copy)]
enum Visibility {
    Shown,
    Hidden,
    Unchanged,
}

#[derive(Clone, Copy)]
enum Lock {
    Locked,
    Unlocked,
}

fn set_all<A: ButtonAdapter>(
    buttons: &mut A,
    actions: impl IntoIterator<Item = ActionButton>,
    visibility: Visibility,
    lock: Lock,
) {
    for action in actions {
        let button = buttons.button(action.into());
        match visibility {
            Visibility::Shown => button.show(),
            Visibility::Hidden => button.hide(),
            Visibility::Unchanged => {}
        }
        match lock {
            Lock::Locked => button.lock(),
            Lock::Unlocked => button.unlock(),
        }
    }
}

fn hide_potions<A: ButtonAdapter>(buttons: &mut A) {
    for kind in PotionKind::iter() {
        buttons.button(ButtonId::Potion(kind)).hide();
    }
}

#[cfg(test)]
mod tests {
    use crate::ability::Ability;
    use crate::battle::{BattleLog, BattleManager, BattleState};
    use crate::combatant::{Health, Hero, Monster};
    use crate::config::BattleConfig;
    use crate::potion::{PotionBag, PotionKind};
    use crate::ui::{ActionButton, ButtonId, ButtonPanel};
    use strum::IntoEnumIterator;

    fn hero() -> Hero {
        let mut hero = Hero::new("Aria", Health::full(20), 4);
        hero.learn(Ability::strike("Slash", 1, 0, 2)).unwrap();
        hero.learn(Ability::strike("Fireball", 5, 2, 8)).unwrap();
        hero
    }

    fn goblin() -> Monster {
        Monster::new("Goblin", Health::full(30), 1, 4, 7)
    }

    fn assert_refresh_is_stable(manager: &BattleManager<'_>, panel: &mut ButtonPanel) {
        let first = panel.clone();
        manager.update_button_states(panel);

        let ids = ActionButton::iter()
            .map(ButtonId::from)
            .chain((0..2).map(ButtonId::AbilitySlot))
            .chain(PotionKind::iter().map(ButtonId::from));
        for id in ids {
            assert_eq!(first.flags(id), panel.flags(id), "{id:?} changed on refresh");
        }
    }

    #[test]
    fn home_hides_submenus_and_gates_potion_on_inventory() {
        let mut hero = hero().with_potions(PotionBag::empty());
        let mut log = BattleLog::new();
        let mut manager = BattleManager::new(&mut hero, &mut log, BattleConfig::default());
        manager.start_battle(goblin());

        let mut panel = ButtonPanel::new();
        manager.update_button_states(&mut panel);
        assert_refresh_is_stable(&manager, &mut panel);

        assert!(panel.is_enabled(ActionButton::Ability));
        assert!(panel.is_enabled(ActionButton::Rest));
        assert!(panel.is_enabled(ActionButton::Flee));
        assert!(panel.is_visible(ActionButton::Potion));
        assert!(panel.is_locked(ActionButton::Potion));
        assert!(!panel.is_visible(ActionButton::Continue));
        assert!(!panel.is_visible(ButtonId::AbilitySlot(0)));
        assert!(!panel.is_visible(PotionKind::Health));
    }

    #[test]
    fn ability_menu_locks_unaffordable_slots() {
        let mut hero = hero();
        let mut log = BattleLog::new();
        let mut manager = BattleManager::new(&mut hero, &mut log, BattleConfig::default());
        manager.start_battle(goblin());
        manager.handle_ability(None);
        assert_eq!(manager.state(), BattleState::UseAbility);

        let mut panel = ButtonPanel::new();
        manager.update_button_states(&mut panel);
        assert_refresh_is_stable(&manager, &mut panel);

        assert!(panel.is_enabled(ActionButton::Ability));
        assert!(panel.is_locked(ActionButton::Rest));
        assert!(panel.is_locked(ActionButton::Potion));
        assert!(panel.is_locked(ActionButton::Flee));
        assert!(panel.is_enabled(ButtonId::AbilitySlot(0)));
        assert!(panel.is_visible(ButtonId::AbilitySlot(1)));
        assert!(panel.is_locked(ButtonId::AbilitySlot(1)));
    }

    #[test]
    fn potion_menu_locks_empty_slots() {
        let mut hero = hero().with_potions(PotionBag::with_counts([(PotionKind::Health, 1)]));
        let mut log = BattleLog::new();
        let mut manager = BattleManager::new(&mut hero, &mut log, BattleConfig::default());
        manager.start_battle(goblin());
        manager.handle_use_potion();

        let mut panel = ButtonPanel::new();
        manager.update_button_states(&mut panel);
        assert_refresh_is_stable(&manager, &mut panel);

        assert!(panel.is_enabled(ActionButton::Potion));
        assert!(panel.is_locked(ActionButton::Ability));
        assert!(panel.is_enabled(PotionKind::Health));
        assert!(panel.is_visible(PotionKind::Block));
        assert!(panel.is_locked(PotionKind::Block));
        assert!(!panel.is_visible(ButtonId::AbilitySlot(0)));
    }

    #[test]
    fn victory_offers_only_continue_and_retreat() {
        let mut hero = hero();
        let mut log = BattleLog::new();
        let mut manager = BattleManager::new(&mut hero, &mut log, BattleConfig::default());
        manager.start_battle(Monster::new("Rat", Health::full(1), 1, 1, 1));
        manager.handle_ability(None);
        manager.handle_ability(Some("Slash"));
        manager.update_battle_state();
        assert_eq!(manager.state(), BattleState::MonsterDefeated);

        let mut panel = ButtonPanel::new();
        manager.update_button_states(&mut panel);
        let first = panel.clone();
        manager.update_button_states(&mut panel);

        for action in ActionButton::COMBAT {
            assert!(!panel.is_enabled(action));
        }
        assert!(panel.is_enabled(ActionButton::Continue));
        assert!(panel.is_enabled(ActionButton::Retreat));
        for action in ActionButton::VICTORY.into_iter().chain(ActionButton::COMBAT) {
            assert_eq!(first.flags(action), panel.flags(action));
        }
    }

    #[test]
    fn run_away_locks_everything() {
        let mut hero = hero();
        let mut log = BattleLog::new();
        let mut manager = BattleManager::new(&mut hero, &mut log, BattleConfig::default());
        manager.start_battle(goblin());
        assert!(manager.handle_flee());

        let mut panel = ButtonPanel::new();
        manager.update_button_states(&mut panel);

        for action in ActionButton::COMBAT.into_iter().chain(ActionButton::VICTORY) {
            assert!(!panel.is_enabled(action));
        }
    }
}
