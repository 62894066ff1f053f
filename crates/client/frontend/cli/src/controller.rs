//! Routes decoded key presses to the battle manager.
//!
//! The controller plays the role of the button widgets: a key only reaches
//! the manager when the matching button in the [`ButtonPanel`] is enabled,
//! exactly as a locked button would swallow a click.

use battle_content::MonsterRoster;
use battle_core::{
    ActionButton, BattleManager, BattleState, BattleStatus, ButtonId, ButtonPanel, Hero, Monster,
    PotionKind,
};
use strum::IntoEnumIterator;

use crate::input::KeyAction;

/// Why a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// Retreated after a victory.
    Retreated,
    /// Ran away mid-fight.
    Fled,
    Defeated,
    /// Closed the client.
    Quit,
}

impl SessionEnd {
    /// Closing line printed once the terminal is restored.
    pub fn summary(self, hero: &Hero, monster: Option<&Monster>) -> String {
        let monster_name = monster.map_or("the monster", |monster| monster.name.as_str());
        match self {
            SessionEnd::Defeated => format!(
                "{} was defeated in battle by {} after slaying {} monsters!",
                hero.name, monster_name, hero.monsters_slain
            ),
            SessionEnd::Fled if hero.monsters_slain == 0 => {
                format!("{} escaped before being defeated by {}!", hero.name, monster_name)
            }
            SessionEnd::Retreated | SessionEnd::Fled => format!(
                "{} retired victorious from the battle after slaying {} monsters!",
                hero.name, hero.monsters_slain
            ),
            SessionEnd::Quit => format!("{} left the battle.", hero.name),
        }
    }
}

/// Result of handling one key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Running,
    Ended(SessionEnd),
}

/// Session-level state around a battle manager.
pub struct Controller {
    roster: MonsterRoster,
    buttons: ButtonPanel,
}

impl Controller {
    pub fn new(roster: MonsterRoster) -> Self {
        Self {
            roster,
            buttons: ButtonPanel::new(),
        }
    }

    pub fn buttons(&self) -> &ButtonPanel {
        &self.buttons
    }

    /// Starts the encounter the hero's slay count has unlocked.
    ///
    /// Returns `false` when the roster has nothing for this hero.
    pub fn start_next_battle(&mut self, manager: &mut BattleManager<'_>) -> bool {
        let Some(template) = self.roster.pick(manager.hero().monsters_slain) else {
            tracing::warn!(
                slain = manager.hero().monsters_slain,
                "no monster unlocked for hero"
            );
            return false;
        };
        manager.start_battle(template.spawn());
        self.refresh(manager);
        true
    }

    /// Recomputes every button from the manager's state.
    pub fn refresh(&mut self, manager: &BattleManager<'_>) {
        manager.update_button_states(&mut self.buttons);
    }

    /// Handles one decoded key, then polls the battle for its end.
    pub fn apply(&mut self, manager: &mut BattleManager<'_>, action: KeyAction) -> Step {
        match action {
            KeyAction::Quit => return Step::Ended(SessionEnd::Quit),
            KeyAction::None => return Step::Running,
            KeyAction::Ability => {
                if self.enabled(ActionButton::Ability) {
                    let outcome = manager.handle_ability(None);
                    tracing::debug!(?outcome, "ability button");
                }
            }
            KeyAction::Potion => {
                if self.enabled(ActionButton::Potion) {
                    let outcome = manager.handle_use_potion();
                    tracing::debug!(?outcome, "potion button");
                }
            }
            KeyAction::Rest => {
                if self.enabled(ActionButton::Rest) {
                    let outcome = manager.handle_rest();
                    tracing::debug!(?outcome, "rest button");
                }
            }
            KeyAction::Flee => {
                if self.enabled(ActionButton::Flee) {
                    let fled = manager.handle_flee();
                    tracing::debug!(fled, "flee button");
                }
            }
            KeyAction::Pick(slot) => self.pick(manager, slot),
            KeyAction::Continue => {
                if self.enabled(ActionButton::Continue)
                    && manager.handle_continue().is_some()
                    && !self.start_next_battle(manager)
                {
                    return Step::Ended(SessionEnd::Retreated);
                }
            }
            KeyAction::Retreat => {
                if self.enabled(ActionButton::Retreat) && manager.handle_retreat().is_some() {
                    self.refresh(manager);
                    return Step::Ended(SessionEnd::Retreated);
                }
            }
        }

        let step = match manager.update_battle_state() {
            BattleStatus::HeroDefeated => Step::Ended(SessionEnd::Defeated),
            BattleStatus::Fled => Step::Ended(SessionEnd::Fled),
            BattleStatus::MonsterDefeated | BattleStatus::Continuing => Step::Running,
        };
        self.refresh(manager);
        step
    }

    fn pick(&mut self, manager: &mut BattleManager<'_>, slot: usize) {
        match manager.state() {
            BattleState::UseAbility => {
                if !self.enabled(ButtonId::AbilitySlot(slot)) {
                    return;
                }
                let Some(name) = manager.hero().abilities.get(slot).map(|a| a.name.clone()) else {
                    return;
                };
                let outcome = manager.handle_ability(Some(&name));
                tracing::debug!(?outcome, ability = %name, "ability slot");
            }
            BattleState::UseItem => {
                let Some(kind) = PotionKind::iter().nth(slot) else {
                    return;
                };
                if self.enabled(kind) {
                    let outcome = manager.use_potion(kind);
                    tracing::debug!(?outcome, potion = %kind, "potion slot");
                }
            }
            _ => {}
        }
    }

    fn enabled(&self, id: impl Into<ButtonId>) -> bool {
        self.buttons.is_enabled(id)
    }
}
