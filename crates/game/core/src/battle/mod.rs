//! Turn-alternating battle state machine.
//!
//! The [`BattleManager`] is the only component that decides which hero
//! actions are legal, applies their effects, and narrates them. Every hero
//! action that consumes the turn resolves the monster's turn synchronously
//! before returning, so callers only ever observe [`TurnState::HeroTurn`].

mod buttons;
mod log;
mod outcome;

pub use log::BattleLog;
pub use outcome::{ActionOutcome, BattleStatus, PostBattleChoice};

use crate::ability::{AbilityKind, AbilityRolls};
use crate::combatant::{Combatant, Hero, Monster};
use crate::config::BattleConfig;
use crate::error::{IgnoreReason, Refusal};
use crate::potion::PotionKind;
use crate::rng::{PcgRng, RngOracle, RollContext, compute_seed};

/// Whose action is currently being resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
pub enum TurnState {
    #[default]
    HeroTurn,
    MonsterTurn,
}

/// Sub-mode of the hero's turn, independent of [`TurnState`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
pub enum BattleState {
    /// Default hero menu.
    #[default]
    Home,
    /// Potion submenu open.
    UseItem,
    /// Ability submenu open.
    UseAbility,
    /// Flee chosen; the caller ends the encounter.
    RunAway,
    /// Victory. Terminal for the encounter.
    MonsterDefeated,
}

impl BattleState {
    /// Whether hero actions are still accepted in this state.
    pub const fn is_live(self) -> bool {
        !matches!(self, Self::RunAway | Self::MonsterDefeated)
    }
}

/// Battle orchestrator for one hero across successive encounters.
///
/// Borrows the hero and the battle log for as long as the battle screen is
/// up; the surrounding session keeps ownership of both. The monster of the
/// current encounter is owned here and replaced by [`Self::start_battle`].
pub struct BattleManager<'a> {
    hero: &'a mut Hero,
    log: &'a mut BattleLog,
    monster: Option<Monster>,
    turn: TurnState,
    state: BattleState,
    config: BattleConfig,
    rng: PcgRng,
    /// Resolved hero actions so far; feeds the roll seeds.
    nonce: u64,
}

impl<'a> BattleManager<'a> {
    pub fn new(hero: &'a mut Hero, log: &'a mut BattleLog, config: BattleConfig) -> Self {
        Self {
            hero,
            log,
            monster: None,
            turn: TurnState::HeroTurn,
            state: BattleState::Home,
            config,
            rng: PcgRng,
            nonce: 0,
        }
    }

    pub fn hero(&self) -> &Hero {
        &*self.hero
    }

    pub fn monster(&self) -> Option<&Monster> {
        self.monster.as_ref()
    }

    pub fn log(&self) -> &BattleLog {
        &*self.log
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Begins a fresh encounter. Callable at any time.
    pub fn start_battle(&mut self, monster: Monster) {
        tracing::info!(hero = %self.hero.name, monster = %monster.name, "battle started");
        self.log.push(format!("A {} appears!", monster.name));
        self.monster = Some(monster);
        self.state = BattleState::Home;
        self.turn = TurnState::HeroTurn;
    }

    /// Polls for the end of the encounter.
    ///
    /// Monster defeat is detected once: rewards are granted and the state
    /// becomes [`BattleState::MonsterDefeated`], after which every poll
    /// reports [`BattleStatus::Continuing`].
    pub fn update_battle_state(&mut self) -> BattleStatus {
        match self.state {
            BattleState::MonsterDefeated => return BattleStatus::Continuing,
            BattleState::RunAway => return BattleStatus::Fled,
            _ => {}
        }

        let monster_dead = self.monster.as_ref().is_some_and(|monster| !monster.is_alive());
        if self.hero.is_alive() && monster_dead {
            self.handle_monster_defeat();
            BattleStatus::MonsterDefeated
        } else if !self.hero.is_alive() {
            BattleStatus::HeroDefeated
        } else {
            BattleStatus::Continuing
        }
    }

    fn handle_monster_defeat(&mut self) {
        let Some(monster) = self.monster.as_ref() else {
            return;
        };
        let (experience, gold) = (monster.experience, monster.gold);

        self.log.push(format!("{} has been defeated!", monster.name));
        self.log.push(format!(
            "{} gains {} experience and {} gold.",
            self.hero.name, experience, gold
        ));

        if self.hero.gain_experience(experience, &self.config) {
            self.log
                .push(format!("{} reached level {}!", self.hero.name, self.hero.level));
        }
        self.hero.add_gold(gold);
        self.hero.monsters_slain += 1;
        self.state = BattleState::MonsterDefeated;

        tracing::info!(
            hero = %self.hero.name,
            experience,
            gold,
            slain = self.hero.monsters_slain,
            "monster defeated"
        );
    }

    /// Common timing guard for hero actions.
    fn hero_action_guard(&self) -> Result<(), IgnoreReason> {
        if !self.state.is_live() {
            return Err(IgnoreReason::BattleOver);
        }
        if self.turn != TurnState::HeroTurn {
            return Err(IgnoreReason::NotHeroTurn);
        }
        if !self.monster.as_ref().is_some_and(Monster::is_alive) {
            return Err(IgnoreReason::NoLivingMonster);
        }
        Ok(())
    }

    fn ignore(&self, action: &'static str, reason: IgnoreReason) -> ActionOutcome {
        tracing::trace!(action, %reason, "hero action ignored");
        ActionOutcome::Ignored(reason)
    }

    fn refuse(&mut self, refusal: Refusal) -> ActionOutcome {
        tracing::debug!(code = refusal.code(), "hero action refused");
        self.log.push(refusal.to_string());
        ActionOutcome::Refused(refusal)
    }

    /// Opens or closes the ability submenu, or uses the named ability.
    pub fn handle_ability(&mut self, ability_name: Option<&str>) -> ActionOutcome {
        if let Err(reason) = self.hero_action_guard() {
            return self.ignore("ability", reason);
        }

        if let Some(name) = ability_name {
            return self.use_ability(name);
        }

        self.state = match self.state {
            BattleState::UseAbility => BattleState::Home,
            _ => BattleState::UseAbility,
        };
        tracing::debug!(state = %self.state, "ability menu toggled");
        ActionOutcome::MenuToggled(self.state)
    }

    /// Uses a named ability against the monster.
    ///
    /// Checks run in a fixed order before anything is mutated: known ability,
    /// cooldown, then energy. A refused ability costs neither energy nor the
    /// turn.
    pub fn use_ability(&mut self, name: &str) -> ActionOutcome {
        if let Err(reason) = self.hero_action_guard() {
            return self.ignore("use_ability", reason);
        }
        if self.state != BattleState::UseAbility {
            return self.ignore("use_ability", IgnoreReason::WrongMenu);
        }

        let rolls = AbilityRolls {
            hit: self.roll(RollContext::Hit),
            critical: self.roll(RollContext::Critical),
        };

        let Some((index, ability)) = self.hero.ability(name) else {
            let refusal = Refusal::UnknownAbility {
                hero: self.hero.name.clone(),
                ability: name.to_string(),
            };
            return self.refuse(refusal);
        };
        if !ability.can_use() {
            let refusal = Refusal::OnCooldown {
                ability: name.to_string(),
            };
            return self.refuse(refusal);
        }
        if !ability.is_affordable(self.hero.energy) {
            let refusal = Refusal::InsufficientEnergy {
                ability: name.to_string(),
            };
            return self.refuse(refusal);
        }

        let effect = ability.resolve(&*self.hero, rolls);
        let energy_cost = ability.energy_cost;
        let is_strike = matches!(ability.kind, AbilityKind::Strike { .. });

        self.hero.abilities[index].trigger();
        self.hero.energy -= energy_cost;

        if let Some(monster) = self.monster.as_mut() {
            monster.take_damage(effect.damage);
        }
        if is_strike && !effect.missed {
            self.hero.pending_damage = 0;
        }
        self.hero.health.heal(effect.healing);
        self.hero.pending_block = self.hero.pending_block.saturating_add(effect.block);

        if let Some(line) = effect.describe(&self.hero.name, name) {
            self.log.push(line);
        }
        tracing::debug!(ability = name, ?effect, "ability resolved");

        self.state = BattleState::Home;
        self.end_hero_turn();
        ActionOutcome::Resolved
    }

    /// Opens or closes the potion submenu. Does not consume the turn.
    pub fn handle_use_potion(&mut self) -> ActionOutcome {
        if let Err(reason) = self.hero_action_guard() {
            return self.ignore("potion_menu", reason);
        }

        self.state = match self.state {
            BattleState::UseItem => BattleState::Home,
            _ => BattleState::UseItem,
        };
        tracing::debug!(state = %self.state, "potion menu toggled");
        ActionOutcome::MenuToggled(self.state)
    }

    /// Drinks a potion from the open potion submenu.
    pub fn use_potion(&mut self, kind: PotionKind) -> ActionOutcome {
        if let Err(reason) = self.hero_action_guard() {
            return self.ignore("use_potion", reason);
        }
        if self.state != BattleState::UseItem {
            return self.ignore("use_potion", IgnoreReason::WrongMenu);
        }

        let effect = match self.hero.use_potion(kind, &self.config) {
            Ok(effect) => effect,
            Err(refusal) => return self.refuse(refusal),
        };
        self.log.push(format!("{} used a {}!", self.hero.name, kind));
        tracing::debug!(potion = %kind, ?effect, "potion used");

        self.state = BattleState::Home;
        self.end_hero_turn();
        ActionOutcome::Resolved
    }

    /// Spends the turn restoring energy.
    pub fn handle_rest(&mut self) -> ActionOutcome {
        if let Err(reason) = self.hero_action_guard() {
            return self.ignore("rest", reason);
        }

        let restored = self.hero.rest(&self.config);
        self.log
            .push(format!("{} rests to restore energy.", self.hero.name));
        tracing::debug!(restored, energy = self.hero.energy, "hero rested");

        self.state = BattleState::Home;
        self.end_hero_turn();
        ActionOutcome::Resolved
    }

    /// Chooses to run away. Returns whether the flee was accepted; the caller
    /// is responsible for ending the encounter.
    pub fn handle_flee(&mut self) -> bool {
        if self.turn != TurnState::HeroTurn || !self.state.is_live() {
            return false;
        }

        self.state = BattleState::RunAway;
        self.log.push(format!("{} runs away!", self.hero.name));
        tracing::info!(hero = %self.hero.name, "hero fled");
        true
    }

    /// Accepts the next fight after a victory.
    pub fn handle_continue(&mut self) -> Option<PostBattleChoice> {
        (self.state == BattleState::MonsterDefeated).then_some(PostBattleChoice::Continue)
    }

    /// Leaves the battlefield after a victory.
    pub fn handle_retreat(&mut self) -> Option<PostBattleChoice> {
        if self.state != BattleState::MonsterDefeated {
            return None;
        }
        self.log.push(format!(
            "{} retires victorious after slaying {} monsters!",
            self.hero.name, self.hero.monsters_slain
        ));
        Some(PostBattleChoice::Retreat)
    }

    /// Resolves the monster's turn if it is still alive.
    pub fn start_monster_turn(&mut self) {
        if self.monster.as_ref().is_some_and(Monster::is_alive) {
            self.handle_monster_attack();
        }
    }

    /// Monster attacks the hero, minus any pending block, then hands the turn
    /// back to the hero.
    pub fn handle_monster_attack(&mut self) {
        if self.turn != TurnState::MonsterTurn {
            return;
        }
        let Some(monster) = self.monster.as_ref().filter(|monster| monster.is_alive()) else {
            return;
        };

        let blocked = self.hero.pending_block;
        let damage = monster.damage.saturating_sub(blocked);
        self.hero.take_damage(damage);

        if blocked > 0 {
            self.log
                .push(format!("{} blocks {} damage!", self.hero.name, blocked));
        }
        self.log.push(format!(
            "{} attacks {} for {} damage.",
            monster.name, self.hero.name, damage
        ));
        tracing::debug!(
            monster = %monster.name,
            damage,
            blocked,
            hero_health = self.hero.health.current,
            "monster attacked"
        );

        self.hero.pending_block = 0;
        self.turn = TurnState::HeroTurn;
    }

    /// Closes out a hero turn: cooldown tick, then the monster's reply.
    ///
    /// The turn is always back with the hero on return, even when the
    /// monster could not act.
    fn end_hero_turn(&mut self) {
        self.hero.update_abilities();
        self.nonce += 1;
        self.turn = TurnState::MonsterTurn;

        self.start_monster_turn();
        self.turn = TurnState::HeroTurn;
    }

    fn roll(&self, context: RollContext) -> u32 {
        self.rng
            .roll_d100(compute_seed(self.config.seed, self.nonce, context))
    }
}
