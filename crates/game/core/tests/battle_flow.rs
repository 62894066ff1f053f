use battle_core::{
    Ability, ActionOutcome, BattleConfig, BattleLog, BattleManager, BattleState, BattleStatus,
    Combatant, Health, Hero, IgnoreReason, Monster, PostBattleChoice, PotionBag, PotionKind,
    Refusal, TurnState, Weapon,
};

fn knight() -> Hero {
    let mut hero = Hero::new("Roland", Health::full(20), 10).with_class("Knight");
    hero.learn(Ability::strike("Slash", 2, 0, 3)).unwrap();
    hero.learn(Ability::strike("Fireball", 4, 2, 8)).unwrap();
    hero.learn(Ability::mend("Second Wind", 3, 3, 4)).unwrap();
    hero.learn(Ability::guard("Shield Wall", 2, 2, 3)).unwrap();
    hero
}

fn ogre() -> Monster {
    Monster::new("Ogre", Health::full(40), 5, 12, 20)
}

#[test]
fn rest_resolves_monster_turn_before_returning() {
    let mut hero = knight();
    hero.energy = 4;
    let mut log = BattleLog::new();
    let mut manager = BattleManager::new(&mut hero, &mut log, BattleConfig::default());
    manager.start_battle(ogre());
    let before = manager.log().len();

    assert_eq!(manager.handle_rest(), ActionOutcome::Resolved);

    assert_eq!(manager.turn(), TurnState::HeroTurn);
    assert_eq!(manager.hero().energy, 7);
    assert_eq!(manager.hero().health.current, 15);
    assert_eq!(
        manager.log().since(before),
        [
            "Roland rests to restore energy.".to_string(),
            "Ogre attacks Roland for 5 damage.".to_string(),
        ]
    );
}

#[test]
fn ability_on_cooldown_only_logs() {
    let mut hero = knight();
    hero.abilities[1].current_cooldown = 2;
    let mut log = BattleLog::new();
    let mut manager = BattleManager::new(&mut hero, &mut log, BattleConfig::default());
    manager.start_battle(ogre());
    manager.handle_ability(None);
    let before = manager.log().len();

    let outcome = manager.handle_ability(Some("Fireball"));

    assert_eq!(
        outcome,
        ActionOutcome::Refused(Refusal::OnCooldown {
            ability: "Fireball".into()
        })
    );
    assert_eq!(manager.hero().energy, 10);
    assert_eq!(manager.turn(), TurnState::HeroTurn);
    assert_eq!(manager.state(), BattleState::UseAbility);
    assert_eq!(
        manager.log().since(before),
        ["Fireball is still on cooldown!".to_string()]
    );
    assert_eq!(manager.monster().unwrap().health.current, 40);
}

#[test]
fn cooldown_is_reported_before_energy() {
    let mut hero = knight();
    hero.energy = 1;
    hero.abilities[1].current_cooldown = 1;
    let mut log = BattleLog::new();
    let mut manager = BattleManager::new(&mut hero, &mut log, BattleConfig::default());
    manager.start_battle(ogre());
    manager.handle_ability(None);

    manager.handle_ability(Some("Fireball"));
    assert_eq!(manager.log().last(), Some("Fireball is still on cooldown!"));

    manager.handle_ability(Some("Slash"));
    assert_eq!(manager.log().last(), Some("Not enough energy to use Slash!"));

    manager.handle_ability(Some("Meteor"));
    assert_eq!(manager.log().last(), Some("Roland doesn't know Meteor!"));
    assert_eq!(manager.hero().energy, 1);
}

#[test]
fn ability_use_spends_energy_ticks_cooldowns_and_returns_home() {
    let mut hero = knight();
    hero.abilities[3].current_cooldown = 2;
    let mut log = BattleLog::new();
    let mut manager = BattleManager::new(&mut hero, &mut log, BattleConfig::default());
    manager.start_battle(ogre());
    manager.handle_ability(None);

    assert_eq!(manager.handle_ability(Some("Fireball")), ActionOutcome::Resolved);

    let hero = manager.hero();
    assert_eq!(hero.energy, 6);
    // Triggered to 2 then ticked once at end of turn.
    assert_eq!(hero.abilities[1].current_cooldown, 1);
    assert_eq!(hero.abilities[3].current_cooldown, 1);
    assert_eq!(hero.health.current, 15);
    assert_eq!(manager.monster().unwrap().health.current, 32);
    assert_eq!(manager.state(), BattleState::Home);
    assert_eq!(manager.turn(), TurnState::HeroTurn);
}

#[test]
fn menu_toggles_never_flip_the_turn() {
    let mut hero = knight();
    let mut log = BattleLog::new();
    let mut manager = BattleManager::new(&mut hero, &mut log, BattleConfig::default());
    manager.start_battle(ogre());
    let before = manager.log().len();

    assert_eq!(
        manager.handle_ability(None),
        ActionOutcome::MenuToggled(BattleState::UseAbility)
    );
    assert_eq!(
        manager.handle_ability(None),
        ActionOutcome::MenuToggled(BattleState::Home)
    );
    assert_eq!(
        manager.handle_use_potion(),
        ActionOutcome::MenuToggled(BattleState::UseItem)
    );
    assert_eq!(
        manager.handle_use_potion(),
        ActionOutcome::MenuToggled(BattleState::Home)
    );

    assert_eq!(manager.turn(), TurnState::HeroTurn);
    assert_eq!(manager.hero().health.current, 20);
    assert_eq!(manager.log().len(), before);
}

#[test]
fn submenu_actions_require_their_menu() {
    let mut hero = knight();
    let mut log = BattleLog::new();
    let mut manager = BattleManager::new(&mut hero, &mut log, BattleConfig::default());
    manager.start_battle(ogre());

    assert_eq!(
        manager.use_ability("Slash"),
        ActionOutcome::Ignored(IgnoreReason::WrongMenu)
    );
    assert_eq!(
        manager.use_potion(PotionKind::Health),
        ActionOutcome::Ignored(IgnoreReason::WrongMenu)
    );
    assert_eq!(manager.log().len(), 1);
}

#[test]
fn health_potion_never_exceeds_max() {
    let mut hero = knight();
    hero.health = Health::new(18, 20);
    let mut log = BattleLog::new();
    let mut manager = BattleManager::new(
        &mut hero,
        &mut log,
        BattleConfig::default(),
    );
    manager.start_battle(Monster::new("Slime", Health::full(5), 0, 1, 1));
    manager.handle_use_potion();

    assert_eq!(manager.use_potion(PotionKind::Health), ActionOutcome::Resolved);
    assert_eq!(manager.hero().health.current, 20);
    assert_eq!(manager.hero().potions.count(PotionKind::Health), 1);
    assert_eq!(manager.log().iter().nth(1), Some("Roland used a Health Potion!"));
}

#[test]
fn empty_potion_slot_is_refused() {
    let mut hero = knight().with_potions(PotionBag::empty());
    let mut log = BattleLog::new();
    let mut manager = BattleManager::new(&mut hero, &mut log, BattleConfig::default());
    manager.start_battle(ogre());
    manager.handle_use_potion();

    let outcome = manager.use_potion(PotionKind::Damage);
    assert!(matches!(outcome, ActionOutcome::Refused(Refusal::OutOfPotion { .. })));
    assert_eq!(
        manager.log().last(),
        Some("You don't have any Damage Potions left!")
    );
    assert_eq!(manager.hero().health.current, 20);
    assert_eq!(manager.state(), BattleState::UseItem);
}

#[test]
fn block_potion_absorbs_next_attack() {
    let mut hero = knight();
    let mut log = BattleLog::new();
    let mut manager = BattleManager::new(&mut hero, &mut log, BattleConfig::default());
    manager.start_battle(ogre());
    manager.handle_use_potion();
    manager.use_potion(PotionKind::Block);

    assert_eq!(manager.hero().health.current, 17);
    assert_eq!(manager.hero().pending_block, 0);
    let lines: Vec<_> = manager.log().recent(2).collect();
    assert_eq!(
        lines,
        vec!["Ogre attacks Roland for 3 damage.", "Roland blocks 2 damage!"]
    );
}

#[test]
fn damage_potion_boosts_next_strike_once() {
    let mut hero = knight();
    let mut log = BattleLog::new();
    let mut manager = BattleManager::new(&mut hero, &mut log, BattleConfig::default());
    manager.start_battle(ogre());
    manager.handle_use_potion();
    manager.use_potion(PotionKind::Damage);
    assert_eq!(manager.hero().pending_damage, 3);

    manager.handle_ability(None);
    manager.handle_ability(Some("Slash"));
    assert_eq!(manager.monster().unwrap().health.current, 34);
    assert_eq!(manager.hero().pending_damage, 0);

    manager.handle_ability(None);
    manager.handle_ability(Some("Slash"));
    assert_eq!(manager.monster().unwrap().health.current, 31);
}

#[test]
fn guard_and_mend_shape_the_log() {
    let mut hero = knight();
    hero.health = Health::new(10, 20);
    let mut log = BattleLog::new();
    let mut manager = BattleManager::new(&mut hero, &mut log, BattleConfig::default());
    manager.start_battle(ogre());

    manager.handle_ability(None);
    manager.handle_ability(Some("Shield Wall"));
    assert_eq!(manager.hero().health.current, 8);

    manager.handle_ability(None);
    manager.handle_ability(Some("Second Wind"));
    assert_eq!(manager.hero().health.current, 7);
    assert!(
        manager
            .log()
            .iter()
            .any(|line| line.contains("Second Wind") && line.contains("4"))
    );
}

#[test]
fn victory_is_detected_and_rewarded_once() {
    let mut hero = knight();
    hero.experience = 5;
    let mut log = BattleLog::new();
    let mut manager = BattleManager::new(&mut hero, &mut log, BattleConfig::default());
    manager.start_battle(Monster::new("Goblin", Health::full(3), 2, 6, 9));

    manager.handle_ability(None);
    manager.handle_ability(Some("Slash"));
    assert!(!manager.monster().unwrap().is_alive());

    assert_eq!(manager.update_battle_state(), BattleStatus::MonsterDefeated);
    let after_first = manager.log().len();
    assert_eq!(manager.update_battle_state(), BattleStatus::Continuing);
    assert_eq!(manager.update_battle_state(), BattleStatus::Continuing);

    assert_eq!(manager.log().len(), after_first);
    assert_eq!(manager.state(), BattleState::MonsterDefeated);
    let hero = manager.hero();
    assert_eq!(hero.gold, 9);
    assert_eq!(hero.level, 2);
    assert_eq!(hero.experience, 0);
    assert_eq!(hero.monsters_slain, 1);
    assert!(
        manager
            .log()
            .iter()
            .any(|line| line == "Roland gains 6 experience and 9 gold.")
    );
}

#[test]
fn victory_makes_combat_handlers_inert() {
    let mut hero = knight();
    let mut log = BattleLog::new();
    let mut manager = BattleManager::new(&mut hero, &mut log, BattleConfig::default());
    manager.start_battle(Monster::new("Rat", Health::full(1), 1, 1, 1));
    manager.handle_ability(None);
    manager.handle_ability(Some("Slash"));
    manager.update_battle_state();
    let before = manager.log().len();

    assert_eq!(
        manager.handle_rest(),
        ActionOutcome::Ignored(IgnoreReason::BattleOver)
    );
    assert!(!manager.handle_flee());
    assert_eq!(manager.log().len(), before);

    assert_eq!(manager.handle_continue(), Some(PostBattleChoice::Continue));
    assert_eq!(manager.handle_retreat(), Some(PostBattleChoice::Retreat));
}

#[test]
fn rest_waits_for_victory_to_be_polled() {
    let mut hero = knight();
    let mut log = BattleLog::new();
    let mut manager = BattleManager::new(&mut hero, &mut log, BattleConfig::default());
    manager.start_battle(Monster::new("Rat", Health::full(1), 1, 1, 1));
    manager.handle_ability(None);
    manager.handle_ability(Some("Slash"));
    assert_eq!(manager.state(), BattleState::Home);

    let nonce = manager.nonce();
    assert_eq!(
        manager.handle_rest(),
        ActionOutcome::Ignored(IgnoreReason::NoLivingMonster)
    );
    assert_eq!(manager.nonce(), nonce);
    assert_eq!(manager.update_battle_state(), BattleStatus::MonsterDefeated);
}

#[test]
fn post_battle_choices_require_victory() {
    let mut hero = knight();
    let mut log = BattleLog::new();
    let mut manager = BattleManager::new(&mut hero, &mut log, BattleConfig::default());
    manager.start_battle(ogre());

    assert_eq!(manager.handle_continue(), None);
    assert_eq!(manager.handle_retreat(), None);
}

#[test]
fn flee_ends_encounter_on_hero_turn() {
    let mut hero = knight();
    let mut log = BattleLog::new();
    let mut manager = BattleManager::new(&mut hero, &mut log, BattleConfig::default());
    manager.start_battle(ogre());

    assert!(manager.handle_flee());
    assert_eq!(manager.state(), BattleState::RunAway);
    assert_eq!(manager.update_battle_state(), BattleStatus::Fled);
    assert_eq!(
        manager.handle_rest(),
        ActionOutcome::Ignored(IgnoreReason::BattleOver)
    );
}

#[test]
fn second_flee_is_ignored() {
    let mut hero = knight();
    let mut log = BattleLog::new();
    let mut manager = BattleManager::new(&mut hero, &mut log, BattleConfig::default());
    manager.start_battle(ogre());

    assert!(manager.handle_flee());
    let after_first = manager.log().len();
    assert!(!manager.handle_flee());
    assert_eq!(manager.log().len(), after_first);
    assert_eq!(manager.state(), BattleState::RunAway);
}

#[test]
fn oversized_strike_saturates_instead_of_panicking() {
    let mut hero = knight();
    hero.weapon = Some(Weapon::new("Rusty Sword", 1));
    hero.learn(Ability::strike("Nuke", 0, 0, u32::MAX)).unwrap();
    let mut log = BattleLog::new();
    let mut manager = BattleManager::new(&mut hero, &mut log, BattleConfig::default());
    manager.start_battle(ogre());
    manager.handle_ability(None);

    assert_eq!(manager.handle_ability(Some("Nuke")), ActionOutcome::Resolved);
    assert!(!manager.monster().unwrap().is_alive());
    assert_eq!(manager.update_battle_state(), BattleStatus::MonsterDefeated);
}

#[test]
fn hero_defeat_is_reported() {
    let mut hero = knight();
    hero.health = Health::new(4, 20);
    let mut log = BattleLog::new();
    let mut manager = BattleManager::new(&mut hero, &mut log, BattleConfig::default());
    manager.start_battle(ogre());

    manager.handle_rest();
    assert!(!manager.hero().is_alive());
    assert_eq!(manager.update_battle_state(), BattleStatus::HeroDefeated);
}

#[test]
fn start_battle_resets_state_for_next_encounter() {
    let mut hero = knight();
    let mut log = BattleLog::new();
    let mut manager = BattleManager::new(&mut hero, &mut log, BattleConfig::default());
    manager.start_battle(Monster::new("Rat", Health::full(1), 1, 1, 1));
    manager.handle_ability(None);
    manager.handle_ability(Some("Slash"));
    manager.update_battle_state();

    manager.start_battle(ogre());
    assert_eq!(manager.state(), BattleState::Home);
    assert_eq!(manager.turn(), TurnState::HeroTurn);
    assert_eq!(manager.log().last(), Some("A Ogre appears!"));
    assert_eq!(manager.update_battle_state(), BattleStatus::Continuing);
}

#[test]
fn same_seed_replays_identically() {
    fn run(seed: u64) -> Vec<String> {
        let mut hero = knight();
        let backstab = Ability::new(
            "Backstab",
            1,
            0,
            battle_core::AbilityKind::Strike {
                power: 2,
                accuracy: 60,
                crit_chance: 30,
                crit_multiplier: 3,
            },
        );
        hero.learn(backstab).unwrap();
        let mut log = BattleLog::new();
        let mut manager = BattleManager::new(&mut hero, &mut log, BattleConfig::with_seed(seed));
        manager.start_battle(Monster::new("Troll", Health::full(200), 0, 1, 1));
        for _ in 0..8 {
            manager.handle_ability(None);
            manager.handle_ability(Some("Backstab"));
        }
        manager.log().iter().map(str::to_string).collect()
    }

    assert_eq!(run(7), run(7));
}
