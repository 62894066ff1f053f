//! Glue code tying content, the battle manager, and the terminal UI together.
use anyhow::{Context, Result};
use battle_content::{ContentFactory, HeroClass, MonsterRoster};
use battle_core::{BattleConfig, BattleLog, BattleManager, Hero};
use crossterm::event::{self, Event, KeyEventKind};

use crate::config::CliConfig;
use crate::controller::{Controller, SessionEnd, Step};
use crate::input::map_key;
use crate::presentation::{RenderContext, render, terminal};

/// A loaded battle session, ready to run in the terminal.
pub struct BattleApp {
    config: CliConfig,
    rules: BattleConfig,
    hero: Hero,
    roster: MonsterRoster,
}

impl BattleApp {
    /// Loads rules and content from the configured data directory and spawns
    /// the hero.
    pub fn load(config: CliConfig) -> Result<Self> {
        let factory = ContentFactory::new(&config.data_dir);

        let mut rules = factory
            .load_config()
            .with_context(|| format!("Failed to load rules from {}", config.data_dir.display()))?;
        if let Some(seed) = config.seed {
            rules.seed = seed;
        }

        let items = factory.load_items()?;
        let classes = factory.load_hero_classes()?;
        let roster = factory.load_monsters()?;

        let hero = HeroClass::select(&classes, &config.hero_class).spawn(
            config.hero_name.clone(),
            &rules,
            &items,
        )?;

        Ok(Self {
            config,
            rules,
            hero,
            roster,
        })
    }

    pub fn run(self) -> Result<()> {
        tracing::info!("CLI client starting...");

        let BattleApp {
            config,
            rules,
            mut hero,
            roster,
        } = self;
        let mut log = BattleLog::new();

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let mut manager = BattleManager::new(&mut hero, &mut log, rules);
        let mut controller = Controller::new(roster);
        if !controller.start_next_battle(&mut manager) {
            anyhow::bail!("Monster roster has no monster for a new hero");
        }

        let end = loop {
            let ctx = RenderContext {
                manager: &manager,
                buttons: controller.buttons(),
                log_panel_height: config.ui.log_panel_height,
            };
            render(&mut terminal, &ctx)?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Step::Ended(end) = controller.apply(&mut manager, map_key(key)) {
                break end;
            }
        };

        let summary = end.summary(manager.hero(), manager.monster());
        let hero = manager.hero();
        let stats = format!(
            "{} the {}: level {}, {} experience, {} gold, {} monsters slain.",
            hero.name, hero.class_name, hero.level, hero.experience, hero.gold, hero.monsters_slain
        );

        terminal::restore()?;
        tracing::info!(?end, "CLI client exiting");

        if end != SessionEnd::Quit {
            println!("{summary}");
        }
        println!("{stats}");
        Ok(())
    }
}
