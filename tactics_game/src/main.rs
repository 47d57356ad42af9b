//! Fatal Fantasy: Tactics - a two-player console game built on tactics_core
//!
//! This game shows:
//! - Character creation from the built-in class and race catalogs
//! - Per-player rosters with inventory and equipment management
//! - Turn-based battles driven through the MoveProvider/OutcomeSink traits
//! - Milestone rewards drawn from the magic item catalog
//!
//! Pass a number as the first argument to seed the RNG for a
//! reproducible session.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::io::{self, BufRead, Write};
use tactics_core::{
    battle::{Battle, BattleResult, CombatantView, MoveError, MoveProvider, OutcomeSink},
    catalog::{default_abilities, default_items, AbilityCatalog, ItemCatalog},
    combatant::Combatant,
    race::Race,
    roster::{PlayerId, Roster},
    Winner,
};

/// Everything the session needs
struct GameState {
    roster: Roster,
    abilities: AbilityCatalog,
    items: ItemCatalog,
    rng: ChaCha8Rng,
}

fn main() -> io::Result<()> {
    let rng = match std::env::args().nth(1).and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut game = GameState {
        roster: Roster::new(),
        abilities: default_abilities(),
        items: default_items(),
        rng,
    };

    println!("=== Fatal Fantasy: Tactics ===");
    loop {
        println!();
        println!("Main menu:");
        println!("  1. Manage Player 1's characters");
        println!("  2. Manage Player 2's characters");
        println!("  3. Start a battle");
        println!("  4. Quit");
        match read_number("> ", 1, 4)? {
            1 => roster_menu(&mut game, PlayerId::One)?,
            2 => roster_menu(&mut game, PlayerId::Two)?,
            3 => start_battle(&mut game)?,
            _ => {
                println!("Goodbye!");
                return Ok(());
            }
        }
    }
}

// === Menus ===

fn roster_menu(game: &mut GameState, player: PlayerId) -> io::Result<()> {
    loop {
        println!();
        println!("{player}'s roster:");
        let characters = game.roster.characters(player);
        if characters.is_empty() {
            println!("  (no characters yet)");
        }
        for (i, c) in characters.iter().enumerate() {
            println!(
                "  {}. {} the {} {} - HP {}/{}, wins: {}",
                i + 1,
                c.name(),
                c.race(),
                c.class_name(),
                c.stats().hp,
                c.stats().max_hp,
                c.win_count()
            );
        }
        println!();
        println!("  1. Create a character");
        println!("  2. View a character");
        println!("  3. Manage items");
        println!("  4. Delete a character");
        println!("  5. Back");
        match read_number("> ", 1, 5)? {
            1 => create_character(game, player)?,
            2 => {
                if let Some(index) = pick_character(&game.roster, player)? {
                    if let Some(c) = game.roster.get(player, index) {
                        print_character(c);
                    }
                }
            }
            3 => {
                if let Some(index) = pick_character(&game.roster, player)? {
                    item_menu(game, player, index)?;
                }
            }
            4 => {
                if let Some(index) = pick_character(&game.roster, player)? {
                    match game.roster.delete(player, index) {
                        Ok(removed) => println!("{} deleted.", removed.name()),
                        Err(error) => println!("{error}"),
                    }
                }
            }
            _ => return Ok(()),
        }
    }
}

fn create_character(game: &mut GameState, player: PlayerId) -> io::Result<()> {
    let name = read_line("Character name: ")?;
    if name.is_empty() {
        println!("A character needs a name.");
        return Ok(());
    }

    println!("Pick a race:");
    let races = Race::all();
    for (i, race) in races.iter().enumerate() {
        println!("  {}. {} - {}", i + 1, race.name(), race.description());
    }
    let race = races[read_number("> ", 1, races.len())? - 1];

    println!("Pick a class:");
    let classes: Vec<String> = game.abilities.classes().iter().map(|c| c.to_string()).collect();
    for (i, class) in classes.iter().enumerate() {
        println!("  {}. {}", i + 1, class);
    }
    let class = classes[read_number("> ", 1, classes.len())? - 1].clone();

    // Gnomes get a fourth slot and may pick from every class's pool.
    let pool: Vec<String> = if race.extra_ability_slot() {
        game.abilities
            .all_abilities()
            .iter()
            .map(|a| a.name.clone())
            .collect()
    } else {
        match game.abilities.abilities_for_class(&class) {
            Some(abilities) => abilities.iter().map(|a| a.name.clone()).collect(),
            None => Vec::new(),
        }
    };
    let slots = race.ability_slots();
    println!("Pick {slots} abilities:");
    for (i, name) in pool.iter().enumerate() {
        let line = match game.abilities.find_anywhere(name) {
            Some(ability) => ability.menu_line(),
            None => name.clone(),
        };
        println!("  {}. {}", i + 1, line);
    }
    let mut picks: Vec<&str> = Vec::with_capacity(slots);
    for slot in 1..=slots {
        let choice = read_number(&format!("ability {slot}/{slots} > "), 1, pool.len())?;
        picks.push(&pool[choice - 1]);
    }

    match game
        .roster
        .create_character(player, &name, race, &class, &picks, &game.abilities)
    {
        Ok(created) => println!(
            "{} the {} {} joins {player}'s roster!",
            created.name(),
            created.race(),
            created.class_name()
        ),
        Err(error) => println!("Could not create character: {error}"),
    }
    Ok(())
}

fn item_menu(game: &mut GameState, player: PlayerId, index: usize) -> io::Result<()> {
    loop {
        let combatant = match game.roster.get(player, index) {
            Some(c) => c,
            None => return Ok(()),
        };
        println!();
        println!("{}'s items:", combatant.name());
        if combatant.inventory().is_empty() {
            println!("  (inventory is empty)");
        }
        for (i, item) in combatant.inventory().iter().enumerate() {
            let equipped = if combatant.equipped_index() == Some(i) {
                " [equipped]"
            } else {
                ""
            };
            println!(
                "  {}. {} ({} {}) - {}{}",
                i + 1,
                item.name,
                item.rarity.name(),
                item.activation_label(),
                item.effect,
                equipped
            );
        }
        println!();
        println!("  1. Use an item");
        println!("  2. Equip an item");
        println!("  3. Unequip");
        println!("  4. Back");
        let inventory_size = combatant.inventory().len();
        match read_number("> ", 1, 4)? {
            1 => {
                if let Some(i) = pick_index("Use which item?", inventory_size)? {
                    let combatant = match game.roster.get_mut(player, index) {
                        Some(c) => c,
                        None => return Ok(()),
                    };
                    match combatant.use_item(i) {
                        Ok(used) => println!("{}", used_item_line(&used)),
                        Err(error) => println!("{error}"),
                    }
                }
            }
            2 => {
                if let Some(i) = pick_index("Equip which item?", inventory_size)? {
                    let combatant = match game.roster.get_mut(player, index) {
                        Some(c) => c,
                        None => return Ok(()),
                    };
                    match combatant.equip(i) {
                        Ok(()) => println!("Equipped."),
                        Err(error) => println!("{error}"),
                    }
                }
            }
            3 => {
                if let Some(combatant) = game.roster.get_mut(player, index) {
                    combatant.unequip();
                    println!("Unequipped.");
                }
            }
            _ => return Ok(()),
        }
    }
}

fn used_item_line(used: &tactics_core::combatant::ItemUse) -> String {
    if used.shielded {
        return format!("{} raised: all damage is negated this round!", used.item_name);
    }
    format!(
        "{} used: restored {} HP and {} EP.",
        used.item_name, used.hp_restored, used.ep_restored
    )
}

fn print_character(c: &Combatant) {
    println!();
    println!("{} the {} {}", c.name(), c.race(), c.class_name());
    println!(
        "  HP {}/{} - EP {}/{} - wins: {}",
        c.stats().hp,
        c.stats().max_hp,
        c.stats().ep,
        c.stats().max_ep,
        c.win_count()
    );
    if let Some(item) = c.equipped_item() {
        println!("  Equipped: {} - {}", item.name, item.effect);
    }
    println!("  Abilities:");
    for ability in c.abilities() {
        println!("    - {}", ability.menu_line());
    }
}

/// Number a player's characters and read a pick; None when the roster
/// is empty
fn pick_character(roster: &Roster, player: PlayerId) -> io::Result<Option<usize>> {
    let characters = roster.characters(player);
    if characters.is_empty() {
        println!("{player} has no characters.");
        return Ok(None);
    }
    for (i, c) in characters.iter().enumerate() {
        println!("  {}. {}", i + 1, c.name());
    }
    Ok(Some(read_number("> ", 1, characters.len())? - 1))
}

fn pick_index(prompt: &str, len: usize) -> io::Result<Option<usize>> {
    if len == 0 {
        println!("Nothing to pick.");
        return Ok(None);
    }
    println!("{prompt}");
    Ok(Some(read_number("> ", 1, len)? - 1))
}

// === Battle ===

fn start_battle(game: &mut GameState) -> io::Result<()> {
    if game.roster.is_empty(PlayerId::One) || game.roster.is_empty(PlayerId::Two) {
        println!("Both players need at least one character to battle.");
        return Ok(());
    }

    println!("{}, pick your fighter:", PlayerId::One);
    let index1 = match pick_character(&game.roster, PlayerId::One)? {
        Some(i) => i,
        None => return Ok(()),
    };
    println!("{}, pick your fighter:", PlayerId::Two);
    let index2 = match pick_character(&game.roster, PlayerId::Two)? {
        Some(i) => i,
        None => return Ok(()),
    };

    let (player1, player2) = match game.roster.battle_pair(index1, index2) {
        Ok(pair) => pair,
        Err(error) => {
            println!("{error}");
            return Ok(());
        }
    };

    println!();
    println!("=== {} vs {} ===", player1.name(), player2.name());
    let mut provider = ConsoleProvider;
    let mut sink = ConsoleSink;
    Battle::new(player1, player2)
        .with_reward_catalog(&game.items)
        .run_with_rng(&mut provider, &mut sink, &mut game.rng);
    Ok(())
}

/// Reads move choices from stdin
struct ConsoleProvider;

impl MoveProvider for ConsoleProvider {
    fn choose_move(&mut self, view: &CombatantView<'_>) -> usize {
        println!();
        println!(
            "{} ({}) - HP {}/{}, EP {}/{}",
            view.name, view.class_name, view.hp, view.max_hp, view.ep, view.max_ep
        );
        for (i, ability) in view.abilities.iter().enumerate() {
            println!("  {}. {}", i + 1, ability.menu_line());
        }
        println!("  {}. Defend (EP: 5) - Halve incoming damage this round", view.abilities.len() + 1);
        println!("  {}. Recharge - Skip your move and regain 5 EP", view.abilities.len() + 2);
        match read_number("> ", 1, view.menu_size) {
            Ok(choice) => choice,
            // A battle cannot continue without input; end the session
            // rather than looping on a substituted move.
            Err(_) => {
                println!();
                println!("Input closed; ending the session.");
                std::process::exit(0);
            }
        }
    }

    fn move_rejected(&mut self, _view: &CombatantView<'_>, error: &MoveError) {
        println!("{error} - pick again.");
    }
}

/// Prints round and battle progress
struct ConsoleSink;

impl OutcomeSink for ConsoleSink {
    fn round_started(&mut self, start: &tactics_core::RoundStart) {
        println!();
        println!("--- Round {} ---", start.round);
        for side in [&start.player1, &start.player2] {
            print!(
                "{}: HP {}/{}, EP {}/{}",
                side.name, side.hp, side.max_hp, side.ep, side.max_ep
            );
            if !side.passive.is_empty() {
                print!(
                    " (+{} HP, +{} EP from equipment)",
                    side.passive.healed, side.passive.ep_gained
                );
            }
            println!();
        }
    }

    fn round_resolved(&mut self, outcome: &tactics_core::RoundOutcome) {
        println!();
        for side in [&outcome.player1, &outcome.player2] {
            println!("{} used {}.", side.name, side.move_name);
            if side.hp_restored > 0 {
                println!("  {} recovered {} HP.", side.name, side.hp_restored);
            }
            if side.ep_restored > 0 {
                println!("  {} recovered {} EP.", side.name, side.ep_restored);
            }
            if let Some(report) = &side.damage_taken {
                println!("  {}", report.summary(&side.name));
            }
        }
    }

    fn battle_ended(&mut self, result: &BattleResult) {
        println!();
        match result.winner {
            Winner::Draw => println!("Both fighters fall! The battle is a draw."),
            Winner::Player1 => {
                println!("Player 1 wins the battle after {} rounds!", result.rounds)
            }
            Winner::Player2 => {
                println!("Player 2 wins the battle after {} rounds!", result.rounds)
            }
        }
        if let Some(reward) = &result.reward {
            println!(
                "Victory reward: {} ({}) - {}",
                reward.name,
                reward.rarity.name(),
                reward.effect
            );
        }
    }
}

// === Console input ===

fn read_line(prompt: &str) -> io::Result<String> {
    read_line_from(&mut io::stdin().lock(), prompt)
}

fn read_line_from<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim().to_string())
}

/// Read a number in `min..=max`, re-prompting until one arrives
fn read_number(prompt: &str, min: usize, max: usize) -> io::Result<usize> {
    read_number_from(&mut io::stdin().lock(), prompt, min, max)
}

fn read_number_from<R: BufRead>(
    input: &mut R,
    prompt: &str,
    min: usize,
    max: usize,
) -> io::Result<usize> {
    loop {
        let line = read_line_from(input, prompt)?;
        match line.parse::<usize>() {
            Ok(n) if n >= min && n <= max => return Ok(n),
            _ => println!("Enter a number between {min} and {max}."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_number_reprompts_until_in_range() {
        let mut input = &b"zero\n9\n2\n"[..];
        assert_eq!(read_number_from(&mut input, "> ", 1, 4).unwrap(), 2);
    }

    #[test]
    fn test_read_number_errors_on_closed_input() {
        // Exhausted input must surface as an error, never as a default
        // choice; the battle loop exits on it.
        let mut input = &b""[..];
        let err = read_number_from(&mut input, "> ", 1, 4).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);

        let mut input = &b"3\n"[..];
        assert_eq!(read_number_from(&mut input, "> ", 1, 4).unwrap(), 3);
        let err = read_number_from(&mut input, "> ", 1, 4).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
