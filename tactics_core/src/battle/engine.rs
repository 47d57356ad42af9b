//! Battle engine - the per-round state machine
//!
//! A round runs RoundStart -> MoveSelection(P1) -> MoveSelection(P2) ->
//! Resolution -> OutcomeCheck. Flags from BOTH chosen moves are raised
//! before either move resolves, so a shield raised by player 1 protects
//! them from player 2's attack even though player 1 resolves first.

use super::interface::{CombatantView, MoveError, MoveProvider, OutcomeSink};
use super::outcome::{
    BattleResult, PlayerRoundSummary, RoundOutcome, RoundStart, SideStatus, Winner,
};
use crate::catalog::ItemCatalog;
use crate::combat::{resolve_damage_with_rng, DamageReport};
use crate::combatant::Combatant;
use crate::constants::DEFEND_EP_COST;
use crate::item::MagicItem;
use crate::reward::RewardPolicy;
use crate::types::{RestoreKind, SpecialKind};
use rand::Rng;

/// A validated move selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveChoice {
    /// Zero-based index into the combatant's ability loadout
    Ability(usize),
    /// Halve incoming damage this round; fixed 5 EP cost
    Defend,
    /// Do nothing and regain 5 EP
    Recharge,
}

impl MoveChoice {
    /// Display name of the chosen move
    pub fn label(&self, combatant: &Combatant) -> String {
        match self {
            MoveChoice::Ability(i) => combatant.abilities()[*i].name.clone(),
            MoveChoice::Defend => "Defend".to_string(),
            MoveChoice::Recharge => "Recharge".to_string(),
        }
    }
}

/// Self/opponent effects of one executed move
struct MoveEffects {
    damage_dealt: Option<DamageReport>,
    hp_restored: u32,
    ep_restored: u32,
}

/// One battle between two combatants.
///
/// The battle holds exclusive access to both combatants for its whole
/// duration and runs synchronously to completion; the only suspension
/// points are the provider's move requests.
pub struct Battle<'a> {
    player1: &'a mut Combatant,
    player2: &'a mut Combatant,
    reward_items: Option<&'a ItemCatalog>,
    round: u32,
}

impl<'a> Battle<'a> {
    pub fn new(player1: &'a mut Combatant, player2: &'a mut Combatant) -> Self {
        Battle {
            player1,
            player2,
            reward_items: None,
            round: 0,
        }
    }

    /// Enable reward draws from `catalog` on win milestones
    pub fn with_reward_catalog(mut self, catalog: &'a ItemCatalog) -> Self {
        self.reward_items = Some(catalog);
        self
    }

    /// Run the battle to completion
    pub fn run<P, S>(&mut self, provider: &mut P, sink: &mut S) -> BattleResult
    where
        P: MoveProvider,
        S: OutcomeSink,
    {
        let mut rng = rand::thread_rng();
        self.run_with_rng(provider, sink, &mut rng)
    }

    /// Run with a provided RNG (for deterministic testing)
    pub fn run_with_rng<P, S, R>(
        &mut self,
        provider: &mut P,
        sink: &mut S,
        rng: &mut R,
    ) -> BattleResult
    where
        P: MoveProvider,
        S: OutcomeSink,
        R: Rng,
    {
        // Combatants begin each battle at full HP and EP
        self.player1.reset_stats();
        self.player2.reset_stats();
        self.round = 1;

        loop {
            // RoundStart: clear flags for both sides, then the fixed +5
            // recharge, then equipped passive regeneration. All of this
            // happens before any move is selected.
            self.player1.stats_mut().reset_flags();
            self.player2.stats_mut().reset_flags();
            self.player1.stats_mut().recharge();
            self.player2.stats_mut().recharge();
            let tick1 = self.player1.apply_passive_effects();
            let tick2 = self.player2.apply_passive_effects();

            sink.round_started(&RoundStart {
                round: self.round,
                player1: SideStatus::of(self.player1, tick1),
                player2: SideStatus::of(self.player2, tick2),
            });

            // MoveSelection: P1 then P2, each re-prompted until legal
            let choice1 = select_move(provider, self.player1);
            let choice2 = select_move(provider, self.player2);

            // Resolution: both sides' flags are raised from both choices
            // before either move executes.
            apply_flags(self.player1, &choice1);
            apply_flags(self.player2, &choice2);

            let ep1_before = self.player1.stats().ep;
            let ep2_before = self.player2.stats().ep;

            let effects1 = execute_move(self.player1, self.player2, &choice1, rng);
            let effects2 = execute_move(self.player2, self.player1, &choice2, rng);

            let outcome = RoundOutcome {
                round: self.round,
                player1: summarize(self.player1, &choice1, ep1_before, &effects1, &effects2),
                player2: summarize(self.player2, &choice2, ep2_before, &effects2, &effects1),
            };
            sink.round_resolved(&outcome);

            // OutcomeCheck
            let p1_down = !self.player1.stats().is_alive();
            let p2_down = !self.player2.stats().is_alive();
            if p1_down || p2_down {
                let winner = match (p1_down, p2_down) {
                    (true, true) => Winner::Draw,
                    (true, false) => Winner::Player2,
                    (false, true) => Winner::Player1,
                    (false, false) => unreachable!(),
                };
                let result = BattleResult {
                    winner,
                    rounds: self.round,
                    reward: self.award_winner(winner, rng),
                };
                sink.battle_ended(&result);
                return result;
            }
            self.round += 1;
        }
    }

    /// Record the win and, on every third win, draw a reward into the
    /// winner's inventory. Draws nothing on a draw.
    fn award_winner<R: Rng>(&mut self, winner: Winner, rng: &mut R) -> Option<MagicItem> {
        let combatant = match winner {
            Winner::Player1 => &mut *self.player1,
            Winner::Player2 => &mut *self.player2,
            Winner::Draw => return None,
        };
        if !combatant.record_win() {
            return None;
        }
        let catalog = self.reward_items?;
        let reward = RewardPolicy::new(catalog).draw_with_rng(rng)?;
        combatant.add_item(reward.clone());
        Some(reward)
    }
}

/// Ask the provider for a move until a legal one arrives
fn select_move<P: MoveProvider>(provider: &mut P, combatant: &Combatant) -> MoveChoice {
    let view = CombatantView::of(combatant);
    loop {
        let index = provider.choose_move(&view);
        match validate_choice(combatant, index) {
            Ok(choice) => return choice,
            Err(error) => provider.move_rejected(&view, &error),
        }
    }
}

/// Check a 1-based menu index against the menu bounds and the
/// combatant's current EP. Never mutates anything.
fn validate_choice(combatant: &Combatant, index: usize) -> Result<MoveChoice, MoveError> {
    let abilities = combatant.abilities();
    let menu_size = combatant.move_menu_size();
    let ep = combatant.stats().ep;

    if index < 1 || index > menu_size {
        return Err(MoveError::InvalidChoice {
            choice: index,
            menu_size,
        });
    }
    if index <= abilities.len() {
        let ability = &abilities[index - 1];
        if ep < ability.ep_cost {
            return Err(MoveError::InsufficientEnergy {
                move_name: ability.name.clone(),
                cost: ability.ep_cost,
                available: ep,
            });
        }
        return Ok(MoveChoice::Ability(index - 1));
    }
    if index == abilities.len() + 1 {
        if ep < DEFEND_EP_COST {
            return Err(MoveError::InsufficientEnergy {
                move_name: "Defend".to_string(),
                cost: DEFEND_EP_COST,
                available: ep,
            });
        }
        return Ok(MoveChoice::Defend);
    }
    Ok(MoveChoice::Recharge)
}

/// Raise the combatant's own flags implied by their chosen move
fn apply_flags(combatant: &mut Combatant, choice: &MoveChoice) {
    let special = match choice {
        MoveChoice::Defend => {
            combatant.stats_mut().defending = true;
            return;
        }
        MoveChoice::Recharge => return,
        MoveChoice::Ability(i) => combatant.abilities()[*i].special,
    };
    match special {
        Some(SpecialKind::Shield) => combatant.stats_mut().shielded = true,
        Some(SpecialKind::Evade) | Some(SpecialKind::EvadeAndStrike) => {
            combatant.stats_mut().evading = true
        }
        None => {}
    }
}

/// Execute one combatant's move: EP deduction plus damage/heal/restore,
/// applied as a single atomic step before the other side resolves.
fn execute_move<R: Rng>(
    actor: &mut Combatant,
    target: &mut Combatant,
    choice: &MoveChoice,
    rng: &mut R,
) -> MoveEffects {
    let mut effects = MoveEffects {
        damage_dealt: None,
        hp_restored: 0,
        ep_restored: 0,
    };

    match choice {
        MoveChoice::Defend => {
            actor.stats_mut().spend_energy(DEFEND_EP_COST);
        }
        MoveChoice::Recharge => {
            let before = actor.stats().ep;
            actor.stats_mut().recharge();
            effects.ep_restored = actor.stats().ep - before;
        }
        MoveChoice::Ability(i) => {
            let ability = actor.abilities()[*i].clone();
            actor.stats_mut().spend_energy(ability.ep_cost);

            match ability.special {
                // Flags were already raised; Shield and Evade have no
                // further effect of their own.
                Some(SpecialKind::Shield) | Some(SpecialKind::Evade) => {}
                Some(SpecialKind::EvadeAndStrike) => {
                    if ability.damage > 0 {
                        effects.damage_dealt = Some(resolve_damage_with_rng(
                            target.stats_mut(),
                            ability.damage,
                            rng,
                        ));
                    }
                }
                None => {
                    if ability.damage > 0 {
                        effects.damage_dealt = Some(resolve_damage_with_rng(
                            target.stats_mut(),
                            ability.damage,
                            rng,
                        ));
                    }
                    if ability.restore_amount > 0 {
                        match ability.restore_kind {
                            Some(RestoreKind::Hp) => {
                                let before = actor.stats().hp;
                                actor.heal(ability.restore_amount);
                                effects.hp_restored = actor.stats().hp - before;
                            }
                            Some(RestoreKind::Ep) => {
                                let before = actor.stats().ep;
                                actor.restore_energy(ability.restore_amount);
                                effects.ep_restored = actor.stats().ep - before;
                            }
                            None => {}
                        }
                    }
                }
            }
        }
    }

    effects
}

/// Build one side of the round summary. `own` is this combatant's move
/// effects, `against` is the opponent's (whose damage report describes
/// the hit this combatant took).
fn summarize(
    combatant: &Combatant,
    choice: &MoveChoice,
    ep_before: u32,
    own: &MoveEffects,
    against: &MoveEffects,
) -> PlayerRoundSummary {
    let stats = combatant.stats();
    PlayerRoundSummary {
        name: combatant.name().to_string(),
        move_name: choice.label(combatant),
        ep_spent: ep_before as i32 - stats.ep as i32,
        hp_after: stats.hp,
        ep_after: stats.ep,
        damage_taken: against.damage_dealt.clone(),
        hp_restored: own.hp_restored,
        ep_restored: own.ep_restored,
    }
}
