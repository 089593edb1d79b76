//! The top-level state machine: `(State, Command) -> State`.
//!
//! Every transition is a full-state replacement with no hidden statics;
//! [`GameStore`] is the convenience owner of the single state instance and
//! the production RNG. Invalid commands degrade to no-ops — the unchanged
//! state comes back, at most with an explanatory log entry.

use crate::ai;
use crate::core::allocation::Allocation;
use crate::core::command::Command;
use crate::core::config::{GameMode, GameSetup, INITIAL_GALAXY_SIZE};
use crate::core::player::{Player, PlayerId};
use crate::core::rng::{DiceRoller, GameRng};
use crate::core::snapshot::GameExport;
use crate::core::state::{GameState, Planet, ResolveGate};
use crate::engine;

/// Apply one command, producing the replacement state.
#[must_use]
pub fn reduce<R: DiceRoller + ?Sized>(
    state: &GameState,
    command: Command,
    rng: &mut R,
) -> GameState {
    match command {
        Command::InitGame(setup) => init_game(&setup, rng),
        Command::AllocateDice(allocation) => allocate_dice(state, allocation),
        Command::BeginResolution => {
            if !state.started || state.winner.is_some() {
                return state.clone();
            }
            let mut next = state.clone();
            next.gate = ResolveGate::Resolving;
            next
        }
        Command::EndResolution => {
            let mut next = state.clone();
            next.gate = ResolveGate::Idle;
            next
        }
        Command::ResolveTurn => resolve_turn(state, rng),
        Command::NextPlayer => next_player(state),
        Command::NewGame => GameState::new(),
    }
}

fn create_players<R: DiceRoller + ?Sized>(setup: &GameSetup, rng: &mut R) -> Vec<Player> {
    if setup.mode == GameMode::Hotseat {
        return setup
            .human_names
            .iter()
            .enumerate()
            .map(|(index, name)| Player::new(PlayerId::new(index as u8), name.as_str(), false, None))
            .collect();
    }

    let human_name = setup
        .human_names
        .first()
        .filter(|name| !name.is_empty())
        .map_or("Human", String::as_str);
    let mut players = vec![Player::new(PlayerId::new(0), human_name, false, None)];

    let personas = ai::pick_unique(setup.ai_count, rng);
    for index in 0..setup.ai_count {
        let id = PlayerId::new(index as u8 + 1);
        // Roster exhausted: fall back to a generic opponent.
        let player = match personas.get(index) {
            Some(persona) => Player::new(id, persona.short_name, true, Some(persona.slug.into())),
            None => Player::new(id, format!("AI {}", index + 1), true, None),
        };
        players.push(player);
    }

    players
}

fn init_game<R: DiceRoller + ?Sized>(setup: &GameSetup, rng: &mut R) -> GameState {
    let mut state = GameState::new();
    state.started = true;
    state.mode = setup.mode;
    state.difficulty = setup.difficulty;
    state.debug_enabled = setup.debug_enabled;
    state.players = create_players(setup, rng);
    state.galaxy = (1..=INITIAL_GALAXY_SIZE as u32)
        .map(|id| Planet::new(id, rng.roll_face()))
        .collect();
    state.push_log(format!(
        "Game started: {} mode with {} player(s).",
        state.mode,
        state.players.len()
    ));
    state
}

fn allocate_dice(state: &GameState, allocation: Allocation) -> GameState {
    if !state.started || state.winner.is_some() {
        return state.clone();
    }
    let Some(actor) = state.current_player() else {
        return state.clone();
    };
    if actor.is_ai {
        return state.clone();
    }

    if allocation.assigned_count() != actor.dice_pool.len() {
        let mut next = state.clone();
        let name = actor.name.clone();
        next.push_log(format!("{name} must allocate all 6 dice."));
        return next;
    }

    if !allocation.is_valid_for(actor) {
        let mut next = state.clone();
        let name = actor.name.clone();
        next.push_log(format!(
            "{name} has an invalid allocation. Assign each die once across Move/Claim/Sabotage."
        ));
        return next;
    }

    let mut next = state.clone();
    next.players[state.current_player_index].allocation = Some(allocation);
    next
}

fn resolve_turn<R: DiceRoller + ?Sized>(state: &GameState, rng: &mut R) -> GameState {
    if !state.started || state.winner.is_some() {
        return state.clone();
    }
    let Some(actor) = state.current_player() else {
        return state.clone();
    };

    // Humans must have committed an allocation, unless this turn is a
    // forced skip (which needs none).
    if !actor.is_ai && actor.skipped_turns == 0 && actor.allocation.is_none() {
        let mut next = state.clone();
        let name = actor.name.clone();
        next.push_log(format!("{name} cannot resolve turn without allocating all dice."));
        return next;
    }

    engine::resolve_turn(state, rng)
}

fn next_player(state: &GameState) -> GameState {
    if !state.started || state.winner.is_some() || state.players.is_empty() {
        return state.clone();
    }
    let mut next = state.clone();
    next.current_player_index = (state.current_player_index + 1) % state.players.len();
    next
}

/// Owner of the single in-memory game: state plus the production RNG.
///
/// The UI layer holds one of these, dispatches commands at it, and reads
/// state/snapshots back. Reconstructed fresh per game; nothing persists.
#[derive(Clone, Debug)]
pub struct GameStore {
    state: GameState,
    rng: GameRng,
}

impl GameStore {
    /// A store with a fixed seed: the whole game replays identically.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(),
            rng: GameRng::new(seed),
        }
    }

    /// A store seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            state: GameState::new(),
            rng: GameRng::from_entropy(),
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Apply one command and return the new state.
    pub fn dispatch(&mut self, command: Command) -> &GameState {
        self.state = reduce(&self.state, command, &mut self.rng);
        &self.state
    }

    /// Structured dump for the debug/export collaborator.
    #[must_use]
    pub fn export(&self) -> GameExport {
        self.state.export()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Difficulty;
    use crate::core::dice::DieId;

    fn setup(mode: GameMode, ai_count: usize) -> GameSetup {
        GameSetup {
            mode,
            human_names: vec!["Captain".into()],
            ai_count,
            difficulty: Difficulty::Medium,
            debug_enabled: false,
        }
    }

    #[test]
    fn test_init_single_mode() {
        let mut store = GameStore::new(42);
        store.dispatch(Command::InitGame(setup(GameMode::Single, 2)));
        let state = store.state();

        assert!(state.started);
        assert_eq!(state.players.len(), 3);
        assert!(!state.players[0].is_ai);
        assert_eq!(state.players[0].name, "Captain");
        assert!(state.players[1].is_ai);
        assert!(state.players[1].persona.is_some());
        assert_eq!(state.galaxy.len(), INITIAL_GALAXY_SIZE);
        assert!(state.galaxy.iter().all(|planet| (1..=6).contains(&planet.face)));
        assert_eq!(state.log.len(), 1);
        assert!(state.log[0].message.contains("single mode with 3 player(s)"));
    }

    #[test]
    fn test_init_assigns_distinct_personas() {
        let mut store = GameStore::new(7);
        store.dispatch(Command::InitGame(setup(GameMode::Single, 4)));

        let slugs: Vec<_> = store
            .state()
            .players
            .iter()
            .filter_map(|player| player.persona.clone())
            .collect();
        assert_eq!(slugs.len(), 4);
        for (i, a) in slugs.iter().enumerate() {
            for b in &slugs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_init_hotseat_mode() {
        let mut store = GameStore::new(42);
        store.dispatch(Command::InitGame(GameSetup {
            mode: GameMode::Hotseat,
            human_names: vec!["One".into(), "Two".into()],
            ai_count: 0,
            difficulty: Difficulty::Easy,
            debug_enabled: false,
        }));

        let state = store.state();
        assert_eq!(state.players.len(), 2);
        assert!(state.players.iter().all(|player| !player.is_ai));
    }

    #[test]
    fn test_allocate_rejects_wrong_count() {
        let mut store = GameStore::new(42);
        store.dispatch(Command::InitGame(setup(GameMode::Single, 1)));

        let mut partial = Allocation::empty();
        partial.movement.push(DieId::new(0));
        store.dispatch(Command::AllocateDice(partial));

        let state = store.state();
        assert!(state.players[0].allocation.is_none());
        assert!(state.log[0].message.contains("must allocate all 6 dice"));
    }

    #[test]
    fn test_allocate_stores_valid_allocation() {
        let mut store = GameStore::new(42);
        store.dispatch(Command::InitGame(setup(GameMode::Single, 1)));

        let mut alloc = Allocation::empty();
        alloc.movement.extend((0..6).map(DieId::new));
        store.dispatch(Command::AllocateDice(alloc.clone()));

        assert_eq!(store.state().players[0].allocation, Some(alloc));
    }

    #[test]
    fn test_gate_round_trip() {
        let mut store = GameStore::new(42);
        store.dispatch(Command::InitGame(setup(GameMode::Single, 1)));

        store.dispatch(Command::BeginResolution);
        assert_eq!(store.state().gate, ResolveGate::Resolving);
        store.dispatch(Command::EndResolution);
        assert_eq!(store.state().gate, ResolveGate::Idle);
    }

    #[test]
    fn test_gate_requires_started_game() {
        let mut store = GameStore::new(42);
        store.dispatch(Command::BeginResolution);
        assert_eq!(store.state().gate, ResolveGate::Idle);
    }

    #[test]
    fn test_resolve_before_init_is_noop() {
        let mut store = GameStore::new(42);
        store.dispatch(Command::ResolveTurn);
        assert!(!store.state().started);
        assert_eq!(store.state().turn, 1);
    }

    #[test]
    fn test_human_resolve_requires_allocation() {
        let mut store = GameStore::new(42);
        store.dispatch(Command::InitGame(setup(GameMode::Single, 1)));
        store.dispatch(Command::ResolveTurn);

        let state = store.state();
        assert_eq!(state.turn, 1);
        assert!(state.log[0].message.contains("cannot resolve turn"));
    }

    #[test]
    fn test_next_player_wraps() {
        let mut store = GameStore::new(42);
        store.dispatch(Command::InitGame(setup(GameMode::Single, 2)));

        store.dispatch(Command::NextPlayer);
        assert_eq!(store.state().current_player_index, 1);
        store.dispatch(Command::NextPlayer);
        assert_eq!(store.state().current_player_index, 2);
        store.dispatch(Command::NextPlayer);
        assert_eq!(store.state().current_player_index, 0);
    }

    #[test]
    fn test_new_game_resets() {
        let mut store = GameStore::new(42);
        store.dispatch(Command::InitGame(setup(GameMode::Single, 2)));
        store.dispatch(Command::NewGame);

        let state = store.state();
        assert!(!state.started);
        assert!(state.players.is_empty());
        assert!(state.log.is_empty());
    }
}
