//! Turn arbitration and phase transitions.
//!
//! [`GameState`] is a plain `Copy` value. Every command is a pure function
//! from one snapshot to the next, so a snapshot handed to a renderer stays
//! valid no matter what happens afterwards. [`GameEngine`] owns the current
//! snapshot and is what front ends drive.

use core::fmt;

use log::{debug, info};
use rand::Rng;

use crate::attack::{self, AttackOutcome};
use crate::board::{Coordinate, OwnView, TargetView};
use crate::common::{AttackError, GameError, PlacementError, StateError};
#[cfg(feature = "std")]
use crate::common::SnapshotError;
use crate::config::NUM_SHIPS;
use crate::placement;
use crate::player::{PlayerId, PlayerState, ShipStatus};
use crate::ship::{Orientation, ShipId};

/// Coarse stage of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Placement,
    Combat,
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Placement => "placement",
            Phase::Combat => "combat",
            Phase::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Kind of command, used when reporting phase errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandKind {
    PlaceShip,
    Attack,
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandKind::PlaceShip => f.write_str("PlaceShip"),
            CommandKind::Attack => f.write_str("Attack"),
        }
    }
}

/// A typed request from a front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    PlaceShip {
        player: PlayerId,
        ship: ShipId,
        anchor: Coordinate,
        orientation: Orientation,
    },
    Attack {
        player: PlayerId,
        target: Coordinate,
    },
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::PlaceShip { .. } => CommandKind::PlaceShip,
            Command::Attack { .. } => CommandKind::Attack,
        }
    }
}

/// Successor snapshot of an accepted command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    /// Set for attacks only.
    pub outcome: Option<AttackOutcome>,
}

/// Complete state of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GameRecord")
)]
pub struct GameState {
    players: [PlayerState; 2],
    phase: Phase,
    active: PlayerId,
    winner: Option<PlayerId>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Starting configuration: no ships placed, Player 1 places first.
    pub fn new() -> Self {
        Self {
            players: [PlayerState::new(); 2],
            phase: Phase::Placement,
            active: PlayerId::Player1,
            winner: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Player allowed to issue the next command.
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    /// Set only once the phase is `Finished`.
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id.index()]
    }

    fn player_mut(&mut self, id: PlayerId) -> &mut PlayerState {
        &mut self.players[id.index()]
    }

    fn expect_phase(&self, phase: Phase, command: CommandKind) -> Result<(), StateError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(StateError::InvalidPhaseForCommand {
                phase: self.phase,
                command,
            })
        }
    }

    /// Place one ship for `player`. Completing Player 1's fleet hands
    /// placement to Player 2; completing Player 2's starts combat with
    /// Player 1 to move.
    pub fn place_ship(
        &self,
        player: PlayerId,
        ship: ShipId,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> Result<GameState, PlacementError> {
        self.expect_phase(Phase::Placement, CommandKind::PlaceShip)?;
        if player != self.active {
            return Err(PlacementError::NotYourTurn(player));
        }

        let mut next = *self;
        placement::place(next.player_mut(player), ship, anchor, orientation)?;
        debug!("{} placed {} at {} {:?}", player, ship, anchor, orientation);

        if next.player(player).placement_complete() {
            match player {
                PlayerId::Player1 => {
                    next.active = PlayerId::Player2;
                    info!("{} fleet complete, {} to place", player, next.active);
                }
                PlayerId::Player2 => {
                    next.phase = Phase::Combat;
                    next.active = PlayerId::Player1;
                    info!("both fleets placed, combat begins");
                }
            }
        }
        Ok(next)
    }

    /// Place every remaining ship of `player` at random legal spots, one
    /// `place_ship` at a time. Nothing is applied unless all of them fit.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(
        &self,
        player: PlayerId,
        rng: &mut R,
    ) -> Result<GameState, PlacementError> {
        self.expect_phase(Phase::Placement, CommandKind::PlaceShip)?;
        if player != self.active {
            return Err(PlacementError::NotYourTurn(player));
        }

        let mut next = *self;
        while let Some(ship) = next.player(player).fleet().next_unplaced() {
            let (anchor, orientation) =
                placement::random_placement(next.player(player).board(), ship.length(), rng)
                    .ok_or(PlacementError::NoLegalPlacement(ship))?;
            next = next.place_ship(player, ship, anchor, orientation)?;
        }
        Ok(next)
    }

    /// `player` fires at `target` on the opponent's board. The turn passes
    /// after every accepted shot, hit or miss, unless it wins the game.
    pub fn attack(
        &self,
        player: PlayerId,
        target: Coordinate,
    ) -> Result<(GameState, AttackOutcome), AttackError> {
        match self.phase {
            Phase::Placement => return Err(AttackError::GameNotStarted),
            Phase::Finished => self.expect_phase(Phase::Combat, CommandKind::Attack)?,
            Phase::Combat => {}
        }
        if player != self.active {
            return Err(AttackError::NotYourTurn(player));
        }

        let mut next = *self;
        let outcome = attack::resolve(next.player_mut(player.opponent()), target)?;
        next.player_mut(player).shots_fired += 1;
        debug!("{} fired at {}: {:?}", player, target, outcome.result);

        if outcome.game_won {
            next.phase = Phase::Finished;
            next.winner = Some(player);
            info!("{} sank the last ship and wins", player);
        } else {
            next.active = player.opponent();
        }
        Ok((next, outcome))
    }

    /// Run any command through the matching transition.
    pub fn apply(&self, command: Command) -> Result<Transition, GameError> {
        match command {
            Command::PlaceShip {
                player,
                ship,
                anchor,
                orientation,
            } => {
                let state = self.place_ship(player, ship, anchor, orientation)?;
                Ok(Transition {
                    state,
                    outcome: None,
                })
            }
            Command::Attack { player, target } => {
                let (state, outcome) = self.attack(player, target)?;
                Ok(Transition {
                    state,
                    outcome: Some(outcome),
                })
            }
        }
    }

    /// `player`'s own board with ships visible.
    pub fn own_board_view(&self, player: PlayerId) -> OwnView {
        self.player(player).board().own_view()
    }

    /// The opponent's board as `player` may see it.
    pub fn opponent_board_view(&self, player: PlayerId) -> TargetView {
        self.player(player.opponent()).board().target_view()
    }

    /// Encode the snapshot for saving or handing to another process.
    #[cfg(feature = "std")]
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Decode a snapshot written by [`GameState::to_bytes`]. Buffers that
    /// decode to an unreachable position are rejected.
    #[cfg(feature = "std")]
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }

    /// Cross-player checks on a decoded snapshot. Per-player consistency is
    /// already enforced when each `PlayerState` is decoded.
    #[cfg(feature = "std")]
    fn check_reachable(&self) -> Result<(), SnapshotError> {
        for player in [PlayerId::Player1, PlayerId::Player2] {
            let received = self.player(player.opponent()).board();
            if self.player(player).shots_fired != (received.hits() | received.misses()).count_ones() {
                return Err(SnapshotError::ShotCount(player));
            }
        }

        let p1 = self.player(PlayerId::Player1);
        let p2 = self.player(PlayerId::Player2);
        // Player 1 fires first, so shot counts are level or Player 1 is one ahead.
        let next_shooter = if p1.shots_fired == p2.shots_fired {
            Some(PlayerId::Player1)
        } else if p1.shots_fired == p2.shots_fired + 1 {
            Some(PlayerId::Player2)
        } else {
            None
        };

        let consistent = match (self.phase, self.winner) {
            (Phase::Placement, None) => {
                let placing = if p1.placement_complete() {
                    PlayerId::Player2
                } else {
                    PlayerId::Player1
                };
                let p2_untouched = p1.placement_complete() || p2.fleet.placed().next().is_none();
                p1.shots_fired == 0
                    && p2.shots_fired == 0
                    && !p2.placement_complete()
                    && p2_untouched
                    && self.active == placing
            }
            (Phase::Combat, None) => {
                p1.placement_complete()
                    && p2.placement_complete()
                    && !p1.fleet.all_sunk()
                    && !p2.fleet.all_sunk()
                    && next_shooter == Some(self.active)
            }
            (Phase::Finished, Some(winner)) => {
                self.player(winner.opponent()).fleet.all_sunk()
                    && !self.player(winner).fleet.all_sunk()
                    && self.active == winner
                    && next_shooter == Some(winner.opponent())
            }
            (phase, winner) => return Err(SnapshotError::Winner { phase, winner }),
        };
        if consistent {
            Ok(())
        } else {
            Err(SnapshotError::Phase(self.phase))
        }
    }
}

#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct GameRecord {
    players: [PlayerState; 2],
    phase: Phase,
    active: PlayerId,
    winner: Option<PlayerId>,
}

#[cfg(feature = "std")]
impl TryFrom<GameRecord> for GameState {
    type Error = SnapshotError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let state = GameState {
            players: record.players,
            phase: record.phase,
            active: record.active,
            winner: record.winner,
        };
        state.check_reachable()?;
        Ok(state)
    }
}

/// Holder of the current [`GameState`]; the entry point for front ends.
///
/// A rejected command leaves the held snapshot untouched.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a previously captured snapshot.
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Current snapshot.
    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn place_ship(
        &mut self,
        player: PlayerId,
        ship: ShipId,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> Result<GameState, PlacementError> {
        let next = self
            .state
            .place_ship(player, ship, anchor, orientation)
            .inspect_err(|e| debug!("rejected placement by {}: {}", player, e))?;
        self.state = next;
        Ok(next)
    }

    pub fn place_fleet_randomly<R: Rng + ?Sized>(
        &mut self,
        player: PlayerId,
        rng: &mut R,
    ) -> Result<GameState, PlacementError> {
        let next = self
            .state
            .place_fleet_randomly(player, rng)
            .inspect_err(|e| debug!("rejected random placement by {}: {}", player, e))?;
        self.state = next;
        Ok(next)
    }

    pub fn attack(
        &mut self,
        player: PlayerId,
        target: Coordinate,
    ) -> Result<(GameState, AttackOutcome), AttackError> {
        let (next, outcome) = self
            .state
            .attack(player, target)
            .inspect_err(|e| debug!("rejected attack by {}: {}", player, e))?;
        self.state = next;
        Ok((next, outcome))
    }

    pub fn apply(&mut self, command: Command) -> Result<Transition, GameError> {
        let transition = self
            .state
            .apply(command)
            .inspect_err(|e| debug!("rejected {}: {}", command.kind(), e))?;
        self.state = transition.state;
        Ok(transition)
    }

    /// Throw the match away and start over.
    pub fn reset(&mut self) -> GameState {
        info!("game reset");
        self.state = GameState::new();
        self.state
    }

    pub fn view_own_board(&self, player: PlayerId) -> OwnView {
        self.state.own_board_view(player)
    }

    pub fn view_opponent_board(&self, player: PlayerId) -> TargetView {
        self.state.opponent_board_view(player)
    }

    pub fn current_phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn active_player(&self) -> PlayerId {
        self.state.active_player()
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner()
    }

    pub fn fleet_status(&self, player: PlayerId) -> [ShipStatus; NUM_SHIPS] {
        self.state.player(player).fleet().status()
    }
}
