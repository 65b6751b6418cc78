//! The game loop: alternates turns between two move sources and feeds their
//! proposals to the engine.

use crate::error::MatchError;
use crate::sources::MoveSource;
use itertools::Itertools;
use reversi_engine::{Board, Outcome, Position, Side};
use std::fmt;

/// One half-move of a finished game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Turn {
    /// `side` played at `position`, changing `changed` cells.
    Move {
        side: Side,
        position: Position,
        changed: u8,
    },
    /// `side` had no legal move.
    Pass(Side),
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turn::Move { position, .. } => write!(f, "{}", position),
            Turn::Pass(_) => f.write_str("pass"),
        }
    }
}

/// Everything that happened in a finished game.
#[derive(Clone, Debug, PartialEq)]
pub struct GameRecord {
    pub turns: Vec<Turn>,
    pub board: Board,
    pub outcome: Outcome,
}

impl GameRecord {
    /// The moves in order, e.g. "E3 F4 pass C5".
    pub fn transcript(&self) -> String {
        self.turns.iter().join(" ")
    }
}

/// A single game between two move sources.
pub struct Match {
    board: Board,
    to_move: Side,
    max_rejections: u32,
}

impl Match {
    /// Start from the opening position with green to move.
    pub fn new(max_rejections: u32) -> Self {
        Self::from_board(Board::new(), Side::default(), max_rejections)
    }

    /// Start from an arbitrary position.
    pub fn from_board(board: Board, to_move: Side, max_rejections: u32) -> Self {
        Self {
            board,
            to_move,
            max_rejections,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play until neither side can move. A side without a legal move passes.
    pub fn play(
        mut self,
        green: &mut dyn MoveSource,
        red: &mut dyn MoveSource,
    ) -> Result<GameRecord, MatchError> {
        let mut turns = Vec::new();

        loop {
            let outcome = self.board.outcome();
            if outcome.is_finished() {
                log::info!("game over after {} turns: {}", turns.len(), outcome);
                green.notify(outcome, Side::Green);
                red.notify(outcome, Side::Red);
                return Ok(GameRecord {
                    turns,
                    board: self.board,
                    outcome,
                });
            }

            let side = self.to_move;
            if !self.board.has_legal_move(side) {
                log::debug!("{} has no legal move and passes", side);
                turns.push(Turn::Pass(side));
                self.to_move = !side;
                continue;
            }

            let source: &mut dyn MoveSource = match side {
                Side::Green => &mut *green,
                Side::Red => &mut *red,
            };
            turns.push(self.take_turn(source, side)?);
            self.to_move = !side;
        }
    }

    /// Ask `source` for moves until one is accepted.
    fn take_turn(&mut self, source: &mut dyn MoveSource, side: Side) -> Result<Turn, MatchError> {
        let mut attempts = 0;

        loop {
            let proposal = source
                .propose(&self.board, side)
                .ok_or(MatchError::Abandoned(side))?;

            let applied = proposal.parse::<Position>().and_then(|position| {
                self.board
                    .apply(side, position)
                    .map(|changed| (position, changed))
            });

            match applied {
                Ok((position, changed)) => {
                    log::debug!("{} plays {} ({} cells changed)", side, position, changed);
                    return Ok(Turn::Move {
                        side,
                        position,
                        changed,
                    });
                }
                Err(error) => {
                    attempts += 1;
                    log::debug!("{} proposal {:?} rejected: {}", side, proposal, error);
                    if attempts >= self.max_rejections {
                        return Err(MatchError::TooManyRejections {
                            side,
                            attempts,
                            source: error,
                        });
                    }
                    source.reject(error);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{PolicySource, UniformPolicy};
    use reversi_engine::{Cell, MoveError, Tally, Verdict, NUM_SPACES};
    use std::collections::VecDeque;

    /// Replays a fixed list of proposals and records what it is told.
    #[derive(Default)]
    struct ScriptedSource {
        script: VecDeque<&'static str>,
        rejections: Vec<MoveError>,
        outcome: Option<(Outcome, Side)>,
    }

    impl ScriptedSource {
        fn new(script: &[&'static str]) -> Self {
            Self {
                script: script.iter().copied().collect(),
                ..Self::default()
            }
        }
    }

    impl MoveSource for ScriptedSource {
        fn propose(&mut self, _board: &Board, _side: Side) -> Option<String> {
            self.script.pop_front().map(str::to_string)
        }

        fn reject(&mut self, error: MoveError) {
            self.rejections.push(error);
        }

        fn notify(&mut self, outcome: Outcome, side: Side) {
            self.outcome = Some((outcome, side));
        }
    }

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn random_game_runs_to_the_end() {
        let mut green = PolicySource::new(UniformPolicy, 1);
        let mut red = PolicySource::new(UniformPolicy, 2);
        let record = Match::new(4).play(&mut green, &mut red).unwrap();

        assert!(record.outcome.is_finished());
        assert_eq!(record.outcome, record.board.outcome());
        let moves = record
            .turns
            .iter()
            .filter(|turn| matches!(turn, Turn::Move { .. }))
            .count();
        assert!(moves <= 60);
        assert_eq!(
            record.board.count_empty() as usize,
            60 - moves,
            "each move fills exactly one cell"
        );
    }

    #[test]
    fn rejected_proposals_are_asked_again() {
        let mut green = ScriptedSource::new(&["Z9", "A1", "D4", "E3"]);
        let mut red = ScriptedSource::new(&[]);
        let result = Match::new(8).play(&mut green, &mut red);

        assert_eq!(result, Err(MatchError::Abandoned(Side::Red)));
        assert_eq!(
            green.rejections,
            vec![
                MoveError::InvalidPosition,
                MoveError::NoCaptureAvailable,
                MoveError::CellOccupied
            ]
        );
        assert!(green.script.is_empty());
    }

    #[test]
    fn too_many_rejections_end_the_game() {
        let mut green = ScriptedSource::new(&["A1", "A1", "E3"]);
        let mut red = ScriptedSource::new(&[]);
        let result = Match::new(2).play(&mut green, &mut red);

        assert_eq!(
            result,
            Err(MatchError::TooManyRejections {
                side: Side::Green,
                attempts: 2,
                source: MoveError::NoCaptureAvailable,
            })
        );
        assert_eq!(green.rejections, vec![MoveError::NoCaptureAvailable]);
    }

    #[test]
    fn blocked_side_passes() {
        // Red cannot bracket the corner disc, so it passes; green's C1 then
        // takes red's last disc and ends the game.
        let mut cells = [Cell::Empty; NUM_SPACES];
        cells[pos("A1").index() as usize] = Cell::Green;
        cells[pos("B1").index() as usize] = Cell::Red;
        let board = Board::from_cells(cells);

        let mut green = ScriptedSource::new(&["C1"]);
        let mut red = ScriptedSource::new(&[]);
        let record = Match::from_board(board, Side::Red, 4)
            .play(&mut green, &mut red)
            .unwrap();

        assert_eq!(
            record.turns,
            vec![
                Turn::Pass(Side::Red),
                Turn::Move {
                    side: Side::Green,
                    position: pos("C1"),
                    changed: 2
                },
            ]
        );
        assert_eq!(record.transcript(), "pass C1");

        let outcome = Outcome::Finished {
            verdict: Verdict::Winner(Side::Green),
            tally: Tally { green: 3, red: 0 },
        };
        assert_eq!(record.outcome, outcome);
        assert_eq!(green.outcome, Some((outcome, Side::Green)));
        assert_eq!(red.outcome, Some((outcome, Side::Red)));
    }

    #[test]
    fn finished_board_plays_no_turns() {
        let board = Board::from_cells([Cell::Red; NUM_SPACES]);
        let mut green = ScriptedSource::new(&[]);
        let mut red = ScriptedSource::new(&[]);
        let record = Match::from_board(board, Side::Green, 1)
            .play(&mut green, &mut red)
            .unwrap();

        assert!(record.turns.is_empty());
        assert_eq!(record.outcome.winner(), Some(Side::Red));
    }
}
