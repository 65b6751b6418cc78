//! [`MoveSource`] for a person typing moves at a terminal.

use super::MoveSource;
use reversi_engine::{Board, MoveError, Outcome, Side};
use std::fmt;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

pub struct InteractiveSource<R, W> {
    input: R,
    output: W,
}

impl InteractiveSource<BufReader<Stdin>, Stdout> {
    /// Read moves from stdin and print prompts to stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> InteractiveSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, args: fmt::Arguments) {
        if let Err(err) = self.output.write_fmt(args).and_then(|_| self.output.flush()) {
            log::warn!("cannot write to terminal: {}", err);
        }
    }
}

impl<R: BufRead, W: Write> MoveSource for InteractiveSource<R, W> {
    fn propose(&mut self, board: &Board, side: Side) -> Option<String> {
        self.say(format_args!(
            "\n{}\n{} to move, legal moves: {}\nEnter a move: ",
            board,
            side,
            board.legal_moves(side)
        ));

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_ascii_uppercase()),
            Err(err) => {
                log::warn!("cannot read move: {}", err);
                None
            }
        }
    }

    fn reject(&mut self, error: MoveError) {
        self.say(format_args!("Invalid move: {}.\n", error));
    }

    fn notify(&mut self, outcome: Outcome, side: Side) {
        let message = match outcome.winner() {
            Some(winner) if winner == side => "You win!",
            Some(_) => "You lose.",
            None => "Draw.",
        };
        self.say(format_args!("{}\n{}\n", outcome, message));
    }
}
