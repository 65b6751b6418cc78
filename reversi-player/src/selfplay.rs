//! Runs many independent games in parallel and aggregates the results.

use crate::config::MatchConfig;
use crate::controller::{GameRecord, Match};
use crate::error::{MatchError, SelfPlayError};
use crate::sources;
use rand::Rng;
use rayon::prelude::*;
use reversi_engine::{Outcome, Side, Verdict};
use std::fmt;

/// Totals over a self-play run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SelfPlaySummary {
    pub games: usize,
    pub green_wins: usize,
    pub red_wins: usize,
    pub draws: usize,
    pub green_discs: u64,
    pub red_discs: u64,
}

impl SelfPlaySummary {
    /// Add one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        if let Outcome::Finished { verdict, tally } = outcome {
            self.games += 1;
            self.green_discs += u64::from(tally.green);
            self.red_discs += u64::from(tally.red);
            match verdict {
                Verdict::Winner(Side::Green) => self.green_wins += 1,
                Verdict::Winner(Side::Red) => self.red_wins += 1,
                Verdict::Draw => self.draws += 1,
            }
        }
    }

    /// Share of games won by `side`.
    pub fn win_ratio(&self, side: Side) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        let wins = match side {
            Side::Green => self.green_wins,
            Side::Red => self.red_wins,
        };
        wins as f64 / self.games as f64
    }
}

impl fmt::Display for SelfPlaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let games = self.games.max(1) as f64;
        write!(
            f,
            "{} games: green won {}, red won {}, {} drawn (average discs green {:.1}, red {:.1})",
            self.games,
            self.green_wins,
            self.red_wins,
            self.draws,
            self.green_discs as f64 / games,
            self.red_discs as f64 / games,
        )
    }
}

/// Play one game between the configured sources, seeding both from `seed`.
pub fn play_game(config: &MatchConfig, seed: u64) -> Result<GameRecord, MatchError> {
    let mut green = sources::build(config.green, seed.wrapping_mul(2));
    let mut red = sources::build(config.red, seed.wrapping_mul(2).wrapping_add(1));
    Match::new(config.max_rejections).play(green.as_mut(), red.as_mut())
}

/// Play `config.games` games on a rayon pool. Game `i` uses seed
/// `seed + i`, so a run with a fixed seed is reproducible regardless of
/// the number of threads.
pub fn run_self_play(config: &MatchConfig) -> Result<SelfPlaySummary, SelfPlayError> {
    if config.has_human() {
        return Err(SelfPlayError::InteractiveSource);
    }

    let base_seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .map_err(SelfPlayError::ThreadPool)?;

    log::info!(
        "starting {} games ({:?} vs {:?}) on {} threads, seed {}",
        config.games,
        config.green,
        config.red,
        pool.current_num_threads(),
        base_seed
    );

    let outcomes: Vec<Outcome> = pool.install(|| {
        (0..config.games)
            .into_par_iter()
            .map(|index| -> Result<Outcome, SelfPlayError> {
                let seed = base_seed.wrapping_add(index as u64);
                let record = play_game(config, seed)
                    .map_err(|source| SelfPlayError::Game { index, source })?;
                log::debug!("game {} ({}): {}", index, record.transcript(), record.outcome);
                Ok(record.outcome)
            })
            .collect::<Result<_, SelfPlayError>>()
    })?;

    let mut summary = SelfPlaySummary::default();
    for outcome in outcomes {
        summary.record(outcome);
    }
    log::info!("{}", summary);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceKind;
    use reversi_engine::Tally;

    fn config(games: usize, threads: usize) -> MatchConfig {
        MatchConfig {
            games,
            seed: Some(7),
            threads,
            green: SourceKind::Random,
            red: SourceKind::Greedy,
            ..MatchConfig::default()
        }
    }

    #[test]
    fn summary_counts_every_game() {
        let summary = run_self_play(&config(6, 2)).unwrap();
        assert_eq!(summary.games, 6);
        assert_eq!(summary.green_wins + summary.red_wins + summary.draws, 6);
        assert!(summary.green_discs + summary.red_discs <= 6 * 64);
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let first = run_self_play(&config(4, 1)).unwrap();
        let second = run_self_play(&config(4, 3)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn human_sources_are_refused() {
        let human = MatchConfig {
            red: SourceKind::Human,
            ..config(1, 1)
        };
        assert!(matches!(
            run_self_play(&human),
            Err(SelfPlayError::InteractiveSource)
        ));
    }

    #[test]
    fn summary_records_outcomes() {
        let mut summary = SelfPlaySummary::default();
        summary.record(Outcome::Finished {
            verdict: Verdict::Winner(Side::Green),
            tally: Tally { green: 40, red: 24 },
        });
        summary.record(Outcome::Finished {
            verdict: Verdict::Draw,
            tally: Tally { green: 32, red: 32 },
        });
        summary.record(Outcome::StillPlaying);

        assert_eq!(summary.games, 2);
        assert_eq!(summary.green_wins, 1);
        assert_eq!(summary.draws, 1);
        assert_eq!(summary.win_ratio(Side::Green), 0.5);
        assert_eq!(
            summary.to_string(),
            "2 games: green won 1, red won 0, 1 drawn (average discs green 36.0, red 28.0)"
        );
    }
}
