pub mod engine;
pub mod error;
pub mod intake;
pub mod memory;
pub mod models;
pub mod registration;
pub mod scoring;
pub mod store;

pub use engine::{confirm_round, RoundOutcome, RoundSummary, ScoreChange};
pub use error::{IntakeError, IntegrityViolation, RegistrationError, RoundError, ValidationError};
pub use intake::{record_match, IntakeOutcome, MatchReport};
pub use models::{Match, MatchId, MatchView, NewMatch, Player, PlayerId, Standings};
pub use registration::{is_league_started, register_player};
pub use store::LeagueStore;
