//! Survey Module - The vocabulary of a response-time survey.
//!
//! # Components
//!
//! - `ItemSet` - Ordered, distinct labels of one domain (keywords or options)
//! - `Pair` - Two distinct items shown side by side
//! - `Decision` - One timed choice on a pair (`KeywordDecision`, `OptionDecision`)
//! - `DecisionLog` - Append-only record of a round's decisions
//! - `PairDeck` - Presentation order of a round's pairs

mod decision;
mod decision_log;
mod item;
mod pair;
mod pair_deck;

pub use decision::{Decision, KeywordDecision, OptionDecision};
pub use decision_log::DecisionLog;
pub use item::{ItemDomain, ItemSet};
pub use pair::Pair;
pub use pair_deck::PairDeck;
