pub mod error;
pub mod validate;

pub mod adjudicate;
pub mod appraise;
pub mod color;
pub mod digest;
pub mod phase;
pub mod search;
pub mod sieve;
pub mod specimen;
pub mod vps;

pub use crate::adjudicate::Adjudicator;
pub use crate::appraise::{Score, ScoringMode};
pub use crate::color::{Rgb, MASTER_PALETTE};
pub use crate::phase::{PhaseArray, PhaseSampler, SamplingMode};
pub use crate::search::{Search, SearchConfig, SpecimenSink};
pub use crate::sieve::{RankScheme, Sieve, SieveConfig};
pub use crate::specimen::Specimen;
