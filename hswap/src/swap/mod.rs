//! Counterpart lookup.
//!
//! [`SwapResolver`] runs the phased search, [`Swapper`] wraps it with the
//! pair cache, disambiguation, and the final open. Everything slow or
//! interactive is reached through the traits in [`collaborators`].

pub mod choosers;
pub mod collaborators;
pub mod rank;
pub mod resolver;
pub mod swapper;

pub use choosers::{DeclineChooser, FirstChooser};
pub use collaborators::{CandidateChooser, DirectoryLister, PathOpener, WorkspaceSearcher};
pub use rank::{matching_prefix_len, rank_candidates, SwapCandidate};
pub use resolver::{common_root, Resolution, SwapResolver, COMMON_ROOT_SEGMENTS};
pub use swapper::{SwapOutcome, Swapper};
