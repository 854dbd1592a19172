//! Sport-agnostic building blocks shared by the courtside crates: JSON documents on disk,
//! plural agreement for counted nouns, and descriptive statistics over score samples.

pub mod file;
pub mod plural;
pub mod stats;
