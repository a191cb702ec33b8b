//! Text foundations for equidistant letter sequence analysis: the normalized
//! [`Corpus`](corpus::Corpus), the normalization rules shared by corpus text,
//! search terms and dictionary words, and Hebrew letter data (final-form
//! folding, corpus letter frequencies).

pub mod corpus;
pub mod letters;

pub use corpus::{Corpus, normalize};
