//! Utility functions used across the application:
//!
//! - [`word_counter`] - Word tokenization for the word-count endpoint

pub mod word_counter;
