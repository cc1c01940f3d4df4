//! Cropsight - Agricultural Insights and Yield Prediction
//!
//! Loads a CSV of land records, renders the table, and produces a
//! natural-language insight for one record by ID via the Groq
//! chat-completion API.

pub mod commands;
pub mod display;
pub mod groq;
pub mod insight;
pub mod loader;
pub mod table;
