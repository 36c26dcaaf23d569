//! Search Input Parser
//!
//! Splits a raw user search string into the free-text query forwarded to the
//! engine and a list of MeiliSearch filter clauses derived from gmail-style
//! operators (`bank:alpha`, `category:"Price List"`).
//!
//! ## Responsibilities
//! - **Operators**: A fixed table maps each recognised operator keyword to
//!   the index field it filters on. Adding an operator is one table entry.
//! - **Filter clauses**: All values of one operator collapse into a single
//!   OR-combined clause; the handler joins clauses of different operators
//!   with AND.
//! - **Query cleanup**: Matched operator substrings are removed from the
//!   residual free-text query.
//!
//! Parsing is total: every input string produces a result.

pub mod parser;

#[cfg(test)]
mod tests;
