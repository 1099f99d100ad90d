//! Session core of a table-tennis lesson tracking application.
//!
//! Loads the student and teacher rosters from two remote CSV documents,
//! keeps an in-memory ledger of lesson records with add/remove/filter
//! operations, and exports the filtered view as UTF-8 CSV (with a leading
//! byte-order marker) for spreadsheet tools.
//!
//! The presentation surface is an external collaborator: it reads state
//! from [`session::Session`], dispatches intents into it, and displays the
//! notices the session queues.

pub mod common;
pub mod domain;
pub mod io;
pub mod notify;
pub mod session;
pub mod worker;
