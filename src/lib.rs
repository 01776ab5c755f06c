// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod reminders;
pub mod store;
pub mod tracker;
pub mod utils;

pub use error::LedgerError;
pub use ledger::{Ledger, Side};
pub use models::{Currency, Record, RecordKind};
pub use reminders::ReminderBook;
pub use tracker::{Goals, Tracker};
