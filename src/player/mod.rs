//! Automated players for simulations
//!
//! This module contains the guess-choosing policies used to play games
//! without a human.

mod candidates;
pub mod strategy;

pub use candidates::CandidatePool;
pub use strategy::{ConsistentPlayer, Player, PlayerType, RandomPlayer};
