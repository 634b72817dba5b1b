//! Backing code for the `neuronet` command-line tool.

pub mod commands;
