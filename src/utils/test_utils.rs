//! Test fixtures for chain records.
