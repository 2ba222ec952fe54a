//! Shared fixtures for the integration tests.
//!
//! These tests exercise the real router against a live PostgreSQL database.
//! They skip themselves when neither `TEST_DATABASE_URL` nor `DATABASE_URL`
//! is set, so the pure-logic test suite stays runnable anywhere.

#![allow(dead_code)]

pub mod auth_helpers;
pub mod database;
