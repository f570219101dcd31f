//! Test-only helpers: canned adb output fixtures.

pub mod fixtures;
