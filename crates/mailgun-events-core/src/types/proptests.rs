//! Property-based tests for event record types.
