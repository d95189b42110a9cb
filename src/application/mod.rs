//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `PaymentOrchestrator`, the primary entry point
//! for creating and querying payments. It holds the validation, storage and
//! user-directory ports by reference so they can be swapped for test doubles
//! or alternate policies.

pub mod orchestrator;
