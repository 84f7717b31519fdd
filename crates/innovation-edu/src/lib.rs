//! Core library for the innovation education platform.
//!
//! The library is split along the two stateless teaching tools the
//! platform exposes: the business-model [`recommend`] engine, which
//! ranks a read-only [`catalog`] of tagged records against an innovator
//! archetype, and the [`finance`] solver, which computes NPV, IRR, and
//! related calculator results over transient cash-flow schedules.

pub mod catalog;
pub mod config;
pub mod error;
pub mod finance;
pub mod recommend;
pub mod telemetry;
