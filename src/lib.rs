//! A runtime for lightweight interacting workflow processes, *proclets*,
//! whose lifecycles are Petri-style nets and whose interactions are
//! many-to-many message exchanges mediated by shared channels.
//!
//! The crate has three tightly coupled parts, listed leaves-first:
//!
//! - [`channel`]: per-recipient, per-party mailboxes with at-most-once
//!   delivery and correlation by connection id.
//! - [`fruition`]: the speech-act state machine tracking one request's
//!   status along the Winograd–Flores conversation-for-action pathway.
//! - [`proclet`]: the workflow-net engine. Transitions fire when their
//!   input places are marked, firing retires input tokens and deposits
//!   output tokens, and a proclet's `domain` of children is ticked
//!   alongside it every round.
//!
//! Execution is deterministic, single-threaded, and cooperative: nothing
//! in this crate spawns a thread or blocks. A host drives a root proclet
//! by calling [`proclet::Proclet::tick`] (or, through the domain, any
//! [`proclet::Tickable`]) repeatedly until its marking goes empty or a
//! handler raises [`error::FlowException::Termination`].

pub mod action;
pub mod channel;
pub mod error;
pub mod factory;
pub mod fruition;
pub mod ids;
pub mod net;
pub mod performative;
pub mod population;
pub mod proclet;
