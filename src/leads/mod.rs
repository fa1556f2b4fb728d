//! Lead persistence — the collaborator contract and its HTTP implementation.

pub mod client;

pub use client::{HttpLeadClient, LeadPayload, LeadStore};
