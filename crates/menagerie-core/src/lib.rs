//! # Menagerie Core
//!
//! Compile-time capability contracts for composed animal kinds.
//!
//! Every claim about a kind lives in its type: what it can do, what sex
//! it is, what hunts it and what it hunts. Capabilities that depend on
//! other capabilities are derived by blanket implementations and can
//! never be hand-claimed, so an inconsistent kind fails to build instead
//! of failing to run:
//!
//! - **capability** — The registry: behavioral traits a species
//!   implements by hand, relational contracts derived from them
//! - **gender** — Schemes, literals, and name-based sex classification
//! - **specimen** — Composition of a species with one literal of its
//!   own scheme into a gendered kind
//! - **dispatch** — Ranked pairwise resolution: copulation, then
//!   predation in either or both directions, then indifference
//! - **resident** — Closed rosters whose encounters recover both
//!   concrete types
//! - **erased** — Open-set erasure for behavior-only collections
//!
//! ## Quick Start
//!
//! ```rust
//! use menagerie_core::prelude::*;
//!
//! #[derive(Debug)]
//! struct Dormouse;
//!
//! impl Animal for Dormouse {
//!     fn behave(&self) {}
//! }
//!
//! gender_scheme! {
//!     pub enum DormouseGender [dormouse_gender] { Male, Female }
//! }
//!
//! impl Species for Dormouse {
//!     const NAME: &'static str = "dormouse";
//!     type Scheme = DormouseGender;
//!     type Offense = Placid;
//!     type Defense = Inedible;
//! }
//!
//! fn main() {
//!     let her = compose::<Dormouse, dormouse_gender::Female>(Dormouse);
//!     let him = compose::<Dormouse, dormouse_gender::Male>(Dormouse);
//!     assert_eq!(conduct(&her, &him), Interaction::Copulation);
//! }
//! ```

pub mod capability;
pub mod gender;
pub mod interaction;
pub mod specimen;
pub mod dispatch;
pub mod resident;
pub mod erased;
pub mod prelude;

#[cfg(test)]
pub(crate) mod testkit;
