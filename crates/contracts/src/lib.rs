//! Wire contracts shared between the billing workspace UI and the Minato backend.
//!
//! Every request/response body the frontend exchanges with the backend lives here,
//! together with the small pieces of pure logic (description text, Aadhaar
//! normalisation, tax line selection) that both sides must agree on.

pub mod dashboards;
pub mod domain;
pub mod system;
pub mod usecases;
