//! REST access to the Azure DevOps organization.

mod connection;

pub use connection::{AzdoConnection, AzdoError};
