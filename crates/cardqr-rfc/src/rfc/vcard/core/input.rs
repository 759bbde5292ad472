//! Unvalidated contact data as it arrives at the boundary.

use serde::{Deserialize, Serialize};

use super::contact::PostalAddress;

/// Contact fields as submitted by a client, before validation.
///
/// Deserializes from camelCase JSON (`firstName`, `lastName`, ...). Convert
/// with [`ContactRecord::try_from`](super::ContactRecord) to enforce the
/// required names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub organization: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub website: Option<String>,
    pub address: Option<PostalAddress>,
    pub photo: Option<String>,
    pub note: Option<String>,
}
