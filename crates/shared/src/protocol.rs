//! Wire shapes of the remote user directory.
//!
//! Only the fields the dashboard consumes are modelled; everything else in
//! the payload is ignored during deserialization.

use serde::{Deserialize, Serialize};

use crate::domain::EmployeeId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUser {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<ApiUser>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct UsersQuery {
    pub limit: u32,
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
