//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub emp_code: String,
    pub name: String,
    pub nickname: Option<String>,
    /// Department reference (String ID)
    pub department_id: Option<String>,
    pub gender: Option<String>,
    /// Location reference (String ID)
    pub location_id: Option<String>,
    pub email: Option<String>,
    pub tel: Option<String>,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub emp_code: String,
    pub name: String,
    pub nickname: Option<String>,
    pub department_id: Option<String>,
    pub gender: Option<String>,
    pub location_id: Option<String>,
    pub email: Option<String>,
    pub tel: Option<String>,
}

/// Update employee payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub department_id: Option<String>,
    pub gender: Option<String>,
    pub location_id: Option<String>,
    pub email: Option<String>,
    pub tel: Option<String>,
}
