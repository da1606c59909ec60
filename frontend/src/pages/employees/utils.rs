use crate::{
    api::{ApiError, Employee, NewEmployee, SignupRequest},
    state::session::Session,
    utils::search::{is_active_query, matches_query},
};

pub const GENDERS: &[&str] = &["Male", "Female", "Other"];
pub const ACCOUNT_ROLES: &[&str] = &["employee", "admin"];
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormState {
    pub name: String,
    pub email: String,
    pub department: String,
    pub designation: String,
    pub phone_number: String,
    pub gender: String,
    pub aadhaar_number: String,
    pub address: String,
}

impl EmployeeFormState {
    pub fn from_employee(employee: &Employee) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            name: employee.name.clone(),
            email: employee.email.clone(),
            department: text(&employee.department),
            designation: text(&employee.designation),
            phone_number: text(&employee.phone_number),
            gender: text(&employee.gender),
            aadhaar_number: text(&employee.aadhaar_number),
            address: text(&employee.address),
        }
    }

    fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::validation("Name is required."));
        }
        if !self.email.contains('@') {
            return Err(ApiError::validation("A valid email is required."));
        }
        Ok(())
    }

    pub fn to_new_employee(&self) -> Result<NewEmployee, ApiError> {
        self.validate()?;
        Ok(NewEmployee {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.clone(),
            designation: self.designation.clone(),
            phone_number: self.phone_number.clone(),
            gender: self.gender.clone(),
            aadhaar_number: self.aadhaar_number.clone(),
            address: self.address.clone(),
        })
    }

    /// Copies the edited fields onto `employee`, keeping id, status and role.
    pub fn apply_to(&self, employee: &Employee) -> Result<Employee, ApiError> {
        self.validate()?;
        let some = |value: &String| Some(value.clone()).filter(|v| !v.is_empty());
        Ok(Employee {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: some(&self.department),
            designation: some(&self.designation),
            phone_number: some(&self.phone_number),
            gender: some(&self.gender),
            aadhaar_number: some(&self.aadhaar_number),
            address: some(&self.address),
            ..employee.clone()
        })
    }
}

/// Login account for an existing employee. Email and phone come from the
/// employee record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountFormState {
    pub username: String,
    pub password: String,
    pub role: String,
}

impl Default for AccountFormState {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            role: ACCOUNT_ROLES[0].to_string(),
        }
    }
}

impl AccountFormState {
    pub fn to_signup(&self, employee: &Employee) -> Result<SignupRequest, ApiError> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(ApiError::validation("All fields are required"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::validation(
                "Password must be at least 6 characters",
            ));
        }
        Ok(SignupRequest {
            username: self.username.trim().to_string(),
            email: employee.email.clone(),
            password: self.password.clone(),
            role: self.role.clone(),
            phone_number: employee.phone_number.clone().filter(|p| !p.is_empty()),
            employee_id: Some(employee.id.clone()),
        })
    }
}

/// Name search used by employee management; inactive below two characters.
pub fn search_employees(employees: &[Employee], query: &str) -> Vec<Employee> {
    if !is_active_query(query) {
        return Vec::new();
    }
    filter_employees(employees, query)
}

/// Filter for the edit and status tables; an empty query keeps everyone.
pub fn filter_employees(employees: &[Employee], query: &str) -> Vec<Employee> {
    employees
        .iter()
        .filter(|e| query.trim().is_empty() || matches_query(&e.name, query))
        .cloned()
        .collect()
}

/// Employee record for the signed-in user: the linked id when the session
/// carries one, otherwise the record with the same email.
pub fn linked_employee<'a>(user: &Session, employees: &'a [Employee]) -> Option<&'a Employee> {
    match user.employee.as_deref() {
        Some(id) if !id.is_empty() => employees.iter().find(|e| e.id == id),
        _ => employees
            .iter()
            .find(|e| !user.email.is_empty() && e.email.eq_ignore_ascii_case(&user.email)),
    }
}

/// Lookup helper for tables that show assignee names.
pub fn employee_name(employees: &[Employee], id: Option<&str>) -> String {
    id.and_then(|id| employees.iter().find(|e| e.id == id))
        .map(|e| e.name.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::Role;

    fn employee(id: &str, name: &str, email: &str) -> Employee {
        Employee {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            status: Some("Active".into()),
            ..Employee::default()
        }
    }

    fn user(email: &str, employee: Option<&str>) -> Session {
        Session {
            user_id: "u1".into(),
            username: "jane".into(),
            email: email.into(),
            role: Role::Employee,
            phone_number: None,
            employee: employee.map(str::to_string),
        }
    }

    #[test]
    fn search_needs_two_characters() {
        let staff = vec![employee("e1", "Jane Doe", "j@x.io"), employee("e2", "Arjun", "a@x.io")];
        assert!(search_employees(&staff, "j").is_empty());
        let found = search_employees(&staff, "ja");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "e1");
        assert_eq!(filter_employees(&staff, "").len(), 2);
    }

    #[test]
    fn form_validation_and_conversion() {
        let mut form = EmployeeFormState::default();
        assert_eq!(form.to_new_employee().unwrap_err().error, "Name is required.");
        form.name = " Jane ".into();
        form.email = "jane".into();
        assert_eq!(form.to_new_employee().unwrap_err().code, "VALIDATION_ERROR");
        form.email = "jane@example.com".into();
        assert_eq!(form.to_new_employee().unwrap().name, "Jane");
    }

    #[test]
    fn apply_to_keeps_identity_and_status() {
        let original = employee("e1", "Jane", "j@x.io");
        let mut form = EmployeeFormState::from_employee(&original);
        form.department = "Finance".into();
        let updated = form.apply_to(&original).unwrap();
        assert_eq!(updated.id, "e1");
        assert_eq!(updated.status.as_deref(), Some("Active"));
        assert_eq!(updated.department.as_deref(), Some("Finance"));
        assert!(updated.address.is_none());
    }

    #[test]
    fn account_form_checks_fields_and_prefills_contact() {
        let mut record = employee("e1", "Jane", "jane@x.io");
        record.phone_number = Some("555-0100".into());
        let mut form = AccountFormState::default();
        assert_eq!(form.role, "employee");
        assert_eq!(form.to_signup(&record).unwrap_err().error, "All fields are required");

        form.username = "jane".into();
        form.password = "12345".into();
        assert_eq!(
            form.to_signup(&record).unwrap_err().error,
            "Password must be at least 6 characters"
        );

        form.password = "123456".into();
        let request = form.to_signup(&record).unwrap();
        assert_eq!(request.email, "jane@x.io");
        assert_eq!(request.phone_number.as_deref(), Some("555-0100"));
        assert_eq!(request.employee_id.as_deref(), Some("e1"));
    }

    #[test]
    fn linked_employee_prefers_id_then_email() {
        let staff = vec![employee("e1", "Jane", "JANE@x.io"), employee("e2", "Arjun", "a@x.io")];
        assert_eq!(linked_employee(&user("", Some("e2")), &staff).unwrap().id, "e2");
        assert_eq!(linked_employee(&user("jane@x.io", None), &staff).unwrap().id, "e1");
        assert!(linked_employee(&user("", None), &staff).is_none());
    }

    #[test]
    fn employee_name_falls_back_to_unknown() {
        let staff = vec![employee("e1", "Jane", "j@x.io")];
        assert_eq!(employee_name(&staff, Some("e1")), "Jane");
        assert_eq!(employee_name(&staff, Some("e9")), "Unknown");
        assert_eq!(employee_name(&staff, None), "Unknown");
    }
}
