use crate::{
    api::{ApiError, UpdateProfileRequest},
    state::session::Session,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFormState {
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ProfileFormState {
    pub fn from_session(user: &Session) -> Self {
        ProfileFormState {
            username: user.username.clone(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone().unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Checked before any request is sent. The password change is optional,
    /// but once a new password is typed it must be confirmed.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.username.trim().is_empty() {
            return Err(ApiError::validation("Username is required."));
        }
        if self.email.trim().is_empty() {
            return Err(ApiError::validation("Email is required."));
        }
        if !self.new_password.is_empty() && self.new_password != self.confirm_password {
            return Err(ApiError::validation(
                "New Password and Confirm Password must match!",
            ));
        }
        Ok(())
    }

    pub fn to_request(&self, user_id: &str) -> Result<UpdateProfileRequest, ApiError> {
        self.validate()?;
        Ok(UpdateProfileRequest {
            user_id: user_id.to_string(),
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            current_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::Role;

    fn user() -> Session {
        Session {
            user_id: "u1".into(),
            username: "jane".into(),
            email: "jane@example.com".into(),
            role: Role::Employee,
            phone_number: Some("555-0100".into()),
            employee: None,
        }
    }

    #[test]
    fn form_starts_from_session_without_passwords() {
        let form = ProfileFormState::from_session(&user());
        assert_eq!(form.username, "jane");
        assert_eq!(form.phone_number, "555-0100");
        assert!(form.new_password.is_empty());
    }

    #[test]
    fn mismatched_passwords_are_rejected() {
        let mut form = ProfileFormState::from_session(&user());
        form.new_password = "new-secret".into();
        form.confirm_password = "other".into();
        let err = form.to_request("u1").unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(err.error, "New Password and Confirm Password must match!");

        form.confirm_password = "new-secret".into();
        let request = form.to_request("u1").unwrap();
        assert_eq!(request.user_id, "u1");
        assert_eq!(request.new_password, "new-secret");
    }

    #[test]
    fn profile_without_password_change_is_valid() {
        let form = ProfileFormState::from_session(&user());
        assert!(form.validate().is_ok());
        assert!(form.to_request("u1").unwrap().new_password.is_empty());
    }
}
