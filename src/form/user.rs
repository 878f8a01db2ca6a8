/// The four inputs of the registration form, keyed by their element ids.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct RegisterFormData {
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterFormData {
    pub fn new(
        email: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            username: username.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Values as they are read at submit time: email and username trimmed,
    /// passwords untouched.
    pub fn normalized(&self) -> Self {
        Self {
            email: self.email.trim().to_string(),
            username: self.username.trim().to_string(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }

    /// Wire field set, in submission order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("email", self.email.clone()),
            ("username", self.username.clone()),
            ("password", self.password.clone()),
            ("confirm_password", self.confirm_password.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_trims_only_email_and_username() {
        let form = RegisterFormData::new("  a@b.com ", "\tabc\n", " secret ", " secret ");
        let normalized = form.normalized();

        assert_eq!(normalized.email, "a@b.com");
        assert_eq!(normalized.username, "abc");
        assert_eq!(normalized.password, " secret ");
        assert_eq!(normalized.confirm_password, " secret ");
    }

    #[test]
    fn fields_use_element_ids_in_order() {
        let form = RegisterFormData::new("a@b.com", "abc", "secret", "secret2");
        let names: Vec<_> = form.fields().into_iter().map(|(name, _)| name).collect();

        assert_eq!(names, ["email", "username", "password", "confirm_password"]);
        assert_eq!(form.fields()[3].1, "secret2");
    }
}
