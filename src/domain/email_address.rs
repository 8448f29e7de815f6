use validator::validate_email;

#[derive(Debug, Clone, serde::Serialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(email: String) -> Result<EmailAddress, String> {
        let is_valid_email = validate_email(&email);

        if !is_valid_email {
            return Err(format!("{} email is not valid", email));
        }

        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
