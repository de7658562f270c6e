//! Login and signup form validation
//!
//! There is no account backend: a form that passes validation signs the
//! visitor in locally.

use crate::error::CredentialError;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), CredentialError> {
        validate_email(&self.email)?;
        require("Password", &self.password)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), CredentialError> {
        require("Name", &self.name)?;
        validate_email(&self.email)?;
        require("Password", &self.password)?;
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CredentialError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), CredentialError> {
    if value.trim().is_empty() {
        Err(CredentialError::Missing { field })
    } else {
        Ok(())
    }
}

fn validate_email(email: &str) -> Result<(), CredentialError> {
    let email = email.trim();
    require("Email", email)?;

    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(CredentialError::InvalidEmail {
            email: email.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        assert_eq!(
            login("", "secret").validate(),
            Err(CredentialError::Missing { field: "Email" })
        );
        assert_eq!(
            login("ana@example.com", "   ").validate(),
            Err(CredentialError::Missing { field: "Password" })
        );
        assert!(login(" ana@example.com ", "x").validate().is_ok());
    }

    #[test]
    fn test_email_shape() {
        for bad in ["ana", "@example.com", "ana@", "a@b@c"] {
            assert!(
                matches!(
                    login(bad, "secret").validate(),
                    Err(CredentialError::InvalidEmail { .. })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_signup_password_length() {
        let mut form = SignupForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "12345".to_string(),
        };
        assert_eq!(
            form.validate(),
            Err(CredentialError::PasswordTooShort { min: 6 })
        );

        form.password = "123456".to_string();
        assert!(form.validate().is_ok());

        form.name.clear();
        assert_eq!(
            form.validate(),
            Err(CredentialError::Missing { field: "Name" })
        );
    }
}
