//! Credential and account forms
//!
//! Input shapes for sign-in, registration and profile edits. Nothing here is
//! validated client-side; the backend answers with field errors.

use kernel::id::CategoryId;
use platform::secret::SecretString;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::user_type::UserType;

/// Email and password for the credential exchange
#[derive(Debug, Clone)]
pub struct SignInCredentials {
    pub email: String,
    pub password: SecretString,
}

impl SignInCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<SecretString>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Extra documents a supplier provides during registration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierDetails {
    pub ruc: String,
    /// URL of the uploaded ID document photo
    pub dni_image: String,
    /// URL of the uploaded tax registration photo
    pub ruc_image: String,
    /// Categories the supplier offers services in
    pub categories: Vec<CategoryId>,
}

/// New account
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub password: SecretString,
    pub name: String,
    pub last_name: String,
    pub dni: String,
    pub user_type: UserType,
    /// Required by the backend when `user_type` is supplier
    pub supplier: Option<SupplierDetails>,
}

impl Registration {
    pub fn client(
        email: impl Into<String>,
        password: impl Into<SecretString>,
        name: impl Into<String>,
        last_name: impl Into<String>,
        dni: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
            last_name: last_name.into(),
            dni: dni.into(),
            user_type: UserType::Client,
            supplier: None,
        }
    }

    /// Turn into a supplier registration with the given documents
    pub fn as_supplier(mut self, details: SupplierDetails) -> Self {
        self.user_type = UserType::Supplier;
        self.supplier = Some(details);
        self
    }
}

/// Server-side validation checkpoints of the registration wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStep {
    /// Account fields (email, password, names, dni)
    Account,
    /// Supplier documents (ruc and photos)
    Documents,
}

impl RegistrationStep {
    /// Wire value of the `step` field
    pub const fn code(&self) -> &'static str {
        match self {
            RegistrationStep::Account => "1",
            RegistrationStep::Documents => "2",
        }
    }
}

/// Editable profile fields (`POST /profile`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub company_name: Option<String>,
    pub company_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_as_supplier() {
        let registration = Registration::client("a@b.c", "secret12", "Ana", "Mora", "0912")
            .as_supplier(SupplierDetails {
                ruc: "0912345678001".to_string(),
                categories: vec![CategoryId::new(3)],
                ..Default::default()
            });
        assert_eq!(registration.user_type, UserType::Supplier);
        assert_eq!(
            registration.supplier.as_ref().map(|s| s.categories.len()),
            Some(1)
        );
    }

    #[test]
    fn test_step_codes() {
        assert_eq!(RegistrationStep::Account.code(), "1");
        assert_eq!(RegistrationStep::Documents.code(), "2");
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let credentials = SignInCredentials::new("a@b.c", "hunter22");
        assert!(!format!("{credentials:?}").contains("hunter22"));
    }
}
