//! Wire bodies for the auth endpoints

use kernel::id::CategoryId;
use platform::credential::BearerToken;
use serde::{Deserialize, Serialize};

use crate::domain::entity::credentials::{Registration, RegistrationStep, SignInCredentials};
use crate::domain::value_object::user_type::UserType;

/// `POST /sanctum/token`
#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub device_name: &'a str,
}

impl<'a> TokenRequest<'a> {
    pub fn new(credentials: &'a SignInCredentials, device_name: &'a str) -> Self {
        Self {
            email: &credentials.email,
            password: credentials.password.expose(),
            device_name,
        }
    }
}

/// Body of every endpoint that issues a token
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: BearerToken,
}

/// `POST /register`
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub name: &'a str,
    pub last_name: &'a str,
    pub dni: &'a str,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub device_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruc: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dni_image: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruc_image: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<&'a [CategoryId]>,
}

impl<'a> RegisterRequest<'a> {
    pub fn new(registration: &'a Registration, device_name: &'a str) -> Self {
        let supplier = registration.supplier.as_ref();
        Self {
            email: &registration.email,
            password: registration.password.expose(),
            name: &registration.name,
            last_name: &registration.last_name,
            dni: &registration.dni,
            user_type: registration.user_type,
            device_name,
            ruc: supplier.map(|s| s.ruc.as_str()),
            dni_image: supplier.map(|s| s.dni_image.as_str()),
            ruc_image: supplier.map(|s| s.ruc_image.as_str()),
            categories: supplier.map(|s| s.categories.as_slice()),
        }
    }
}

/// `POST /register/validate`
///
/// Each step sends only the fields collected on that screen.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ValidateRegistrationRequest<'a> {
    Account {
        step: &'static str,
        email: &'a str,
        password: &'a str,
        name: &'a str,
        last_name: &'a str,
        dni: &'a str,
    },
    Documents {
        step: &'static str,
        ruc: &'a str,
        dni_image: &'a str,
        ruc_image: &'a str,
    },
}

impl<'a> ValidateRegistrationRequest<'a> {
    /// `None` when the documents step is requested without supplier details
    pub fn new(registration: &'a Registration, step: RegistrationStep) -> Option<Self> {
        match step {
            RegistrationStep::Account => Some(Self::Account {
                step: step.code(),
                email: &registration.email,
                password: registration.password.expose(),
                name: &registration.name,
                last_name: &registration.last_name,
                dni: &registration.dni,
            }),
            RegistrationStep::Documents => {
                registration
                    .supplier
                    .as_ref()
                    .map(|supplier| Self::Documents {
                        step: step.code(),
                        ruc: &supplier.ruc,
                        dni_image: &supplier.dni_image,
                        ruc_image: &supplier.ruc_image,
                    })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::credentials::SupplierDetails;
    use serde_json::json;

    #[test]
    fn test_client_register_body_omits_supplier_fields() {
        let registration = Registration::client("a@b.c", "pw123456", "Ana", "Mora", "0912");
        let body = serde_json::to_value(RegisterRequest::new(&registration, "pixel")).unwrap();
        assert_eq!(
            body,
            json!({
                "email": "a@b.c",
                "password": "pw123456",
                "name": "Ana",
                "last_name": "Mora",
                "dni": "0912",
                "type": "client",
                "device_name": "pixel"
            })
        );
    }

    #[test]
    fn test_supplier_register_body() {
        let registration = Registration::client("a@b.c", "pw", "Ana", "Mora", "0912").as_supplier(
            SupplierDetails {
                ruc: "0912001".to_string(),
                dni_image: "https://cdn/dni.jpg".to_string(),
                ruc_image: "https://cdn/ruc.jpg".to_string(),
                categories: vec![CategoryId::new(2), CategoryId::new(5)],
            },
        );
        let body = serde_json::to_value(RegisterRequest::new(&registration, "pixel")).unwrap();
        assert_eq!(body["type"], "supplier");
        assert_eq!(body["categories"], json!([2, 5]));
        assert_eq!(body["ruc_image"], "https://cdn/ruc.jpg");
    }

    #[test]
    fn test_validate_bodies_per_step() {
        let registration = Registration::client("a@b.c", "pw", "Ana", "Mora", "0912");
        let body = serde_json::to_value(
            ValidateRegistrationRequest::new(&registration, RegistrationStep::Account).unwrap(),
        )
        .unwrap();
        assert_eq!(body["step"], "1");
        assert_eq!(body["last_name"], "Mora");

        assert!(ValidateRegistrationRequest::new(&registration, RegistrationStep::Documents).is_none());
    }
}
