//! Principal types: who is making a request.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::customer::Customer;
use crate::user::AdminUser;

/// The kind of identity attached to a request or session.
///
/// `Guest` only ever appears in tracking data; tokens are issued for
/// customers and admins exclusively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PrincipalType {
    /// Anonymous visitor, no credential presented.
    Guest,
    /// Storefront customer (`oc_customer`).
    Customer,
    /// Back-office admin user (`oc_user`).
    Admin,
}

impl PrincipalType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Customer => "customer",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for PrincipalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PrincipalType {
    type Err = cartgate_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "guest" => Ok(Self::Guest),
            "customer" => Ok(Self::Customer),
            "admin" => Ok(Self::Admin),
            _ => Err(cartgate_core::AppError::validation(format!(
                "Invalid principal type: '{s}'. Expected one of: guest, customer, admin"
            ))),
        }
    }
}

/// An authenticated identity resolved from a bearer token.
#[derive(Debug, Clone)]
pub enum Principal {
    /// A storefront customer.
    Customer(Customer),
    /// A back-office admin.
    Admin(AdminUser),
}

impl Principal {
    /// Numeric ID of the underlying record.
    pub fn id(&self) -> i32 {
        match self {
            Self::Customer(c) => c.customer_id,
            Self::Admin(a) => a.user_id,
        }
    }

    /// The principal type of this identity.
    pub fn principal_type(&self) -> PrincipalType {
        match self {
            Self::Customer(_) => PrincipalType::Customer,
            Self::Admin(_) => PrincipalType::Admin,
        }
    }

    /// Returns the customer record, if this is a customer.
    pub fn as_customer(&self) -> Option<&Customer> {
        match self {
            Self::Customer(c) => Some(c),
            Self::Admin(_) => None,
        }
    }

    /// Returns the admin record, if this is an admin.
    pub fn as_admin(&self) -> Option<&AdminUser> {
        match self {
            Self::Admin(a) => Some(a),
            Self::Customer(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "customer".parse::<PrincipalType>().unwrap(),
            PrincipalType::Customer
        );
        assert_eq!(
            "ADMIN".parse::<PrincipalType>().unwrap(),
            PrincipalType::Admin
        );
        assert!("superuser".parse::<PrincipalType>().is_err());
    }

    #[test]
    fn test_roundtrip_as_str() {
        for t in [
            PrincipalType::Guest,
            PrincipalType::Customer,
            PrincipalType::Admin,
        ] {
            assert_eq!(t.as_str().parse::<PrincipalType>().unwrap(), t);
        }
    }
}
