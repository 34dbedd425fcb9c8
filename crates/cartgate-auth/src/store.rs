//! Principal lookup seam.
//!
//! The auth service reads principals through this trait so tests can
//! substitute an in-memory store.

use async_trait::async_trait;

use cartgate_core::result::AppResult;
use cartgate_database::repositories::customer::CustomerRepository;
use cartgate_database::repositories::user::UserRepository;
use cartgate_entity::customer::Customer;
use cartgate_entity::user::AdminUser;

/// Read access to the two principal tables.
#[async_trait]
pub trait PrincipalStore: Send + Sync + std::fmt::Debug {
    /// Find a customer by ID.
    async fn find_customer(&self, id: i32) -> AppResult<Option<Customer>>;

    /// Find a customer by login email.
    async fn find_customer_by_email(&self, email: &str) -> AppResult<Option<Customer>>;

    /// Find an admin by ID.
    async fn find_admin(&self, id: i32) -> AppResult<Option<AdminUser>>;

    /// Find an admin by login username.
    async fn find_admin_by_username(&self, username: &str) -> AppResult<Option<AdminUser>>;
}

/// Database-backed principal store over the sqlx repositories.
#[derive(Debug, Clone)]
pub struct DbPrincipalStore {
    customers: CustomerRepository,
    admins: UserRepository,
}

impl DbPrincipalStore {
    /// Create a store over the given repositories.
    pub fn new(customers: CustomerRepository, admins: UserRepository) -> Self {
        Self { customers, admins }
    }
}

#[async_trait]
impl PrincipalStore for DbPrincipalStore {
    async fn find_customer(&self, id: i32) -> AppResult<Option<Customer>> {
        self.customers.find_by_id(id).await
    }

    async fn find_customer_by_email(&self, email: &str) -> AppResult<Option<Customer>> {
        self.customers.find_by_email(email).await
    }

    async fn find_admin(&self, id: i32) -> AppResult<Option<AdminUser>> {
        self.admins.find_by_id(id).await
    }

    async fn find_admin_by_username(&self, username: &str) -> AppResult<Option<AdminUser>> {
        self.admins.find_by_username(username).await
    }
}
