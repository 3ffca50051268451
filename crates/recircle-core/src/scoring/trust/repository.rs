use super::seller::Seller;

/// Key-value store for seller records. The review service owns the
/// read-modify-write discipline; implementations only need individually
/// consistent operations.
pub trait SellerStore: Send + Sync {
    fn fetch(&self, seller_id: &str) -> Result<Option<Seller>, StoreError>;
    /// Insert or replace the record under its id.
    fn upsert(&self, seller: Seller) -> Result<(), StoreError>;
}

/// Error enumeration for seller-store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("seller store unavailable: {0}")]
    Unavailable(String),
}
