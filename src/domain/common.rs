use uuid::Uuid;

/// Entities addressable by a stable unique id. The shell resolves user-facing
/// row numbers to ids through this seam, for ledger items and loans alike.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}
