pub mod profile;
pub mod referral;
pub mod session;
pub mod traits;

// Re-export
pub use profile::FileProfileRepository;
pub use referral::{FileReferralRepository, ReferralRepository};
pub use session::{FileSessionStore, Session, SessionProvider};
pub use traits::ProfileRepository;
