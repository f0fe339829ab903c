pub mod month;
pub mod profile;
pub mod referral;
