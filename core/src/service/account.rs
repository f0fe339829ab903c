use rand::Rng;

/// Charset for temporary passwords. Ambiguous characters (0/O, 1/l/I)
/// are left out so credentials survive being read out loud.
const TEMP_PASSWORD_CHARS: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz23456789!@#";

pub const TEMP_PASSWORD_LEN: usize = 12;

/// Affiliates sign in with a synthesized address under this domain; the
/// username doubles as the ref code, so no real mailbox exists.
const LOGIN_EMAIL_DOMAIN: &str = "affiliate.getscora.app";

/// Trim, lowercase, collapse whitespace runs to a single '-', and drop
/// everything outside [a-z0-9_-]. Returns an empty string when nothing
/// survives; callers must reject that as an invalid username.
pub fn normalize_username(username: &str) -> String {
    username
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-'))
        .collect()
}

/// Login address for a normalized username.
pub fn login_email(username: &str) -> String {
    format!("{}@{}", username, LOGIN_EMAIL_DOMAIN)
}

pub fn generate_temp_password(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| TEMP_PASSWORD_CHARS[rng.gen_range(0..TEMP_PASSWORD_CHARS.len())] as char)
        .collect()
}
