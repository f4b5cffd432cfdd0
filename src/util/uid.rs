use uuid::{Uuid, Version};

pub const CONTACT_ID_LEN: usize = 36;

pub fn new_contact_id() -> String {
    Uuid::new_v4().to_string()
}

/// True for a hyphenated random (v4) uuid, which is what `new_contact_id` hands out.
pub fn is_contact_id(s: &str) -> bool {
    if s.len() != CONTACT_ID_LEN {
        return false;
    }
    match Uuid::parse_str(s) {
        Ok(id) => id.get_version() == Some(Version::Random),
        Err(_) => false,
    }
}
