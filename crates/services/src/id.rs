use uuid::Uuid;

/// Prefixed record id, e.g. `BOOK1F9A41C2D8`.
///
/// The suffix is UUID-derived so concurrent creations cannot collide.
pub fn generate(prefix: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}{}", prefix, suffix[..10].to_uppercase())
}
