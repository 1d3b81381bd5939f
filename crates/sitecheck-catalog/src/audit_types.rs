//! Audit type catalog
//!
//! The checklist itself is the same for every audit type; the type is
//! recorded on the report for classification and filtering.

/// Selectable audit types, in display order
pub static AUDIT_TYPES: &[&str] = &[
    "Safety Audit",
    "EHS Audit",
    "IS 14489 Audit",
    "Fire Safety Assessment",
    "Electrical Safety Audit",
    "Quality Audit",
    "Environmental Audit",
];

/// Whether the given audit type is part of the catalog
pub fn is_known_audit_type(audit_type: &str) -> bool {
    AUDIT_TYPES.contains(&audit_type)
}
