//! Constants that every [`Point`](crate::numerical::point::Point) binds by default.

/// Euler's number.
pub const E: f64 = std::f64::consts::E;

/// The ratio of a circle's circumference to its diameter.
pub const PI: f64 = std::f64::consts::PI;

/// Names that are bound to a constant before any user binding is read. These are never reported
/// as the free variables of a point.
pub const RESERVED: [&str; 2] = ["e", "pi"];

/// Returns true if the given name is reserved for a constant.
pub fn is_reserved(name: &str) -> bool {
    RESERVED.contains(&name)
}
