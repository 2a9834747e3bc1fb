//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two with the
/// same attribute values are the same value. View criteria and credentials
/// are the canonical examples here: they carry no identity of their own and
/// are passed by value into whatever consumes them.
///
/// To "modify" a value object, construct a new one. The trait requires
/// `Clone + PartialEq + Debug` so values can be copied around, compared in
/// assertions, and logged.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
