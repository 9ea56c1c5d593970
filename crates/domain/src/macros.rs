//! Macro for implementing Display and FromStr for closed domain enums
//!
//! Roles, target units and grouping keys all travel as lowercase strings
//! (config files, persisted rows, request parameters). This macro keeps the
//! string mapping in one place per enum and makes parsing case-insensitive.
//!
//! # Example
//!
//! ```rust
//! use workpace_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Shift {
//!     Morning,
//!     Evening,
//! }
//!
//! impl_domain_status_conversions!(Shift {
//!     Morning => "morning",
//!     Evening => "evening",
//! });
//!
//! assert_eq!(Shift::Morning.to_string(), "morning");
//! assert_eq!("EVENING".parse::<Shift>().unwrap(), Shift::Evening);
//! ```

/// Implements Display and FromStr traits for closed domain enums
///
/// This macro generates:
/// - Display trait: writes the mapped string for each variant
/// - FromStr trait: parses case-insensitive strings back to the variant
///
/// The mapped strings must be lowercase, since input is lowercased before
/// matching.
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
