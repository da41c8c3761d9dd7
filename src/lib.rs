//! actcode - Derive activation codes from an app id and a shared secret.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── generate      # Load secret, derive and print the code
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── constants     # File names, marker, code layout
//!     ├── properties    # local.properties secret lookup
//!     ├── code          # HMAC-SHA256 code derivation
//!     └── types         # SecretValue and ActivationCode
//! ```
//!
//! # Example
//!
//! ```
//! use actcode::core::code;
//! use actcode::core::types::SecretValue;
//!
//! let secret = SecretValue::new("testsecret");
//! let code = code::derive("App123", &secret).unwrap();
//! assert_eq!(code.as_str(), "52CC-800A-5EA8-B09A");
//! ```

pub mod cli;
pub mod core;
pub mod error;
