pub mod auth;
pub mod core;
pub(crate) mod protocol;
pub mod translator;
pub mod transport;

pub use self::core::error::{ConfigError, TranslateError};
pub use self::core::traits::TokenProvider;
pub use self::core::types::*;
pub use translator::{Translator, TranslatorBuilder};
