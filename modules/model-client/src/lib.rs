pub mod traits;

pub use traits::{
    Availability, GenerativeModel, ModelSession, SessionOptions, TranslationProvider, Translator,
};
