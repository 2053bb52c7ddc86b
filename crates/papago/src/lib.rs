//! Client for Papago's internal web API: language detection, translation and
//! text-to-speech URL generation.
//!
//! The backend is undocumented and changes without notice. Requests need the
//! credentials observed in browser traffic, injected through
//! [`PapagoConfig`](papago_config::PapagoConfig).

pub mod client;
pub mod codec;
pub mod error;
pub mod language;
pub mod response;
pub mod transport;
pub mod voice;


pub use client::Papago;
pub use codec::{TranslateOptions, WireRequest};
pub use error::{PapagoError, Result};
pub use language::{Language, parse_language_code, supported_languages};
pub use papago_config::PapagoConfig;
pub use response::TranslateResult;
pub use transport::{HttpTransport, Transport};
pub use voice::{Gender, ParseVoiceError, Pitch, Speed, Voice};
