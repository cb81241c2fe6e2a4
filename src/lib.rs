//! Multi-domain insight synthesis.
//!
//! A prompt is matched against fixed per-domain knowledge bases, each domain
//! surfaces one insight, and the insights are composed into a report:
//!
//! ```
//! use dvnc::domain::DomainSet;
//! use dvnc::synthesizer::Synthesizer;
//!
//! let mut synth = Synthesizer::seeded(DomainSet::builtin(), 1452);
//! let result = synth.analyze("fluid dynamics for a canal lock");
//! assert!(result.keywords.get("Physics").unwrap().contains("Fluid Dynamics"));
//! assert!(result.synthesis.contains("fluid dynamics for a canal lock"));
//! ```

pub mod analysis;
pub mod banner;
pub mod commands;
pub mod compose;
pub mod config;
pub mod consts;
pub mod domain;
pub mod engine;
pub mod error;
pub mod extract;
pub mod knowledge;
pub mod prompts;
pub mod spinner;
pub mod stream;
pub mod synthesizer;

pub use analysis::{AnalysisRequest, AnalysisResult, DomainMap};
pub use error::{DvncError, Result};
