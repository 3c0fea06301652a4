//! # BCLS: Bát Cục Linh Số Pattern Analysis Engine
//!
//! A pure, deterministic engine that reads meaning into digit strings
//! (phone numbers, ID suffixes, account numbers) using the Bát Cục Linh
//! Số eight-star method.
//!
//! ## Pipeline
//!
//! 1. **Segment** - split the digits into groups; `0` and `5` never form
//!    pairs themselves but attach to neighbouring digits as energy
//!    modifiers
//! 2. **Map** - look each group up in the star catalog and compute its
//!    adjusted energy
//! 3. **Combine** - read ordered adjacent star pairs against the
//!    combination taxonomy
//! 4. **Score** - average the energies onto a 0-10 scale, band into a
//!    luck level, and emit recommendations
//!
//! ## Example Usage
//!
//! ```
//! use bcls::Analyzer;
//!
//! let engine = Analyzer::new();
//!
//! // Free-form digit analysis
//! let result = engine.analyze("0912345678")?;
//! println!("{} ({})", result.total_score, result.luck_level);
//!
//! // Phone analysis with purpose fit
//! let result = engine.analyze_phone("+84 91 234 5678", Some("business"))?;
//! assert!(result.purpose_compatibility.is_some());
//! # Ok::<(), bcls::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! - **Digit Segmenter** - cursor scan with 0/5 modifier absorption
//! - **Star Catalog** - static eight-star taxonomy plus zero-variant twins
//! - **Star Mapper** - group → star match with energy adjustment
//! - **Pattern Analyzer** - orchestration, scoring, luck banding
//! - **Purpose Scorer** - favorable/unfavorable star-set compatibility
//! - **Recommendation Generator** - rule-based advisory strings
//!
//! The engine holds no mutable state and performs no I/O: construct one
//! [`Analyzer`] at startup and share it across threads.

pub mod analyzer;
pub mod combinations;
pub mod digits;
pub mod energy;
pub mod mapper;
pub mod pairs;
pub mod purpose;
pub mod recommend;
pub mod segmenter;
pub mod taxonomy;
pub mod types;

// Re-export main types and functions for convenience
pub use analyzer::{Analyzer, CCCD_SUFFIX_LENGTH, PHONE_LENGTH, SCORE_SCALE};
pub use combinations::{CombinationDefinition, CombinationIndex};
pub use energy::{element_for, energy_meaning, energy_number, FiveElement};
pub use mapper::{ResponseFactors, StarMapper};
pub use pairs::{pair_meaning, quick_analyze, QuickAnalysis, QuickPairReading};
pub use purpose::score_purpose;
pub use recommend::recommend;
pub use segmenter::{normalize, normalize_phone, segment};
pub use taxonomy::{Catalog, StarDefinition};
pub use types::{
    AnalysisError, AnalysisResult, CombinationHit, CompatibilityLevel, EnergyTier,
    KeyPosition, KeyPositionReading, LuckLevel, PurposeCompatibility, SegmentedGroup, Star,
    StarMatch, StarNature,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
