//! Assemble Module
//!
//! Stages a distributable release tree.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`AssembleOptions`)
//! - `result` - Result types (`AssembleResult`)
//! - `use_case` - Core use case logic (`AssembleUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use ogm_release::application::assemble::{AssembleOptions, AssembleUseCase};
//!
//! let use_case = AssembleUseCase::new(LocalFs::new());
//! let result = use_case.execute(&AssembleOptions::new(layout))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::AssembleOptions;
pub use result::AssembleResult;
pub use use_case::AssembleUseCase;
