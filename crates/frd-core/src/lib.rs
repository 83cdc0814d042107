//! frd-core: Frequency response data representation
//!
//! Represents a linear dynamical system by its sampled frequency response:
//! a set of complex-valued gain matrices taken at discrete angular
//! frequencies. Models support algebraic composition (negation, addition,
//! multiplication, division, exponentiation), feedback interconnection, and
//! evaluation at arbitrary frequencies through per-channel spline
//! interpolation.
//!
//! ## Modules
//!
//! - `frequency` - Validated angular frequency grid
//! - `lti` - Generic linear-system evaluation contract
//! - `math` - Splines and linear algebra helpers
//! - `frd` - The frequency response model and its operators

pub mod constants;
pub mod error;
pub mod frd;
pub mod frequency;
pub mod lti;
pub mod math;

pub use error::FrdError;
pub use frd::{Frd, Operand};
pub use frequency::FrequencyAxis;
pub use lti::Lti;
