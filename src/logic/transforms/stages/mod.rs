//! Individual transformation stages
//!
//! Each stage implements [`Runnable`](super::Runnable) and can be composed into a
//! pipeline with [`Transform::then`](super::Transform::then).

pub mod building;
pub mod classification;
pub mod tokenization;
pub mod unabbreviation;

pub use building::Building;
pub use classification::Classification;
pub use tokenization::Tokenization;
pub use unabbreviation::Unabbreviation;
