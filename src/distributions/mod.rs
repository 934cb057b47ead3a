//! The distributions of the library.
//!
//! Continuous:
//!  - [Cauchy](Cauchy::Cauchy): the fat-tailed distribution being studied.
//!  - [AbsPower](AbsPower::AbsPower): the distribution of `|X|^p` where `X` is Cauchy.

pub mod AbsPower;
pub mod Cauchy;
