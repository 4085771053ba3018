// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod clock;
pub mod digits;
pub mod encode;
mod engine;
pub mod error;
pub mod gtotp;
pub mod hash;
pub mod motp;
pub mod otp;
pub mod totp;

pub use clock::Clock;
pub use digits::Digits;
pub use error::OtpError;
pub use gtotp::GTotp;
pub use hash::Hash;
pub use motp::Motp;
pub use otp::Otp;
pub use totp::Totp;
