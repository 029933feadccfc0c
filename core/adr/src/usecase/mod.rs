//! ユースケース層（ポート経由でのみ外界に触れる）

pub mod generate;

pub use generate::{GenerateAdrUseCase, GenerateDeps, Outcome, Settings};
