// src/lib.rs
//
// ratio-core: 正確な有理数演算ライブラリ
//
// 浮動小数点の丸め誤差を避けたい数値コードのための値型。
// すべての値は構築時に既約形へ正規化され、演算は常に新しい値を返す。
// 共有可変状態を持たないため、スレッド間で安全に共有できる。

mod error;
mod rational;

pub use error::{RationalError, Result};
pub use rational::{Rational, Sign};
