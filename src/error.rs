// src/error.rs
//
// 有理数演算のエラー型定義
//
// エラー条件はゼロ除算のみ：
// - 分母 0 での構築
// - 値がゼロの有理数による除算
// それ以外の失敗条件は存在しない（i64 のオーバーフローは対象外）。

use std::fmt;

pub type Result<T> = std::result::Result<T, RationalError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RationalError {
    DivisionByZero,
}

impl fmt::Display for RationalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RationalError::DivisionByZero => write!(f, "Division by zero"),
        }
    }
}

impl std::error::Error for RationalError {}
