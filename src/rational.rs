// src/rational.rs
//
// 符号・分子・分母を分離して保持する有理数型
//
// 符号分離アーキテクチャ：
// 分子・分母は常に非負の絶対値として保持し、符号は独立したフィールドで管理する。
// これにより負の被演算子に対する整数除算・剰余の言語依存の挙動に
// 一切依存せずに約分（GCD による簡約）が定義できる。
//
// すべての演算結果は構築時に必ず既約形へ正規化される。
// 構築後のインスタンスは不変であり、各演算子は新しい値を返す。

use num_traits::{One, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{RationalError, Result};

/// 最大公約数（ユークリッドの互除法）
///
/// 非負の整数を前提とする。呼び出し側（Rational の正規化経路）が
/// 事前に絶対値を取っているため、負の入力は発生しない。
fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// 有理数の符号
///
/// +1 / -1 の二値。`factor()` で整数係数として取り出す。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// 符号を +1 / -1 の係数として返す
    pub fn factor(self) -> i64 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }

    /// 積 a * b の符号を求める（積が 0 以上なら Positive）
    ///
    /// 乗算そのものは行わないため、オーバーフローしない。
    fn of_product(a: i64, b: i64) -> Sign {
        if a != 0 && b != 0 && (a < 0) != (b < 0) {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }
}

/// 既約分数として保持される正確な有理数
///
/// - `numerator`: 分子の絶対値（0 以上）
/// - `denominator`: 分母の絶対値（常に 1 以上）
/// - `sign`: 符号（分子 0 の場合は構築規則により常に Positive になる）
///
/// 構築のたびに GCD で約分されるため、同じ値は常に同じ表現を持つ。
#[derive(Clone, Copy)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
    sign: Sign,
}

impl Rational {
    /// 新しい Rational を生成する (numerator / denominator)
    ///
    /// 分母 0 は `RationalError::DivisionByZero` を返す。
    /// 符号は引数の積の符号から導出し、絶対値を GCD で約分して保持する。
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        if denominator == 0 {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::reduced(numerator, denominator))
    }

    /// 整数から生成する (n / 1)
    pub fn from_integer(n: i64) -> Self {
        Self::reduced(n, 1)
    }

    /// 符号付きの分子・分母から既約形を構築する内部経路
    ///
    /// 全演算がここを通るため、演算結果は常に正規化済み。
    /// 呼び出し側が denominator != 0 を保証する。
    fn reduced(numerator: i64, denominator: i64) -> Self {
        debug_assert!(denominator != 0);
        let sign = Sign::of_product(numerator, denominator);
        let num = numerator.abs();
        let den = denominator.abs();
        // 分子 0 のとき gcd(0, den) == den なので 0/1 に簡約される
        let common = gcd(num, den);
        Rational {
            numerator: num / common,
            denominator: den / common,
            sign,
        }
    }

    /// 分子の絶対値
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// 分母の絶対値（常に 1 以上）
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// 符号
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// 符号を掛けた分子（演算の定義に現れる v = sign * numerator）
    pub fn signed_numerator(&self) -> i64 {
        self.sign.factor() * self.numerator
    }

    /// ゼロ除算をチェックしつつ除算を行う
    ///
    /// 除数がゼロ（分子 0）の場合は `RationalError::DivisionByZero` を返す。
    /// (a/b) ÷ (c/d) = (a*d) / (b*c)、符号の積は分母側に畳み込まれ、
    /// 構築時に再導出される。
    pub fn checked_div(self, other: Rational) -> Result<Self> {
        if other.numerator == 0 {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::reduced(
            self.numerator * other.denominator,
            self.sign.factor() * other.sign.factor() * self.denominator * other.numerator,
        ))
    }

    /// 絶対値（符号を落とした値）
    pub fn abs(self) -> Self {
        Self::reduced(self.numerator, self.denominator)
    }

    /// 整数かどうか（約分後の分母が 1）
    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// 整数への変換（ゼロ方向への切り捨て）
    ///
    /// 分子・分母とも非負のまま除算してから符号を戻すため、
    /// 負の値でもゼロ方向に切り捨てられる。
    pub fn to_integer(self) -> i64 {
        self.sign.factor() * (self.numerator / self.denominator)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Rational::from_integer(n)
    }
}

impl Default for Rational {
    /// 引数省略時の既定値 1/1（分子・分母とも 1 がデフォルト）
    fn default() -> Self {
        Rational::from_integer(1)
    }
}

// === 算術演算子 ===
//
// 整数オペランドは演算前に Rational へ昇格させる（暗黙の型昇格の明示化）。
// 左右どちらに整数が来ても結果は対応する Rational 演算と一致する。
// ただし除算はオペランドの順序を保存する。

impl Neg for Rational {
    type Output = Rational;

    /// 符号付き分子を反転する。分母の絶対値は変わらない。
    fn neg(self) -> Rational {
        Rational::reduced(-self.signed_numerator(), self.denominator)
    }
}

impl Add for Rational {
    type Output = Rational;

    /// 通分による加算: (a/b) + (c/d) = (a*d + c*b) / (b*d)
    fn add(self, other: Rational) -> Rational {
        Rational::reduced(
            self.signed_numerator() * other.denominator
                + other.signed_numerator() * self.denominator,
            self.denominator * other.denominator,
        )
    }
}

impl Sub for Rational {
    type Output = Rational;

    /// 減算は加算と符号反転の合成: a - b = a + (-b)
    fn sub(self, other: Rational) -> Rational {
        self + (-other)
    }
}

impl Mul for Rational {
    type Output = Rational;

    /// 乗算: (a/b) × (c/d)
    ///
    /// 絶対値同士を掛け、符号の積は分母側の引数に畳み込む。
    /// 構築時に積の符号として再導出される。
    fn mul(self, other: Rational) -> Rational {
        Rational::reduced(
            self.numerator * other.numerator,
            self.sign.factor() * other.sign.factor() * self.denominator * other.denominator,
        )
    }
}

impl Div for Rational {
    type Output = Rational;

    /// 除算: (a/b) ÷ (c/d)
    ///
    /// 除数がゼロの場合はパニックする。エラーとして受け取りたい場合は
    /// `checked_div` を使用する。
    fn div(self, other: Rational) -> Rational {
        match self.checked_div(other) {
            Ok(quotient) => quotient,
            Err(e) => panic!("{}", e),
        }
    }
}

// 整数オペランドを取る版。演算前に From<i64> で昇格する。

impl Add<i64> for Rational {
    type Output = Rational;

    fn add(self, other: i64) -> Rational {
        self + Rational::from(other)
    }
}

impl Add<Rational> for i64 {
    type Output = Rational;

    fn add(self, other: Rational) -> Rational {
        Rational::from(self) + other
    }
}

impl Sub<i64> for Rational {
    type Output = Rational;

    fn sub(self, other: i64) -> Rational {
        self - Rational::from(other)
    }
}

impl Sub<Rational> for i64 {
    type Output = Rational;

    fn sub(self, other: Rational) -> Rational {
        Rational::from(self) - other
    }
}

impl Mul<i64> for Rational {
    type Output = Rational;

    fn mul(self, other: i64) -> Rational {
        self * Rational::from(other)
    }
}

impl Mul<Rational> for i64 {
    type Output = Rational;

    /// 左からのスカラー乗算。乗算は可換なので結果は `Rational * i64` と同じ。
    fn mul(self, other: Rational) -> Rational {
        other * Rational::from(self)
    }
}

impl Div<i64> for Rational {
    type Output = Rational;

    fn div(self, other: i64) -> Rational {
        self / Rational::from(other)
    }
}

impl Div<Rational> for i64 {
    type Output = Rational;

    /// 左からのスカラー除算 k / a。除算は非可換なので順序を保存して
    /// Rational(k) ÷ a として計算する。
    fn div(self, other: Rational) -> Rational {
        Rational::from(self) / other
    }
}

// === 比較演算子 ===
//
// すべて減算から導出する。差は必ず既約形に正規化されるため、
// 元の表現（2/4 と 1/2 等）が異なっていても正しく判定できる。

impl PartialEq for Rational {
    /// a == b ⇔ 差の分子（絶対値）が 0
    fn eq(&self, other: &Self) -> bool {
        (*self - *other).numerator == 0
    }
}

impl Eq for Rational {}

impl Ord for Rational {
    /// a < b ⇔ 差の符号が負、a > b ⇔ 差の符号が正
    fn cmp(&self, other: &Self) -> Ordering {
        let diff = *self - *other;
        if diff.numerator == 0 {
            Ordering::Equal
        } else {
            match diff.sign {
                Sign::Negative => Ordering::Less,
                Sign::Positive => Ordering::Greater,
            }
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// 整数オペランドとの比較。算術演算と同じ規則で昇格する。

impl PartialEq<i64> for Rational {
    fn eq(&self, other: &i64) -> bool {
        *self == Rational::from(*other)
    }
}

impl PartialEq<Rational> for i64 {
    fn eq(&self, other: &Rational) -> bool {
        Rational::from(*self) == *other
    }
}

impl PartialOrd<i64> for Rational {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.cmp(&Rational::from(*other)))
    }
}

impl PartialOrd<Rational> for i64 {
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        Some(Rational::from(*self).cmp(other))
    }
}

// === 変換 ===

impl ToPrimitive for Rational {
    /// ゼロ方向への切り捨てで i64 に変換する
    fn to_i64(&self) -> Option<i64> {
        Some(self.to_integer())
    }

    fn to_u64(&self) -> Option<u64> {
        if self.sign == Sign::Negative && self.numerator != 0 {
            None
        } else {
            Some((self.numerator / self.denominator) as u64)
        }
    }

    /// sign * (分子 as f64) / (分母 as f64)
    fn to_f64(&self) -> Option<f64> {
        Some(self.sign.factor() as f64 * self.numerator as f64 / self.denominator as f64)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Rational::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational::from_integer(1)
    }
}

// === 表示 ===

impl fmt::Display for Rational {
    /// 文字列表現
    ///
    /// - 分子 0: "0"（符号は表示しない）
    /// - 分母 1: "{sign}{numerator}"
    /// - それ以外: "{sign}{numerator}/{denominator}"
    ///
    /// 符号文字は負のときの "-" のみ。"+" は付けない。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.sign {
            Sign::Negative => "-",
            Sign::Positive => "",
        };

        if self.numerator == 0 {
            write!(f, "0")
        } else if self.denominator == 1 {
            write!(f, "{}{}", sign, self.numerator)
        } else {
            write!(f, "{}{}/{}", sign, self.numerator, self.denominator)
        }
    }
}

impl fmt::Debug for Rational {
    /// Debug 表現は Display と同一（repr == str の契約を維持する）
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
