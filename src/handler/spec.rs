//! メソッド・パス指定のタグ付きバリアント定義

use std::fmt;

use log::warn;
use regex::Regex;

use crate::common::Method;
use crate::error::Error;

/// パターンの安全性を確保（アンカーの確認と追加）
pub fn ensure_safe_pattern(pattern: &str) -> Result<String, Error> {
    if pattern.is_empty() {
        return Err(Error::InvalidPattern(
            "Empty regex pattern is not allowed".to_string(),
        ));
    }

    let has_start_anchor = pattern.starts_with('^');
    let has_end_anchor = pattern.ends_with('$');

    if !has_start_anchor || !has_end_anchor {
        let safe_pattern = format!(
            "^{}$",
            pattern.trim_start_matches('^').trim_end_matches('$')
        );
        warn!(
            "Pattern '{}' lacks proper anchors, converted to '{}' for security",
            pattern, safe_pattern
        );
        Ok(safe_pattern)
    } else {
        Ok(pattern.to_string())
    }
}

/// ハンドラに宣言されたHTTPメソッド（リテラルまたはパターン）
///
/// 候補判定とランキングは`Exact`アームのみを対象とする。
/// パターンは具体的な提案文字列として描画できないため、
/// サジェストからは構造的に除外される。
#[derive(Debug, Clone)]
pub enum MethodSpec {
    /// リテラルなメソッド
    Exact(Method),
    /// 正規表現パターン（例: `^GE`にマッチするメソッド群）
    Pattern(Regex),
}

impl MethodSpec {
    /// 正規表現文字列からMethodSpecを作成
    pub fn pattern_str(pattern: &str) -> Result<Self, Error> {
        let regex =
            Regex::new(pattern).map_err(|e| Error::InvalidPattern(e.to_string()))?;
        Ok(MethodSpec::Pattern(regex))
    }
}

impl From<Method> for MethodSpec {
    fn from(method: Method) -> Self {
        MethodSpec::Exact(method)
    }
}

impl fmt::Display for MethodSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodSpec::Exact(method) => write!(f, "{}", method),
            MethodSpec::Pattern(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}

/// ハンドラに宣言されたパス（リテラルまたはパターン）
///
/// リテラルは相対パス（例: `/api`）または絶対URL
/// （例: `https://api.example.com/api`）を取りうる。
#[derive(Debug, Clone)]
pub enum PathSpec {
    /// リテラルなパス（宣言された文字列をそのまま保持、正規化しない）
    Literal(String),
    /// 正規表現パターン
    Pattern(Regex),
}

impl PathSpec {
    /// リテラルパスからPathSpecを作成
    pub fn literal(path: impl Into<String>) -> Self {
        PathSpec::Literal(path.into())
    }

    /// コンパイル済み正規表現からPathSpecを作成
    pub fn pattern(regex: Regex) -> Self {
        PathSpec::Pattern(regex)
    }

    /// 正規表現文字列からPathSpecを作成
    ///
    /// アンカーを欠くパターンは安全のため`^...$`に変換される。
    pub fn pattern_str(pattern: &str) -> Result<Self, Error> {
        let safe_pattern = ensure_safe_pattern(pattern)?;
        let regex =
            Regex::new(&safe_pattern).map_err(|e| Error::InvalidPattern(e.to_string()))?;
        Ok(PathSpec::Pattern(regex))
    }
}

impl fmt::Display for PathSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSpec::Literal(path) => write!(f, "{}", path),
            PathSpec::Pattern(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}
