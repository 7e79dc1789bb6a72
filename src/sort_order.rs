use crate::error::SortError;
use log::warn;
use std::fmt;
use std::str::FromStr;

/// Direction of the materialized output.
///
/// Descending output is always the exact reverse of the ascending position
/// order, so equal keys come out in reverse of their original order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Lenient conversion from a single-character flag.
    ///
    /// Anything other than `'a'` or `'d'` is logged and treated as ascending.
    pub fn from_flag(flag: char) -> Self {
        Self::try_from(flag).unwrap_or_else(|e| {
            warn!("{e}; defaulting to ascending order");
            SortOrder::Ascending
        })
    }

    #[inline]
    pub fn is_descending(self) -> bool {
        self == SortOrder::Descending
    }
}

impl TryFrom<char> for SortOrder {
    type Error = SortError;

    fn try_from(flag: char) -> Result<Self, Self::Error> {
        match flag {
            'a' | 'A' => Ok(SortOrder::Ascending),
            'd' | 'D' => Ok(SortOrder::Descending),
            other => Err(SortError::InvalidSortOrder(other.to_string())),
        }
    }
}

impl FromStr for SortOrder {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a" | "asc" | "ascending" => Ok(SortOrder::Ascending),
            "d" | "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(SortError::InvalidSortOrder(s.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "ascending"),
            SortOrder::Descending => write!(f, "descending"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_flags() {
        assert_eq!(SortOrder::try_from('a').unwrap(), SortOrder::Ascending);
        assert_eq!(SortOrder::try_from('d').unwrap(), SortOrder::Descending);
        assert!(matches!(
            SortOrder::try_from('x'),
            Err(SortError::InvalidSortOrder(_))
        ));
    }

    #[test]
    pub fn test_from_flag_coerces_unknown_to_ascending() {
        assert_eq!(SortOrder::from_flag('d'), SortOrder::Descending);
        assert_eq!(SortOrder::from_flag('z'), SortOrder::Ascending);
        assert_eq!(SortOrder::from_flag(' '), SortOrder::Ascending);
    }

    #[test]
    pub fn test_from_str() {
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Descending);
        assert_eq!("Ascending".parse::<SortOrder>().unwrap(), SortOrder::Ascending);
        assert!("up".parse::<SortOrder>().is_err());
    }

    #[test]
    pub fn test_default_is_ascending() {
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
        assert!(!SortOrder::default().is_descending());
    }
}
