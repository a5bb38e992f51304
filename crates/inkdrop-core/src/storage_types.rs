use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// What the storage layer does when a generated name already exists on disk.
///
/// Generated names embed 128 random bits, so a collision is not expected in
/// practice. `Overwrite` replaces the existing file; `Fail` refuses the write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    #[default]
    Overwrite,
    Fail,
}

impl FromStr for CollisionPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overwrite" => Ok(CollisionPolicy::Overwrite),
            "fail" => Ok(CollisionPolicy::Fail),
            _ => Err(anyhow::anyhow!("Invalid collision policy: {}", s)),
        }
    }
}

impl Display for CollisionPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            CollisionPolicy::Overwrite => write!(f, "overwrite"),
            CollisionPolicy::Fail => write!(f, "fail"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(
            "Overwrite".parse::<CollisionPolicy>().unwrap(),
            CollisionPolicy::Overwrite
        );
        assert_eq!(" FAIL ".parse::<CollisionPolicy>().unwrap(), CollisionPolicy::Fail);
        assert!("rename".parse::<CollisionPolicy>().is_err());
    }
}
