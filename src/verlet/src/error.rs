use std::fmt;

// construction is the only fallible step, everything after runs total
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
	ZeroCells { axis: char },
	BadSpacing(f32),
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ConfigError::ZeroCells { axis } => {
				write!(f, "cloth needs at least one cell along {}", axis)
			}
			ConfigError::BadSpacing(spacing) => {
				write!(f, "cell spacing must be positive and finite, got {}", spacing)
			}
		}
	}
}

impl std::error::Error for ConfigError {}
