use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

const DEFAULT_SIDE: NonZeroUsize = match NonZeroUsize::new(64) {
    Some(v) => v,
    None => unreachable!(),
};

/// Output resolution of the normaliser, `W × H`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetSize {
    pub width: NonZeroUsize,
    pub height: NonZeroUsize,
}

impl Default for TargetSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIDE,
            height: DEFAULT_SIDE,
        }
    }
}

impl TargetSize {
    /// `None` if either side is zero.
    pub fn new(width: usize, height: usize) -> Option<Self> {
        Some(Self {
            width: NonZeroUsize::new(width)?,
            height: NonZeroUsize::new(height)?,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width.get()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height.get()
    }
}

impl std::fmt::Display for TargetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
