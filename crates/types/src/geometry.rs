use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The longer of the two axes.
    pub fn long_side(&self) -> f32 {
        self.width.max(self.height)
    }

    /// Portrait includes the square case.
    pub fn is_portrait(&self) -> bool {
        self.width <= self.height
    }

    pub fn is_landscape(&self) -> bool {
        !self.is_portrait()
    }
}
