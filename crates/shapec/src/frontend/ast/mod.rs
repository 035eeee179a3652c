//! Abstract Syntax Tree definitions

mod expr;
mod instruction;
mod item;

pub use expr::*;
pub use instruction::*;
pub use item::*;

/// A complete scene: the root of every tree
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub draws: Vec<Draw>,
}

impl Scene {
    pub fn new(draws: Vec<Draw>) -> Self {
        Self { draws }
    }
}
