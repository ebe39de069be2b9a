pub mod artifact;
pub mod scorer;

pub use artifact::{Regressor, ScoreError, ShelfLifeModel};
pub use scorer::ModelScorer;
