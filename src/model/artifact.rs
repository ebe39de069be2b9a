use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `[baseline_hours, storage_code, temperature_c]`
pub type Features = [f64; 3];

#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("no model is loaded")]
    Disabled,
    #[error("ensemble has no trees")]
    EmptyEnsemble,
    #[error("tree {tree} references missing node {node}")]
    DanglingNode { tree: usize, node: usize },
    #[error("tree {tree} splits on feature {feature}, only 3 features exist")]
    FeatureOutOfRange { tree: usize, feature: usize },
    #[error("tree {tree} does not reach a leaf")]
    Cycle { tree: usize },
    #[error("expected {expected} coefficients, artifact has {actual}")]
    Arity { expected: usize, actual: usize },
    #[error("model produced a non-finite estimate")]
    NonFinite,
    #[error("model estimate of {hours} hours is outside 0..={max} hours")]
    OutOfRange { hours: f64, max: f64 },
}

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("read model artifact: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode model artifact: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that turns a feature vector into a shelf-life estimate in hours.
pub trait Regressor: Send + Sync {
    fn predict(&self, features: &Features) -> Result<f64, ScoreError>;
}

/// On-disk regression artifact produced by the offline trainer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShelfLifeModel {
    Forest(Forest),
    Linear(Linear),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forest {
    pub trees: Vec<Tree>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Linear {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl ShelfLifeModel {
    pub fn from_json(raw: &str) -> Result<Self, ArtifactError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

impl Regressor for ShelfLifeModel {
    fn predict(&self, features: &Features) -> Result<f64, ScoreError> {
        let estimate = match self {
            Self::Forest(forest) => forest.predict(features)?,
            Self::Linear(linear) => linear.predict(features)?,
        };
        if !estimate.is_finite() {
            return Err(ScoreError::NonFinite);
        }
        Ok(estimate)
    }
}

impl Forest {
    /// Mean of the per-tree estimates.
    fn predict(&self, features: &Features) -> Result<f64, ScoreError> {
        if self.trees.is_empty() {
            return Err(ScoreError::EmptyEnsemble);
        }
        let mut total = 0.0;
        for (idx, tree) in self.trees.iter().enumerate() {
            total += tree.predict(idx, features)?;
        }
        Ok(total / self.trees.len() as f64)
    }
}

impl Tree {
    fn predict(&self, tree: usize, features: &Features) -> Result<f64, ScoreError> {
        let mut cursor = 0;
        // A well-formed tree visits each node at most once on the way down.
        for _ in 0..=self.nodes.len() {
            let node = self
                .nodes
                .get(cursor)
                .ok_or(ScoreError::DanglingNode { tree, node: cursor })?;
            match *node {
                Node::Leaf { value } => return Ok(value),
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let x = features
                        .get(feature)
                        .ok_or(ScoreError::FeatureOutOfRange { tree, feature })?;
                    cursor = if *x <= threshold { left } else { right };
                }
            }
        }
        Err(ScoreError::Cycle { tree })
    }
}

impl Linear {
    fn predict(&self, features: &Features) -> Result<f64, ScoreError> {
        if self.coefficients.len() != features.len() {
            return Err(ScoreError::Arity {
                expected: features.len(),
                actual: self.coefficients.len(),
            });
        }
        Ok(self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, x)| c * x)
                .sum::<f64>())
    }
}
