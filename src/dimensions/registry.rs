use crate::dimensions::CategoryDimension;
use crate::dimensions::defs::builtin_dimensions;
use crate::error::ConfigError;

/// Dimensions available to a host, in registration order.
#[derive(Debug, Clone, Default)]
pub struct DimensionRegistry {
    dimensions: Vec<CategoryDimension>,
}

impl DimensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The eight dimensions every monografi report set ships with.
    pub fn builtin() -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        for def in builtin_dimensions() {
            registry.register(CategoryDimension::from_def(def)?)?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, dimension: CategoryDimension) -> Result<(), ConfigError> {
        if self.get(dimension.id()).is_some() {
            return Err(ConfigError::DuplicateDimension {
                id: dimension.id().to_string(),
            });
        }
        tracing::debug!(id = dimension.id(), "registered dimension");
        self.dimensions.push(dimension);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&CategoryDimension> {
        self.dimensions.iter().find(|d| d.id() == id)
    }

    pub fn require(&self, id: &str) -> Result<&CategoryDimension, ConfigError> {
        self.get(id).ok_or_else(|| ConfigError::UnknownDimension { id: id.to_string() })
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryDimension> {
        self.dimensions.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.dimensions.iter().map(|d| d.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }
}
