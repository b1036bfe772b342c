use crate::error::{DuelError, ErrorSeverity};

use super::{Entity, EntityKind};

/// Errors raised while building an entity.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A required field was never set on the builder.
    #[error("entity field `{field}` was not set before build")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },
}

impl DuelError for BuildError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "BUILD_MISSING_FIELD",
        }
    }
}

/// Accumulates entity fields and produces fresh [`Entity`] handles.
///
/// Negative health and damage are clamped to zero as they are set. Every
/// field must be provided; `build` refuses to produce a half-configured
/// entity. The builder is not consumed, so one configuration can stamp out
/// several independent entities.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntityBuilder {
    health: Option<i32>,
    damage: Option<i32>,
    kind: Option<EntityKind>,
}

impl EntityBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_health(mut self, health: i32) -> Self {
        self.health = Some(health.max(0));
        self
    }

    #[must_use]
    pub fn with_damage(mut self, damage: i32) -> Self {
        self.damage = Some(damage.max(0));
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: EntityKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn build(&self) -> Result<Entity, BuildError> {
        let health = self.health.ok_or(BuildError::MissingField { field: "health" })?;
        let damage = self.damage.ok_or(BuildError::MissingField { field: "damage" })?;
        let kind = self.kind.ok_or(BuildError::MissingField { field: "kind" })?;

        tracing::debug!(%kind, health, damage, "built entity");

        Ok(Entity::from_parts(health, damage, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Combatant;

    #[test]
    fn missing_fields_are_reported_in_order() {
        let err = EntityBuilder::new().build().unwrap_err();
        assert_eq!(err, BuildError::MissingField { field: "health" });

        let err = EntityBuilder::new().with_health(1).build().unwrap_err();
        assert_eq!(err, BuildError::MissingField { field: "damage" });

        let err = EntityBuilder::new()
            .with_health(1)
            .with_damage(1)
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::MissingField { field: "kind" });
        assert_eq!(err.error_code(), "BUILD_MISSING_FIELD");
    }

    #[test]
    fn later_setter_wins() {
        let entity = EntityBuilder::new()
            .with_health(-5)
            .with_health(30)
            .with_damage(2)
            .with_kind(EntityKind::Warrior)
            .with_kind(EntityKind::Sentinel)
            .build()
            .unwrap();

        assert_eq!(entity.health(), 30);
        assert_eq!(entity.kind(), EntityKind::Sentinel);
    }

    #[test]
    fn builder_produces_independent_entities() {
        let builder = EntityBuilder::new()
            .with_health(10)
            .with_damage(1)
            .with_kind(EntityKind::Goblin);

        let first = builder.build().unwrap();
        let second = builder.build().unwrap();
        first.set_health(0);

        assert_eq!(second.health(), 10);
        assert!(!first.same_as(&second));
    }
}
