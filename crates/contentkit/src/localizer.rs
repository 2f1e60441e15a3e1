//! Label provider capability: localized display text for resource types.

use crate::entity::ContentEntity;

/// Supplies display text for a resource type without subclassing it.
///
/// Registrants implement this to take charge of localization: the
/// descriptor delegates [`label`](Localizer::label) and
/// [`hover_text`](Localizer::hover_text) to whatever localizer is set,
/// and answers `None` when none is. Absence is always represented by an
/// unset localizer, never by a sentinel implementation.
pub trait Localizer: Send + Sync + 'static {
    /// Display label for the resource type itself.
    fn label(&self) -> String;

    /// Hover text for a specific content item of this type.
    fn hover_text(&self, entity: &ContentEntity) -> String;
}

/// Fixed-string localizer, the one manifest wiring installs.
///
/// Hover text comes from an optional template in which `{id}` and
/// `{name}` are substituted from the entity; without a template the
/// label doubles as hover text.
#[derive(Debug, Clone)]
pub struct StaticLabels {
    label: String,
    hover_template: Option<String>,
}

impl StaticLabels {
    /// Create a localizer with a fixed label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            hover_template: None,
        }
    }

    /// Set the hover template (`{id}` and `{name}` placeholders).
    pub fn with_hover_template(mut self, template: impl Into<String>) -> Self {
        self.hover_template = Some(template.into());
        self
    }
}

impl Localizer for StaticLabels {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn hover_text(&self, entity: &ContentEntity) -> String {
        match &self.hover_template {
            Some(template) => template
                .replace("{id}", &entity.id)
                .replace("{name}", entity.display()),
            None => self.label.clone(),
        }
    }
}
