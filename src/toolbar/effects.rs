use crate::affix::{CatalogError, Construct};
use crate::editor::inject_with;

use super::{Message, Model, Toolbar, ToolbarEvent, update};

impl Toolbar {
    /// Process one message against `model` and return notifications.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownConstruct`] when a button names a
    /// construct missing from the catalog. That is a wiring bug in the host.
    /// The model is left unchanged.
    pub fn dispatch(
        &self,
        model: &mut Model,
        msg: &Message,
    ) -> Result<Vec<ToolbarEvent>, CatalogError> {
        let revision = model.revision;
        *model = update(std::mem::take(model), msg);

        if let Message::Button(name) = msg {
            self.press(model, name)?;
        }

        if model.revision == revision {
            Ok(Vec::new())
        } else {
            Ok(vec![ToolbarEvent::ContentChanged])
        }
    }

    fn press(&self, model: &mut Model, name: &str) -> Result<(), CatalogError> {
        let affix = self.catalog.get(name)?;

        if let Ok(construct) = name.parse::<Construct>()
            && !model.is_enabled(construct)
        {
            tracing::debug!(
                construct = name,
                field = model.field_kind.as_str(),
                "button disabled, ignoring"
            );
            return Ok(());
        }

        let state = model.field.selection_state();
        let result = inject_with(&state, affix, self.blank_selection);
        self.strategy
            .strategy()
            .apply(&mut model.field, &state, &result);

        model.revision += 1;
        tracing::debug!(
            construct = name,
            strategy = self.strategy.as_str(),
            revision = model.revision,
            "applied construct"
        );
        Ok(())
    }
}
