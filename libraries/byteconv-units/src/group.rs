use rust_decimal::Decimal;

use crate::quantity::{QuantityError, format_grouped, parse_quantity};
use crate::scale::UnitScale;

/// A set of text fields, one per unit of a scale, that all display the same
/// byte quantity.
///
/// The field that was edited last is the source of truth. Editing it either
/// rewrites every other field from its value, or, if its text is not a valid
/// quantity, clears them while leaving the edited text as-is.
#[derive(Clone, Debug)]
pub struct FieldGroup {
    scale: &'static UnitScale,
    texts: Vec<String>,
    base: Option<Decimal>,
}

impl FieldGroup {
    pub fn new(scale: &'static UnitScale) -> Self {
        Self {
            scale,
            texts: vec![String::new(); scale.len()],
            base: None,
        }
    }

    pub fn scale(&self) -> &'static UnitScale {
        self.scale
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn text(&self, idx: usize) -> &str {
        &self.texts[idx]
    }

    /// The raw text of field `idx`, for binding to a text widget. Call
    /// [`FieldGroup::sync_from`] after changing it.
    pub fn text_mut(&mut self, idx: usize) -> &mut String {
        &mut self.texts[idx]
    }

    /// The byte count every field currently represents, if the last edit was
    /// valid.
    pub fn base_bytes(&self) -> Option<Decimal> {
        self.base
    }

    /// Replaces the text of field `idx` and resynchronizes the group from it.
    pub fn edit(&mut self, idx: usize, text: impl Into<String>) -> Result<Decimal, QuantityError> {
        self.texts[idx] = text.into();
        self.sync_from(idx)
    }

    /// Recomputes every field other than `idx` from the text of `idx`.
    ///
    /// On failure the siblings are cleared and the error is returned; the
    /// text of `idx` is never touched.
    pub fn sync_from(&mut self, idx: usize) -> Result<Decimal, QuantityError> {
        match self.compute(idx) {
            Ok((base, values)) => {
                for (i, value) in values.into_iter().enumerate() {
                    if let Some(value) = value {
                        self.texts[i] = value;
                    }
                }
                tracing::trace!(
                    scale = self.scale.title(),
                    unit = self.scale.units()[idx].label,
                    %base,
                    "synchronized field group"
                );
                self.base = Some(base);
                Ok(base)
            }
            Err(err) => {
                for (i, text) in self.texts.iter_mut().enumerate() {
                    if i != idx {
                        text.clear();
                    }
                }
                tracing::trace!(
                    scale = self.scale.title(),
                    unit = self.scale.units()[idx].label,
                    %err,
                    "cleared field group"
                );
                self.base = None;
                Err(err)
            }
        }
    }

    /// Resets every field to empty.
    pub fn clear(&mut self) {
        self.texts.iter_mut().for_each(String::clear);
        self.base = None;
    }

    // All sibling values are computed before any field is written, so a
    // failure part way through never leaves the group half updated.
    fn compute(&self, idx: usize) -> Result<(Decimal, Vec<Option<String>>), QuantityError> {
        let value = parse_quantity(&self.texts[idx])?;
        let base = self.scale.to_base(idx, value)?;
        let values = (0..self.len())
            .map(|i| {
                if i == idx {
                    Ok(None)
                } else {
                    self.scale
                        .from_base(i, base)
                        .map(|v| Some(format_grouped(v)))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok((base, values))
    }
}
