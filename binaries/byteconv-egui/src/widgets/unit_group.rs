use byteconv_units::FieldGroup;
use eframe::egui::{Frame, Response, RichText, TextEdit, Widget};

use crate::config::UiConfig;

/// A titled frame holding every field of one [`FieldGroup`]. The three
/// largest units sit on the first row, the rest on the second, each row in
/// descending order.
pub struct UnitGroup<'a> {
    pub group: &'a mut FieldGroup,
    pub config: &'a UiConfig,
}

impl Widget for UnitGroup<'_> {
    fn ui(self, ui: &mut eframe::egui::Ui) -> Response {
        let scale = self.group.scale();
        let font = self.config.field_font();
        Frame::group(ui.style())
            .show(ui, |ui| {
                ui.label(RichText::new(scale.title()).strong());
                for row in row_layout(self.group.len()) {
                    ui.horizontal(|ui| {
                        for (pos, &idx) in row.iter().enumerate() {
                            if pos > 0 {
                                ui.label(RichText::new("=").font(font.clone()));
                            }
                            let response = ui.add(
                                TextEdit::singleline(self.group.text_mut(idx))
                                    .id_salt((scale.title(), idx))
                                    .font(font.clone())
                                    .desired_width(self.config.field_width),
                            );
                            if response.changed() {
                                // bad input just clears the other fields
                                let _ = self.group.sync_from(idx);
                                ui.ctx().request_repaint();
                            }
                            ui.label(RichText::new(scale.units()[idx].label).font(font.clone()));
                        }
                    });
                }
            })
            .response
    }
}

/// Field indices per row, largest unit first.
fn row_layout(len: usize) -> [Vec<usize>; 2] {
    let split = len.saturating_sub(3);
    [(split..len).rev().collect(), (0..split).rev().collect()]
}

#[cfg(test)]
mod tests {
    use super::row_layout;

    #[test]
    fn five_units_split_three_two() {
        assert_eq!(row_layout(5), [vec![4, 3, 2], vec![1, 0]]);
    }

    #[test]
    fn short_scales_fit_one_row() {
        assert_eq!(row_layout(2), [vec![1, 0], vec![]]);
        assert_eq!(row_layout(0), [vec![], vec![]]);
    }
}
