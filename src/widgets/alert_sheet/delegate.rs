use super::AlertSheet;

/// Receives notifications from an [`AlertSheet`].
///
/// Both methods have empty default bodies, so an implementor picks only the
/// callbacks it cares about. The sheet holds its delegate weakly.
pub trait AlertSheetDelegate {
    /// The user tapped a button on the sheet. Button indices start at 0.
    ///
    /// The sheet does not dismiss itself; call [`AlertSheet::dismiss`] from
    /// here when the tap should close it.
    fn alert_sheet_clicked_button(&mut self, sheet: &mut AlertSheet, button_index: usize) {
        let _ = (sheet, button_index);
    }

    /// The dismiss transition finished. Fired once, after the sheet is
    /// hidden and before it detaches from its host surface.
    fn alert_sheet_did_dismiss(&mut self, sheet: &AlertSheet) {
        let _ = sheet;
    }
}
