use chrono::NaiveDate;

use crate::types::GridCoordinate;

/// Side effects produced by a state transition
///
/// Notification variants go to the host's
/// [`CalendarDelegate`](crate::host::CalendarDelegate); [`ViewEffect`]s go to
/// whatever draws the calendar.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The picked day changed
    CellPicked(NaiveDate),
    /// A section became the displayed one
    SectionChanged { date: NaiveDate, rows: u32 },
    /// Paging mode was set
    PagingChanged(bool),
    View(ViewEffect),
    Batch(Vec<Effect>),
}

/// Updates the view layer has to perform
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEffect {
    /// Redraw exactly these two cells
    ReloadCells {
        old: GridCoordinate,
        new: GridCoordinate,
    },
    /// Scroll to a vertical offset, replacing any scroll in flight
    ScrollTo { offset_y: f64, animated: bool },
    /// Light haptic tick when a page settles
    HapticTick,
    /// Show the month name overlay, then fade it out
    ShowMonthName,
    /// Month shown by the overlay (formatting left to the view)
    MonthNameChanged(NaiveDate),
    /// Bounce animation; nothing to scroll to
    Bounce,
}

impl Effect {
    /// Combine effects, dropping empty ones
    pub fn batch(effects: Vec<Effect>) -> Effect {
        let mut effects: Vec<Effect> = effects
            .into_iter()
            .filter(|e| !matches!(e, Effect::None))
            .collect();
        match effects.len() {
            0 => Effect::None,
            1 => effects.remove(0),
            _ => Effect::Batch(effects),
        }
    }

    /// Flatten nested batches into a list, in emission order
    pub fn into_vec(self) -> Vec<Effect> {
        match self {
            Effect::None => Vec::new(),
            Effect::Batch(effects) => effects.into_iter().flat_map(Effect::into_vec).collect(),
            other => vec![other],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_drops_none() {
        assert_eq!(Effect::batch(vec![Effect::None, Effect::None]), Effect::None);
        assert_eq!(
            Effect::batch(vec![Effect::None, Effect::PagingChanged(true)]),
            Effect::PagingChanged(true)
        );
    }

    #[test]
    fn test_into_vec_flattens_in_order() {
        let effect = Effect::Batch(vec![
            Effect::PagingChanged(true),
            Effect::Batch(vec![
                Effect::View(ViewEffect::HapticTick),
                Effect::None,
                Effect::View(ViewEffect::Bounce),
            ]),
        ]);
        assert_eq!(
            effect.into_vec(),
            vec![
                Effect::PagingChanged(true),
                Effect::View(ViewEffect::HapticTick),
                Effect::View(ViewEffect::Bounce),
            ]
        );
    }
}
