use super::*;

/// Identifies a widget within one [`Form`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub(crate) usize);

/// Tab order plus the single focused widget.
#[derive(Default, Debug)]
pub struct FocusRing {
    // sorted by tab index, ties in insertion order
    order: Vec<(u32, WidgetId)>,
    focused: Option<WidgetId>,
}

impl FocusRing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: WidgetId, tab_index: u32) {
        let at = self.order.partition_point(|&(t, _)| t <= tab_index);
        self.order.insert(at, (tab_index, id));
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.order.iter().any(|&(_, w)| w == id)
    }

    /// Widgets in tab order.
    pub fn order(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.order.iter().map(|&(_, id)| id)
    }

    pub fn focused(&self) -> Option<WidgetId> {
        self.focused
    }

    pub fn is_focused(&self, id: WidgetId) -> bool {
        self.focused == Some(id)
    }

    /// Focuses `id`. Returns false, leaving focus alone, if `id` is not in
    /// the ring.
    pub fn focus(&mut self, id: WidgetId) -> bool {
        if !self.contains(id) {
            return false;
        }
        if self.focused != Some(id) {
            debug!(?id, "focus");
            self.focused = Some(id);
        }
        true
    }

    pub fn blur(&mut self) {
        if let Some(id) = self.focused.take() {
            debug!(?id, "blur");
        }
    }

    /// Moves focus to the next widget in tab order, wrapping at the end.
    /// With nothing focused, the first widget gets focus.
    pub fn advance(&mut self) -> Option<WidgetId> {
        let next = match self.focused {
            Some(current) => self
                .order
                .iter()
                .position(|&(_, id)| id == current)
                .map(|i| self.order[(i + 1) % self.order.len()].1),
            None => None,
        }
        .or_else(|| self.order.first().map(|&(_, id)| id));

        self.focused = next;
        debug!(?next, "focus advanced");
        next
    }
}
