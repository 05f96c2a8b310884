//! Ordering State Machine
//!
//! Framework-free reorder state for a fixed set of rows: in-memory moves
//! during a drag, baseline/dirty tracking, and concurrent order persistence.

use std::future::Future;

use futures::future::join_all;

/// Rows managed by an [`OrderList`] expose their server-assigned id.
pub trait Orderable {
    fn id(&self) -> u32;
}

/// Outcome of a failed [`OrderList::persist`] call.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PersistError {
    /// The current order already matches the baseline; no calls were made.
    #[error("order is already saved")]
    NothingToSave,
    /// One or more per-row updates failed; `items` and `dirty` are unchanged.
    #[error("{} order update(s) failed", .0.len())]
    Failed(Vec<(u32, String)>),
}

/// Client-side ordering of one row collection.
///
/// `items` is the presentation order. `baseline` is the id sequence captured
/// at the last successful load or save; `dirty` is true iff the current id
/// order differs from it. Membership never changes through reordering;
/// create/delete go through the backend and trigger a fresh [`load`].
///
/// [`load`]: OrderList::load
#[derive(Clone, Debug)]
pub struct OrderList<T> {
    items: Vec<T>,
    baseline: Vec<u32>,
    dragging: Option<u32>,
    over: Option<u32>,
    dirty: bool,
}

impl<T> Default for OrderList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            baseline: Vec::new(),
            dragging: None,
            over: None,
            dirty: false,
        }
    }
}

impl<T: Orderable> OrderList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list with a server-sorted snapshot.
    ///
    /// Resets the baseline to the incoming id sequence and clears all drag
    /// and dirty state. An empty snapshot is valid.
    pub fn load(&mut self, rows: Vec<T>) {
        self.baseline = rows.iter().map(Orderable::id).collect();
        self.items = rows;
        self.dragging = None;
        self.over = None;
        self.dirty = false;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Id of the row being dragged, if a drag is active.
    pub fn dragging(&self) -> Option<u32> {
        self.dragging
    }

    /// Id of the row under the pointer (hover highlight only).
    pub fn over(&self) -> Option<u32> {
        self.over
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn index_of(&self, id: u32) -> Option<usize> {
        self.items.iter().position(|row| row.id() == id)
    }

    fn current_ids(&self) -> Vec<u32> {
        self.items.iter().map(Orderable::id).collect()
    }

    /// Start dragging the row with `id`. No-op if the id is not present.
    pub fn begin_drag(&mut self, id: u32) {
        if self.index_of(id).is_some() {
            self.dragging = Some(id);
        }
    }

    /// The pointer moved over the row with `hover_id`.
    ///
    /// Moves the dragged row to the hovered row's slot (a single-element
    /// move; rows in between shift by one). Fires once per pointer-over
    /// event and always repositions against the current `items`, so rapid
    /// hops across several rows converge to the visually correct order.
    /// Sets `dirty` eagerly on any move; [`end_drag`] reconciles it.
    ///
    /// [`end_drag`]: OrderList::end_drag
    pub fn drag_over(&mut self, hover_id: u32) {
        self.over = Some(hover_id);
        let Some(dragging) = self.dragging else {
            return;
        };
        if dragging == hover_id {
            return;
        }
        let (Some(from), Some(to)) = (self.index_of(dragging), self.index_of(hover_id)) else {
            return;
        };
        let moved = self.items.remove(from);
        self.items.insert(to, moved);
        self.dirty = true;
    }

    /// The pointer left the hovered row without entering another.
    pub fn drag_leave(&mut self) {
        self.over = None;
    }

    /// Finish the drag gesture.
    ///
    /// Clears the drag state and recomputes `dirty` element-for-element
    /// against the baseline. This is the authoritative dirtiness check; it
    /// corrects the eager `dirty = true` set during [`drag_over`] when a
    /// gesture ends back at the original arrangement.
    ///
    /// [`drag_over`]: OrderList::drag_over
    pub fn end_drag(&mut self) {
        self.dragging = None;
        self.over = None;
        self.dirty = self
            .items
            .iter()
            .map(Orderable::id)
            .ne(self.baseline.iter().copied());
    }

    /// Dense 1-based `(id, display_order)` pairs for the current order.
    ///
    /// Positions are recomputed from the index, never carried over from
    /// whatever the rows held at load time.
    pub fn positions(&self) -> Vec<(u32, i32)> {
        self.items
            .iter()
            .enumerate()
            .map(|(idx, row)| (row.id(), idx as i32 + 1))
            .collect()
    }

    /// Persist the current order through one `update(id, position)` call per
    /// row, issued concurrently (the updates target disjoint records).
    ///
    /// Not dirty: returns [`PersistError::NothingToSave`] without issuing
    /// any calls. All updates succeed: the baseline is set to the current id
    /// sequence, `dirty` clears, and the saved row count is returned; the
    /// caller is expected to reload the authoritative list afterwards. Any
    /// update fails: the failing `(id, reason)` pairs are returned and
    /// `items`/`dirty` stay untouched so the arrangement can be retried
    /// wholesale (resending every position is idempotent). Partial server
    /// success is possible and is not compensated.
    pub async fn persist<F, Fut, E>(&mut self, update: F) -> Result<usize, PersistError>
    where
        F: Fn(u32, i32) -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: ToString,
    {
        if !self.dirty {
            return Err(PersistError::NothingToSave);
        }
        let order = self.positions();
        let results = join_all(order.iter().map(|&(id, pos)| update(id, pos))).await;
        let failed: Vec<(u32, String)> = order
            .iter()
            .zip(results)
            .filter_map(|(&(id, _), result)| result.err().map(|e| (id, e.to_string())))
            .collect();
        if !failed.is_empty() {
            return Err(PersistError::Failed(failed));
        }
        self.baseline = self.current_ids();
        self.dirty = false;
        Ok(order.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: u32,
        display_order: i32,
    }

    impl Orderable for Row {
        fn id(&self) -> u32 {
            self.id
        }
    }

    fn rows(ids: &[u32]) -> Vec<Row> {
        ids.iter()
            .enumerate()
            .map(|(idx, &id)| Row {
                id,
                display_order: idx as i32 + 1,
            })
            .collect()
    }

    fn ids(list: &OrderList<Row>) -> Vec<u32> {
        list.items().iter().map(|r| r.id).collect()
    }

    #[test]
    fn load_is_idempotent() {
        let mut list = OrderList::new();
        list.load(rows(&[1, 2, 3]));
        list.load(rows(&[1, 2, 3]));
        assert_eq!(ids(&list), vec![1, 2, 3]);
        assert!(!list.is_dirty());
    }

    #[test]
    fn load_accepts_empty_list() {
        let mut list = OrderList::<Row>::new();
        list.load(Vec::new());
        assert!(list.is_empty());
        assert!(!list.is_dirty());
    }

    #[test]
    fn load_discards_unsaved_rearrangement() {
        let mut list = OrderList::new();
        list.load(rows(&[1, 2, 3]));
        list.begin_drag(1);
        list.drag_over(3);
        list.end_drag();
        assert!(list.is_dirty());

        list.load(rows(&[1, 2, 3, 4]));
        assert_eq!(ids(&list), vec![1, 2, 3, 4]);
        assert!(!list.is_dirty());
    }

    #[test]
    fn drag_over_moves_a_single_element() {
        let mut list = OrderList::new();
        list.load(rows(&[1, 2, 3]));
        list.begin_drag(1);
        list.drag_over(3);
        assert_eq!(ids(&list), vec![2, 3, 1]);
        assert!(list.is_dirty());
    }

    #[test]
    fn drag_over_preserves_membership() {
        let mut list = OrderList::new();
        list.load(rows(&[1, 2, 3, 4, 5]));
        list.begin_drag(2);
        for hover in [1, 3, 5, 4, 1, 2, 5] {
            list.drag_over(hover);
        }
        let mut sorted = ids(&list);
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn drag_over_without_active_drag_only_highlights() {
        let mut list = OrderList::new();
        list.load(rows(&[1, 2, 3]));
        list.drag_over(3);
        assert_eq!(list.over(), Some(3));
        assert_eq!(ids(&list), vec![1, 2, 3]);
        assert!(!list.is_dirty());
    }

    #[test]
    fn begin_drag_ignores_unknown_id() {
        let mut list = OrderList::new();
        list.load(rows(&[1, 2, 3]));
        list.begin_drag(99);
        assert_eq!(list.dragging(), None);
    }

    #[test]
    fn end_drag_clears_dirty_when_order_returns_to_baseline() {
        let mut list = OrderList::new();
        list.load(rows(&[1, 2, 3]));
        list.begin_drag(1);
        list.drag_over(3);
        assert!(list.is_dirty());
        // Drag back: 1 is now last, hovering 2 puts it back in front.
        list.drag_over(2);
        list.end_drag();
        assert_eq!(ids(&list), vec![1, 2, 3]);
        assert!(!list.is_dirty());
        assert_eq!(list.dragging(), None);
        assert_eq!(list.over(), None);
    }

    #[test]
    fn positions_are_dense_and_one_based() {
        let mut list = OrderList::new();
        // Stale display_order values on the rows must not leak through.
        list.load(vec![
            Row { id: 7, display_order: 40 },
            Row { id: 3, display_order: 2 },
            Row { id: 9, display_order: 17 },
        ]);
        assert_eq!(list.positions(), vec![(7, 1), (3, 2), (9, 3)]);
    }

    #[test]
    fn persist_when_clean_issues_no_calls() {
        let mut list = OrderList::new();
        list.load(rows(&[1, 2, 3]));
        let calls = RefCell::new(Vec::new());

        let result = block_on(list.persist(|id, pos| {
            calls.borrow_mut().push((id, pos));
            async { Ok::<(), String>(()) }
        }));

        assert_eq!(result, Err(PersistError::NothingToSave));
        assert!(calls.borrow().is_empty());
        assert_eq!(ids(&list), vec![1, 2, 3]);
    }

    #[test]
    fn persist_failure_preserves_state() {
        let mut list = OrderList::new();
        list.load(rows(&[1, 2, 3]));
        list.begin_drag(1);
        list.drag_over(3);
        list.end_drag();
        let arranged = ids(&list);
        let calls = RefCell::new(Vec::new());

        let result = block_on(list.persist(|id, pos| {
            calls.borrow_mut().push((id, pos));
            async move {
                if id == 2 {
                    Err("update rejected".to_string())
                } else {
                    Ok(())
                }
            }
        }));

        assert_eq!(
            result,
            Err(PersistError::Failed(vec![(2, "update rejected".to_string())]))
        );
        assert_eq!(calls.borrow().len(), 3);
        assert_eq!(ids(&list), arranged);
        assert!(list.is_dirty());
    }

    #[test]
    fn drag_then_persist_end_to_end() {
        let mut list = OrderList::new();
        list.load(rows(&[1, 2, 3]));
        list.begin_drag(1);
        list.drag_over(3);
        list.end_drag();
        assert_eq!(ids(&list), vec![2, 3, 1]);
        assert!(list.is_dirty());

        let calls = RefCell::new(Vec::new());
        let result = block_on(list.persist(|id, pos| {
            calls.borrow_mut().push((id, pos));
            async { Ok::<(), String>(()) }
        }));

        assert_eq!(result, Ok(3));
        assert_eq!(*calls.borrow(), vec![(2, 1), (3, 2), (1, 3)]);
        assert!(!list.is_dirty());

        // Baseline moved to the saved order: ending a no-move drag stays clean.
        list.begin_drag(2);
        list.end_drag();
        assert!(!list.is_dirty());
    }
}
