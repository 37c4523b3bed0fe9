//! Transient one-line notifications.

use std::rc::Rc;

use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
}

/// Toast stack with monotonic ids, driven through a reducer so two
/// fetches failing back-to-back never clobber each other's push.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastBag {
    next_id: u32,
    toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(String),
    Dismiss(u32),
}

impl ToastBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    fn push(&mut self, message: String) {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, message });
    }

    fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|t| t.id != id);
    }
}

impl Reducible for ToastBag {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(message) => next.push(message),
            ToastAction::Dismiss(id) => next.dismiss(id),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushes_keep_order_and_distinct_ids() {
        let mut bag = ToastBag::new();
        bag.push("Could not fetch recipe".into());
        bag.push("Could not fetch author".into());
        let ids: Vec<u32> = bag.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(bag.toasts()[0].message, "Could not fetch recipe");
    }

    #[test]
    fn dismiss_removes_only_the_matching_toast() {
        let mut bag = ToastBag::new();
        bag.push("one".into());
        bag.push("two".into());
        bag.dismiss(0);
        assert_eq!(bag.toasts().len(), 1);
        assert_eq!(bag.toasts()[0].message, "two");
        // Dismissing a stale id is a no-op.
        bag.dismiss(0);
        assert_eq!(bag.toasts().len(), 1);
    }

    #[test]
    fn reduce_applies_actions_to_the_latest_state() {
        let bag = Rc::new(ToastBag::new());
        let bag = bag.reduce(ToastAction::Push("a".into()));
        let bag = bag.reduce(ToastAction::Push("b".into()));
        assert_eq!(bag.toasts().len(), 2);
        let bag = bag.reduce(ToastAction::Dismiss(1));
        assert_eq!(bag.toasts().len(), 1);
        assert_eq!(bag.toasts()[0].message, "a");
    }
}
