//! Combined load state for the two independent document fetches.
//!
//! The recipe and author lookups resolve in either order and fail
//! independently. Each one lives in its own [`FetchSlot`]; the page derives
//! a single [`LoadPhase`] from the pair every render, so "recipe still
//! missing" is an explicit state rather than a null-field render.

use std::cell::Cell;
use std::rc::Rc;

/// Outcome of one point lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchSlot<T> {
    Pending,
    Loaded(T),
    /// The store answered, but no such document exists.
    Missing,
    /// Transport or decode failure.
    Failed,
}

impl<T> FetchSlot<T> {
    pub fn is_err(&self) -> bool {
        matches!(self, FetchSlot::Missing | FetchSlot::Failed)
    }
}

/// Which of the two records a phase refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Recipe,
    Author,
    Both,
}

impl Part {
    pub fn describes(self) -> &'static str {
        match self {
            Part::Recipe => "recipe",
            Part::Author => "author",
            Part::Both => "recipe and author",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    LoadingBoth,
    PartiallyLoaded(Part),
    Ready,
    Failed(Part),
}

/// Derive the page phase from the two slots.
///
/// A failure wins immediately, even while the other fetch is still in
/// flight; there is no transition out of `Failed`. Full render requires
/// both records, so a lone loaded record is only ever `PartiallyLoaded`.
pub fn derive_phase<R, A>(
    started: bool,
    recipe: &FetchSlot<R>,
    author: &FetchSlot<A>,
) -> LoadPhase {
    if !started {
        return LoadPhase::Idle;
    }
    match (recipe.is_err(), author.is_err()) {
        (true, true) => return LoadPhase::Failed(Part::Both),
        (true, false) => return LoadPhase::Failed(Part::Recipe),
        (false, true) => return LoadPhase::Failed(Part::Author),
        (false, false) => {}
    }
    match (recipe, author) {
        (FetchSlot::Loaded(_), FetchSlot::Loaded(_)) => LoadPhase::Ready,
        (FetchSlot::Loaded(_), _) => LoadPhase::PartiallyLoaded(Part::Recipe),
        (_, FetchSlot::Loaded(_)) => LoadPhase::PartiallyLoaded(Part::Author),
        _ => LoadPhase::LoadingBoth,
    }
}

/// Shared flag tripped on unmount so in-flight fetches discard their
/// results instead of writing to released state.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Slot = FetchSlot<&'static str>;

    #[test]
    fn idle_until_started() {
        let phase = derive_phase::<&str, &str>(false, &Slot::Pending, &Slot::Pending);
        assert_eq!(phase, LoadPhase::Idle);
    }

    #[test]
    fn loading_while_both_pending() {
        let phase = derive_phase::<&str, &str>(true, &Slot::Pending, &Slot::Pending);
        assert_eq!(phase, LoadPhase::LoadingBoth);
    }

    #[test]
    fn partial_when_one_record_arrives_first() {
        assert_eq!(
            derive_phase(true, &Slot::Loaded("r"), &Slot::Pending),
            LoadPhase::PartiallyLoaded(Part::Recipe)
        );
        assert_eq!(
            derive_phase(true, &Slot::Pending, &Slot::Loaded("a")),
            LoadPhase::PartiallyLoaded(Part::Author)
        );
    }

    #[test]
    fn ready_only_when_both_loaded() {
        assert_eq!(
            derive_phase(true, &Slot::Loaded("r"), &Slot::Loaded("a")),
            LoadPhase::Ready
        );
    }

    #[test]
    fn author_failure_blocks_full_render() {
        // Even with the recipe loaded, a failed author fetch never reaches Ready.
        assert_eq!(
            derive_phase(true, &Slot::Loaded("r"), &Slot::Failed),
            LoadPhase::Failed(Part::Author)
        );
    }

    #[test]
    fn recipe_failure_is_explicit_not_a_null_render() {
        assert_eq!(
            derive_phase(true, &Slot::Failed, &Slot::Loaded("a")),
            LoadPhase::Failed(Part::Recipe)
        );
        // Failure wins even while the other fetch is still pending.
        assert_eq!(
            derive_phase(true, &Slot::Missing, &Slot::Pending),
            LoadPhase::Failed(Part::Recipe)
        );
    }

    #[test]
    fn both_failures_collapse_to_both() {
        assert_eq!(
            derive_phase::<&str, &str>(true, &Slot::Failed, &Slot::Missing),
            LoadPhase::Failed(Part::Both)
        );
    }

    #[test]
    fn cancel_token_is_shared_across_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }
}
