//! Read/write access to a piece of plugin state.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update, WithUntracked};

/// Mutable state holder shared between the views and the plugin context.
pub trait Store<T> {
    /// Apply `f` to the current value.
    fn mutate(&self, f: impl FnOnce(&mut T));

    /// Read the current value without subscribing to changes.
    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> R;
}

impl<T: Send + Sync + 'static> Store<T> for RwSignal<T> {
    fn mutate(&self, f: impl FnOnce(&mut T)) {
        Update::update(self, f);
    }

    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        WithUntracked::with_untracked(self, f)
    }
}

impl<T> Store<T> for RefCell<T> {
    fn mutate(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.borrow_mut());
    }

    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }
}

impl<T, S: Store<T>> Store<T> for Rc<S> {
    fn mutate(&self, f: impl FnOnce(&mut T)) {
        (**self).mutate(f);
    }

    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        (**self).peek(f)
    }
}
