//! Shared handles to animated storage
//!
//! The scheduler writes interpolated values into storage owned by the
//! caller. A [`Var`] is that storage: cloning it hands out another reference
//! to the same slot, and its [`VarId`] identifies the slot by address.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

/// Opaque identity of an animated variable
///
/// Two `Var`s have the same id exactly when they share storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(usize);

/// Client-owned storage that the scheduler can animate
///
/// The scheduler keeps its own clone of every variable it animates, so the
/// storage stays alive (and its address stays unique) for as long as a
/// timeline refers to it.
pub struct Var<T> {
    cell: Rc<RefCell<T>>,
}

impl<T> Var<T> {
    pub fn new(value: T) -> Self {
        Self {
            cell: Rc::new(RefCell::new(value)),
        }
    }

    pub fn id(&self) -> VarId {
        VarId(Rc::as_ptr(&self.cell) as *const () as usize)
    }

    /// Borrow the current value
    ///
    /// While the borrow is held the scheduler skips writes to this variable,
    /// and [`set`](Self::set) panics.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.cell.borrow()
    }

    pub fn set(&self, value: T) {
        *self.cell.borrow_mut() = value;
    }

    /// Assign unless the value is currently borrowed
    ///
    /// Returns `false` (dropping `value`) when the write was skipped.
    pub fn try_set(&self, value: T) -> bool {
        match self.cell.try_borrow_mut() {
            Ok(mut slot) => {
                *slot = value;
                true
            }
            Err(_) => false,
        }
    }

    /// Whether both handles refer to the same storage
    pub fn ptr_eq(&self, other: &Var<T>) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }
}

impl<T: Clone> Var<T> {
    /// Snapshot of the current value
    pub fn get(&self) -> T {
        self.cell.borrow().clone()
    }
}

impl<T> Clone for Var<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: Default> Default for Var<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Var<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Var").field(&*self.cell.borrow()).finish()
    }
}
