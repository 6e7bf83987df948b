//! Double-checked locking, spelled out.
//!
//! `OnceLock` already does all of this internally; this cell exists to show
//! the moving parts of the textbook algorithm and to let tests instrument
//! the construction step.

use std::marker::PhantomData;
use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};
use std::sync::Mutex;

/// A cell that constructs its value at most once, on first access, under
/// arbitrary concurrent callers.
///
/// The algorithm:
/// 1. Load the pointer without locking. Non-null means initialized: return.
/// 2. Acquire the lock.
/// 3. Re-load under the lock. Another thread may have finished construction
///    while this one waited.
/// 4. Still null: construct, publish the pointer.
/// 5. Unlock, return.
///
/// Step 1 is only an optimization (it keeps the initialized case lock-free);
/// step 3 is what correctness rests on. Without the re-check, two threads
/// that both saw null in step 1 would each construct a value.
pub struct DoubleChecked<T> {
    slot: AtomicPtr<T>,
    lock: Mutex<()>,
    init: fn() -> T,
    _marker: PhantomData<*mut T>,
}

// Same bounds as std's OnceLock: the value may be constructed on one thread
// and dropped or shared from another.
unsafe impl<T: Send> Send for DoubleChecked<T> {}
unsafe impl<T: Send + Sync> Sync for DoubleChecked<T> {}

impl<T> DoubleChecked<T> {
    /// Creates an empty cell that will construct its value with `init`.
    ///
    /// `const`, so the cell can live in a `static`.
    pub const fn new(init: fn() -> T) -> Self {
        Self {
            slot: AtomicPtr::new(ptr::null_mut()),
            lock: Mutex::new(()),
            init,
            _marker: PhantomData,
        }
    }

    /// Returns the value, constructing it if this is the first access.
    pub fn get(&self) -> &T {
        // Fast path. Acquire pairs with the Release store below, so a
        // non-null pointer guarantees the pointee is fully constructed.
        let fast = self.slot.load(Ordering::Acquire);
        if !fast.is_null() {
            return unsafe { &*fast };
        }

        let _guard = self.lock.lock().unwrap();

        // Re-check: the thread that held the lock before us may have won.
        let current = self.slot.load(Ordering::Acquire);
        if !current.is_null() {
            return unsafe { &*current };
        }

        let value = Box::into_raw(Box::new((self.init)()));
        self.slot.store(value, Ordering::Release);
        unsafe { &*value }
    }

    /// True once some caller has completed construction.
    pub fn is_initialized(&self) -> bool {
        !self.slot.load(Ordering::Acquire).is_null()
    }
}

impl<T> Drop for DoubleChecked<T> {
    fn drop(&mut self) {
        let slot = *self.slot.get_mut();
        if !slot.is_null() {
            // &mut self: no other reference can exist, safe to reclaim.
            drop(unsafe { Box::from_raw(slot) });
        }
    }
}
