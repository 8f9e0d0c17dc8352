//! The trees own their nodes through `Box`, so they should be exactly as thread-safe as their
//! contents. Borrowing iterators and node handles follow the rules for shared references.

#![warn(rust_2018_idioms)]

use std::any::Any;
use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;

use static_assertions::{assert_impl_all, assert_not_impl_any};

use avl::{AVLMap, AVLSet, map, set};

/// `Sync` but not `Send`
struct NotSend {
    _a: Box<dyn Any + Sync>,
}

impl PartialEq for NotSend {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

impl Eq for NotSend {}

impl PartialOrd for NotSend {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NotSend {
    fn cmp(&self, _other: &Self) -> Ordering {
        Ordering::Equal
    }
}

assert_impl_all!(AVLMap<i32, i32>: Send, Sync);
assert_not_impl_any!(AVLMap<Rc<i32>, i32>: Send, Sync);
assert_impl_all!(AVLMap<Cell<i32>, i32>: Send);
assert_not_impl_any!(AVLMap<Cell<i32>, i32>: Sync);
assert_impl_all!(AVLMap<i32, NotSend>: Sync);
assert_not_impl_any!(AVLMap<i32, NotSend>: Send);

assert_impl_all!(map::Node<i32, i32>: Send, Sync);
assert_not_impl_any!(map::Node<Rc<i32>, i32>: Send, Sync);

assert_impl_all!(map::IterPreorder<'static, i32, i32>: Send, Sync);
assert_not_impl_any!(map::IterPreorder<'static, Rc<i32>, i32>: Send, Sync);
assert_not_impl_any!(map::IterPreorder<'static, Cell<i32>, i32>: Send, Sync);
assert_impl_all!(map::IterPreorder<'static, i32, NotSend>: Send, Sync);

assert_impl_all!(map::IterInorder<'static, i32, i32>: Send, Sync);
assert_not_impl_any!(map::IterInorder<'static, Rc<i32>, i32>: Send, Sync);
assert_not_impl_any!(map::IterInorder<'static, Cell<i32>, i32>: Send, Sync);
assert_impl_all!(map::IterInorder<'static, i32, NotSend>: Send, Sync);

assert_impl_all!(map::IterPostorder<'static, i32, i32>: Send, Sync);
assert_not_impl_any!(map::IterPostorder<'static, Cell<i32>, i32>: Send, Sync);

assert_impl_all!(map::IterLevelorder<'static, i32, i32>: Send, Sync);
assert_not_impl_any!(map::IterLevelorder<'static, Cell<i32>, i32>: Send, Sync);

assert_impl_all!(AVLSet<i32>: Send, Sync);
assert_not_impl_any!(AVLSet<Rc<i32>>: Send, Sync);
assert_impl_all!(AVLSet<Cell<i32>>: Send);
assert_not_impl_any!(AVLSet<Cell<i32>>: Sync);
assert_impl_all!(AVLSet<NotSend>: Sync);
assert_not_impl_any!(AVLSet<NotSend>: Send);

assert_impl_all!(set::Node<'static, i32>: Send, Sync, Copy);
assert_not_impl_any!(set::Node<'static, Rc<i32>>: Send, Sync);
assert_not_impl_any!(set::Node<'static, Cell<i32>>: Send, Sync);
assert_impl_all!(set::Node<'static, NotSend>: Send, Sync);

assert_impl_all!(set::IterInorder<'static, i32>: Send, Sync, ExactSizeIterator);
assert_not_impl_any!(set::IterInorder<'static, Cell<i32>>: Send, Sync);
assert_impl_all!(set::IterLevelorder<'static, i32>: Send, Sync);
