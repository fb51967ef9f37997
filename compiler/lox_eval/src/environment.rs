//! Lexically scoped variable storage.
//!
//! An `Environment` is a handle to one scope; scopes link to their parent.
//! Handles are shared, so a closure and the block that declared it see each
//! other's writes.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use lox_ir::Name;

use crate::value::Value;

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// All scope allocations go through `LocalScope::new()`. Not thread-safe:
/// the interpreter runs on one thread.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Why a read failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupError {
    /// No scope in the chain binds the name.
    Undefined,
    /// Declared with `var x;` and never assigned.
    Uninitialized,
}

/// Why an assignment failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// No scope in the chain binds the name.
    Undefined,
}

#[derive(Clone, Debug)]
struct Binding {
    value: Value,
    initialized: bool,
}

/// A single scope containing variable bindings.
#[derive(Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Binding>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    fn lookup(&self, name: Name) -> Result<Value, LookupError> {
        if let Some(binding) = self.bindings.get(&name) {
            if !binding.initialized {
                return Err(LookupError::Uninitialized);
            }
            return Ok(binding.value.clone());
        }
        match &self.parent {
            Some(parent) => parent.borrow().lookup(name),
            None => Err(LookupError::Undefined),
        }
    }

    fn assign(&mut self, name: Name, value: Value) -> Result<(), AssignError> {
        if let Some(binding) = self.bindings.get_mut(&name) {
            binding.value = value;
            binding.initialized = true;
            return Ok(());
        }
        match &self.parent {
            Some(parent) => parent.borrow_mut().assign(name, value),
            None => Err(AssignError::Undefined),
        }
    }
}

/// Handle to a scope and, through it, its whole parent chain.
///
/// Cloning the handle shares the scope; use [`Environment::child`] for a new
/// nested scope.
#[derive(Clone, Debug)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// Create a root scope with no parent.
    pub fn new_global() -> Self {
        Environment {
            scope: LocalScope::new(Scope::default()),
        }
    }

    /// Create a new scope whose parent is this one.
    #[must_use]
    pub fn child(&self) -> Self {
        Environment {
            scope: LocalScope::new(Scope::with_parent(self.scope.clone())),
        }
    }

    /// Bind `name` as initialized in this scope, replacing any earlier binding.
    #[inline]
    pub fn define(&self, name: Name, value: Value) {
        self.scope.borrow_mut().bindings.insert(
            name,
            Binding {
                value,
                initialized: true,
            },
        );
    }

    /// Bind `name` in this scope without a value.
    pub fn declare(&self, name: Name) {
        self.scope.borrow_mut().bindings.insert(
            name,
            Binding {
                value: Value::Nil,
                initialized: false,
            },
        );
    }

    /// Read `name` from the nearest scope that binds it.
    #[inline]
    pub fn get(&self, name: Name) -> Result<Value, LookupError> {
        self.scope.borrow().lookup(name)
    }

    /// Overwrite `name` in the nearest scope that binds it.
    #[inline]
    pub fn assign(&self, name: Name, value: Value) -> Result<(), AssignError> {
        self.scope.borrow_mut().assign(name, value)
    }
}
