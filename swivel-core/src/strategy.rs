//! Strategy representation and invocation
//!
//! A strategy is the invocable half of a behavior. Callers designate one
//! of four shapes: a closure, a bound method reference (instance plus
//! method name), a static reference registered under a qualified name,
//! or a raw value that stands in for an invocable.
//!
//! Bound and static references may point at functions that are not
//! visible outside their defining module. The [`MethodTarget::dispatch`]
//! implementation and the [`register_static`] call are the explicit
//! capability grants for that: only names a module has designated can be
//! invoked. This is a narrow escape hatch for designated invocation, not
//! a general reflection utility.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

/// Closure strategy shape.
pub type CallbackFn = Arc<dyn Fn(&[Value]) -> Result<Value> + Send + Sync>;

/// Static strategy shape, published under a `"Type::method"` name.
pub type StaticFn = fn(&[Value]) -> Result<Value>;

/// Receiver side of a bound method reference.
///
/// Implementations route designated method names to their own functions,
/// including private ones. Unknown names must fail with
/// [`Error::UnknownMethod`].
pub trait MethodTarget: Send + Sync {
    /// Invoke the designated method with positional arguments.
    fn dispatch(&self, method: &str, args: &[Value]) -> Result<Value>;
}

static STATIC_STRATEGIES: Lazy<RwLock<HashMap<String, StaticFn>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Publish a function under a qualified `"Type::method"` name.
///
/// Registration is what makes a function reachable through
/// [`Strategy::static_ref`]; a module may publish its own private
/// functions this way.
pub fn register_static(name: impl Into<String>, strategy: StaticFn) {
    STATIC_STRATEGIES
        .write()
        .unwrap()
        .insert(name.into(), strategy);
}

fn resolve_static(name: &str) -> Option<StaticFn> {
    STATIC_STRATEGIES.read().unwrap().get(name).copied()
}

/// An invocable reference in one of the four supported shapes.
#[derive(Clone)]
pub enum Strategy {
    /// Anonymous function or closure.
    Callback(CallbackFn),
    /// Instance plus method name, resolved through [`MethodTarget`].
    Bound(Arc<dyn MethodTarget>, String),
    /// Qualified static name, resolved at invocation time.
    StaticRef(String),
    /// Raw literal returned as-is.
    Value(Value),
}

impl Strategy {
    /// Wrap an infallible closure.
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Strategy::Callback(Arc::new(move |args| Ok(f(args))))
    }

    /// Wrap a fallible closure. Its errors propagate unchanged through
    /// execution.
    pub fn try_callback<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Strategy::Callback(Arc::new(f))
    }

    /// Reference a named method on an instance.
    pub fn bound<T>(target: T, method: impl Into<String>) -> Self
    where
        T: MethodTarget + 'static,
    {
        Strategy::Bound(Arc::new(target), method.into())
    }

    /// Reference a published static by its qualified name.
    pub fn static_ref(name: impl Into<String>) -> Self {
        Strategy::StaticRef(name.into())
    }

    /// A raw value standing in for an invocable.
    pub fn value(value: impl Into<Value>) -> Self {
        Strategy::Value(value.into())
    }

    /// Invoke the strategy with positional arguments.
    pub fn invoke(&self, args: &[Value]) -> Result<Value> {
        match self {
            Strategy::Callback(f) => f(args),
            Strategy::Bound(target, method) => target.dispatch(method, args),
            Strategy::StaticRef(name) => match resolve_static(name) {
                Some(f) => f(args),
                None => Err(Error::UnresolvedStrategy(name.clone())),
            },
            Strategy::Value(value) => Ok(value.clone()),
        }
    }
}

impl From<Value> for Strategy {
    fn from(value: Value) -> Self {
        Strategy::Value(value)
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Callback(_) => f.write_str("Strategy::Callback"),
            Strategy::Bound(_, method) => write!(f, "Strategy::Bound({method})"),
            Strategy::StaticRef(name) => write!(f, "Strategy::StaticRef({name})"),
            Strategy::Value(value) => write!(f, "Strategy::Value({value})"),
        }
    }
}
