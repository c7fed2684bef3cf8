//! Positional list operations over a value's children.
//!
//! Each operation moves children rather than copying them: whatever is
//! returned is owned by the caller, and whatever is no longer reachable
//! is dropped before the function returns.

use crate::errors::ListError;
use crate::value::Value;

/// Removes and returns the child at `index`, shifting later children down.
///
/// # Examples
///
/// ```rust
/// use choccy::list::pop_at;
/// use choccy::value::Value;
/// let mut list = Value::qexpr_of(vec![Value::number(1), Value::number(2), Value::number(3)]);
/// assert_eq!(pop_at(&mut list, 1).unwrap(), Value::number(2));
/// assert_eq!(list.to_string(), "{1 3}");
/// ```
pub fn pop_at(list: &mut Value, index: usize) -> Result<Value, ListError> {
    let children = list.children_mut()?;
    if index >= children.len() {
        return Err(ListError::IndexOutOfRange {
            index,
            len: children.len(),
        });
    }
    Ok(children.remove(index))
}

/// Pops the child at `index` and releases the rest of `list`.
pub fn take_at(mut list: Value, index: usize) -> Result<Value, ListError> {
    pop_at(&mut list, index)
}

/// Moves every child of `b` onto the end of `a`, preserving order.
///
/// ```rust
/// use choccy::list::join;
/// use choccy::value::Value;
/// let a = Value::qexpr_of(vec![Value::number(1)]);
/// let b = Value::qexpr_of(vec![Value::number(2), Value::number(3)]);
/// assert_eq!(join(a, b).unwrap().to_string(), "{1 2 3}");
/// ```
pub fn join(mut a: Value, mut b: Value) -> Result<Value, ListError> {
    let moved = std::mem::take(b.children_mut()?);
    a.children_mut()?.extend(moved);
    Ok(a)
}
