/// Outcome of a read against the chain: either the returned value or a
/// reverted call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallResult<T> {
    Value(T),
    Reverted,
}

impl<T> CallResult<T> {
    pub fn value_or(self, default: T) -> T {
        match self {
            CallResult::Value(value) => value,
            CallResult::Reverted => default,
        }
    }

    pub fn is_reverted(&self) -> bool {
        matches!(self, CallResult::Reverted)
    }

    pub fn ok(self) -> Option<T> {
        match self {
            CallResult::Value(value) => Some(value),
            CallResult::Reverted => None,
        }
    }
}

impl<T: Default> CallResult<T> {
    pub fn value_or_default(self) -> T {
        self.value_or(T::default())
    }
}

impl<T, E> From<Result<T, E>> for CallResult<T> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(v) => CallResult::Value(v),
            Err(_) => CallResult::Reverted,
        }
    }
}

impl<T> From<Option<T>> for CallResult<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => CallResult::Value(v),
            None => CallResult::Reverted,
        }
    }
}
